//! Copies the result line to the system clipboard.

use arboard::Clipboard;

/// Put `result` on the clipboard.
///
/// Failures are returned as a message for the caller to report; they never
/// affect the calculator.
pub fn copy_to_clipboard(result: &str) -> Result<(), String> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| format!("No clipboard available to copy {:?}: {}", result, e))?;

    match clipboard.set_text(result) {
        Ok(()) => {
            tracing::debug!("copied result {:?}", result);
            Ok(())
        }
        Err(e) => Err(format!("Could not copy result {:?}: {}", result, e)),
    }
}
