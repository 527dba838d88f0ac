pub mod terminal;

pub use terminal::Session;
