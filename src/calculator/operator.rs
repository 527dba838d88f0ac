//! Binary operators and the arithmetic they perform.

use thiserror::Error;

/// A pending binary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

/// The single failure an arithmetic step can produce.
///
/// Never leaves the engine: it is turned into the error state on the spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("{op:?} produced a non-finite result")]
    NonFiniteResult { op: Operator },
}

impl Operator {
    /// Symbol shown on the expression line.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Look up an operator by its key symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Apply the operator to `lhs` and `rhs`.
    ///
    /// Division by zero is reported like any other non-finite result.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => {
                if rhs == 0.0 {
                    f64::NAN
                } else {
                    lhs / rhs
                }
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::NonFiniteResult { op: self })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), Ok(8.0));
        assert_eq!(Operator::Sub.apply(9.0, 4.0), Ok(5.0));
        assert_eq!(Operator::Mul.apply(6.0, 7.0), Ok(42.0));
        assert_eq!(Operator::Div.apply(1.0, 4.0), Ok(0.25));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Operator::Div.apply(8.0, 0.0),
            Err(CalcError::NonFiniteResult { op: Operator::Div })
        );
        assert!(Operator::Div.apply(0.0, -0.0).is_err());
    }

    #[test]
    fn test_overflow() {
        assert!(Operator::Mul.apply(f64::MAX, 2.0).is_err());
        assert!(Operator::Add.apply(f64::MAX, f64::MAX).is_err());
    }

    #[test]
    fn test_symbols() {
        for op in [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div] {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol('x'), None);
    }
}
