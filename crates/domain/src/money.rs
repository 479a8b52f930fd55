use std::fmt::{self, Display};

use derive_more::Into;
use thiserror::Error;

/// Monetary amount as reported by the server or entered into a form.
///
/// Amounts are non-negative and bounded; arithmetic on bills and receipts is
/// done server-side, so no operators are provided.
#[derive(Debug, Default, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Money(f64);

impl Money {
    pub fn new(value: f64) -> Result<Self, MoneyError> {
        if !value.is_finite() || !(0.0..1_000_000.0).contains(&value) {
            return Err(MoneyError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Money {
    type Error = MoneyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f64>() {
            Ok(parsed_value) => Money::new(parsed_value),
            Err(_) => Err(MoneyError::ParseError),
        }
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum MoneyError {
    #[error("Amount must be in the range 0 to 999999.99")]
    OutOfRange,
    #[error("Amount must be a decimal")]
    ParseError,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, Ok(Money(0.0)))]
    #[case(12.5, Ok(Money(12.5)))]
    #[case(-0.01, Err(MoneyError::OutOfRange))]
    #[case(1_000_000.0, Err(MoneyError::OutOfRange))]
    #[case(f64::NAN, Err(MoneyError::OutOfRange))]
    #[case(f64::INFINITY, Err(MoneyError::OutOfRange))]
    fn test_money_new(#[case] value: f64, #[case] expected: Result<Money, MoneyError>) {
        assert_eq!(Money::new(value), expected);
    }

    #[rstest]
    #[case("12.5", Ok(Money(12.5)))]
    #[case("0", Ok(Money(0.0)))]
    #[case("twelve", Err(MoneyError::ParseError))]
    #[case("", Err(MoneyError::ParseError))]
    fn test_money_try_from(#[case] value: &str, #[case] expected: Result<Money, MoneyError>) {
        assert_eq!(Money::try_from(value), expected);
    }

    #[rstest]
    #[case(Money(12.5), "12.50")]
    #[case(Money(0.0), "0.00")]
    fn test_money_display(#[case] money: Money, #[case] string: &str) {
        assert_eq!(money.to_string(), string);
    }
}
