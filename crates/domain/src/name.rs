use derive_more::{AsRef, Display};
use thiserror::Error;

/// Display name of a publication or customer.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.len();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Morning Star", Ok(Name(String::from("Morning Star"))))]
    #[case("  Morning Star  ", Ok(Name(String::from("Morning Star"))))]
    #[case("", Err(NameError::Empty))]
    #[case("   ", Err(NameError::Empty))]
    #[case(&"X".repeat(65), Err(NameError::TooLong(65)))]
    fn test_name_new(#[case] input: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(input), expected);
    }
}
