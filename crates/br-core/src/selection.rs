//! Parsing of user-supplied fact selections such as `"0 2 2"` or `"0,1"`.
//!
//! Only syntax is checked here; index ranges are checked by the engine.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no fact indices given")]
    Empty,

    #[error("{token:?} is not a fact index")]
    InvalidToken { token: String },
}

impl From<SelectionError> for br_common::Error {
    fn from(err: SelectionError) -> Self {
        br_common::Error::Selection(err.to_string())
    }
}

/// Split on whitespace and commas; keep order and duplicates.
pub fn parse_selection(input: &str) -> Result<Vec<usize>, SelectionError> {
    let indices = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<usize>().map_err(|_| SelectionError::InvalidToken {
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if indices.is_empty() {
        return Err(SelectionError::Empty);
    }
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_separated() {
        assert_eq!(parse_selection("0 1 2").unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn commas_and_extra_whitespace() {
        assert_eq!(parse_selection(" 2, 0 ,1\n").unwrap(), vec![2, 0, 1]);
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(parse_selection("0 0").unwrap(), vec![0, 0]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_selection("").unwrap_err(), SelectionError::Empty);
        assert_eq!(parse_selection(" , ").unwrap_err(), SelectionError::Empty);
    }

    #[test]
    fn invalid_tokens_are_named() {
        let err = parse_selection("0 x 1").unwrap_err();
        assert_eq!(
            err,
            SelectionError::InvalidToken {
                token: "x".to_string()
            }
        );
        assert!(parse_selection("-1").is_err());
        assert!(parse_selection("1.5").is_err());
    }
}
