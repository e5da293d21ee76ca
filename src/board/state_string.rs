//! Compact state strings: one ASCII digit per cell, row-major from the top
//! row, `'0'` for empty.

use crate::core::Tag;
use crate::error::StateStringError;

/// Encode tags as a state string.
pub fn encode(tags: impl IntoIterator<Item = Tag>) -> String {
    tags.into_iter().map(Tag::to_digit).collect()
}

/// The all-empty state string for a board of `cell_count` cells.
#[must_use]
pub fn initial(cell_count: usize) -> String {
    "0".repeat(cell_count)
}

/// Decode a state string, checking its length and digits.
pub fn decode(state: &str, cell_count: usize) -> Result<Vec<Tag>, StateStringError> {
    let actual = state.chars().count();
    if actual != cell_count {
        return Err(StateStringError::Length {
            expected: cell_count,
            actual,
        });
    }

    state
        .chars()
        .enumerate()
        .map(|(index, digit)| {
            Tag::from_digit(digit).ok_or(StateStringError::InvalidDigit { index, digit })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial() {
        let s = initial(42);
        assert_eq!(s.len(), 42);
        assert!(s.chars().all(|c| c == '0'));
    }

    #[test]
    fn test_encode_decode() {
        let tags = vec![Tag::EMPTY, Tag(1), Tag(2), Tag(1)];
        let s = encode(tags.iter().copied());
        assert_eq!(s, "0121");
        assert_eq!(decode(&s, 4).unwrap(), tags);
    }

    #[test]
    fn test_decode_rejects_length() {
        assert_eq!(
            decode("012", 4),
            Err(StateStringError::Length { expected: 4, actual: 3 })
        );
    }

    #[test]
    fn test_decode_rejects_digit() {
        assert_eq!(
            decode("0130", 4),
            Err(StateStringError::InvalidDigit { index: 2, digit: '3' })
        );
        assert!(decode("01é0", 4).is_err());
    }
}
