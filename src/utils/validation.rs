use crate::error::{Error, Result};

/// Parses a path id as an unsigned decimal that fits the store's signed key.
pub fn parse_id(raw: &str, entity: &str) -> Result<i64> {
    let invalid = || Error::BadRequest(format!("Invalid {} ID format", entity));

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse::<i64>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_digits() {
        assert_eq!(parse_id("42", "project").unwrap(), 42);
        assert_eq!(parse_id("0", "project").unwrap(), 0);
        assert_eq!(parse_id("007", "vacancy").unwrap(), 7);
    }

    #[test]
    fn rejects_signs_letters_and_overflow() {
        for raw in ["", "-1", "+1", "abc", "1.5", " 1", "18446744073709551616"] {
            let err = parse_id(raw, "project").unwrap_err();
            assert!(
                matches!(&err, Error::BadRequest(msg) if msg == "Invalid project ID format"),
                "{raw:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn message_names_the_entity() {
        let err = parse_id("x", "vacancy").unwrap_err();
        assert!(matches!(err, Error::BadRequest(msg) if msg == "Invalid vacancy ID format"));
    }
}
