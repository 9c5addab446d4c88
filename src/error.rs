use std::num::ParseIntError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum PaginationError {
    #[error("cannot convert {field} value {value:?} to an integer")]
    TypeConversion {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("invalid page query: {0}")]
    InvalidQuery(#[from] ValidationErrors),
}

pub type Result<T, E = PaginationError> = core::result::Result<T, E>;

impl PaginationError {
    pub fn new_zero_item_limit() -> Self {
        Self::InvalidConfiguration("item limit must be greater than zero".to_owned())
    }
}

/// parse a raw integer field, trimming surrounding whitespace.
pub(crate) fn coerce<T>(field: &'static str, raw: &str) -> Result<T>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    raw.trim()
        .parse::<T>()
        .map_err(|source| PaginationError::TypeConversion {
            field,
            value: raw.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_coerce() {
        assert_eq!(coerce::<u64>("total_items", " 490 ").unwrap(), 490);
        assert_eq!(coerce::<i64>("current_page", "-3").unwrap(), -3);

        let err = coerce::<u64>("item_limit", "twenty").unwrap_err();
        match &err {
            PaginationError::TypeConversion { field, value, .. } => {
                assert_eq!(*field, "item_limit");
                assert_eq!(value, "twenty");
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "cannot convert item_limit value \"twenty\" to an integer"
        );
    }

    #[test]
    pub fn test_negative_count_is_not_coerced() {
        assert!(matches!(
            coerce::<u64>("total_items", "-1"),
            Err(PaginationError::TypeConversion { .. })
        ));
    }
}
