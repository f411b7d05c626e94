use std::collections::TryReserveError;
use thiserror::Error;

/// Errors reported by the case mapping functions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CaseMapError {
    /// The output buffer could not be grown.
    #[error("out of memory while building the case mapped string")]
    OutOfMemory(#[from] TryReserveError),
    /// The input holds an ill-formed code unit sequence starting at `offset`.
    #[error("ill-formed code unit sequence at offset {offset}")]
    InvalidEncoding {
        /// Index of the first code unit of the ill-formed sequence.
        offset: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = CaseMapError::InvalidEncoding { offset: 3 };
        assert_eq!("ill-formed code unit sequence at offset 3", err.to_string());

        let reserve_err = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        let err = CaseMapError::from(reserve_err);
        assert!(matches!(err, CaseMapError::OutOfMemory(_)));
        assert_eq!(
            "out of memory while building the case mapped string",
            err.to_string()
        );
    }
}
