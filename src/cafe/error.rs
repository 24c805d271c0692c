// Café request errors
// Each variant maps to one fixed status code and body

use hyper::StatusCode;
use thiserror::Error;

/// Rejection reasons for a `/cafe` request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CafeError {
    /// `count` parameter not supplied at all
    #[error("count missing")]
    CountMissing,

    /// `count` present but not a base-10 integer, or negative
    #[error("wrong count value")]
    InvalidCount,

    /// `city` absent or not in the directory
    #[error("wrong city value")]
    InvalidCity,
}

impl CafeError {
    pub const fn status(self) -> StatusCode {
        match self {
            Self::CountMissing | Self::InvalidCount | Self::InvalidCity => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_fixed() {
        assert_eq!(CafeError::CountMissing.to_string(), "count missing");
        assert_eq!(CafeError::InvalidCount.to_string(), "wrong count value");
        assert_eq!(CafeError::InvalidCity.to_string(), "wrong city value");
    }

    #[test]
    fn test_all_errors_are_bad_request() {
        for err in [
            CafeError::CountMissing,
            CafeError::InvalidCount,
            CafeError::InvalidCity,
        ] {
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }
}
