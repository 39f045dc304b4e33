//! vector error type

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raised by the checked operations on degenerate input,
/// e.g. normalizing a zero vector or centering an empty point set
#[derive(Debug, Clone, PartialEq)]
pub struct VectorError {
    err: String,
}

impl VectorError {
    pub fn new(err: &str) -> VectorError {
        VectorError {
            err: err.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.err
    }
}

impl Display for VectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[VectorError]: {}", self.err)
    }
}

impl Error for VectorError {}

#[macro_export]
macro_rules! vector_err {
    ( $x:expr ) => {{
        $crate::vector_error::VectorError::new(
            format!("{}:{} : {}", file!(), line!(), $x).as_str(),
        )
    }};
}
