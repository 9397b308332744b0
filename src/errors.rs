use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Define an enum to represent possible comparison errors
#[derive(Debug, Error)] // Automatically implement `Debug` and `Error` traits for the enum
pub enum CompareError {
    // Variant for entry points handed an argument of the wrong structural kind
    #[error("invalid argument kind: {0}")] // Custom error message formatting for this variant
    InvalidKind(String),

    // Variant raised when value nesting exceeds the recursion cap
    #[error("value nesting exceeds the supported depth of {0}")]
    DepthLimit(usize),
}

// Type alias for results that use `CompareError` as the error type
pub type Result<T> = std::result::Result<T, CompareError>;
