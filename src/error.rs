//! Error type for configuration and view binding.

/// Error type for carousel setup operations.
///
/// Navigation itself never fails; these errors only arise while validating
/// a [`CarouselConfig`](crate::CarouselConfig) or binding to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// A required element was not found under the carousel root
    MissingElement { selector: String },
    /// A configuration field holds an unusable value
    InvalidConfig { field: &'static str, reason: &'static str },
    /// A DOM call failed
    Dom { context: String },
}

impl std::fmt::Display for CarouselError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CarouselError::MissingElement { selector } => {
                write!(f, "Missing element: nothing matches '{}'", selector)
            }
            CarouselError::InvalidConfig { field, reason } => {
                write!(f, "Invalid config: {} {}", field, reason)
            }
            CarouselError::Dom { context } => write!(f, "DOM error: {}", context),
        }
    }
}

impl std::error::Error for CarouselError {}
