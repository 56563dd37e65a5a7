use thiserror::Error;

/// Failures of the booking flow.
///
/// `Display` carries the message rendered inline in the booking card; the
/// store detail strings are kept for diagnostics only, so transient and
/// permanent store failures read the same to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookingError {
    /// Submit was pressed without a complete check-in/check-out pair.
    #[error("Please select a date range")]
    MissingRange,
    /// The booking store could not be read.
    #[error("Could not load availability. Please try again.")]
    Unavailable(String),
    /// The booking store failed or rejected the write.
    #[error("Failed to create booking. Please try again.")]
    Persistence(String),
}
