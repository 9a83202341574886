//! Error types for the navigator.

use thiserror::Error;

/// Result type for navigator operations.
pub type ExploreResult<T> = Result<T, ExploreError>;

/// Errors that can occur while exploring.
///
/// Wrong keys and missing exits are not errors; they are reported as
/// [`Step`](crate::session::Step) values and the player is asked again.
#[derive(Debug, Error)]
pub enum ExploreError {
    /// A choice was made after the exploration ended.
    #[error("exploration already ended in {room}")]
    SessionOver {
        /// The room where the exploration ended.
        room: String,
    },

    /// Reading keys or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Building the mansion failed.
    #[error(transparent)]
    Mansion(#[from] dq_core::CoreError),
}
