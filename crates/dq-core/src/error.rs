/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or exporting the mansion.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A room name was empty or only whitespace.
    #[error("room name must not be empty")]
    EmptyName,

    /// A room name does not fit the bounded label.
    #[error("room name \"{name}\" is longer than {max} characters")]
    NameTooLong {
        /// The rejected name.
        name: String,
        /// The maximum number of characters allowed.
        max: usize,
    },

    /// The map could not be serialized.
    #[error("failed to export map: {0}")]
    Export(#[from] serde_json::Error),
}
