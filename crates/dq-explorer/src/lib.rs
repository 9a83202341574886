//! Interactive navigator for the Detective Quest mansion.
//!
//! A player starts in the entrance hall and picks a direction at every room
//! until they reach a room without exits or decide to leave. There is no way
//! back: every move goes one level deeper into the mansion.

/// Key parsing for player input.
pub mod command;
/// Session configuration.
pub mod config;
/// Console front end driving a session over any reader and writer.
pub mod console;
/// Error types for the navigator.
pub mod error;
/// Player-facing text.
pub mod narration;
/// Exploration state machine.
pub mod session;

pub use command::{Choice, Direction};
pub use config::ExploreConfig;
pub use console::{Console, KeyReader, Outcome, Report};
pub use error::{ExploreError, ExploreResult};
pub use session::{ExplorationSession, Step};
