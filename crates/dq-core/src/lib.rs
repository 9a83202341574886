//! Core types for Detective Quest: rooms and the mansion they form.
//!
//! The mansion is a binary tree in which every room owns its left and right
//! neighbours. The crate builds the fixed map, walks it in pre-order for
//! display, and tears it down in post-order once exploration is over.

/// Error types used throughout the crate.
pub mod error;
/// Text and JSON renderings of the mansion map.
pub mod map;
/// The mansion tree: fixed layout, traversal, and teardown.
pub mod mansion;
/// Rooms and their bounded names.
pub mod room;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export map rendering.
pub use map::{MapStyle, render_json, render_tree};
/// Re-export the mansion tree.
pub use mansion::{Mansion, Teardown, Walk};
/// Re-export room types.
pub use room::{MAX_ROOM_NAME_LEN, Room, RoomName};
