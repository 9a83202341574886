use std::fmt;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// Longest room name accepted, in characters.
pub const MAX_ROOM_NAME_LEN: usize = 29;

/// A bounded, non-empty room label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RoomName(String);

impl RoomName {
    /// Validate and wrap a room name.
    pub fn new(name: impl Into<String>) -> CoreResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::EmptyName);
        }
        if name.chars().count() > MAX_ROOM_NAME_LEN {
            return Err(CoreError::NameTooLong {
                name,
                max: MAX_ROOM_NAME_LEN,
            });
        }
        Ok(Self(name))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoomName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A room in the mansion. Each room exclusively owns its two neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    name: RoomName,
    #[serde(skip_serializing_if = "Option::is_none")]
    left: Option<Box<Room>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    right: Option<Box<Room>>,
}

impl Room {
    /// Create a room with no exits.
    pub fn new(name: impl Into<String>) -> CoreResult<Self> {
        Ok(Self {
            name: RoomName::new(name)?,
            left: None,
            right: None,
        })
    }

    /// Attach `room` as the left exit.
    pub fn with_left(mut self, room: Room) -> Self {
        self.left = Some(Box::new(room));
        self
    }

    /// Attach `room` as the right exit.
    pub fn with_right(mut self, room: Room) -> Self {
        self.right = Some(Box::new(room));
        self
    }

    /// The room's name.
    pub fn name(&self) -> &RoomName {
        &self.name
    }

    /// The room reached by going left, if any.
    pub fn left(&self) -> Option<&Room> {
        self.left.as_deref()
    }

    /// The room reached by going right, if any.
    pub fn right(&self) -> Option<&Room> {
        self.right.as_deref()
    }

    /// A room with no exits ends any exploration that reaches it.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn into_parts(self) -> (RoomName, Option<Box<Room>>, Option<Box<Room>>) {
        (self.name, self.left, self.right)
    }
}
