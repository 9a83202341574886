use crate::error::CoreResult;
use crate::mansion::{Mansion, Walk};
use crate::room::Room;

/// How the text map is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapStyle {
    /// Spaces per level of depth.
    pub indent: usize,
    /// Printed before every room name.
    pub marker: String,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            indent: 2,
            marker: "|- ".to_string(),
        }
    }
}

impl MapStyle {
    /// Set the number of spaces per level.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set the marker printed before each room.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }
}

/// Render a room tree in pre-order, one room per line, indented by depth.
///
/// An empty subtree renders as an empty string.
pub fn render_tree(root: Option<&Room>, style: &MapStyle) -> String {
    let mut output = String::new();
    for (depth, room) in Walk::new(root) {
        output.push_str(&" ".repeat(depth * style.indent));
        output.push_str(&style.marker);
        output.push_str(room.name().as_str());
        output.push('\n');
    }
    output
}

/// Render the mansion as pretty-printed JSON.
pub fn render_json(mansion: &Mansion) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(mansion.root())?)
}
