//! Configuration for an exploration run.

use dq_core::MapStyle;

/// Configuration for the console front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreConfig {
    /// Print the mansion map before exploring.
    pub show_map: bool,
    /// How the map is drawn.
    pub map_style: MapStyle,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            show_map: true,
            map_style: MapStyle::default(),
        }
    }
}

impl ExploreConfig {
    /// Enable or disable the map overview.
    pub fn with_map(mut self, show_map: bool) -> Self {
        self.show_map = show_map;
        self
    }

    /// Set the map style.
    pub fn with_map_style(mut self, style: MapStyle) -> Self {
        self.map_style = style;
        self
    }
}
