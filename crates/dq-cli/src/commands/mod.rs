pub mod explore;
pub mod map;
pub mod rooms;

use dq_core::Mansion;

/// Build the fixed mansion map.
fn build_mansion() -> Result<Mansion, String> {
    Mansion::detective_quest().map_err(|e| e.to_string())
}
