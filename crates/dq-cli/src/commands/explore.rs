use std::io;

use dq_core::Mansion;
use dq_explorer::{Console, ExploreConfig, ExploreResult, Outcome};
use tracing::info;

pub fn run(show_map: bool) -> Result<(), String> {
    let config = ExploreConfig::default().with_map(show_map);
    play(config).map_err(|e| e.to_string())
}

fn play(config: ExploreConfig) -> ExploreResult<()> {
    let mansion = Mansion::detective_quest()?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock(), config);
    let report = console.run(mansion)?;

    let path: Vec<&str> = report.path.iter().map(|n| n.as_str()).collect();
    match report.outcome {
        Outcome::DeadEnd => info!(path = ?path, "reached a dead end"),
        Outcome::Quit => info!(path = ?path, "player left the mansion"),
        Outcome::InputClosed => info!(path = ?path, "input closed mid-exploration"),
    }
    info!(released = report.released, "mansion torn down");

    Ok(())
}
