use comfy_table::{ContentArrangement, Table};
use dq_core::Room;

pub fn run() -> Result<(), String> {
    let mansion = super::build_mansion()?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Comodo", "Nivel", "Esquerda", "Direita"]);

    for (depth, room) in mansion.walk() {
        table.add_row(vec![
            room.name().to_string(),
            depth.to_string(),
            exit_name(room.left()),
            exit_name(room.right()),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} comodos, {} sem saida",
        mansion.room_count(),
        mansion.leaves().len()
    );

    Ok(())
}

fn exit_name(room: Option<&Room>) -> String {
    room.map(|r| r.name().to_string())
        .unwrap_or_else(|| "—".to_string())
}
