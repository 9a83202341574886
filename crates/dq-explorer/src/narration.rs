//! Player-facing text.
//!
//! Every line the player sees comes from here, so the console loop only
//! decides *when* to say something.

use dq_core::Room;

use crate::command::Direction;
use crate::session::Step;

/// Game title and premise.
pub fn banner() -> String {
    "=== DETECTIVE QUEST - EXPLORACAO DA MANSAO ===\n\
     Enigma Studios - Ensino de Logica e Programacao\n\
     \n\
     Voce e um detetive investigando um misterio numa antiga mansao.\n\
     Explore os comodos em busca de pistas!\n\
     \n"
    .to_string()
}

/// Heading printed above the map.
pub fn map_heading() -> String {
    "Mapa da Mansao (visualizacao hierarquica):\n\
     ==========================================\n"
        .to_string()
}

/// Announce the start of the exploration.
pub fn start(room: &Room) -> String {
    format!("=== INICIANDO EXPLORACAO ===\nVoce comeca no: {}\n\n", room.name())
}

/// Describe the current room and list the options.
pub fn prompt(room: &Room, exits: &[(Direction, &Room)]) -> String {
    let mut output = format!("Voce esta no: {}\nOpcoes de exploracao:\n", room.name());
    for (direction, target) in exits {
        let label = match direction {
            Direction::Left => "ESQUERDA",
            Direction::Right => "DIREITA",
        };
        output.push_str(&format!(
            "  [{}] - Ir para {} ({})\n",
            direction.key(),
            label,
            target.name()
        ));
    }
    output.push_str("  [s] - Sair da exploracao\n");
    output.push_str("\nPara onde deseja ir? ");
    output
}

/// Arrival in a room without exits.
pub fn dead_end(room: &Room) -> String {
    format!(
        ">>> Voce chegou ao: {}\n\
         Este e um comodo sem saidas. Fim da exploracao neste caminho.\n",
        room.name()
    )
}

/// Response to a step. Reaching a dead end is announced on its own, so a
/// `DeadEnd` step only reports the move.
pub fn step(step: &Step<'_>) -> String {
    match step {
        Step::Moved { to } | Step::DeadEnd { room: to } => {
            format!(">>> Indo para: {}\n\n", to.name())
        }
        Step::Blocked(direction) => format!("ERRO: Nao ha caminho a {}!\n\n", direction.name()),
        Step::Invalid(_) => "Opcao invalida! Use 'e' para esquerda, 'd' para direita ou 's' para sair.\n\n"
            .to_string(),
        Step::Quit => "Saindo da exploracao...\n".to_string(),
    }
}

/// Parting line once the mansion has been torn down.
pub fn farewell() -> String {
    "\nInvestigacao concluida! Volte sempre, Detetive.\n".to_string()
}
