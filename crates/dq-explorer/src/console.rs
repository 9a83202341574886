//! Console front end: drives a session over any reader and writer.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use dq_core::{Mansion, RoomName, render_tree};
use tracing::{debug, info, instrument};

use crate::config::ExploreConfig;
use crate::error::ExploreResult;
use crate::narration;
use crate::session::{ExplorationSession, Step};

/// Reads single keys from line-oriented input.
///
/// Whitespace is skipped and every other character is its own key, so
/// `"e d"` and `"ed"` both produce `e` followed by `d`. Bytes that are not
/// valid UTF-8 come through as `U+FFFD`.
#[derive(Debug)]
pub struct KeyReader<R> {
    input: R,
    pending: VecDeque<char>,
}

impl<R: BufRead> KeyReader<R> {
    /// Wrap a buffered reader.
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// The next key, or `None` once input is exhausted.
    pub fn next_key(&mut self) -> std::io::Result<Option<char>> {
        loop {
            if let Some(key) = self.pending.pop_front() {
                return Ok(Some(key));
            }
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            // Undecodable bytes become U+FFFD and are rejected as invalid keys
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .chars()
                    .filter(|c| !c.is_whitespace()),
            );
        }
    }
}

/// How an exploration ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player reached a room without exits.
    DeadEnd,
    /// The player chose to stop.
    Quit,
    /// Input ran out before the exploration ended.
    InputClosed,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// How the exploration ended.
    pub outcome: Outcome,
    /// Rooms visited, starting with the entrance.
    pub path: Vec<RoomName>,
    /// Rooms released by the final teardown. Zero if the mansion was kept.
    pub released: usize,
}

impl Report {
    /// The room where the exploration ended.
    pub fn final_room(&self) -> Option<&RoomName> {
        self.path.last()
    }
}

/// Interactive console over a key source and an output sink.
pub struct Console<R, W> {
    keys: KeyReader<R>,
    out: W,
    config: ExploreConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console reading keys from `input` and writing to `out`.
    pub fn new(input: R, out: W, config: ExploreConfig) -> Self {
        Self {
            keys: KeyReader::new(input),
            out,
            config,
        }
    }

    /// Run the whole game: banner, map, exploration, teardown, farewell.
    #[instrument(level = "trace", skip_all)]
    pub fn run(&mut self, mansion: Mansion) -> ExploreResult<Report> {
        self.write(&narration::banner())?;

        if self.config.show_map {
            self.write(&narration::map_heading())?;
            let map = render_tree(Some(mansion.root()), &self.config.map_style);
            self.write(&map)?;
            self.write("\n")?;
        }

        let mut report = self.explore(&mansion)?;

        let teardown = mansion.teardown();
        report.released = teardown.count();

        self.write(&narration::farewell())?;
        self.out.flush()?;
        Ok(report)
    }

    /// Explore `mansion` from its entrance until a dead end, a quit, or the
    /// end of input.
    pub fn explore(&mut self, mansion: &Mansion) -> ExploreResult<Report> {
        let mut session = ExplorationSession::new(mansion);
        self.write(&narration::start(session.current()))?;

        let outcome = loop {
            if session.at_dead_end() {
                self.write(&narration::dead_end(session.current()))?;
                break Outcome::DeadEnd;
            }

            self.write(&narration::prompt(session.current(), &session.exits()))?;
            self.out.flush()?;

            let Some(key) = self.keys.next_key()? else {
                debug!(room = %session.current().name(), "input closed");
                self.write("\n")?;
                break Outcome::InputClosed;
            };

            let step = session.process(key)?;
            self.write(&narration::step(&step))?;
            if step == Step::Quit {
                break Outcome::Quit;
            }
        };

        let path: Vec<RoomName> = session.path().iter().map(|r| r.name().clone()).collect();
        info!(?outcome, rooms_visited = path.len(), "exploration finished");

        Ok(Report {
            outcome,
            path,
            released: 0,
        })
    }

    /// Consume the console and return the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) -> ExploreResult<()> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(input: &str, config: ExploreConfig) -> (Report, String) {
        let mansion = Mansion::detective_quest().unwrap();
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new(), config);
        let report = console.run(mansion).unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        (report, output)
    }

    fn names(report: &Report) -> Vec<&str> {
        report.path.iter().map(|n| n.as_str()).collect()
    }

    #[test]
    fn key_reader_splits_lines_into_keys() {
        let mut keys = KeyReader::new(Cursor::new("e d\n\n  S\r\nxy"));
        let mut read = Vec::new();
        while let Some(key) = keys.next_key().unwrap() {
            read.push(key);
        }
        assert_eq!(read, ['e', 'd', 'S', 'x', 'y']);
    }

    #[test]
    fn key_reader_empty_input() {
        let mut keys = KeyReader::new(Cursor::new(""));
        assert_eq!(keys.next_key().unwrap(), None);
    }

    #[test]
    fn left_left_left_ends_at_secret_room() {
        let (report, output) = play("e\ne\ne\n", ExploreConfig::default());

        assert_eq!(report.outcome, Outcome::DeadEnd);
        assert_eq!(report.final_room().unwrap().as_str(), "Sala Secreta");
        assert!(output.contains(">>> Voce chegou ao: Sala Secreta\n"));
        // No prompt after arriving
        let tail = output.split(">>> Voce chegou ao:").nth(1).unwrap();
        assert!(!tail.contains("Para onde deseja ir?"));
    }

    #[test]
    fn right_right_right_ends_at_greenhouse() {
        let (report, output) = play("d\nd\nd\n", ExploreConfig::default());

        assert_eq!(report.outcome, Outcome::DeadEnd);
        assert_eq!(
            names(&report),
            ["Hall de Entrada", "Sala de Jantar", "Jardim de Inverno", "Estufa"]
        );
        assert!(output.contains(">>> Indo para: Jardim de Inverno\n\n"));
        assert!(output.contains(">>> Voce chegou ao: Estufa\n"));
    }

    #[test]
    fn quit_is_not_a_dead_end() {
        let (report, output) = play("e\nS\n", ExploreConfig::default());

        assert_eq!(report.outcome, Outcome::Quit);
        assert_eq!(names(&report), ["Hall de Entrada", "Sala de Estar"]);
        assert!(output.contains("Saindo da exploracao...\n"));
        assert!(!output.contains("Voce chegou ao"));
    }

    #[test]
    fn blocked_and_invalid_reprompt_same_room() {
        let (report, output) = play("e e d x s", ExploreConfig::default());

        assert_eq!(report.outcome, Outcome::Quit);
        assert_eq!(report.final_room().unwrap().as_str(), "Biblioteca");
        assert!(output.contains("ERRO: Nao ha caminho a direita!\n\n"));
        assert!(output.contains("Opcao invalida!"));
        assert_eq!(output.matches("Voce esta no: Biblioteca\n").count(), 3);
    }

    #[test]
    fn end_of_input_stops_exploring() {
        let (report, output) = play("d\n", ExploreConfig::default());

        assert_eq!(report.outcome, Outcome::InputClosed);
        assert_eq!(report.final_room().unwrap().as_str(), "Sala de Jantar");
        assert!(output.ends_with("Investigacao concluida! Volte sempre, Detetive.\n"));
    }

    #[test]
    fn key_reader_replaces_invalid_utf8() {
        let mut keys = KeyReader::new(Cursor::new(b"\xe9\ns\n".to_vec()));
        assert_eq!(keys.next_key().unwrap(), Some(char::REPLACEMENT_CHARACTER));
        assert_eq!(keys.next_key().unwrap(), Some('s'));
        assert_eq!(keys.next_key().unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_an_invalid_key() {
        let mansion = Mansion::detective_quest().unwrap();
        let input = Cursor::new(b"\xe9\ns\n".to_vec());
        let mut console = Console::new(input, Vec::new(), ExploreConfig::default());
        let report = console.run(mansion).unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();

        assert_eq!(report.outcome, Outcome::Quit);
        assert_eq!(report.released, 11);
        assert!(output.contains("Opcao invalida!"));
        assert!(output.ends_with("Investigacao concluida! Volte sempre, Detetive.\n"));
    }

    #[test]
    fn teardown_releases_every_room_whatever_the_path() {
        for input in ["e e e", "e d d", "d e e", "d d d", "s", "", "x d s"] {
            let (report, _) = play(input, ExploreConfig::default());
            assert_eq!(report.released, 11, "input {input:?}");
        }
    }

    #[test]
    fn full_transcript() {
        let (_, output) = play("e\ne\ne\n", ExploreConfig::default());
        let expected = "\
=== DETECTIVE QUEST - EXPLORACAO DA MANSAO ===
Enigma Studios - Ensino de Logica e Programacao

Voce e um detetive investigando um misterio numa antiga mansao.
Explore os comodos em busca de pistas!

Mapa da Mansao (visualizacao hierarquica):
==========================================
|- Hall de Entrada
  |- Sala de Estar
    |- Biblioteca
      |- Sala Secreta
    |- Escritorio
      |- Quarto de Hospedes
  |- Sala de Jantar
    |- Cozinha
      |- Despensa
    |- Jardim de Inverno
      |- Estufa

=== INICIANDO EXPLORACAO ===
Voce comeca no: Hall de Entrada

Voce esta no: Hall de Entrada
Opcoes de exploracao:
  [e] - Ir para ESQUERDA (Sala de Estar)
  [d] - Ir para DIREITA (Sala de Jantar)
  [s] - Sair da exploracao

Para onde deseja ir? >>> Indo para: Sala de Estar

Voce esta no: Sala de Estar
Opcoes de exploracao:
  [e] - Ir para ESQUERDA (Biblioteca)
  [d] - Ir para DIREITA (Escritorio)
  [s] - Sair da exploracao

Para onde deseja ir? >>> Indo para: Biblioteca

Voce esta no: Biblioteca
Opcoes de exploracao:
  [e] - Ir para ESQUERDA (Sala Secreta)
  [s] - Sair da exploracao

Para onde deseja ir? >>> Indo para: Sala Secreta

>>> Voce chegou ao: Sala Secreta
Este e um comodo sem saidas. Fim da exploracao neste caminho.

Investigacao concluida! Volte sempre, Detetive.
";
        assert_eq!(output, expected);
    }

    #[test]
    fn map_can_be_hidden() {
        let (_, output) = play("s", ExploreConfig::default().with_map(false));
        assert!(!output.contains("Mapa da Mansao"));
        assert!(!output.contains("|- "));
        assert!(output.contains("=== INICIANDO EXPLORACAO ===\n"));
    }
}
