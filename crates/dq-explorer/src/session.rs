//! Exploration state machine.

use dq_core::{Mansion, Room};
use tracing::debug;

use crate::command::{Choice, Direction};
use crate::error::{ExploreError, ExploreResult};

/// What happened after a choice was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'m> {
    /// The player moved into a room that has further exits.
    Moved {
        /// The room entered.
        to: &'m Room,
    },
    /// The player moved into a room without exits; exploration is over.
    DeadEnd {
        /// The room entered.
        room: &'m Room,
    },
    /// The chosen exit does not exist. The player stays put.
    Blocked(Direction),
    /// The key was not a known option. The player stays put.
    Invalid(char),
    /// The player stopped exploring.
    Quit,
}

/// An exploration of a mansion, from the entrance towards a dead end.
#[derive(Debug)]
pub struct ExplorationSession<'m> {
    current: &'m Room,
    path: Vec<&'m Room>,
    quit: bool,
}

impl<'m> ExplorationSession<'m> {
    /// Start at the mansion's entrance.
    pub fn new(mansion: &'m Mansion) -> Self {
        let root = mansion.root();
        Self {
            current: root,
            path: vec![root],
            quit: false,
        }
    }

    /// The room the player is standing in.
    pub fn current(&self) -> &'m Room {
        self.current
    }

    /// Every room visited so far, starting with the entrance.
    pub fn path(&self) -> &[&'m Room] {
        &self.path
    }

    /// Exits available from the current room, left first.
    pub fn exits(&self) -> Vec<(Direction, &'m Room)> {
        [
            (Direction::Left, self.current.left()),
            (Direction::Right, self.current.right()),
        ]
        .into_iter()
        .filter_map(|(dir, room)| room.map(|r| (dir, r)))
        .collect()
    }

    /// Whether the player has reached a dead end.
    pub fn at_dead_end(&self) -> bool {
        self.current.is_leaf()
    }

    /// Whether no further choices are accepted.
    pub fn is_finished(&self) -> bool {
        self.quit || self.at_dead_end()
    }

    /// Parse a key and apply it.
    pub fn process(&mut self, key: char) -> ExploreResult<Step<'m>> {
        self.apply(Choice::parse(key))
    }

    /// Apply a choice to the current room.
    pub fn apply(&mut self, choice: Choice) -> ExploreResult<Step<'m>> {
        if self.is_finished() {
            return Err(ExploreError::SessionOver {
                room: self.current.name().to_string(),
            });
        }

        let step = match choice {
            Choice::Go(direction) => self.go(direction),
            Choice::Quit => {
                self.quit = true;
                Step::Quit
            }
            Choice::Invalid(key) => Step::Invalid(key),
        };
        debug!(room = %self.current.name(), ?step, "applied choice");
        Ok(step)
    }

    fn go(&mut self, direction: Direction) -> Step<'m> {
        let next = match direction {
            Direction::Left => self.current.left(),
            Direction::Right => self.current.right(),
        };

        match next {
            Some(room) => {
                self.current = room;
                self.path.push(room);
                if room.is_leaf() {
                    Step::DeadEnd { room }
                } else {
                    Step::Moved { to: room }
                }
            }
            None => Step::Blocked(direction),
        }
    }
}
