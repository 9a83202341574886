use tracing::{debug, instrument};

use crate::error::CoreResult;
use crate::room::{Room, RoomName};

/// The mansion: a binary tree of rooms rooted at the entrance hall.
///
/// Once assembled the tree is never modified. Rooms are only reachable
/// through shared references, so exploration cannot rewire exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mansion {
    root: Room,
}

impl Mansion {
    /// Freeze a wired room tree into a mansion.
    pub fn new(root: Room) -> Self {
        Self { root }
    }

    /// Build the fixed Detective Quest map.
    #[instrument(level = "trace")]
    pub fn detective_quest() -> CoreResult<Self> {
        // Level 3
        let secret_room = Room::new("Sala Secreta")?;
        let guest_room = Room::new("Quarto de Hospedes")?;
        let pantry = Room::new("Despensa")?;
        let greenhouse = Room::new("Estufa")?;

        // Level 2
        let library = Room::new("Biblioteca")?.with_left(secret_room);
        let office = Room::new("Escritorio")?.with_right(guest_room);
        let kitchen = Room::new("Cozinha")?.with_left(pantry);
        let winter_garden = Room::new("Jardim de Inverno")?.with_right(greenhouse);

        // Level 1
        let living_room = Room::new("Sala de Estar")?
            .with_left(library)
            .with_right(office);
        let dining_room = Room::new("Sala de Jantar")?
            .with_left(kitchen)
            .with_right(winter_garden);

        let hall = Room::new("Hall de Entrada")?
            .with_left(living_room)
            .with_right(dining_room);

        let mansion = Self::new(hall);
        debug!(rooms = mansion.room_count(), "built mansion map");
        Ok(mansion)
    }

    /// The entrance room.
    pub fn root(&self) -> &Room {
        &self.root
    }

    /// Iterate over every room in pre-order, paired with its depth.
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(Some(&self.root))
    }

    /// Number of rooms in the mansion.
    pub fn room_count(&self) -> usize {
        self.walk().count()
    }

    /// Number of rooms on the longest path from the entrance to a dead end.
    pub fn height(&self) -> usize {
        self.walk().map(|(depth, _)| depth + 1).max().unwrap_or(0)
    }

    /// Find a room by name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<&Room> {
        let wanted = name.to_lowercase();
        self.walk()
            .map(|(_, room)| room)
            .find(|room| room.name().as_str().to_lowercase() == wanted)
    }

    /// Rooms without exits, in pre-order.
    pub fn leaves(&self) -> Vec<&Room> {
        self.walk()
            .map(|(_, room)| room)
            .filter(|room| room.is_leaf())
            .collect()
    }

    /// Release every room, children before their parent.
    #[instrument(level = "trace", skip(self))]
    pub fn teardown(self) -> Teardown {
        let mut released = Vec::new();
        release(Some(Box::new(self.root)), &mut released);
        debug!(rooms = released.len(), "tore down mansion");
        Teardown { released }
    }
}

fn release(room: Option<Box<Room>>, released: &mut Vec<RoomName>) {
    let Some(room) = room else {
        return;
    };
    let (name, left, right) = room.into_parts();
    release(left, released);
    release(right, released);
    released.push(name);
}

/// Record of a post-order teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teardown {
    released: Vec<RoomName>,
}

impl Teardown {
    /// Released room names in release order.
    pub fn released(&self) -> &[RoomName] {
        &self.released
    }

    /// Number of rooms released.
    pub fn count(&self) -> usize {
        self.released.len()
    }
}

/// Pre-order iterator over a room tree, yielding `(depth, room)`.
pub struct Walk<'a> {
    stack: Vec<(usize, &'a Room)>,
}

impl<'a> Walk<'a> {
    /// Start a walk at `root`. A missing root yields nothing.
    pub fn new(root: Option<&'a Room>) -> Self {
        Self {
            stack: root.map(|room| (0, room)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Room);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, room) = self.stack.pop()?;
        // Right goes on first so left is visited first
        if let Some(right) = room.right() {
            self.stack.push((depth + 1, right));
        }
        if let Some(left) = room.left() {
            self.stack.push((depth + 1, left));
        }
        Some((depth, room))
    }
}
