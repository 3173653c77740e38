use std::collections::VecDeque;

use crate::grid::{Cell, Grid};
use crate::input::{Heading, heading_change_is_valid};

/// Why a snake's move was refused.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    Wall,
    SelfCollision,
    OpponentCollision,
}

/// Result of one movement step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Advance {
    /// Moved one cell; length unchanged.
    Moved,
    /// Moved onto the food; length grew by one.
    Ate,
    /// The move was refused and the body left untouched.
    Died(DeathReason),
}

impl Advance {
    #[must_use]
    pub fn is_dead(self) -> bool {
        matches!(self, Self::Died(_))
    }

    #[must_use]
    pub fn ate_food(self) -> bool {
        self == Self::Ate
    }

    #[must_use]
    pub fn death_reason(self) -> Option<DeathReason> {
        match self {
            Self::Died(reason) => Some(reason),
            _ => None,
        }
    }
}

/// One snake on the board: its body (head first) and heading.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
    heading: Heading,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided heading.
    #[must_use]
    pub fn new(start: Cell, heading: Heading) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body, heading }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, heading: Heading) -> Self {
        assert!(!segments.is_empty(), "a snake needs at least one segment");
        Self {
            body: VecDeque::from(segments),
            heading,
        }
    }

    /// Replaces the heading unless `heading` is the exact reverse of the
    /// current one.
    pub fn set_heading(&mut self, heading: Heading) {
        if heading_change_is_valid(self.heading, heading) {
            self.heading = heading;
        }
    }

    /// Moves one cell along the current heading.
    ///
    /// Checks run wall, own body, then `opponent`'s body, all against the
    /// position before the move. A refused move leaves the body untouched.
    pub fn advance(&mut self, opponent: &Snake, grid: Grid, food: Cell) -> Advance {
        let next_head = self.next_head();

        if !grid.in_bounds(next_head) {
            return Advance::Died(DeathReason::Wall);
        }

        if self.occupies(next_head) {
            return Advance::Died(DeathReason::SelfCollision);
        }

        if opponent.occupies(next_head) {
            return Advance::Died(DeathReason::OpponentCollision);
        }

        self.body.push_front(next_head);
        if next_head == food {
            return Advance::Ate;
        }

        let _ = self.body.pop_back();
        Advance::Moved
    }

    /// Returns the head position for the next movement tick.
    #[must_use]
    pub fn next_head(&self) -> Cell {
        self.head().step(self.heading)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
