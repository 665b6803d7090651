//! Move directions and their sweep orientation.

use serde::{Deserialize, Serialize};

/// Direction tiles slide in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order game-over detection tries them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Does the sweep treat rows as the compacted lines?
    ///
    /// True for Left/Right, false for Up/Down (columns).
    #[must_use]
    pub const fn along_row(self) -> bool {
        self.orientation().0
    }

    /// Does the index decrease toward the target edge?
    ///
    /// True for Left/Up, false for Right/Down.
    #[must_use]
    pub const fn increasing(self) -> bool {
        self.orientation().1
    }

    /// `(along_row, increasing)` lookup.
    #[must_use]
    pub const fn orientation(self) -> (bool, bool) {
        match self {
            Direction::Left => (true, true),
            Direction::Right => (true, false),
            Direction::Up => (false, true),
            Direction::Down => (false, false),
        }
    }

    /// The direction tiles would slide back in.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse a direction name (`"up"`, `"Left"`, ...).
    ///
    /// Returns `None` for anything else, which callers treat as "no move".
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_lookup() {
        assert_eq!(Direction::Left.orientation(), (true, true));
        assert_eq!(Direction::Right.orientation(), (true, false));
        assert_eq!(Direction::Up.orientation(), (false, true));
        assert_eq!(Direction::Down.orientation(), (false, false));
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.opposite().along_row(), dir.along_row());
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(Direction::parse("Left"), Some(Direction::Left));
        assert_eq!(Direction::parse(" up "), Some(Direction::Up));
        assert_eq!(Direction::parse("r"), Some(Direction::Right));
        assert_eq!(Direction::parse("sideways"), None);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for dir in Direction::ALL {
            assert_eq!(Direction::parse(&dir.to_string()), Some(dir));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Direction::Down).unwrap();
        assert_eq!(json, "\"down\"");
        let parsed: Direction = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(parsed, Direction::Right);
    }
}
