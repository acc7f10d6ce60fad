//! Core type definitions used throughout the codebase

use std::fmt;
use std::str::FromStr;

use crate::core::error::TissueError;

/// Antibody (defense) strength of a single membrane
pub type AntibodyStrength = u32;

/// Integer position of a cell in the 3D grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Component-wise sum, or None if any axis leaves the `i32` range
    pub fn checked_add(&self, rhs: Coordinate) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(rhs.x)?,
            y: self.y.checked_add(rhs.y)?,
            z: self.z.checked_add(rhs.z)?,
        })
    }

    /// The adjacent coordinate one step toward `side`
    ///
    /// Returns None at the edge of the grid; the grid does not wrap.
    pub fn neighbor(&self, side: Side) -> Option<Self> {
        self.checked_add(side.delta())
    }

    /// Adjacent coordinates that exist, paired with the direction of travel
    pub fn neighbors(self) -> impl Iterator<Item = (Side, Coordinate)> {
        Side::ALL
            .into_iter()
            .filter_map(move |side| Some((side, self.neighbor(side)?)))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

/// One of the six faces of a cell, and the matching grid direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
    Up = 4,
    Down = 5,
}

impl Side {
    /// All sides, in neighbor visiting order
    pub const ALL: [Side; 6] = [
        Side::North,
        Side::East,
        Side::South,
        Side::West,
        Side::Up,
        Side::Down,
    ];

    /// Get opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::North => Side::South,
            Side::South => Side::North,
            Side::East => Side::West,
            Side::West => Side::East,
            Side::Up => Side::Down,
            Side::Down => Side::Up,
        }
    }

    /// Unit offset for moving one cell in this direction
    pub fn delta(&self) -> Coordinate {
        match self {
            Side::North => Coordinate::new(0, 1, 0),
            Side::South => Coordinate::new(0, -1, 0),
            Side::East => Coordinate::new(1, 0, 0),
            Side::West => Coordinate::new(-1, 0, 0),
            Side::Up => Coordinate::new(0, 0, 1),
            Side::Down => Coordinate::new(0, 0, -1),
        }
    }

    /// Stable slot for per-side arrays
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Side::North => "north",
            Side::South => "south",
            Side::East => "east",
            Side::West => "west",
            Side::Up => "up",
            Side::Down => "down",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Side {
    type Err = TissueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Side::ALL
            .into_iter()
            .find(|side| side.name() == s)
            .ok_or_else(|| TissueError::InvalidSide(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_equality() {
        let a = Coordinate::new(1, -2, 3);
        let b = Coordinate::new(1, -2, 3);
        let c = Coordinate::new(1, 2, 3);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_coordinate_hash() {
        use std::collections::HashMap;
        let mut map: HashMap<Coordinate, &str> = HashMap::new();
        map.insert(Coordinate::new(-4, 0, 7), "cell");
        assert_eq!(map.get(&Coordinate::new(-4, 0, 7)), Some(&"cell"));
    }

    #[test]
    fn test_opposite_is_involution() {
        for side in Side::ALL {
            assert_ne!(side.opposite(), side);
            assert_eq!(side.opposite().opposite(), side);
        }
    }

    #[test]
    fn test_opposite_deltas_cancel() {
        for side in Side::ALL {
            let origin = Coordinate::default();
            let back = origin
                .neighbor(side)
                .and_then(|step| step.neighbor(side.opposite()));
            assert_eq!(back, Some(origin));
        }
    }

    #[test]
    fn test_delta_axes() {
        assert_eq!(Side::North.delta(), Coordinate::new(0, 1, 0));
        assert_eq!(Side::South.delta(), Coordinate::new(0, -1, 0));
        assert_eq!(Side::East.delta(), Coordinate::new(1, 0, 0));
        assert_eq!(Side::West.delta(), Coordinate::new(-1, 0, 0));
        assert_eq!(Side::Up.delta(), Coordinate::new(0, 0, 1));
        assert_eq!(Side::Down.delta(), Coordinate::new(0, 0, -1));
    }

    #[test]
    fn test_neighbors_visit_order() {
        let order: Vec<Side> = Coordinate::new(0, 0, 0)
            .neighbors()
            .map(|(side, _)| side)
            .collect();
        assert_eq!(
            order,
            vec![Side::North, Side::East, Side::South, Side::West, Side::Up, Side::Down]
        );
    }

    #[test]
    fn test_side_parse() {
        assert_eq!("up".parse::<Side>().unwrap(), Side::Up);
        assert_eq!("west".parse::<Side>().unwrap(), Side::West);
        assert!(matches!(
            "sideways".parse::<Side>(),
            Err(TissueError::InvalidSide(s)) if s == "sideways"
        ));
        // Words are case-sensitive in scripts
        assert!("North".parse::<Side>().is_err());
    }

    #[test]
    fn test_neighbor_at_grid_edge() {
        let east_edge = Coordinate::new(i32::MAX, 0, 0);
        assert_eq!(east_edge.neighbor(Side::East), None);
        assert_eq!(
            east_edge.neighbor(Side::West),
            Some(Coordinate::new(i32::MAX - 1, 0, 0))
        );
        assert_eq!(Coordinate::new(0, i32::MIN, 0).neighbor(Side::South), None);
        assert_eq!(Coordinate::new(0, 0, i32::MIN).neighbor(Side::Down), None);

        // Only the five in-range directions are offered
        let corner = Coordinate::new(i32::MAX, 0, 0);
        let sides: Vec<Side> = corner.neighbors().map(|(side, _)| side).collect();
        assert_eq!(sides, vec![Side::North, Side::South, Side::West, Side::Up, Side::Down]);
    }

    #[test]
    fn test_coordinate_display() {
        assert_eq!(Coordinate::new(1, -2, 30).to_string(), "(1,-2,30)");
    }
}
