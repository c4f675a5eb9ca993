//! Discovered ship layout and path queries

use std::collections::{HashMap, VecDeque};

use crate::error::{Result, RobotError};
use crate::explorer::{Heading, Terrain};
use crate::grid::{Bounds, Coordinate};

/// Immutable map produced by an [`Explorer`](crate::Explorer)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipMap {
    cells: HashMap<Coordinate, Terrain>,
    origin: Coordinate,
    targets: Vec<Coordinate>,
}

impl ShipMap {
    pub fn new(cells: HashMap<Coordinate, Terrain>, origin: Coordinate) -> Self {
        let mut targets: Vec<Coordinate> = cells
            .iter()
            .filter(|(_, terrain)| **terrain == Terrain::Target)
            .map(|(c, _)| *c)
            .collect();
        targets.sort();
        ShipMap { cells, origin, targets }
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// First target in coordinate order
    pub fn target(&self) -> Option<Coordinate> {
        self.targets.first().copied()
    }

    pub fn terrain_at(&self, position: Coordinate) -> Option<Terrain> {
        self.cells.get(&position).copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of recorded traversable cells
    pub fn open_count(&self) -> usize {
        self.cells.values().filter(|t| t.is_traversable()).count()
    }

    fn is_traversable(&self, position: Coordinate) -> bool {
        self.terrain_at(position).is_some_and(Terrain::is_traversable)
    }

    /// BFS distance from `start` to every reachable traversable cell
    ///
    /// Empty when `start` itself is not a recorded traversable cell.
    pub fn distances_from(&self, start: Coordinate) -> HashMap<Coordinate, usize> {
        let mut distances = HashMap::new();
        if !self.is_traversable(start) {
            return distances;
        }

        let mut queue = VecDeque::new();
        distances.insert(start, 0);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let next = distances[&current] + 1;
            for heading in Heading::ALL {
                let neighbor = heading.step(current);
                if self.is_traversable(neighbor) && !distances.contains_key(&neighbor) {
                    distances.insert(neighbor, next);
                    queue.push_back(neighbor);
                }
            }
        }

        distances
    }

    pub fn shortest_distance(&self, from: Coordinate, to: Coordinate) -> Result<usize> {
        self.distances_from(from)
            .get(&to)
            .copied()
            .ok_or(RobotError::TargetUnreachable { from, to })
    }

    /// Distance from the origin to the nearest target
    pub fn distance_to_target(&self) -> Result<usize> {
        let first = self.target().ok_or(RobotError::TargetNotFound)?;
        let distances = self.distances_from(self.origin);
        self.targets
            .iter()
            .filter_map(|t| distances.get(t).copied())
            .min()
            .ok_or(RobotError::TargetUnreachable { from: self.origin, to: first })
    }

    /// Steps for oxygen released at the target to fill every reachable cell
    pub fn fill_time(&self) -> Result<usize> {
        let target = self.target().ok_or(RobotError::TargetNotFound)?;
        Ok(self
            .distances_from(target)
            .into_values()
            .max()
            .unwrap_or_default())
    }

    /// Render the recorded area
    ///
    /// `"# "` wall, `". "` open, `"O "` target, `"D "` origin, `"  "` unknown.
    pub fn render(&self) -> String {
        let Some(bounds) = Bounds::enclosing(self.cells.keys()) else {
            return String::new();
        };
        bounds.render(|c| {
            if c == self.origin {
                return "D ";
            }
            match self.terrain_at(c) {
                Some(Terrain::Wall) => "# ",
                Some(Terrain::Open) => ". ",
                Some(Terrain::Target) => "O ",
                None => "  ",
            }
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn open_room(width: i64, height: i64) -> ShipMap {
        let mut cells = HashMap::new();
        for x in 0..width {
            for y in 0..height {
                cells.insert(Coordinate::new(x, y), Terrain::Open);
            }
        }
        ShipMap::new(cells, Coordinate::ORIGIN)
    }

    proptest! {
        #[test]
        fn test_open_room_distance_is_manhattan(
            width in 1i64..12,
            height in 1i64..12,
            ax in 0i64..12, ay in 0i64..12,
            bx in 0i64..12, by in 0i64..12
        ) {
            let ship = open_room(width, height);
            let a = Coordinate::new(ax % width, ay % height);
            let b = Coordinate::new(bx % width, by % height);
            let distance = ship.shortest_distance(a, b).unwrap();
            prop_assert_eq!(distance as u64, a.manhattan_distance(b));
            prop_assert_eq!(ship.shortest_distance(b, a).unwrap(), distance);
        }

        #[test]
        fn test_every_open_cell_reachable(width in 1i64..10, height in 1i64..10) {
            let ship = open_room(width, height);
            prop_assert_eq!(ship.distances_from(Coordinate::ORIGIN).len(), ship.open_count());
        }
    }
}
