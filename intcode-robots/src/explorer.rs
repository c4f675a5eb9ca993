//! Repair-droid maze explorer
//!
//! Moving the droid is the only way to learn what a neighboring cell holds,
//! so every probe that succeeds is undone right away. At a branch point the
//! VM is cloned, one copy per branch, and each copy walks its own branch.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use intcode_runtime::{VMConfig, VM};
use intcode_spec::{Program, Word};
use tracing::debug;

use crate::error::{Result, RobotError};
use crate::grid::Coordinate;
use crate::ship_map::ShipMap;

/// Movement command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    North = 1,
    South = 2,
    West = 3,
    East = 4,
}

impl Heading {
    /// Probe order
    pub const ALL: [Heading; 4] = [Heading::North, Heading::South, Heading::West, Heading::East];

    pub const fn command(self) -> Word {
        self as Word
    }

    pub const fn reverse(self) -> Self {
        match self {
            Heading::North => Heading::South,
            Heading::South => Heading::North,
            Heading::West => Heading::East,
            Heading::East => Heading::West,
        }
    }

    /// Unit displacement, north is `+y`
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Heading::North => (0, 1),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
            Heading::East => (1, 0),
        }
    }

    pub const fn step(self, from: Coordinate) -> Coordinate {
        let (dx, dy) = self.delta();
        from.offset(dx, dy)
    }
}

/// Status reported after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    /// The droid hit a wall and did not move
    Wall = 0,
    /// The droid moved
    Open = 1,
    /// The droid moved and is on the target
    Target = 2,
}

impl Terrain {
    pub fn from_status(status: Word) -> Result<Self> {
        match status {
            0 => Ok(Terrain::Wall),
            1 => Ok(Terrain::Open),
            2 => Ok(Terrain::Target),
            other => Err(RobotError::UnknownStatus(other)),
        }
    }

    pub fn is_traversable(self) -> bool {
        self != Terrain::Wall
    }
}

/// Depth-first maze explorer
///
/// Recorded terrain never changes. A cell becomes a search node at most
/// once, when it is first recorded as traversable.
#[derive(Debug, Clone, Default)]
pub struct Explorer {
    cells: HashMap<Coordinate, Terrain>,
    origin: Coordinate,
    target: Option<Coordinate>,
    search_order: Vec<Coordinate>,
}

impl Explorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explore everything reachable from `start`
    ///
    /// `vm` must have the droid standing on `start`. Returns the number of
    /// newly recorded cells, walls included.
    pub fn explore(&mut self, start: Coordinate, vm: VM) -> Result<usize> {
        let before = self.cells.len();
        if self.record(start, Terrain::Open) {
            self.origin = start;
        }

        let mut stack = vec![(start, vm)];
        while let Some((position, mut vm)) = stack.pop() {
            self.search_order.push(position);
            let mut frontier = Vec::new();
            for heading in Heading::ALL {
                let neighbor = heading.step(position);
                let terrain = probe(&mut vm, heading, position)?;
                if self.record(neighbor, terrain) && terrain.is_traversable() {
                    frontier.push((heading, neighbor));
                }
            }

            if frontier.len() > 1 {
                debug!(%position, branches = frontier.len(), "forking droid");
            }

            // This VM takes the last branch, clones take the rest
            let Some((last_heading, last_neighbor)) = frontier.pop() else {
                continue;
            };
            for (heading, neighbor) in frontier {
                let mut branch = vm.clone();
                advance(&mut branch, heading, neighbor)?;
                stack.push((neighbor, branch));
            }
            advance(&mut vm, last_heading, last_neighbor)?;
            stack.push((last_neighbor, vm));
        }

        let found = self.cells.len() - before;
        debug!(found, nodes = self.search_order.len(), "exploration finished");
        Ok(found)
    }

    pub fn cells(&self) -> &HashMap<Coordinate, Terrain> {
        &self.cells
    }

    pub fn target(&self) -> Option<Coordinate> {
        self.target
    }

    /// Cells expanded as search nodes, in the order they were expanded
    pub fn search_order(&self) -> &[Coordinate] {
        &self.search_order
    }

    pub fn into_map(self) -> ShipMap {
        ShipMap::new(self.cells, self.origin)
    }

    /// Insert if absent; true when the cell was new
    fn record(&mut self, position: Coordinate, terrain: Terrain) -> bool {
        match self.cells.entry(position) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(terrain);
                if terrain == Terrain::Target {
                    debug!(%position, "found target");
                    self.target = Some(position);
                }
                true
            }
        }
    }
}

/// Send one movement command and read the status it produces
fn send(vm: &mut VM, heading: Heading) -> Result<Terrain> {
    vm.push_input(heading.command());
    match vm.next_output()? {
        Some(status) => Terrain::from_status(status),
        None => Err(RobotError::UnexpectedHalt),
    }
}

/// Look at the neighbor in `heading` and leave the droid at `position`
fn probe(vm: &mut VM, heading: Heading, position: Coordinate) -> Result<Terrain> {
    let terrain = send(vm, heading)?;
    if terrain.is_traversable() && !send(vm, heading.reverse())?.is_traversable() {
        return Err(RobotError::BacktrackFailed { at: position });
    }
    Ok(terrain)
}

/// Commit a move into a cell already known to be traversable
fn advance(vm: &mut VM, heading: Heading, to: Coordinate) -> Result<()> {
    if !send(vm, heading)?.is_traversable() {
        return Err(RobotError::MoveRejected { at: to });
    }
    Ok(())
}

/// Map the whole ship, starting the droid at the origin
pub fn map_ship(program: &Program) -> Result<ShipMap> {
    map_ship_with_config(program, VMConfig::default())
}

pub fn map_ship_with_config(program: &Program, config: VMConfig) -> Result<ShipMap> {
    let mut explorer = Explorer::new();
    explorer.explore(Coordinate::ORIGIN, VM::new(program, vec![], config))?;
    Ok(explorer.into_map())
}

#[cfg(test)]
mod tests {
    use super::*;
    use intcode_runtime::RuntimeError;

    fn vm(words: Vec<Word>) -> VM {
        VM::new(&Program::new(words), vec![], VMConfig::default())
    }

    #[test]
    fn test_heading_commands() {
        let commands: Vec<Word> = Heading::ALL.iter().map(|h| h.command()).collect();
        assert_eq!(commands, vec![1, 2, 3, 4]);
        for heading in Heading::ALL {
            assert_eq!(heading.reverse().reverse(), heading);
            let there = heading.step(Coordinate::ORIGIN);
            assert_eq!(heading.reverse().step(there), Coordinate::ORIGIN);
        }
        assert_eq!(Heading::North.step(Coordinate::ORIGIN), Coordinate::new(0, 1));
        assert_eq!(Heading::West.step(Coordinate::ORIGIN), Coordinate::new(-1, 0));
    }

    #[test]
    fn test_terrain_status() {
        assert_eq!(Terrain::from_status(0).unwrap(), Terrain::Wall);
        assert_eq!(Terrain::from_status(2).unwrap(), Terrain::Target);
        assert!(Terrain::Target.is_traversable());
        assert!(!Terrain::Wall.is_traversable());
        assert!(matches!(Terrain::from_status(3), Err(RobotError::UnknownStatus(3))));
    }

    #[test]
    fn test_all_walls() {
        // Reads a command and reports a wall, forever
        let mut explorer = Explorer::new();
        let found = explorer.explore(Coordinate::ORIGIN, vm(vec![3, 9, 104, 0, 1105, 1, 0, 99, 99, 0])).unwrap();
        assert_eq!(found, 5);
        assert_eq!(explorer.cells()[&Coordinate::ORIGIN], Terrain::Open);
        assert_eq!(explorer.cells()[&Coordinate::new(0, 1)], Terrain::Wall);
        assert_eq!(explorer.target(), None);
    }

    #[test]
    fn test_halt_is_not_a_wall() {
        let mut explorer = Explorer::new();
        let err = explorer.explore(Coordinate::ORIGIN, vm(vec![99])).unwrap_err();
        assert!(matches!(err, RobotError::UnexpectedHalt));
    }

    #[test]
    fn test_unknown_status() {
        let mut explorer = Explorer::new();
        let err = explorer.explore(Coordinate::ORIGIN, vm(vec![104, 7, 99])).unwrap_err();
        assert!(matches!(err, RobotError::UnknownStatus(7)));
    }

    #[test]
    fn test_failed_backtrack() {
        // Moves north, then refuses to come back
        let mut explorer = Explorer::new();
        let err = explorer.explore(Coordinate::ORIGIN, vm(vec![104, 1, 104, 0, 99])).unwrap_err();
        assert!(matches!(err, RobotError::BacktrackFailed { at } if at == Coordinate::ORIGIN));
    }

    #[test]
    fn test_fatal_vm_error_aborts() {
        let mut explorer = Explorer::new();
        let err = explorer.explore(Coordinate::ORIGIN, vm(vec![42])).unwrap_err();
        assert!(matches!(err, RobotError::Runtime(RuntimeError::InvalidOpcode { pc: 0, opcode: 42 })));
    }
}
