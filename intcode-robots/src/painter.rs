//! Hull-painting robot
//!
//! The VM reads the color under the robot and answers with two outputs: the
//! color to paint and the direction to turn. The robot then steps forward
//! one panel.

use std::collections::HashMap;

use intcode_runtime::{RuntimeError, VMConfig, VM};
use intcode_spec::{Program, Word};
use tracing::debug;

use crate::error::{Result, RobotError};
use crate::grid::{Bounds, Coordinate};

/// Panel color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Black = 0,
    White = 1,
}

impl Color {
    pub fn from_word(word: Word) -> Result<Self> {
        match word {
            0 => Ok(Color::Black),
            1 => Ok(Color::White),
            other => Err(RobotError::UnknownColor(other)),
        }
    }

    pub const fn to_word(self) -> Word {
        self as Word
    }
}

/// Turn command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left = 0,
    Right = 1,
}

impl Turn {
    pub fn from_word(word: Word) -> Result<Self> {
        match word {
            0 => Ok(Turn::Left),
            1 => Ok(Turn::Right),
            other => Err(RobotError::UnknownTurn(other)),
        }
    }
}

/// Direction the robot faces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Facing {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Facing {
    pub fn turn(self, turn: Turn) -> Self {
        match (self, turn) {
            (Facing::Up, Turn::Left) | (Facing::Down, Turn::Right) => Facing::Left,
            (Facing::Up, Turn::Right) | (Facing::Down, Turn::Left) => Facing::Right,
            (Facing::Left, Turn::Left) | (Facing::Right, Turn::Right) => Facing::Down,
            (Facing::Left, Turn::Right) | (Facing::Right, Turn::Left) => Facing::Up,
        }
    }

    /// Unit displacement, `+y` is up
    pub fn delta(self) -> (i64, i64) {
        match self {
            Facing::Up => (0, 1),
            Facing::Right => (1, 0),
            Facing::Down => (0, -1),
            Facing::Left => (-1, 0),
        }
    }
}

/// Painted panels
///
/// Only panels the robot painted at least once are recorded; every other
/// panel reads as black.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hull {
    panels: HashMap<Coordinate, Color>,
}

impl Hull {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of panels painted at least once
    pub fn painted_count(&self) -> usize {
        self.panels.len()
    }

    pub fn color_at(&self, position: Coordinate) -> Color {
        self.panels.get(&position).copied().unwrap_or_default()
    }

    pub fn paint(&mut self, position: Coordinate, color: Color) {
        self.panels.insert(position, color);
    }

    /// Render the painted area, `"# "` for white and `"  "` for black
    pub fn render(&self) -> String {
        let Some(bounds) = Bounds::enclosing(self.panels.keys()) else {
            return String::new();
        };
        bounds.render(|c| match self.color_at(c) {
            Color::White => "# ",
            Color::Black => "  ",
        })
    }
}

/// Robot state plus the VM driving it
pub struct Painter {
    vm: VM,
    position: Coordinate,
    facing: Facing,
    hull: Hull,
}

impl Painter {
    pub fn new(program: &Program, start: Color) -> Self {
        Self::with_config(program, start, VMConfig::default())
    }

    pub fn with_config(program: &Program, start: Color, config: VMConfig) -> Self {
        Painter {
            vm: VM::new(program, vec![start.to_word()], config),
            position: Coordinate::ORIGIN,
            facing: Facing::default(),
            hull: Hull::new(),
        }
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Run until the program halts and return the painted hull
    pub fn paint(mut self) -> Result<Hull> {
        loop {
            let outputs = match self.vm.run_until_outputs(2) {
                Ok(outputs) => outputs,
                Err(RuntimeError::UnexpectedHalt { .. }) => break,
                Err(e) => return Err(e.into()),
            };
            self.apply(outputs[0], outputs[1])?;
        }

        debug!(panels = self.hull.painted_count(), "painting finished");
        Ok(self.hull)
    }

    /// Paint, turn, advance, then report the color under the robot
    fn apply(&mut self, color: Word, turn: Word) -> Result<()> {
        let color = Color::from_word(color)?;
        let turn = Turn::from_word(turn)?;

        self.hull.paint(self.position, color);
        self.facing = self.facing.turn(turn);
        let (dx, dy) = self.facing.delta();
        self.position = self.position.offset(dx, dy);

        self.vm.push_input(self.hull.color_at(self.position).to_word());
        Ok(())
    }
}

/// Paint a hull starting on a panel of color `start`
pub fn paint(program: &Program, start: Color) -> Result<Hull> {
    Painter::new(program, start).paint()
}
