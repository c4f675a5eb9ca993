//! Robot client errors

use intcode_runtime::RuntimeError;
use intcode_spec::Word;
use thiserror::Error;

use crate::grid::Coordinate;

#[derive(Debug, Error)]
pub enum RobotError {
    #[error("VM error: {0}")]
    Runtime(#[from] RuntimeError),

    #[error("Program halted while the robot expected a status report")]
    UnexpectedHalt,

    #[error("Unknown color: {0}")]
    UnknownColor(Word),

    #[error("Unknown turn: {0}")]
    UnknownTurn(Word),

    #[error("Unknown status code: {0}")]
    UnknownStatus(Word),

    #[error("Could not move back to {at}")]
    BacktrackFailed { at: Coordinate },

    #[error("Move into {at} was rejected")]
    MoveRejected { at: Coordinate },

    #[error("No target on the map")]
    TargetNotFound,

    #[error("No path from {from} to {to}")]
    TargetUnreachable { from: Coordinate, to: Coordinate },
}

pub type Result<T> = std::result::Result<T, RobotError>;
