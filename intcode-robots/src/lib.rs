//! # Intcode Robots
//!
//! Clients that drive an Intcode [`VM`](intcode_runtime::VM) as a robot
//! controller.
//!
//! - [`Painter`]: reads `(color, turn)` pairs and paints a hull
//! - [`Explorer`]: maps an unknown maze by forking the VM at every branch
//!   point, producing a [`ShipMap`] for shortest-path queries
//!
//! ## Example
//!
//! ```rust
//! use intcode_robots::{paint, Color};
//! use intcode_spec::Program;
//!
//! // Paint white and turn left, then paint black and turn left
//! let program = Program::new(vec![104, 1, 104, 0, 104, 0, 104, 0, 99]);
//! let hull = paint(&program, Color::Black).unwrap();
//! assert_eq!(hull.painted_count(), 2);
//! ```

pub mod error;
pub mod grid;
pub mod painter;
pub mod explorer;
pub mod ship_map;

pub use error::{Result, RobotError};
pub use grid::{Bounds, Coordinate};
pub use painter::{paint, Color, Facing, Hull, Painter, Turn};
pub use explorer::{map_ship, map_ship_with_config, Explorer, Heading, Terrain};
pub use ship_map::ShipMap;
