//! Console tic-tac-toe with a pure, embeddable game-state core.
//!
//! # Architecture
//!
//! - **Board**: grid storage and occupancy, no rules ([`Board`])
//! - **Rules**: pure win/draw evaluation over a board ([`rules`])
//! - **Match**: turn order and the game-over state machine ([`Match`])
//! - **Console**: a reference line-based driver ([`console`])
//!
//! The core is synchronous and side-effect free beyond its own state,
//! so any front end (console, GUI, network handler, test harness) can
//! drive it the same way the bundled driver does.
//!
//! # Example
//!
//! ```
//! use tictactoe_console::{Mark, Match};
//!
//! let mut game = Match::new();
//! game.attempt_move(0, 0)?; // X
//! game.attempt_move(1, 1)?; // O
//! assert_eq!(game.current_player(), Mark::X);
//! assert!(!game.is_over());
//! # Ok::<(), tictactoe_console::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
pub mod console;
mod error;
mod game;
pub mod rules;

pub use board::{Board, Mark, Square};
pub use error::MoveError;
pub use game::{Match, Status};
