//! Structural and referential-integrity checks for board-game map data:
//! the base board (cities and connections), per-player claimed edges, and
//! scoring routes.
//!
//! Every validator is a pure function over already-parsed data. File
//! loading and console reporting belong to the caller.

pub mod board;
pub mod board_validator;
pub mod player_color;
pub mod report;
pub mod route_validator;
pub mod state_validator;
pub mod train_color;
pub mod uuid_format;

#[macro_use]
extern crate lazy_static;
