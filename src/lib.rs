//! Grid-aligned Snake: the game-state core plus a terminal front-end.
//!
//! The core (`grid`, `snake`, `food`, `game`) works in board units where every
//! position is a multiple of [`grid::GRID_UNIT`]. The front-end modules only
//! read the core's public state.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod surface;
pub mod terminal_runtime;
pub mod ui;
