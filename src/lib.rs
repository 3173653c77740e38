//! Terminal Snake duel: a keyboard-driven snake races a breadth-first-search
//! snake for the same food on a walled grid.

pub mod app;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod pathfinder;
pub mod renderer;
pub mod scheduler;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
