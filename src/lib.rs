//! Snake on a wrapping grid. The game rules live in [`board`], [`snake`],
//! [`food`] and [`game`]; [`input`] and [`ui`] connect them to a terminal.

pub mod board;
pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod snake;
pub mod ui;
