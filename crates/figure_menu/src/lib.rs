//! Interactive console front end for building and measuring a collection of shapes.

pub mod config;
pub mod logging;
pub mod menu;

pub use config::{ConfigError, MenuConfig};
pub use menu::{Menu, MenuOption};
