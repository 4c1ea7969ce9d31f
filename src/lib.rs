pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod gradle;
pub mod logging;
pub mod pubspec;
pub mod ui;
pub mod warning;

pub use error::{BumpError, Result};
