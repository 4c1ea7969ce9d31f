//! Command-line workflow, separated from argument parsing in `main.rs`

pub mod orchestration;

pub use orchestration::{run_bump, BumpArgs, BumpPaths, BumpReport, GradleStatus};
