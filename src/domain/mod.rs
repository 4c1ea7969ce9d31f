//! Domain logic - pure value types independent of file I/O

pub mod lines;
pub mod version;

pub use lines::{join_with_replacements, split_lines, Line};
pub use version::VersionRecord;
