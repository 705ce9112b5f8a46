pub mod error;
pub mod issue;
pub mod paths;
pub mod project;
pub mod render;

pub use error::{IssueError, Result};
