//! External tool handling
//!
//! This module provides:
//! - Presence checks for CLI tools like composer
//! - The `composer init` invocation that creates the package manifest

pub mod initializer;
pub mod tool;

pub use initializer::{CommandRunner, Initializer, InitializerOutcome, SystemRunner};
pub use tool::{ToolConfig, ToolManager};
