//! Bundled stubs and the text rendered from them
//!
//! This module provides:
//! - The stub files embedded in the binary and their destinations
//! - README rendering
//! - php-cs-fixer config rendering (single token substitution)

pub mod render;
pub mod stubs;

pub use stubs::{StubFile, PACKAGE_FILES, PHPUNIT_FILE, PHP_CS_FILE};
