//! Product configuration trait for CLI binaries
//!
//! The binary crate implements this trait to supply its identity and the external
//! initializer it drives after the skeleton is written.

use crate::package::PackageSettings;
use std::path::Path;

/// Configuration trait for the CLI product
///
/// Implementations define:
/// - Product identity (display name, description)
/// - The initializer binary and its environment override
/// - Documentation links
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Binary invoked to create the package manifest
    fn initializer(&self) -> &'static str;

    /// Human-readable name of the initializer tool
    fn initializer_display_name(&self) -> &'static str {
        self.initializer()
    }

    /// Environment variable name for overriding the initializer binary
    fn initializer_env(&self) -> &'static str;

    /// URL for the initializer's installation docs
    fn initializer_docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after the package is created
    fn next_steps(&self, dir: &Path, settings: &PackageSettings) -> Vec<String>;

    /// Initializer binary, honouring the environment override
    fn initializer_program(&self) -> String {
        std::env::var(self.initializer_env())
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| self.initializer().to_string())
    }
}
