//! Presence checks for external CLI tools
//!
//! Provides a small abstraction for checking whether a tool such as composer is on PATH
//! and pointing the user at its installation docs when it is not.

use anyhow::Result;
use colored::Colorize;

/// Configuration for a CLI tool
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Name of the tool binary (e.g., "composer")
    pub name: String,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// URL to the installation documentation
    pub docs_url: &'static str,
}

/// Manager for checking CLI tools
pub struct ToolManager {
    config: ToolConfig,
}

impl ToolManager {
    /// Create a new tool manager with the given configuration
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Get the tool configuration
    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Check if the tool is installed and available in PATH
    pub fn is_installed(&self) -> bool {
        which::which(&self.config.name).is_ok()
    }

    /// Get the installed tool version (if available)
    pub fn get_version(&self) -> Option<String> {
        std::process::Command::new(&self.config.name)
            .arg("--version")
            .output()
            .ok()
            .and_then(|output| {
                if output.status.success() {
                    String::from_utf8(output.stdout)
                        .ok()
                        .and_then(|s| s.lines().next().map(|l| l.trim().to_string()))
                } else {
                    None
                }
            })
    }

    /// Open the tool's documentation in the default browser
    pub fn open_docs(&self) -> Result<()> {
        println!(
            "{}",
            format!(
                "Opening {} documentation in your browser...",
                self.config.display_name
            )
            .cyan()
        );
        open::that(self.config.docs_url)?;
        Ok(())
    }
}
