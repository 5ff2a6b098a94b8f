//! Builder Core - Shared library for the composer package scaffolding CLI
//!
//! This library asks a handful of questions about a new PHP package and writes its
//! skeleton from stubs bundled in the binary, then hands over to `composer init`.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Package name rules, stub rendering, skeleton writing,
//!   initializer invocation
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and the `Prompter`-driven
//!   question sequence
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use builder_core::{build_package, PackageName, PackageSettings};
//!
//! let name = PackageName::parse("acme/widget")?;
//! let settings = PackageSettings::with_defaults(name);
//! let dir = settings.target_dir(Path::new("."));
//! let written = build_package(&settings, &dir).await?;
//! ```

pub mod error;
pub mod package;
pub mod product;
pub mod prompt;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{BuildError, BuildResult};
pub use package::{PackageName, PackageSettings};
pub use product::ProductConfig;
pub use prompt::{collect_settings, Prompter};
pub use runtime::{CommandRunner, Initializer, InitializerOutcome};
pub use scaffold::build_package;

#[cfg(feature = "tui")]
pub use tui::run;
