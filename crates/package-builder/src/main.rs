//! package-builder - Skeleton generator for composer packages

use anyhow::Result;
use builder_core::tui::BuildArgs;
use builder_core::{PackageSettings, ProductConfig};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Composer package product configuration
#[derive(Clone)]
pub struct ComposerConfig;

impl ProductConfig for ComposerConfig {
    fn display_name(&self) -> &'static str {
        "Package Builder"
    }

    fn cli_description(&self) -> &'static str {
        "Build the skeleton of a composer package"
    }

    fn initializer(&self) -> &'static str {
        "composer"
    }

    fn initializer_display_name(&self) -> &'static str {
        "Composer"
    }

    fn initializer_env(&self) -> &'static str {
        "PACKAGE_BUILDER_COMPOSER"
    }

    fn initializer_docs_url(&self) -> &'static str {
        "https://getcomposer.org/download/"
    }

    fn next_steps(&self, dir: &Path, settings: &PackageSettings) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_ref() != Some(&dir.to_path_buf()) {
            steps.push(format!("cd {}", dir.display()));
        }

        // Step 2: Install dependencies
        steps.push("composer install".to_string());

        if settings.include_tests {
            steps.push("composer require --dev phpunit/phpunit && vendor/bin/phpunit".to_string());
        }

        if settings.include_style_checker() {
            steps.push(
                "composer require --dev friendsofphp/php-cs-fixer && vendor/bin/php-cs-fixer fix"
                    .to_string(),
            );
        }

        steps.push(format!(
            "Add your classes under src/ in the {} namespace",
            settings.namespace
        ));

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "package-builder")]
#[command(about = "Build the skeleton of a composer package")]
#[command(version)]
pub struct Args {
    /// Directory to create the package in (defaults to the current directory)
    pub directory: Option<PathBuf>,
}

impl From<Args> for BuildArgs {
    fn from(args: Args) -> Self {
        BuildArgs {
            directory: args.directory,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = ComposerConfig;

    let result = builder_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
