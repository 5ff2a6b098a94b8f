//! Charm-style CLI prompts using cliclack

use crate::error::BuildError;
use crate::package::PackageSettings;
use crate::product::ProductConfig;
use crate::prompt::{self, Prompter};
use crate::runtime::initializer::{Initializer, InitializerOutcome, SystemRunner};
use crate::runtime::tool::{ToolConfig, ToolManager};
use crate::scaffold;
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI arguments for the build command
#[derive(Debug, Clone, Default)]
pub struct BuildArgs {
    /// Directory the package directory is created in
    pub directory: Option<PathBuf>,
}

/// [`Prompter`] backed by cliclack
#[derive(Debug, Default)]
pub struct ClackPrompter;

impl Prompter for ClackPrompter {
    fn input(&mut self, prompt: &str, placeholder: &str, default: Option<&str>) -> Result<String> {
        let mut input = cliclack::input(prompt)
            .placeholder(placeholder)
            .required(false);
        if let Some(default) = default {
            input = input.default_input(default);
        }
        Ok(input.interact()?)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Ok(cliclack::confirm(prompt).initial_value(default).interact()?)
    }

    fn error(&mut self, message: &str) -> Result<()> {
        cliclack::log::error(message)?;
        Ok(())
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: BuildArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;
    cliclack::log::info(config.cli_description())?;

    // Step 1: Ask the questions
    let settings = prompt::collect_settings(&mut ClackPrompter)?;

    // Step 2: Resolve the package directory
    let package_dir = resolve_package_dir(&args, &settings)?;

    // Step 3: Write the skeleton
    create_package(&settings, &package_dir).await?;

    // Step 4: Create composer.json
    init_manifest(config, &settings, &package_dir).await?;

    // Step 5: Show next steps
    print_next_steps(config, &package_dir, &settings)?;

    Ok(())
}

fn resolve_package_dir(args: &BuildArgs, settings: &PackageSettings) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let base = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };
    let path = settings.target_dir(&base);

    // Existing files at stub destinations get overwritten
    if path.is_dir() {
        if let Ok(entries) = std::fs::read_dir(&path) {
            let count = entries.count();
            if count > 0 {
                cliclack::log::warning(format!(
                    "Directory {} has {} existing items, generated files will be overwritten",
                    path.display(),
                    count
                ))?;

                let confirm: bool = cliclack::confirm("Continue anyway?")
                    .initial_value(true)
                    .interact()?;

                if !confirm {
                    return Err(BuildError::Cancelled.into());
                }
            }
        }
    }

    Ok(path)
}

async fn create_package(settings: &PackageSettings, package_dir: &Path) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating package...");

    match scaffold::build_package(settings, package_dir).await {
        Ok(written) => {
            spinner.stop(format!(
                "Created {} files in {}",
                written.len(),
                package_dir.display()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.error("Failed to create package");
            Err(e.into())
        }
    }
}

async fn init_manifest<C: ProductConfig>(
    config: &C,
    settings: &PackageSettings,
    package_dir: &Path,
) -> Result<InitializerOutcome> {
    let tool = ToolManager::new(ToolConfig {
        name: config.initializer_program(),
        display_name: config.initializer_display_name(),
        docs_url: config.initializer_docs_url(),
    });
    let initializer = Initializer::new(tool.config().name.clone(), &settings.name, package_dir);

    let outcome = if tool.is_installed() {
        let version = tool.get_version().unwrap_or_else(|| "unknown".to_string());
        cliclack::log::success(format!(
            "{} installed ({})",
            tool.config().display_name,
            version
        ))?;

        println!("{} {}", "Running:".dimmed(), initializer.command_line().yellow());
        println!();
        initializer.run(&SystemRunner).await
    } else {
        handle_missing_tool(&tool)?
    };

    if outcome.is_success() {
        cliclack::log::success("Package manifest created")?;
    } else {
        cliclack::log::warning(format!(
            "{} {}. The package files are in place; create the manifest with:\n{}",
            tool.config().display_name,
            outcome,
            initializer.command_line()
        ))?;
    }

    Ok(outcome)
}

fn handle_missing_tool(tool: &ToolManager) -> Result<InitializerOutcome> {
    let display_name = tool.config().display_name;
    cliclack::log::warning(format!("{} is not installed", display_name))?;

    let action: &str = cliclack::select("What would you like to do?")
        .item(
            "docs",
            format!("Open installation docs ({})", tool.config().docs_url),
            "",
        )
        .item("skip", format!("Skip and continue without {}", display_name), "")
        .interact()?;

    if action == "docs" {
        if let Err(e) = tool.open_docs() {
            cliclack::log::warning(format!("Could not open browser: {}", e))?;
        }
    }

    Ok(InitializerOutcome::Unavailable {
        reason: format!("{} not found in PATH", tool.config().name),
    })
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    package_dir: &Path,
    settings: &PackageSettings,
) -> Result<()> {
    let steps = config.next_steps(package_dir, settings);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
