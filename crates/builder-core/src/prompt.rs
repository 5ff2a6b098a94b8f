//! The question sequence that produces [`PackageSettings`]
//!
//! Questions are asked through the [`Prompter`] trait so the sequence can run against
//! cliclack in the terminal or a scripted prompter in tests.

use crate::error::BuildError;
use crate::package::{PackageName, PackageSettings, DEFAULT_STYLE_STANDARD};
use anyhow::Result;

/// How many times the package name is asked before giving up
pub const MAX_NAME_ATTEMPTS: usize = 5;

/// Terminal interaction used by [`collect_settings`]
pub trait Prompter {
    /// Ask for free text. An empty answer means "use the default" when one is given.
    fn input(&mut self, prompt: &str, placeholder: &str, default: Option<&str>) -> Result<String>;

    /// Ask a yes/no question
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Show a validation error before the question is asked again
    fn error(&mut self, message: &str) -> Result<()>;
}

/// Ask every question in order and build the settings
pub fn collect_settings<P: Prompter>(prompter: &mut P) -> Result<PackageSettings> {
    let name = ask_package_name(prompter)?;

    let default_namespace = name.default_namespace();
    let namespace = ask_with_default(
        prompter,
        "Please enter the namespace of the package",
        &default_namespace,
    )?;

    let include_tests = prompter.confirm("Do you want to test this package?", true)?;

    let use_cs_fixer =
        prompter.confirm("Do you want to use php-cs-fixer to format your code?", true)?;
    let style_standard = if use_cs_fixer {
        Some(ask_with_default(
            prompter,
            "Please enter the standard of php-cs-fixer",
            DEFAULT_STYLE_STANDARD,
        )?)
    } else {
        None
    };

    Ok(PackageSettings {
        name,
        namespace,
        include_tests,
        style_standard,
    })
}

/// Ask for the package name until it validates or the attempts run out
pub fn ask_package_name<P: Prompter>(prompter: &mut P) -> Result<PackageName> {
    let mut last_error = None;

    for _ in 0..MAX_NAME_ATTEMPTS {
        let answer = prompter.input(
            "Please enter the name of the package",
            "foo/bar",
            None,
        )?;

        match PackageName::parse(&answer) {
            Ok(name) => return Ok(name),
            Err(e) => {
                prompter.error(&e.to_string())?;
                last_error = Some(e);
            }
        }
    }

    Err(BuildError::TooManyAttempts {
        attempts: MAX_NAME_ATTEMPTS,
        last: Box::new(last_error.unwrap_or(BuildError::EmptyName)),
    }
    .into())
}

fn ask_with_default<P: Prompter>(prompter: &mut P, prompt: &str, default: &str) -> Result<String> {
    let answer = prompter.input(prompt, default, Some(default))?;
    let answer = answer.trim();
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}
