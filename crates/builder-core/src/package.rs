//! Package settings collected from the user
//!
//! [`PackageSettings`] is built once by the prompt sequence and then read by the
//! scaffolder and the initializer. Nothing here touches the filesystem.

use crate::error::{BuildError, BuildResult};
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Separator used between namespace segments
pub const NAMESPACE_SEPARATOR: &str = "\\";

/// Style preset offered when the user enables the style checker
pub const DEFAULT_STYLE_STANDARD: &str = "symfony";

static PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+/[a-z0-9_-]+$").expect("valid package name regex"));

/// A validated `vendor/product` package name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageName {
    full: String,
    slash: usize,
}

impl PackageName {
    /// Validate raw user input. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> BuildResult<Self> {
        let value = input.trim();
        if value.is_empty() {
            return Err(BuildError::EmptyName);
        }
        if !PACKAGE_NAME.is_match(value) {
            return Err(BuildError::InvalidName {
                name: value.to_string(),
            });
        }

        // The pattern guarantees exactly one slash
        let slash = value.find('/').unwrap_or(value.len());
        Ok(Self {
            full: value.to_string(),
            slash,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.full
    }

    pub fn vendor(&self) -> &str {
        &self.full[..self.slash]
    }

    pub fn product(&self) -> &str {
        &self.full[self.slash + 1..]
    }

    /// Directory name for the package: `vendor/product` becomes `vendor-product`
    pub fn dir_name(&self) -> String {
        self.full.replace('/', "-")
    }

    /// Namespace suggested to the user: `foo/bar` becomes `Foo\Bar`
    pub fn default_namespace(&self) -> String {
        [self.vendor(), self.product()]
            .iter()
            .map(|segment| ucfirst(segment))
            .collect::<Vec<_>>()
            .join(NAMESPACE_SEPARATOR)
    }

    /// Heading used in the generated README: the product segment with its first letter uppercased
    pub fn title(&self) -> String {
        ucfirst(self.product())
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

/// Uppercase the first character, leave the rest untouched
pub fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Everything the scaffolder needs to know about the package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSettings {
    pub name: PackageName,
    pub namespace: String,
    pub include_tests: bool,
    /// Style preset for php-cs-fixer; `None` means no style checker config is generated
    pub style_standard: Option<String>,
}

impl PackageSettings {
    /// Settings with the defaults every prompt offers
    pub fn with_defaults(name: PackageName) -> Self {
        let namespace = name.default_namespace();
        Self {
            name,
            namespace,
            include_tests: true,
            style_standard: Some(DEFAULT_STYLE_STANDARD.to_string()),
        }
    }

    pub fn include_style_checker(&self) -> bool {
        self.style_standard.is_some()
    }

    /// Directory the package is written to, relative to `base`
    pub fn target_dir(&self, base: &Path) -> PathBuf {
        base.join(self.name.dir_name())
    }
}
