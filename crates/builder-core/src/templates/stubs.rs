//! Stub files bundled into the binary
//!
//! Stubs live in the crate's `stubs/` directory and are embedded at compile time,
//! so the tool never depends on files next to the executable.

/// Token in the php-cs-fixer stub replaced with the chosen standard
pub const STANDARDS_TOKEN: &str = "STANDARDS";

pub const GITATTRIBUTES: &str = include_str!("../../stubs/gitattributes");
pub const GITIGNORE: &str = include_str!("../../stubs/gitignore");
pub const EDITORCONFIG: &str = include_str!("../../stubs/editorconfig");
pub const PHPUNIT_CONFIG: &str = include_str!("../../stubs/phpunit_config");
pub const PHP_CS: &str = include_str!("../../stubs/php_cs");

/// A bundled stub and where it lands in the package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubFile {
    /// Destination path relative to the package root
    pub dest: &'static str,
    pub contents: &'static str,
}

/// Files copied verbatim into every package, in write order
pub const PACKAGE_FILES: &[StubFile] = &[
    StubFile {
        dest: ".gitattributes",
        contents: GITATTRIBUTES,
    },
    StubFile {
        dest: ".gitignore",
        contents: GITIGNORE,
    },
    StubFile {
        dest: ".editorconfig",
        contents: EDITORCONFIG,
    },
];

/// PHPUnit configuration, copied when tests are enabled
pub const PHPUNIT_FILE: StubFile = StubFile {
    dest: "phpunit.xml.dist",
    contents: PHPUNIT_CONFIG,
};

/// php-cs-fixer configuration; contains [`STANDARDS_TOKEN`] exactly once
pub const PHP_CS_FILE: StubFile = StubFile {
    dest: ".php_cs",
    contents: PHP_CS,
};
