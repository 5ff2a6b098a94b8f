//! Package skeleton generation
//!
//! Writes the package tree in a fixed order. There is no rollback: the first failing
//! step aborts the rest and leaves whatever was already written on disk.

use crate::error::{BuildError, BuildResult};
use crate::package::PackageSettings;
use crate::templates::render;
use crate::templates::{StubFile, PACKAGE_FILES, PHPUNIT_FILE, PHP_CS_FILE};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Mode for the generated `src/` directory
#[cfg(unix)]
const SOURCE_DIR_MODE: u32 = 0o755;

/// Create the package skeleton under `target_dir`
///
/// Returns the written files relative to `target_dir`, in write order. Existing files at
/// those paths are overwritten; anything else in the directory is left alone.
pub async fn build_package(settings: &PackageSettings, target_dir: &Path) -> BuildResult<Vec<PathBuf>> {
    let mut written = Vec::new();

    create_package(settings, target_dir, &mut written).await?;

    if settings.include_tests {
        copy_phpunit_files(target_dir, &mut written).await?;
    }

    if let Some(standard) = &settings.style_standard {
        create_cs_fixer_config(standard, target_dir, &mut written).await?;
    }

    Ok(written)
}

/// Source directory, README and the always-copied dotfiles
async fn create_package(
    settings: &PackageSettings,
    target_dir: &Path,
    written: &mut Vec<PathBuf>,
) -> BuildResult<()> {
    let src_dir = target_dir.join("src");
    create_dir(&src_dir).await?;
    set_source_permissions(&src_dir).await?;

    write_file(target_dir, "README.md", render::readme(&settings.name.title()), written).await?;
    touch(target_dir, "src/.gitkeep", written).await?;

    for stub in PACKAGE_FILES {
        copy_stub(target_dir, stub, written).await?;
    }

    Ok(())
}

async fn copy_phpunit_files(target_dir: &Path, written: &mut Vec<PathBuf>) -> BuildResult<()> {
    create_dir(&target_dir.join("tests")).await?;
    touch(target_dir, "tests/.gitkeep", written).await?;
    copy_stub(target_dir, &PHPUNIT_FILE, written).await
}

async fn create_cs_fixer_config(
    standard: &str,
    target_dir: &Path,
    written: &mut Vec<PathBuf>,
) -> BuildResult<()> {
    write_file(target_dir, PHP_CS_FILE.dest, render::php_cs(standard), written).await
}

async fn create_dir(path: &Path) -> BuildResult<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|source| BuildError::DirectoryCreate {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(unix)]
async fn set_source_permissions(path: &Path) -> BuildResult<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, std::fs::Permissions::from_mode(SOURCE_DIR_MODE))
        .await
        .map_err(|source| BuildError::DirectoryCreate {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(not(unix))]
async fn set_source_permissions(_path: &Path) -> BuildResult<()> {
    Ok(())
}

async fn copy_stub(target_dir: &Path, stub: &StubFile, written: &mut Vec<PathBuf>) -> BuildResult<()> {
    write_file(target_dir, stub.dest, stub.contents, written).await
}

async fn write_file(
    target_dir: &Path,
    relative: &str,
    contents: impl AsRef<[u8]>,
    written: &mut Vec<PathBuf>,
) -> BuildResult<()> {
    let path = target_dir.join(relative);
    fs::write(&path, contents)
        .await
        .map_err(|source| BuildError::FileWrite { path, source })?;
    written.push(PathBuf::from(relative));
    Ok(())
}

/// Create an empty file, keeping any existing contents
async fn touch(target_dir: &Path, relative: &str, written: &mut Vec<PathBuf>) -> BuildResult<()> {
    let path = target_dir.join(relative);
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .await
        .map_err(|source| BuildError::FileWrite { path, source })?;
    written.push(PathBuf::from(relative));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::PackageName;
    use tempfile::tempdir;

    fn settings(name: &str) -> PackageSettings {
        PackageSettings::with_defaults(PackageName::parse(name).unwrap())
    }

    #[tokio::test]
    async fn test_build_minimal_package() {
        let dir = tempdir().unwrap();
        let mut s = settings("acme/widget");
        s.include_tests = false;
        s.style_standard = None;

        let written = build_package(&s, dir.path()).await.unwrap();

        assert_eq!(
            written,
            vec![
                PathBuf::from("README.md"),
                PathBuf::from("src/.gitkeep"),
                PathBuf::from(".gitattributes"),
                PathBuf::from(".gitignore"),
                PathBuf::from(".editorconfig"),
            ]
        );
        assert!(!dir.path().join("tests").exists());
        assert!(!dir.path().join("phpunit.xml.dist").exists());
        assert!(!dir.path().join(".php_cs").exists());
    }

    #[tokio::test]
    async fn test_tests_without_style_checker() {
        let dir = tempdir().unwrap();
        let mut s = settings("acme/widget");
        s.style_standard = None;

        build_package(&s, dir.path()).await.unwrap();

        assert!(dir.path().join("tests/.gitkeep").is_file());
        let phpunit = std::fs::read_to_string(dir.path().join("phpunit.xml.dist")).unwrap();
        assert_eq!(phpunit, PHPUNIT_FILE.contents);
        assert!(!dir.path().join(".php_cs").exists());
    }

    #[tokio::test]
    async fn test_style_checker_uses_standard() {
        let dir = tempdir().unwrap();
        let mut s = settings("acme/widget");
        s.include_tests = false;
        s.style_standard = Some("psr2".to_string());

        build_package(&s, dir.path()).await.unwrap();

        let php_cs = std::fs::read_to_string(dir.path().join(".php_cs")).unwrap();
        assert!(php_cs.contains("array (\n  0 => 'psr2',\n)"));
        assert!(!php_cs.contains("STANDARDS"));
    }

    #[tokio::test]
    async fn test_readme_heading() {
        let dir = tempdir().unwrap();
        build_package(&settings("my-org/cool-lib"), dir.path())
            .await
            .unwrap();

        let readme = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(readme.starts_with("# Cool-lib\n"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_source_dir_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        build_package(&settings("acme/widget"), dir.path())
            .await
            .unwrap();

        let mode = std::fs::metadata(dir.path().join("src"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[tokio::test]
    async fn test_fails_when_target_is_a_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("acme-widget");
        std::fs::write(&target, "not a directory").unwrap();

        let err = build_package(&settings("acme/widget"), &target)
            .await
            .unwrap_err();
        assert!(matches!(err, BuildError::DirectoryCreate { .. }));
    }

    #[tokio::test]
    async fn test_touch_keeps_existing_contents() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("src/.gitkeep"), "keep").unwrap();

        build_package(&settings("acme/widget"), dir.path())
            .await
            .unwrap();

        let kept = std::fs::read_to_string(dir.path().join("src/.gitkeep")).unwrap();
        assert_eq!(kept, "keep");
    }
}
