//! Integration tests for vcpkg-cache-clean

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const STATUS: &str = "\
Package: foo
Version: 1.0
Abi: abc123
Status: install ok installed

Package: bar
Version: 2.0
Abi: def456
Status: install ok installed
";

    fn clean() -> Command {
        let mut cmd = cargo_bin_cmd!("vcpkg-cache-clean");
        cmd.arg("--no-config");
        cmd
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"archive").unwrap();
    }

    /// Install root with a status file and a cache holding two live archives
    /// and one stale one in its own directory
    fn fixture() -> (TempDir, TempDir) {
        let install = TempDir::new().unwrap();
        fs::create_dir_all(install.path().join("vcpkg")).unwrap();
        fs::write(install.path().join("vcpkg/status"), STATUS).unwrap();

        let cache = TempDir::new().unwrap();
        touch(&cache.path().join("ab/abc123.zip"));
        touch(&cache.path().join("de/def456.zip"));
        touch(&cache.path().join("zz/zzz999.zip"));

        (install, cache)
    }

    #[test]
    fn help_displays() {
        clean()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--dry-run"));
    }

    #[test]
    fn version_displays() {
        clean()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("vcpkg-cache-clean"));
    }

    #[test]
    fn removes_stale_archives() {
        let (install, cache) = fixture();

        clean()
            .arg(install.path())
            .arg(cache.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Installed package ABIs:"))
            .stdout(predicate::str::contains("foo: abc123"))
            .stdout(predicate::str::contains("bar: def456"))
            .stdout(predicate::str::contains("Keeping"))
            .stdout(predicate::str::contains("Removing"))
            .stdout(predicate::str::contains("Removing empty directory:"));

        assert!(cache.path().join("ab/abc123.zip").exists());
        assert!(cache.path().join("de/def456.zip").exists());
        assert!(!cache.path().join("zz/zzz999.zip").exists());
        assert!(!cache.path().join("zz").exists());
    }

    #[test]
    fn dry_run_changes_nothing() {
        let (install, cache) = fixture();

        clean()
            .arg("--dry-run")
            .arg(install.path())
            .arg(cache.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Would remove"))
            .stdout(predicate::str::contains("Would remove empty directory:"))
            .stdout(predicate::str::contains("Dry run: would remove 1 archive(s)"));

        assert!(cache.path().join("zz/zzz999.zip").exists());
        assert!(cache.path().join("ab/abc123.zip").exists());
    }

    #[test]
    fn second_run_is_a_no_op() {
        let (install, cache) = fixture();

        clean().arg(install.path()).arg(cache.path()).assert().success();
        clean()
            .arg(install.path())
            .arg(cache.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Removing").not());
    }

    #[test]
    fn install_path_defaults_to_current_dir() {
        let (install, cache) = fixture();

        clean()
            .current_dir(install.path())
            .arg(cache.path())
            .assert()
            .success();

        assert!(!cache.path().join("zz/zzz999.zip").exists());
    }

    #[test]
    fn missing_status_file() {
        let install = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();

        clean()
            .arg(install.path())
            .arg(cache.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Status file not found"));
    }

    #[test]
    fn missing_cache_directory() {
        let (install, cache) = fixture();
        let missing = cache.path().join("nope");

        clean()
            .arg(install.path())
            .arg(&missing)
            .assert()
            .failure()
            .stderr(predicate::str::contains("does not exist"));
    }

    #[test]
    fn abi_before_package_fails() {
        let (install, cache) = fixture();
        fs::write(install.path().join("vcpkg/status"), "Abi: abc123\nPackage: foo\n").unwrap();

        clean()
            .arg(install.path())
            .arg(cache.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("before any Package entry"));

        assert!(cache.path().join("zz/zzz999.zip").exists());
    }

    #[test]
    fn explicit_config_file() {
        let (install, cache) = fixture();
        let config = install.path().join("config.toml");
        fs::write(&config, "[clean]\nprune_empty_dirs = false\n").unwrap();

        cargo_bin_cmd!("vcpkg-cache-clean")
            .arg("--config")
            .arg(&config)
            .arg(install.path())
            .arg(cache.path())
            .assert()
            .success();

        assert!(!cache.path().join("zz/zzz999.zip").exists());
        assert!(cache.path().join("zz").exists());
    }
}
