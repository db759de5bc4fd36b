use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper struct to run groupdeck commands against an isolated config home
pub struct GroupdeckTest {
    pub temp_dir: TempDir,
    binary_path: String,
}

impl GroupdeckTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        // Find the binary - check both debug and release
        let binary_path = if cfg!(debug_assertions) {
            concat!(env!("CARGO_MANIFEST_DIR"), "/target/debug/groupdeck")
        } else {
            concat!(env!("CARGO_MANIFEST_DIR"), "/target/release/groupdeck")
        };

        // If the above doesn't exist, try the alternative
        let binary_path = if std::path::Path::new(binary_path).exists() {
            binary_path.to_string()
        } else {
            // Fallback to debug
            concat!(env!("CARGO_MANIFEST_DIR"), "/target/debug/groupdeck").to_string()
        };

        GroupdeckTest {
            temp_dir,
            binary_path,
        }
    }

    /// Base command with the platform config directory pointed at the temp
    /// dir, so tests never read or write the developer's real config.
    fn command(&self) -> Command {
        let mut command = Command::new(&self.binary_path);
        command
            .current_dir(self.temp_dir.path())
            .env("HOME", self.temp_dir.path())
            .env("XDG_CONFIG_HOME", self.temp_dir.path())
            .env_remove("GROUPDECK_SERVER");
        command
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(args)
            .output()
            .expect("Failed to execute groupdeck command")
    }

    #[allow(dead_code)]
    pub fn run_with_env(&self, args: &[&str], key: &str, value: &str) -> Output {
        self.command()
            .args(args)
            .env(key, value)
            .output()
            .expect("Failed to execute groupdeck command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Where the config file lands given the redirected config home.
    #[allow(dead_code)]
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir
            .path()
            .join("groupdeck")
            .join("config.yaml")
    }

    #[allow(dead_code)]
    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).expect("Failed to read config file")
    }
}
