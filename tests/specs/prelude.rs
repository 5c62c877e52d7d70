//! Shared helpers for the behavioural specs

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Output;
use tempfile::TempDir;

/// Small harbour that finishes a two-voyage day in well under a second
pub const QUICK_DAY: &str = r#"
ship_capacity = 3
bridge_capacity = 1
time_between_trips = "300ms"
trip_duration = "100ms"
trips_per_day = 2
poll_interval = "5ms"
crossing_time = "10ms"
passengers = 5
min_arrival_gap = "1ms"
max_arrival_gap = "5ms"
"#;

/// A temporary directory holding a `ferry.toml`
pub struct Harbour {
    dir: TempDir,
}

impl Harbour {
    pub fn with_config(toml: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("ferry.toml"), toml).unwrap();
        Self { dir }
    }

    pub fn quick() -> Self {
        Self::with_config(QUICK_DAY)
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("ferry.toml")
    }

    /// `ferry --config <this harbour's config>`
    pub fn ferry(&self) -> CliBuilder {
        let path = self.config_path();
        ferry().args(&["--config", path.to_str().unwrap()])
    }
}

/// `ferry` with built-in defaults
pub fn ferry() -> CliBuilder {
    CliBuilder {
        cmd: Command::cargo_bin("ferry").unwrap(),
        stdin: String::new(),
    }
}

pub struct CliBuilder {
    cmd: Command,
    stdin: String,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    /// Operator console input; the console sees end of input afterwards
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = input.to_string();
        self
    }

    pub fn passes(self) -> RunAssert {
        let output = self.run();
        assert!(
            output.status.success(),
            "expected success, got {:?}\nstderr:\n{}",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    pub fn fails(self) -> RunAssert {
        let output = self.run();
        assert!(
            !output.status.success(),
            "expected failure\nstdout:\n{}",
            String::from_utf8_lossy(&output.stdout)
        );
        RunAssert { output }
    }

    fn run(mut self) -> Output {
        self.cmd
            .env("RUST_LOG", "warn")
            .timeout(std::time::Duration::from_secs(30))
            .write_stdin(self.stdin)
            .output()
            .unwrap()
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(&self, expected: &str) -> &Self {
        let stdout = self.stdout();
        assert!(
            predicate::str::contains(expected).eval(&stdout),
            "stdout missing {:?}:\n{}",
            expected,
            stdout
        );
        self
    }

    pub fn stdout_lacks(&self, unexpected: &str) -> &Self {
        let stdout = self.stdout();
        assert!(
            !predicate::str::contains(unexpected).eval(&stdout),
            "stdout unexpectedly has {:?}:\n{}",
            unexpected,
            stdout
        );
        self
    }

    pub fn stderr_has(&self, expected: &str) -> &Self {
        let stderr = self.stderr();
        assert!(
            predicate::str::contains(expected).eval(&stderr),
            "stderr missing {:?}:\n{}",
            expected,
            stderr
        );
        self
    }
}
