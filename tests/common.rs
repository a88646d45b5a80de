#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch HOME with its own punch file, so tests never touch the real config.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn data_file(&self) -> PathBuf {
        self.dir.path().join("punches.csv")
    }

    pub fn data_str(&self) -> String {
        self.data_file().to_string_lossy().to_string()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// `rpunch --file <sandbox punch file> …` with HOME pointed at the sandbox.
    pub fn rp(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rpunch");
        cmd.env("HOME", self.dir.path())
            .env("APPDATA", self.dir.path())
            .env_remove("RUST_LOG")
            .args(["--file", &self.data_str()]);
        cmd
    }

    pub fn write_punches(&self, rows: &[(&str, &str)]) {
        write_punch_file(&self.data_file(), rows);
    }
}

pub fn write_punch_file(path: &Path, rows: &[(&str, &str)]) {
    let mut body = String::from("in_time,out_time\n");
    for (i, o) in rows {
        body.push_str(&format!("{i},{o}\n"));
    }
    fs::write(path, body).expect("write punch file");
}
