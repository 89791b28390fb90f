#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An isolated data directory for one test run of the binary.
pub struct TestEnv {
    tmp: TempDir,
    pub data_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let data_dir = tmp.path().join("data");

        Self { tmp, data_dir }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).expect("binary built");
        cmd.current_dir(self.tmp.path())
            .env("CONTACTS_BACKEND", "local")
            .env("CONTACTS_DATA_DIR", &self.data_dir)
            .env_remove("CONTACTS_REMOTE_URL")
            .env_remove("CONTACTS_SEED_SAMPLES")
            .env_remove("CONTACTS_LOG");
        cmd
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join("contacts_data.json")
    }

    pub fn add(&self, name: &str, phone: &str, email: Option<&str>) {
        let mut cmd = self.cmd();
        cmd.args(["add", "--name", name, "--phone", phone]);
        if let Some(email) = email {
            cmd.args(["--email", email]);
        }
        cmd.assert().success();
    }

    pub fn list_lines(&self) -> Vec<String> {
        let output = self.cmd().arg("list").assert().success().get_output().stdout.clone();
        String::from_utf8_lossy(&output)
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.tmp.path().join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }
}

pub fn listing_format(id: u64, name: &str, phone: &str, email: &str) -> String {
    format!("{id:>3}. {name:<20} {phone:15} {email:^30}")
        .trim_end()
        .to_string()
}
