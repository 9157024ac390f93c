#![allow(dead_code)]

use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

const SHARDLOCK: &str = env!("CARGO_BIN_EXE_shardlock");
const TMP_DIR: &str = env!("CARGO_TARGET_TMPDIR");

#[derive(Debug)]
pub struct Output {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Write `contents` to a fresh file under the test's scratch dir.
pub fn write_scratch_file(name: &str, contents: &[u8]) -> PathBuf {
    let path = Path::new(TMP_DIR).join(name);
    std::fs::File::create(&path)
        .unwrap()
        .write_all(contents)
        .unwrap();
    path
}

pub fn run(args: &[&str]) -> Output {
    let mut command = Command::new(SHARDLOCK);
    command.env_remove("PAGER");

    for arg in args {
        command.arg(arg);
    }

    let output = command.output().unwrap();

    Output {
        exit_code: output.status.code().unwrap(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

pub fn checksum(path: &Path) -> String {
    let payload = std::fs::read(path).unwrap();
    let hash = blake3::hash(&payload);
    hash.to_hex().to_string()
}
