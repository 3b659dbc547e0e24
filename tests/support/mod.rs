use anyhow::{Context, Result, bail};
use livecatalog::AppConfig;
use livecatalog::config::{CATALOG_ENV, LABELS_ENV, LOG_ENV};
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Write `value` to a fresh temp file; the file lives as long as the handle.
pub fn write_json(value: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, value)?;
    file.flush()?;
    Ok(file)
}

pub fn config_for(catalog: &Path, labels: Option<&Path>) -> AppConfig {
    AppConfig {
        catalog_path: catalog.to_path_buf(),
        labels_path: labels.map(Path::to_path_buf),
        log_filter: "off".to_string(),
    }
}

/// Command for one of the crate's binaries with the ambient config cleared.
pub fn bin_command(path: &str) -> Command {
    let mut cmd = Command::new(path);
    cmd.env_remove(CATALOG_ENV)
        .env_remove(LABELS_ENV)
        .env_remove("RUST_LOG")
        .env(LOG_ENV, "off");
    cmd
}

/// Run `cmd`, feeding `stdin` when given, and return its raw output.
pub fn run_raw(mut cmd: Command, stdin: Option<&str>) -> Result<Output> {
    cmd.stdin(if stdin.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    })
    .stdout(Stdio::piped())
    .stderr(Stdio::piped());
    let mut child = cmd
        .spawn()
        .with_context(|| format!("failed to spawn command: {:?}", cmd))?;
    if let Some(input) = stdin {
        let mut pipe = child.stdin.take().context("stdin not captured")?;
        pipe.write_all(input.as_bytes())?;
    }
    child
        .wait_with_output()
        .with_context(|| format!("failed to run command: {:?}", cmd))
}

/// Run `cmd`, require success, and parse its stdout as JSON.
pub fn run_json(cmd: Command, stdin: Option<&str>) -> Result<Value> {
    let output = run_raw(cmd, stdin)?;
    if !output.status.success() {
        bail!(
            "command failed: status {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    serde_json::from_slice(&output.stdout).context("stdout is not JSON")
}
