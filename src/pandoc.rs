//! Pandoc conversion bridge.
//!
//! The only process-spawning code in the crate. Both operations run
//! pandoc as a child process with a polling deadline; a child that
//! outlives its deadline is killed and reported as a timeout.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::utils::error::{ConversionError, ConversionResult};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Check whether the configured pandoc binary is available.
pub fn check_pandoc_installed(config: &AppConfig) -> bool {
    let child = Command::new(&config.pandoc_bin)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    match child {
        Ok(child) => {
            match wait_with_deadline(child, Duration::from_secs(config.probe_timeout_secs)) {
                Ok((status, _)) => status.success(),
                Err(_) => false,
            }
        }
        Err(_) => false,
    }
}

/// Convert a markdown file to DOCX with the system pandoc.
///
/// The input file must already hold normalized markdown; this function
/// does not touch document content.
pub fn convert_md_to_docx(
    config: &AppConfig,
    md_path: &Path,
    docx_path: &Path,
) -> ConversionResult<()> {
    let child = Command::new(&config.pandoc_bin)
        .arg(md_path)
        .arg("-o")
        .arg(docx_path)
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                ConversionError::pandoc_not_found(config.pandoc_bin.clone())
            }
            _ => e.into(),
        })?;

    let (status, stderr) =
        wait_with_deadline(child, Duration::from_secs(config.convert_timeout_secs))?;

    if !status.success() {
        return Err(ConversionError::pandoc_failed(status.code(), stderr));
    }
    if !docx_path.exists() {
        return Err(ConversionError::pandoc_failed(
            status.code(),
            "pandoc exited successfully but produced no output file",
        ));
    }
    Ok(())
}

/// Wait for a child process, killing it once the deadline passes.
fn wait_with_deadline(
    mut child: Child,
    timeout: Duration,
) -> ConversionResult<(ExitStatus, String)> {
    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => {
                let mut stderr = String::new();
                if let Some(mut pipe) = child.stderr.take() {
                    let _ = pipe.read_to_string(&mut stderr);
                }
                return Ok((status, stderr));
            }
            Ok(None) => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ConversionError::timeout(timeout.as_secs()));
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(e) => {
                let _ = child.kill();
                return Err(e.into());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_binary(binary: &str) -> AppConfig {
        AppConfig {
            pandoc_bin: binary.to_string(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_missing_binary_probe_is_false() {
        let config = config_with_binary("definitely-not-a-real-pandoc");
        assert!(!check_pandoc_installed(&config));
    }

    #[test]
    fn test_missing_binary_conversion_error() {
        let config = config_with_binary("definitely-not-a-real-pandoc");
        let err = convert_md_to_docx(
            &config,
            Path::new("in.md"),
            Path::new("out.docx"),
        )
        .unwrap_err();
        assert!(matches!(err, ConversionError::PandocNotFound { .. }));
    }
}
