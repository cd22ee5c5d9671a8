use std::fmt;
use std::path::Path;
use std::process::Command;

use anyhow::Context;

/// A command exited non-zero while the caller asked for that to be fatal.
/// Carries the captured output so callers can inspect or report it.
#[derive(Debug)]
pub struct ExecutionError {
    pub command: String,
    pub code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to execute command: {} (exit code {})",
            self.command, self.code
        )
    }
}

impl std::error::Error for ExecutionError {}

/// Runs `cmd` through the platform shell and captures its output.
///
/// Returns `(exit_code, stdout, stderr)` with the output as raw bytes.
/// With `can_fail` set, a non-zero exit becomes an [`ExecutionError`]
/// instead of a return value. With `log` set, the command line is echoed
/// through the logger before spawning. The exit code is -1 when the
/// process was terminated by a signal.
pub fn execute(
    cmd: &str,
    workdir: Option<&Path>,
    can_fail: bool,
    log: bool,
) -> anyhow::Result<(i32, Vec<u8>, Vec<u8>)> {
    if log {
        pupm_logger::shell(cmd);
    }

    // Use different command based on OS
    let mut shell = if cfg!(target_os = "windows") {
        let mut shell = Command::new("cmd");
        shell.args(["/C", cmd]);
        shell
    } else {
        let mut shell = Command::new("sh");
        shell.arg("-c").arg(cmd);
        shell
    };
    if let Some(dir) = workdir {
        shell.current_dir(dir);
    }

    let output = shell
        .output()
        .with_context(|| format!("Failed to spawn command: {cmd}"))?;
    let code = output.status.code().unwrap_or(-1);

    if code != 0 && can_fail {
        return Err(ExecutionError {
            command: cmd.to_string(),
            code,
            stdout: output.stdout,
            stderr: output.stderr,
        }
        .into());
    }

    Ok((code, output.stdout, output.stderr))
}
