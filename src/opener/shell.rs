use anyhow::{bail, Context, Result};
use std::ffi::OsString;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::time::{Duration, Instant};

/// How long to wait for stderr after the command exits. Launchers such as
/// `xdg-open` can leave a detached app holding the pipe open.
const STDERR_GRACE: Duration = Duration::from_millis(200);

/// `PATH` for launched commands: the usual user binary directories first,
/// then the inherited entries, without duplicates.
pub fn augmented_path() -> OsString {
    let extras: &[&str] = if cfg!(windows) {
        &[]
    } else {
        &["/usr/local/bin", "/opt/homebrew/bin", "/opt/homebrew/sbin"]
    };
    let current = std::env::var_os("PATH").unwrap_or_default();

    let mut parts: Vec<PathBuf> = extras.iter().map(PathBuf::from).collect();
    for p in std::env::split_paths(&current) {
        if !p.as_os_str().is_empty() && !parts.contains(&p) {
            parts.push(p);
        }
    }
    std::env::join_paths(&parts).unwrap_or(current)
}

#[cfg(windows)]
fn shell(cmd: &str) -> Command {
    use std::os::windows::process::CommandExt;
    let mut command = Command::new("cmd");
    command.arg("/C").raw_arg(cmd);
    command
}

#[cfg(not(windows))]
fn shell(cmd: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(cmd);
    command
}

pub(super) fn run_shell_command(cmd: &str, timeout: Option<Duration>) -> Result<()> {
    if cmd.trim().is_empty() {
        bail!("Empty command");
    }

    let mut child = shell(cmd)
        .env("PATH", augmented_path())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to spawn shell for: {cmd}"))?;

    let (tx, rx) = mpsc::channel();
    if let Some(mut stderr) = child.stderr.take() {
        std::thread::spawn(move || {
            let mut buf = String::new();
            let _ = stderr.read_to_string(&mut buf);
            let _ = tx.send(buf);
        });
    }

    let status = match timeout {
        None => child.wait().context("Failed to wait for command")?,
        Some(limit) => {
            if let Some(status) = wait_until(&mut child, Instant::now() + limit)? {
                status
            } else {
                let _ = child.kill();
                let _ = child.wait();
                bail!(
                    "Command timed out after {}",
                    humantime::format_duration(limit)
                );
            }
        }
    };

    if !status.success() {
        let stderr = rx.recv_timeout(STDERR_GRACE).unwrap_or_default();
        let detail = stderr.trim();
        if detail.is_empty() {
            bail!("Command exited with {status}");
        }
        bail!("Command exited with {status}: {detail}");
    }
    Ok(())
}

/// Poll `child` until it exits or `deadline` passes.
fn wait_until(child: &mut Child, deadline: Instant) -> Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait().context("Failed to poll command")? {
            return Ok(Some(status));
        }
        let now = Instant::now();
        if now >= deadline {
            return Ok(None);
        }
        std::thread::sleep((deadline - now).min(Duration::from_millis(20)));
    }
}
