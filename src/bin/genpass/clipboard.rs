use std::env;
use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::Context;

/// Copy `data` to the system clipboard by piping it into the clipboard command.
pub(crate) fn send_to_clipboard(data: &[u8]) -> anyhow::Result<()> {
    let mut cmd = clipboard_cmd()?;
    let program = cmd.get_program().to_string_lossy().into_owned();
    tracing::debug!(%program, "spawning clipboard command");
    let mut child = cmd
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to start the clipboard command (`{program}`)"))?;
    {
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow::anyhow!("the clipboard command (`{program}`) has no stdin"))?;
        stdin
            .write_all(data)
            .with_context(|| format!("failed to write to the clipboard command (`{program}`)"))?;
    }
    let exit_status = child
        .wait()
        .with_context(|| format!("failed to wait for the clipboard command (`{program}`)"))?;
    if exit_status.success() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "the clipboard command (`{program}`) exited with {exit_status}"
        ))
    }
}

/// `GENPASS_CLIPBOARD` overrides the platform default; it is split on whitespace into a program
/// and its arguments.
fn clipboard_cmd() -> anyhow::Result<Command> {
    match env::var_os("GENPASS_CLIPBOARD") {
        Some(value) => {
            let value = value
                .into_string()
                .map_err(|_| anyhow::anyhow!("GENPASS_CLIPBOARD is not valid UTF-8"))?;
            command_from_str(&value)
        }
        None => Ok(default_clipboard_cmd()),
    }
}

fn command_from_str(value: &str) -> anyhow::Result<Command> {
    let mut words = value.split_whitespace();
    let program = words
        .next()
        .ok_or_else(|| anyhow::anyhow!("GENPASS_CLIPBOARD is set but empty"))?;
    let mut cmd = Command::new(program);
    cmd.args(words);
    Ok(cmd)
}

#[cfg(target_os = "macos")]
fn default_clipboard_cmd() -> Command {
    Command::new("pbcopy")
}

#[cfg(not(target_os = "macos"))]
fn default_clipboard_cmd() -> Command {
    let mut cmd = Command::new("xsel");
    cmd.arg("-b");
    cmd
}
