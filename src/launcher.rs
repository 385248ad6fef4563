//! Playback launcher
//!
//! Hands the last saved audio file to the host OS default opener. The
//! launcher itself holds no state: callers pass the session's recorded path,
//! and every failure comes back as an error for the UI to report.

use crate::platform::Platform;
use crate::{Result, TtscError};
use log::{debug, info};
use std::path::Path;
use std::process::{Command, Stdio};

/// Open the last saved audio file with the OS default application
///
/// Fails if no save has happened yet, or if the recorded file has since
/// been removed from disk. The OS opener is only spawned once both checks
/// pass.
pub fn play(last_saved: Option<&Path>) -> Result<()> {
    let path = last_saved.ok_or(TtscError::NoSavedAudio)?;

    if !path.is_file() {
        return Err(TtscError::AudioFileMissing(path.to_path_buf()));
    }

    open_with_default_app(path)
}

/// Invoke the platform's "open with default handler" command
fn open_with_default_app(path: &Path) -> Result<()> {
    let platform = Platform::current();
    debug!("Opening {} via {:?} launcher", path.display(), platform);

    let mut cmd = match platform {
        // `start` is a cmd.exe builtin; the empty string is the window title
        Platform::Windows => {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", ""]).arg(path);
            c
        }
        Platform::MacOs => {
            let mut c = Command::new("open");
            c.arg(path);
            c
        }
        Platform::Other => {
            let mut c = Command::new("xdg-open");
            c.arg(path);
            c
        }
    };

    let status = cmd
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| TtscError::Launch(format!("failed to run opener: {e}")))?;

    if !status.success() {
        return Err(TtscError::Launch(format!("opener exited with {status}")));
    }

    info!("Launched default application for {}", path.display());
    Ok(())
}
