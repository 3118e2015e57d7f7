//! The native share surface, modeled as an external command.

use std::process::{Command, ExitStatus, Stdio};

use crate::catalog::Profile;

/// Exit code a share command uses to signal "the user backed out",
/// following the shell convention for an interrupt.
const DISMISS_EXIT: i32 = 130;

/// What a share attempt hands to the share surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    /// Payload for one profile: its name as the title, its description
    /// as the body, its link as the target.
    #[must_use]
    pub fn for_profile(profile: &Profile) -> Self {
        Self {
            title: profile.name.clone(),
            text: profile.description.clone(),
            url: profile.url.clone(),
        }
    }
}

/// The three ways a presented share can end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareVerdict {
    /// The surface reported the payload as handed off.
    Delivered,
    /// The user backed out; not an error.
    Dismissed,
    /// The surface itself failed.
    Failed(String),
}

/// A host share surface. Availability is probed before every attempt so
/// resolution can fall back to the clipboard without presenting.
pub trait ShareSheet {
    fn available(&self) -> bool;
    fn present(&mut self, payload: &SharePayload) -> ShareVerdict;
}

/// Share surface backed by a user-configured command.
///
/// The command runs headless with the link appended as the final
/// argument and the payload mirrored into `VITRIN_SHARE_TITLE`,
/// `VITRIN_SHARE_TEXT`, and `VITRIN_SHARE_URL`. Exit 0 is delivery,
/// exit 130 (or death by interrupt) is a dismissal, anything else is a
/// failure.
pub struct CommandSheet {
    argv: Vec<String>,
}

impl CommandSheet {
    #[must_use]
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }
}

impl ShareSheet for CommandSheet {
    fn available(&self) -> bool {
        !self.argv.is_empty()
    }

    fn present(&mut self, payload: &SharePayload) -> ShareVerdict {
        let Some((program, args)) = self.argv.split_first() else {
            return ShareVerdict::Failed("no share command configured".into());
        };

        let output = Command::new(program)
            .args(args)
            .arg(&payload.url)
            .env("VITRIN_SHARE_TITLE", &payload.title)
            .env("VITRIN_SHARE_TEXT", &payload.text)
            .env("VITRIN_SHARE_URL", &payload.url)
            .stdin(Stdio::null())
            .output();

        match output {
            Ok(output) => verdict_from_status(output.status, &output.stderr),
            Err(error) => ShareVerdict::Failed(format!("failed to run '{program}': {error}")),
        }
    }
}

fn verdict_from_status(status: ExitStatus, stderr: &[u8]) -> ShareVerdict {
    if status.success() {
        return ShareVerdict::Delivered;
    }
    if status.code() == Some(DISMISS_EXIT) {
        return ShareVerdict::Dismissed;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        // Signal 2 is SIGINT.
        if status.signal() == Some(2) {
            return ShareVerdict::Dismissed;
        }
    }

    let trail = String::from_utf8_lossy(stderr);
    let trail = trail.trim();
    if trail.is_empty() {
        ShareVerdict::Failed(format!("share command exited with {status}"))
    } else {
        ShareVerdict::Failed(format!("share command exited with {status}: {trail}"))
    }
}

/// A host with no share surface at all.
pub struct NoSheet;

impl ShareSheet for NoSheet {
    fn available(&self) -> bool {
        false
    }

    fn present(&mut self, _payload: &SharePayload) -> ShareVerdict {
        ShareVerdict::Failed("no share command configured".into())
    }
}

/// Pick the sheet implementation for a configured command line.
#[must_use]
pub fn sheet_from_command(argv: &[String]) -> Box<dyn ShareSheet + Send> {
    if argv.is_empty() {
        Box::new(NoSheet)
    } else {
        Box::new(CommandSheet::new(argv.to_vec()))
    }
}
