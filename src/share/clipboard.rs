//! Clipboard access for terminal sessions.

use std::io::Write;
use std::process::{Command, Stdio};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Destination for copied link text.
///
/// Share resolution only sees this trait, so hosts and tests can swap
/// in their own sink.
pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<(), String>;
}

/// Terminal-first clipboard: OSC 52 when enabled, otherwise the first
/// helper command that accepts the text.
pub struct SystemClipboard {
    osc52: bool,
}

impl SystemClipboard {
    #[must_use]
    pub fn new(osc52: bool) -> Self {
        Self { osc52 }
    }
}

impl Clipboard for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), String> {
        if self.osc52 {
            write_osc52(text)
        } else {
            write_via_helper(text)
        }
    }
}

/// OSC 52 escape sequence carrying `text`, wrapped for tmux passthrough
/// when `tmux` is true.
#[must_use]
pub fn encode_osc52(text: &str, tmux: bool) -> String {
    let payload = STANDARD.encode(text.as_bytes());
    let sequence = format!("\x1b]52;c;{payload}\x07");
    if tmux {
        // tmux only forwards DCS-wrapped sequences with inner escapes doubled.
        format!("\x1bPtmux;{}\x1b\\", sequence.replace('\x1b', "\x1b\x1b"))
    } else {
        sequence
    }
}

fn write_osc52(text: &str) -> Result<(), String> {
    let sequence = encode_osc52(text, std::env::var_os("TMUX").is_some());
    // Go straight to the controlling terminal so the sequence cannot land
    // inside a half-flushed frame on stdout.
    let mut sink: Box<dyn Write> = match std::fs::OpenOptions::new().write(true).open("/dev/tty") {
        Ok(tty) => Box::new(tty),
        Err(_) => Box::new(std::io::stdout()),
    };
    sink.write_all(sequence.as_bytes())
        .and_then(|()| sink.flush())
        .map_err(|error| format!("terminal write failed: {error}"))
}

fn helper_candidates() -> &'static [&'static [&'static str]] {
    if cfg!(target_os = "macos") {
        &[&["pbcopy"]]
    } else {
        &[
            &["wl-copy"],
            &["xclip", "-selection", "clipboard"],
            &["xsel", "--clipboard", "--input"],
        ]
    }
}

fn write_via_helper(text: &str) -> Result<(), String> {
    for argv in helper_candidates() {
        let Ok(mut child) = Command::new(argv[0])
            .args(&argv[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            continue;
        };

        if let Some(stdin) = child.stdin.as_mut()
            && stdin.write_all(text.as_bytes()).is_err()
        {
            let _ = child.kill();
            continue;
        }
        drop(child.stdin.take());

        match child.wait() {
            Ok(status) if status.success() => return Ok(()),
            _ => continue,
        }
    }

    let names: Vec<&str> = helper_candidates().iter().map(|argv| argv[0]).collect();
    Err(format!(
        "no clipboard helper succeeded (tried {})",
        names.join(", ")
    ))
}
