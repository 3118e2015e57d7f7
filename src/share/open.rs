//! Hand a link to the desktop URL opener.

use std::process::{Command, Stdio};
use std::thread;

/// Launch the platform opener for `url`, detached from the TUI.
pub fn open_in_browser(url: &str) -> Result<(), String> {
    let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(windows) {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    };
    launch(program, args, url).map(|_| ())
}

fn launch(program: &str, args: &[&str], url: &str) -> Result<u32, String> {
    let mut child = Command::new(program)
        .args(args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|error| format!("failed to launch {program}: {error}"))?;
    let pid = child.id();
    log::debug!("launched {program} (pid {pid}) for {url}");
    // Collect the exit status off-thread; an unwaited child stays a zombie.
    thread::spawn(move || {
        let _ = child.wait();
    });
    Ok(pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn launching_an_existing_program_succeeds() {
        assert!(launch("true", &[], "https://x/y").is_ok());
    }

    #[test]
    fn a_missing_opener_reports_its_name() {
        let error = launch("definitely-not-an-opener", &[], "https://x/y").unwrap_err();
        assert!(error.contains("definitely-not-an-opener"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn finished_openers_are_reaped() {
        use std::path::PathBuf;
        use std::time::{Duration, Instant};

        let pid = launch("true", &[], "https://x/y").expect("spawns");
        let proc_entry = PathBuf::from(format!("/proc/{pid}"));
        let deadline = Instant::now() + Duration::from_secs(2);
        while proc_entry.exists() {
            assert!(Instant::now() < deadline, "opener pid {pid} was never collected");
            thread::sleep(Duration::from_millis(10));
        }
    }
}
