// src/log.rs
//! Append-only debug log at [`LOG_FILE`]. Logging never fails the caller.
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::{LOG_FILE, LOG_PREFIX};

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Debug,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Error => "ERROR",
        })
    }
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// `[hh:mm:ss.mmm][LEVEL] [prefix] msg`, newline-terminated.
fn format_line(elapsed_ms: u128, level: Level, msg: &str) -> String {
    format!("[{}][{level}] {LOG_PREFIX} {msg}\n", fmt_elapsed(elapsed_ms))
}

fn append(path: &Path, line: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)?.write_all(line.as_bytes())
}

pub fn write_log(level: Level, msg: &str) {
    let start = *START.get_or_init(Instant::now);
    let line = format_line(start.elapsed().as_millis(), level, msg);

    if let Ok(_guard) = LOG_LOCK.lock() {
        let _ = append(Path::new(LOG_FILE), &line);
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }

    #[test]
    fn line_carries_level_and_prefix() {
        let line = format_line(1_500, Level::Debug, "Rule roles: 2 change(s)");
        assert_eq!(
            line,
            "[00:00:01.500][DEBUG] [Caller's Box Configurator] Rule roles: 2 change(s)\n"
        );
    }

    #[test]
    fn append_creates_missing_dirs() {
        let dir = std::env::temp_dir().join("cb_terms_log_test");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("debug.log");
        append(&path, "one\n").unwrap();
        append(&path, "two\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }
}
