//! Rolling file logger.
//!
//! Writes timestamped lines to one file per day under a log directory and
//! keeps a bounded number of old files. `init_logger` also installs a
//! `tracing-subscriber` with the same writer, so `log` and `tracing`
//! macros end up in the daily file as well. On Android everything is
//! forwarded to logcat instead.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use chrono::Local;
#[cfg(not(target_os = "android"))]
use tracing_subscriber::fmt::MakeWriter;

/// How many daily files to keep before pruning the oldest
const MAX_LOG_FILES: usize = 7;

struct RollingFile {
    dir: PathBuf,
    app_name: String,
    current_date: String,
    file: File,
}

impl RollingFile {
    fn open(dir: PathBuf, app_name: &str) -> io::Result<Self> {
        let date = Local::now().format("%Y-%m-%d").to_string();
        let file = open_log_file(&dir, app_name, &date)?;
        Ok(Self {
            dir,
            app_name: app_name.to_string(),
            current_date: date,
            file,
        })
    }

    /// Switch to a fresh file when the date changes
    fn roll_if_needed(&mut self) -> io::Result<()> {
        let date = Local::now().format("%Y-%m-%d").to_string();
        if date != self.current_date {
            self.file = open_log_file(&self.dir, &self.app_name, &date)?;
            self.current_date = date;
            prune_old_logs(&self.dir, &self.app_name)?;
        }
        Ok(())
    }

    fn write_line(&mut self, level: &str, msg: &str) -> io::Result<()> {
        self.roll_if_needed()?;
        writeln!(
            self.file,
            "[{}] [{}] {}",
            Local::now().format("%H:%M:%S%.3f"),
            level,
            msg
        )
    }
}

fn log_file_name(app_name: &str, date: &str) -> String {
    format!("{}_{}.log", app_name, date)
}

fn open_log_file(dir: &Path, app_name: &str, date: &str) -> io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(log_file_name(app_name, date)))
}

/// Delete the oldest files beyond MAX_LOG_FILES.
///
/// The date suffix sorts lexicographically, so a plain sort puts the
/// oldest files first.
fn prune_old_logs(dir: &Path, app_name: &str) -> io::Result<()> {
    let prefix = format!("{}_", app_name);
    let mut logs: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension().map_or(false, |ext| ext == "log")
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .map_or(false, |name| name.starts_with(&prefix))
        })
        .collect();
    logs.sort();

    if logs.len() > MAX_LOG_FILES {
        for old in &logs[..logs.len() - MAX_LOG_FILES] {
            fs::remove_file(old)?;
        }
    }
    Ok(())
}

static WRITER: OnceLock<Arc<Mutex<RollingFile>>> = OnceLock::new();

/// Writer handle given to tracing-subscriber
#[cfg(not(target_os = "android"))]
#[derive(Clone)]
struct SharedWriter(Arc<Mutex<RollingFile>>);

#[cfg(not(target_os = "android"))]
impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self.0.lock().expect("log writer poisoned");
        file.roll_if_needed()?;
        file.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.lock().expect("log writer poisoned").file.flush()
    }
}

#[cfg(not(target_os = "android"))]
impl<'a> MakeWriter<'a> for SharedWriter {
    type Writer = SharedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Initialize the rolling logger.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> io::Result<()> {
    #[cfg(target_os = "android")]
    {
        let _ = (&log_dir, app_name);
        android_logger::init_once(
            android_logger::Config::default().with_max_level(log::LevelFilter::Info),
        );
        Ok(())
    }

    #[cfg(not(target_os = "android"))]
    {
        fs::create_dir_all(&log_dir)?;
        prune_old_logs(&log_dir, app_name)?;

        let writer = Arc::new(Mutex::new(RollingFile::open(log_dir, app_name)?));
        if WRITER.set(writer.clone()).is_err() {
            return Ok(());
        }

        let _ = tracing_subscriber::fmt()
            .with_writer(SharedWriter(writer))
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .try_init();
        tracing::info!("rolling logger initialised");
        Ok(())
    }
}

fn write_direct(level: &str, msg: &str) -> io::Result<()> {
    match WRITER.get() {
        Some(writer) => writer
            .lock()
            .expect("log writer poisoned")
            .write_line(level, msg),
        None => Err(io::Error::new(
            io::ErrorKind::Other,
            "logger not initialised",
        )),
    }
}

pub fn info(msg: &str) -> io::Result<()> {
    write_direct("INFO", msg)
}

pub fn warn(msg: &str) -> io::Result<()> {
    write_direct("WARN", msg)
}

pub fn error(msg: &str) -> io::Result<()> {
    write_direct("ERROR", msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_writes_to_daily_file() {
        let dir = tempdir().unwrap();
        let mut file = RollingFile::open(dir.path().to_path_buf(), "TestApp").unwrap();
        file.write_line("INFO", "hello").unwrap();

        let date = Local::now().format("%Y-%m-%d").to_string();
        let content = fs::read_to_string(dir.path().join(log_file_name("TestApp", &date))).unwrap();
        assert!(content.contains("[INFO] hello"));
    }

    #[test]
    fn test_prunes_oldest_files() {
        let dir = tempdir().unwrap();
        for day in 1..=10 {
            let name = log_file_name("TestApp", &format!("2026-07-{:02}", day));
            fs::write(dir.path().join(name), "x").unwrap();
        }

        prune_old_logs(dir.path(), "TestApp").unwrap();

        let mut left: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        left.sort();

        assert_eq!(left.len(), MAX_LOG_FILES);
        assert_eq!(left.first().map(String::as_str), Some("TestApp_2026-07-04.log"));
    }

    #[test]
    fn test_prune_ignores_unrelated_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("OtherApp_2026-07-01.log"), "x").unwrap();
        for day in 1..=9 {
            let name = log_file_name("TestApp", &format!("2026-07-{:02}", day));
            fs::write(dir.path().join(name), "x").unwrap();
        }

        prune_old_logs(dir.path(), "TestApp").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();

        assert!(names.contains(&"OtherApp_2026-07-01.log".to_string()));
        let kept = names.iter().filter(|name| name.starts_with("TestApp_")).count();
        assert_eq!(kept, MAX_LOG_FILES);
    }
}
