use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Log sink writing timestamped lines to stderr, and optionally to a
/// per-run file under `logs/`. Library modules log through the `log`
/// macros; binaries install this sink with [`init_logger`].
#[derive(Debug)]
pub struct FileLogger {
    level: LevelFilter,
    file: Option<Mutex<File>>,
}

impl FileLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level, file: None }
    }

    /// Also append to `logs/render_<timestamp>.log`. Falls back to
    /// stderr-only if the log directory cannot be created.
    pub fn with_file(level: LevelFilter) -> Self {
        let file = fs::create_dir_all("logs").ok().and_then(|_| {
            let timestamp = Local::now().format("%Y%m%d_%H%M%S");
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(format!("logs/render_{}.log", timestamp))
                .ok()
        });
        Self {
            level,
            file: file.map(Mutex::new),
        }
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{}] {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        );
        eprintln!("{}", line);
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                writeln!(file, "{}", line).ok();
            }
        }
    }

    fn flush(&self) {}
}

/// Install a [`FileLogger`] as the global log sink
pub fn init_logger(logger: FileLogger) -> Result<(), SetLoggerError> {
    let level = logger.level;
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_level_filtering() {
        let logger = FileLogger::new(LevelFilter::Info);
        assert!(logger.enabled(&Metadata::builder().level(Level::Warn).build()));
        assert!(logger.enabled(&Metadata::builder().level(Level::Info).build()));
        assert!(!logger.enabled(&Metadata::builder().level(Level::Debug).build()));
    }
}
