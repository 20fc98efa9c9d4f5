//! joe: logchamp
//! joe: call it logchamp
//! joe: please

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::Mutex;

use colored::{Color, Colorize};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::macros;

const LOG_FILE: &str = ".log";

struct Logger {
    file: Mutex<BufWriter<File>>,
}

impl Logger {
    fn new(filename: &str) -> io::Result<Self> {
        Ok(Self { file: Mutex::new(BufWriter::new(File::create(filename)?)) })
    }
}

fn is_own_target(target: &str) -> bool {
    target.split("::").next().is_some_and(|crate_name| crate_name == "logo_generator")
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        is_own_target(metadata.target()) || metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = time::OffsetDateTime::now_utc()
            .format(macros::format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
            .unwrap_or_default();
        let target = record.target();
        let level = record.level().as_str();
        let args = record.args();

        let color = match record.level() {
            Level::Error => Color::BrightRed,
            Level::Warn => Color::BrightYellow,
            Level::Info => Color::BrightCyan,
            Level::Debug => Color::Magenta,
            Level::Trace => Color::Green,
        };

        eprintln!("{} {} {args}", timestamp.color(Color::BrightBlack), level.color(color));

        if let Ok(mut file) = self.file.lock() {
            writeln!(file, "{timestamp} [{target} {level}] {args}").ok();
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            file.flush().ok();
        }
    }
}

#[derive(Debug)]
pub enum InitError {
    LogFile(io::Error),
    AlreadyInitialized(SetLoggerError),
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LogFile(err) => write!(f, "could not create the log file: {err}"),
            Self::AlreadyInitialized(err) => write!(f, "{err}"),
        }
    }
}

pub fn init() -> Result<(), InitError> {
    let logger = Logger::new(LOG_FILE).map_err(InitError::LogFile)?;
    log::set_boxed_logger(Box::new(logger)).map_err(InitError::AlreadyInitialized)?;
    log::set_max_level(LevelFilter::Debug);

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_own_target() {
        assert!(is_own_target("logo_generator"));
        assert!(is_own_target("logo_generator::utilities::form_controller"));
        assert!(!is_own_target("reqwest::connect"));
        assert!(!is_own_target("logo_generator_extra"));
    }
}
