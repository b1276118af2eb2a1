//! Console logging for upload runs

/// Log levels for controlling verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Progress lines, always shown
    Normal = 0,
    /// One verbose flag (-v)
    Info = 1,
    /// Two verbose flags (-v -v)
    Debug = 2,
}

/// Logger for progress and error lines
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    verbosity: u8,
}

impl Logger {
    pub fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    /// Log a message if the current verbosity level is at least `level`
    pub fn log(&self, msg: &str, level: LogLevel) {
        if self.enabled(level) {
            match level {
                LogLevel::Normal => println!("{msg}"),
                LogLevel::Info => println!("info: {msg}"),
                LogLevel::Debug => println!("dbg: {msg}"),
            }
        }
    }

    pub fn normal(&self, msg: &str) {
        self.log(msg, LogLevel::Normal);
    }

    pub fn info(&self, msg: &str) {
        self.log(msg, LogLevel::Info);
    }

    pub fn debug(&self, msg: &str) {
        self.log(msg, LogLevel::Debug);
    }

    /// Errors go to stderr regardless of verbosity
    pub fn error(&self, msg: &str) {
        eprintln!("Error: {msg}");
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        self.verbosity >= level as u8
    }

    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_gate_on_verbosity() {
        let quiet = Logger::new(0);
        assert!(quiet.enabled(LogLevel::Normal));
        assert!(!quiet.enabled(LogLevel::Info));

        let chatty = Logger::new(2);
        assert!(chatty.enabled(LogLevel::Debug));
        assert_eq!(chatty.verbosity(), 2);
    }
}
