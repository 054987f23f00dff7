use std::io::Write;
use std::sync::{Arc, Mutex, OnceLock};

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::log::{LogMessage, Severity};

/// Global logger instance
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Severity shown when nothing else was configured.
pub const DEFAULT_LEVEL: Severity = Severity::Warn;

/// Logger operating mode
#[derive(Debug, Clone)]
pub enum LoggerMode {
    /// Logs directly to the terminal.
    Standalone,
    /// Forwards every message through a channel to the embedding program.
    Embedded(Sender<LogMessage>),
    /// Drops everything.
    Silent,
}

/// Logging front-end shared by the whole crate.
///
/// The virtual machine itself never fails, so what gets logged is mostly
/// diagnostics: dropped tokens, fuse trips, seeds that could not be applied
/// and configuration fallbacks.
pub struct Logger {
    mode: Arc<Mutex<LoggerMode>>,
    level: Arc<Mutex<Severity>>,
}

impl Logger {
    /// Create a new logger in standalone mode
    pub fn new_standalone() -> Self {
        Self::with_mode(LoggerMode::Standalone)
    }

    /// Create a new logger in embedded mode with a channel sender
    pub fn new_embedded(sender: Sender<LogMessage>) -> Self {
        Self::with_mode(LoggerMode::Embedded(sender))
    }

    /// Create a logger that discards every message
    pub fn new_silent() -> Self {
        Self::with_mode(LoggerMode::Silent)
    }

    fn with_mode(mode: LoggerMode) -> Self {
        Logger {
            mode: Arc::new(Mutex::new(mode)),
            level: Arc::new(Mutex::new(DEFAULT_LEVEL)),
        }
    }

    /// Switch to embedded mode with the provided channel sender
    pub fn set_embedded_mode(&self, sender: Sender<LogMessage>) {
        if let Ok(mut mode) = self.mode.lock() {
            *mode = LoggerMode::Embedded(sender);
        }
    }

    /// Switch to standalone mode
    pub fn set_standalone_mode(&self) {
        if let Ok(mut mode) = self.mode.lock() {
            *mode = LoggerMode::Standalone;
        }
    }

    /// Switch to silent mode
    pub fn set_silent_mode(&self) {
        if let Ok(mut mode) = self.mode.lock() {
            *mode = LoggerMode::Silent;
        }
    }

    /// Set the least severe level that still gets through.
    pub fn set_level(&self, level: Severity) {
        if let Ok(mut current) = self.level.lock() {
            *current = level;
        }
    }

    pub fn level(&self) -> Severity {
        self.level.lock().map(|l| *l).unwrap_or(DEFAULT_LEVEL)
    }

    /// True when a message of `level` would be emitted.
    pub fn enabled(&self, level: Severity) -> bool {
        let silent = matches!(
            self.mode.lock().as_deref(),
            Ok(LoggerMode::Silent)
        );
        !silent && level <= self.level()
    }

    /// Log a message with the specified severity
    pub fn log(&self, level: Severity, msg: String) {
        if level > self.level() {
            return;
        }
        let log_msg = LogMessage::new(level, msg);

        if let Ok(mode) = self.mode.lock() {
            match &*mode {
                LoggerMode::Standalone => match log_msg.level {
                    Severity::Fatal | Severity::Error => {
                        eprintln!("{}", log_msg);
                        let _ = std::io::stderr().flush();
                    }
                    _ => {
                        println!("{}", log_msg);
                        let _ = std::io::stdout().flush();
                    }
                },
                LoggerMode::Embedded(sender) => {
                    if sender.try_send(log_msg.clone()).is_err() {
                        // Fallback to terminal if channel is full/closed
                        eprintln!("Logger channel error: {}", log_msg);
                    }
                }
                LoggerMode::Silent => {}
            }
        }
    }

    pub fn debug(&self, msg: String) {
        self.log(Severity::Debug, msg);
    }

    pub fn info(&self, msg: String) {
        self.log(Severity::Info, msg);
    }

    pub fn warn(&self, msg: String) {
        self.log(Severity::Warn, msg);
    }

    pub fn error(&self, msg: String) {
        self.log(Severity::Error, msg);
    }

    pub fn fatal(&self, msg: String) {
        self.log(Severity::Fatal, msg);
    }
}

/// Initialize the global logger in standalone mode
pub fn init_standalone() {
    let _ = GLOBAL_LOGGER.set(Logger::new_standalone());
}

/// Initialize the global logger in embedded mode
pub fn init_embedded(sender: Sender<LogMessage>) {
    let _ = GLOBAL_LOGGER.set(Logger::new_embedded(sender));
}

/// Initialize the global logger in silent mode
pub fn init_silent() {
    let _ = GLOBAL_LOGGER.set(Logger::new_silent());
}

/// Create a logging channel pair
pub fn create_log_channel() -> (Sender<LogMessage>, Receiver<LogMessage>) {
    unbounded()
}

/// Get the global logger instance
pub fn get_logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(Logger::new_standalone)
}

/// Switch the global logger to embedded mode
pub fn set_embedded_mode(sender: Sender<LogMessage>) {
    get_logger().set_embedded_mode(sender);
}

/// Switch the global logger to standalone mode
pub fn set_standalone_mode() {
    get_logger().set_standalone_mode();
}

/// Switch the global logger to silent mode
pub fn set_silent_mode() {
    get_logger().set_silent_mode();
}

/// Set the global logger threshold
pub fn set_level(level: Severity) {
    get_logger().set_level(level);
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::get_logger().enabled($crate::log::Severity::Debug) {
            $crate::logger::get_logger().debug(format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if $crate::logger::get_logger().enabled($crate::log::Severity::Info) {
            $crate::logger::get_logger().info(format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if $crate::logger::get_logger().enabled($crate::log::Severity::Warn) {
            $crate::logger::get_logger().warn(format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if $crate::logger::get_logger().enabled($crate::log::Severity::Error) {
            $crate::logger::get_logger().error(format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {
        $crate::logger::get_logger().fatal(format!($($arg)*))
    };
}
