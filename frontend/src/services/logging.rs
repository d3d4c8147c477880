use log::{Level, LevelFilter, Log, Metadata, Record};

/// Browser console logger.
///
/// Installed once as the `log` backend so records from the shared crate and
/// from components all end up in the devtools console, tagged with the
/// module or component that produced them.
pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    /// Install the logger. Calling it again keeps the first installation.
    pub fn init(level: LevelFilter) {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }

    pub fn set_level(level: LevelFilter) {
        log::set_max_level(level);
    }

    pub fn debug_with_component(component: &str, message: &str) {
        log::debug!(target: component, "{}", message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!(target: component, "{}", message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        log::warn!(target: component, "{}", message);
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}
