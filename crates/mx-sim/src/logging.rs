//! Console logging setup.
//!
//! Every crate in the workspace logs through the `log` facade.  Nothing is
//! printed until a level is set here; the first call installs a `log4rs`
//! console appender and later calls swap its configuration in place.
//!
//! ```rust,ignore
//! use mx_sim::logging::{set_log_level, set_module_filter, LevelFilter};
//!
//! set_log_level(LevelFilter::Info)?;
//! // Per-transmission trace lines from the engines only.
//! set_module_filter("mx_transmission", LevelFilter::Trace)?;
//! ```

use std::sync::{LazyLock, Mutex};

use log4rs::Handle;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use rustc_hash::FxHashMap;

pub use log::LevelFilter;

use crate::{SimError, SimResult};

// ISO 8601 timestamp, color-coded level, target.
const DEFAULT_LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

static LOG_STATE: LazyLock<Mutex<LogState>> = LazyLock::new(Mutex::default);

#[derive(Default)]
struct LogState {
    level:   Option<LevelFilter>,
    modules: FxHashMap<String, LevelFilter>,
    handle:  Option<Handle>,
}

impl LogState {
    fn apply(&mut self) -> SimResult<()> {
        let level = self.level.unwrap_or(LevelFilter::Off);
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(DEFAULT_LOG_PATTERN)))
            .build();

        let mut modules: Vec<_> = self.modules.iter().collect();
        modules.sort();
        let mut builder = Config::builder().appender(Appender::builder().build("stdout", Box::new(stdout)));
        for (module, &module_level) in modules {
            builder = builder.logger(Logger::builder().build(module.clone(), module_level));
        }
        let config = builder
            .build(Root::builder().appender("stdout").build(level))
            .map_err(|e| SimError::Logging(e.to_string()))?;

        match &self.handle {
            Some(handle) => handle.set_config(config),
            None => {
                let handle = log4rs::init_config(config).map_err(|e| SimError::Logging(e.to_string()))?;
                self.handle = Some(handle);
            }
        }
        Ok(())
    }
}

fn with_state(f: impl FnOnce(&mut LogState) -> SimResult<()>) -> SimResult<()> {
    let mut state = LOG_STATE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut state)
}

/// Show every message at `level` or above.
pub fn set_log_level(level: LevelFilter) -> SimResult<()> {
    with_state(|s| {
        s.level = Some(level);
        s.apply()
    })
}

/// Show everything.
pub fn enable_logging() -> SimResult<()> {
    set_log_level(LevelFilter::Trace)
}

/// Silence everything.  Module filters are kept for the next level change.
pub fn disable_logging() -> SimResult<()> {
    set_log_level(LevelFilter::Off)
}

/// Override the level for one module path, e.g. `"mx_schedule"`.
pub fn set_module_filter(module: &str, level: LevelFilter) -> SimResult<()> {
    with_state(|s| {
        if s.modules.get(module) == Some(&level) {
            return Ok(());
        }
        s.modules.insert(module.to_string(), level);
        s.apply()
    })
}

pub fn remove_module_filter(module: &str) -> SimResult<()> {
    with_state(|s| {
        if s.modules.remove(module).is_none() {
            return Ok(());
        }
        s.apply()
    })
}
