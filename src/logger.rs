//! Logging setup.
//!
//! Every record emitted through the `log` macros lands in an in-memory buffer
//! that the logs panel reads. When file logging is enabled in the config the
//! same records are also appended to a log file.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Oldest entries are dropped past this many buffered lines
const MAX_BUFFERED_LOGS: usize = 500;

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    file_path: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file_path: None,
        }
    }

    /// Build a logger for the given config, resolving the log file path when
    /// file logging is enabled.
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let file_path = if config.enabled {
            Some(Self::get_log_file_path()?)
        } else {
            None
        };

        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file_path,
        })
    }

    /// Install this logger as the global `log` backend.
    ///
    /// Can only succeed once per process.
    pub fn install(&self, config: &LoggingConfig) -> Result<()> {
        let level = config.level_filter()?;
        let buffer = self.clone();

        let mut dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("{:<5} {}: {}", record.level(), record.target(), message))
            })
            .level(level)
            .chain(fern::Output::call(move |record| {
                buffer.log(record.args().to_string());
            }));

        if let Some(path) = &self.file_path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, _record| {
                        out.finish(format_args!("[{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"), message))
                    })
                    .chain(file),
            );
        }

        dispatch.apply().context("A global logger is already installed")?;
        Ok(())
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
            if logs.len() > MAX_BUFFERED_LOGS {
                let overflow = logs.len() - MAX_BUFFERED_LOGS;
                logs.drain(..overflow);
            }
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Whether records are also written to a file
    pub fn is_file_logging_enabled(&self) -> bool {
        self.file_path.is_some()
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Location of the log file
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("listkeeper").join("listkeeper.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
