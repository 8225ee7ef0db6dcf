use chrono::Local;
use models::PropIssue;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Mutex;

// Thread-safe log storage
static LOGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(Vec::new()));

// Current log level
static LOG_LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Info));

// Keys that have already produced a deduplicated warning
static WARNED_KEYS: Lazy<Mutex<HashSet<String>>> = Lazy::new(|| Mutex::new(HashSet::new()));

// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Debug => "🔍",
            LogLevel::Info => "ℹ️",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
        }
    }
}

// Set the current log level
pub fn set_log_level(level: LogLevel) {
    if let Ok(mut current_level) = LOG_LEVEL.lock() {
        *current_level = level;
    }
}

// Get the current log level
pub fn get_log_level() -> LogLevel {
    if let Ok(level) = LOG_LEVEL.lock() {
        *level
    } else {
        LogLevel::Info
    }
}

// Log a message with timestamp and level
pub fn log(level: LogLevel, message: &str) {
    let timestamp = Local::now().format("%H:%M:%S").to_string();

    // Always include timestamp in [HH:MM:SS] format so the logs tab
    // and console output stay consistent
    let formatted = format!("[{}] {} {}", timestamp, level.prefix(), message);

    if let Ok(mut logs) = LOGS.lock() {
        logs.push(formatted.clone());
    }

    // Echo to the console only when the message level passes the filter
    if let Ok(current_level) = LOG_LEVEL.lock() {
        if level >= *current_level {
            match level {
                LogLevel::Error | LogLevel::Warning => eprintln!("{}", formatted),
                _ => println!("{}", formatted),
            }
        }
    }
}

/// Record a warning at most once per key. Repeated calls with the same
/// key are dropped, which keeps per-frame prop validation from flooding
/// the store with the same complaint.
pub fn warn_once(key: &str, message: &str) {
    let fresh = match WARNED_KEYS.lock() {
        Ok(mut seen) => seen.insert(key.to_string()),
        Err(_) => false,
    };
    if fresh {
        warning(message);
    }
}

/// Deduplicated warning for a prop-contract violation, keyed by
/// component and prop so each distinct violation is reported once.
pub fn warn_issue_once(issue: &PropIssue) {
    warn_once(&issue.key(), &issue.to_string());
}

// Get all logs
pub fn get_logs() -> Vec<String> {
    if let Ok(logs) = LOGS.lock() {
        logs.clone()
    } else {
        let timestamp = Local::now().format("%H:%M:%S").to_string();
        vec![format!("[{}] ❌ Error accessing logs", timestamp)]
    }
}

// Clear all logs
pub fn clear_logs() {
    if let Ok(mut logs) = LOGS.lock() {
        logs.clear();
    }
}

/// Forget which keys have warned. Test-facing; the deduplication is
/// meant to last for the life of the process.
pub fn reset_warned_keys() {
    if let Ok(mut seen) = WARNED_KEYS.lock() {
        seen.clear();
    }
}

// Convenience functions for different log levels
pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn warning(message: &str) {
    log(LogLevel::Warning, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occurrences(needle: &str) -> usize {
        get_logs().iter().filter(|l| l.contains(needle)).count()
    }

    #[test]
    fn log_lines_carry_timestamp_and_prefix() {
        info("timestamp smoke message");
        let line = get_logs()
            .into_iter()
            .find(|l| l.contains("timestamp smoke message"))
            .unwrap();
        assert!(line.starts_with('['));
        assert!(line.contains("ℹ️"));
    }

    #[test]
    fn warn_once_drops_repeats_of_the_same_key() {
        warn_once("test.dedup-key", "dedup warning body");
        warn_once("test.dedup-key", "dedup warning body");
        warn_once("test.dedup-key", "dedup warning body");
        assert_eq!(occurrences("dedup warning body"), 1);
    }

    #[test]
    fn warn_once_allows_distinct_keys() {
        warn_once("test.key-a", "distinct warning a");
        warn_once("test.key-b", "distinct warning b");
        assert_eq!(occurrences("distinct warning a"), 1);
        assert_eq!(occurrences("distinct warning b"), 1);
    }

    #[test]
    fn warn_issue_once_uses_component_and_prop_as_key() {
        let issue = PropIssue::new("TestWidget", "label", "is required".to_string());
        warn_issue_once(&issue);
        warn_issue_once(&issue);
        assert_eq!(occurrences("TestWidget: prop 'label' is required"), 1);
    }

    #[test]
    fn levels_order_from_debug_to_error() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }
}
