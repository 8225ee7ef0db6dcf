// UI Models for knobs

/// Tabs of the demo application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Controls,
    Logs,
    Help,
}

impl Tab {
    pub const COUNT: usize = 3;

    pub fn from_index(index: usize) -> Tab {
        match index % Tab::COUNT {
            0 => Tab::Controls,
            1 => Tab::Logs,
            _ => Tab::Help,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Controls => 0,
            Tab::Logs => 1,
            Tab::Help => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Controls => "Controls",
            Tab::Logs => "Logs",
            Tab::Help => "Help",
        }
    }

    pub fn titles() -> [&'static str; Tab::COUNT] {
        ["Controls", "Logs", "Help"]
    }
}

/// Log filter levels for the logs tab
pub enum LogFilterLevel {
    Debug,
    Info,
    Warning,
    Error,
    All,
}

impl LogFilterLevel {
    pub fn matches(&self, log: &str) -> bool {
        match self {
            LogFilterLevel::Debug => log.contains("🔍"),
            LogFilterLevel::Info => log.contains("ℹ️"),
            LogFilterLevel::Warning => log.contains("⚠️"),
            LogFilterLevel::Error => log.contains("❌"),
            LogFilterLevel::All => true,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            LogFilterLevel::All => LogFilterLevel::Debug,
            LogFilterLevel::Debug => LogFilterLevel::Info,
            LogFilterLevel::Info => LogFilterLevel::Warning,
            LogFilterLevel::Warning => LogFilterLevel::Error,
            LogFilterLevel::Error => LogFilterLevel::All,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            LogFilterLevel::All => "ALL",
            LogFilterLevel::Debug => "DEBUG",
            LogFilterLevel::Info => "INFO",
            LogFilterLevel::Warning => "WARNING",
            LogFilterLevel::Error => "ERROR",
        }
    }
}
