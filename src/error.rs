/// Review scheduling errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    InvalidArgument(String),
    ConfigIo(String, String),
    ConfigParse(String, String),
    InvalidConfig(String),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            ScheduleError::ConfigIo(path, err) => write!(f, "IO error reading {}: {}", path, err),
            ScheduleError::ConfigParse(path, err) => write!(f, "Parse error in {}: {}", path, err),
            ScheduleError::InvalidConfig(msg) => write!(f, "Invalid review config: {}", msg),
        }
    }
}

impl ScheduleError {
    /// Returns a user-facing error message without exposing filesystem paths.
    pub fn user_message(&self) -> &'static str {
        match self {
            ScheduleError::InvalidArgument(_) => "Invalid review parameters",
            ScheduleError::ConfigIo(_, _) => "Failed to read review config",
            ScheduleError::ConfigParse(_, _) => "Failed to parse review config",
            ScheduleError::InvalidConfig(_) => "Review config is invalid",
        }
    }
}

impl std::error::Error for ScheduleError {}
