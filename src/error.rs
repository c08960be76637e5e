//! Application error carrying the process exit code.
//!
//! Exit codes:
//! - `2` usage / validation error (bad zip code, zero result count, ...)
//! - `3` input table could not be opened or is missing required columns
//! - `4` anchor zip code has no centroid
//! - `5` writing the JSON output or the log file failed

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub const EXIT_USAGE: u8 = 2;
    pub const EXIT_INPUT: u8 = 3;
    pub const EXIT_LOOKUP: u8 = 4;
    pub const EXIT_OUTPUT: u8 = 5;

    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(Self::EXIT_USAGE, message)
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::new(Self::EXIT_INPUT, message)
    }

    pub fn lookup(message: impl Into<String>) -> Self {
        Self::new(Self::EXIT_LOOKUP, message)
    }

    pub fn output(message: impl Into<String>) -> Self {
        Self::new(Self::EXIT_OUTPUT, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
