use crate::errors::AppError;
use std::path::PathBuf;
use std::time::Duration;

/// Program (plus leading args) that gets a `tel:` URI appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl DialerCommand {
    pub fn parse(command: &str) -> Result<Self, AppError> {
        let mut parts = command.split_whitespace().map(str::to_string);

        let Some(program) = parts.next() else {
            return Err(AppError::Validation(
                "Dialer command must not be empty".to_string(),
            ));
        };

        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn platform_default() -> Self {
        let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
            ("open", &[])
        } else if cfg!(target_os = "windows") {
            ("cmd", &["/C", "start", ""])
        } else {
            ("xdg-open", &[])
        };

        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub dry_run: bool,
    pub dialer: DialerCommand,
    pub notice_duration: Duration,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn resolve(
        dry_run: bool,
        dialer: Option<&str>,
        notice_ms: u64,
        log_file: Option<PathBuf>,
    ) -> Result<Self, AppError> {
        if notice_ms == 0 {
            return Err(AppError::Validation(
                "Notice duration must be above zero milliseconds".to_string(),
            ));
        }

        let dialer = match dialer {
            Some(cmd) => DialerCommand::parse(cmd)?,
            None => DialerCommand::platform_default(),
        };

        Ok(Self {
            dry_run,
            dialer,
            notice_duration: Duration::from_millis(notice_ms),
            log_file,
        })
    }
}
