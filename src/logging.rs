use crate::errors::AppError;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` wins over `default_filter`.
///
/// With a log file, events are appended to it without colour. Otherwise they go to
/// stderr so stdout stays clean for command output.
pub fn init_tracing(log_file: Option<&Path>, default_filter: &str) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let result = match log_file {
        Some(path) => {
            create_file_parent(path)?;
            let file = OpenOptions::new().create(true).append(true).open(path)?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    result.map_err(|e| AppError::Logging(e.to_string()))
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_log_directory() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested/logs/app.log");

        create_file_parent(&path)?;

        assert!(dir.path().join("nested/logs").is_dir());
        Ok(())
    }

    #[test]
    fn bare_file_name_needs_no_parent() -> Result<(), AppError> {
        create_file_parent(Path::new("app.log"))
    }
}
