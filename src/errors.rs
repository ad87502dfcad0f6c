use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Json(serde_json::Error),
    NotFound(String),
    Validation(String),
    Platform(String),
    Logging(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Invalid bundled contact data: {}", e)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
            AppError::Platform(msg) => {
                write!(f, "Platform request failed: {}", msg)
            }
            AppError::Logging(msg) => {
                write!(f, "Could not set up logging: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_not_found_message() {
        let err = AppError::NotFound("Contact #9".to_string());

        assert_eq!(format!("{}", err), "Contact #9 Not found");
    }

    #[test]
    fn confirm_json_error_message() {
        let bad = serde_json::from_str::<Vec<u8>>("[1,").unwrap_err();
        let err = AppError::from(bad);

        assert!(format!("{}", err).contains("Invalid bundled contact data: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn confirm_validation_error() {
        let err = AppError::Validation("notice duration must be above zero".to_string());

        assert_eq!(
            format!("{}", err),
            "Validation failed: notice duration must be above zero"
        );
    }
}
