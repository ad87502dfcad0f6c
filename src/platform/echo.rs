use super::*;
use std::io::{self, Write};

/// Prints each request on stdout instead of touching the host. Backs `--dry-run`.
#[derive(Debug, Default)]
pub struct EchoPlatform;

impl EchoPlatform {
    fn emit(&self, line: String) -> Result<(), AppError> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}

impl PlatformActions for EchoPlatform {
    fn dial(&self, request: &DialRequest) -> Result<(), AppError> {
        self.emit(format!("dial {}", request.uri))
    }

    fn copy_to_clipboard(&self, clip: &ClipboardPayload) -> Result<(), AppError> {
        self.emit(format!("clipboard [{}] {}: {}", clip.label, clip.mime, clip.text))
    }

    fn show_notice(&self, notice: &Notice) -> Result<(), AppError> {
        self.emit(format!(
            "notice: {} ({}ms)",
            notice.text,
            notice.duration.as_millis()
        ))
    }
}
