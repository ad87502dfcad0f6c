use super::*;
use crate::config::DialerCommand;
use crossterm::{clipboard::CopyToClipboard, execute};
use std::cell::RefCell;
use std::io;
use std::process::{Child, Command, Stdio};

/// Talks to the real host. `tel:` links go to the configured opener. Clipboard
/// writes use the terminal's OSC 52 sequence.
#[derive(Debug)]
pub struct DesktopPlatform {
    dialer: DialerCommand,
    // Dialers still running. Polled, never waited on.
    children: RefCell<Vec<Child>>,
}

impl DesktopPlatform {
    pub fn new(dialer: DialerCommand) -> Self {
        Self {
            dialer,
            children: RefCell::new(Vec::new()),
        }
    }

    /// Collects the exit status of every dialer that has finished.
    pub fn reap_finished(&self) {
        self.children
            .borrow_mut()
            .retain_mut(|child| match child.try_wait() {
                Ok(None) => true,
                Ok(Some(status)) => {
                    tracing::debug!(pid = child.id(), %status, "dialer exited");
                    false
                }
                Err(e) => {
                    tracing::warn!(pid = child.id(), error = %e, "could not poll dialer");
                    false
                }
            });
    }

    pub fn pending_children(&self) -> usize {
        self.children.borrow().len()
    }
}

impl PlatformActions for DesktopPlatform {
    fn dial(&self, request: &DialRequest) -> Result<(), AppError> {
        self.reap_finished();

        let child = Command::new(&self.dialer.program)
            .args(&self.dialer.args)
            .arg(&request.uri)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                AppError::Platform(format!(
                    "could not start dialer `{}`: {}",
                    self.dialer.program, e
                ))
            })?;

        tracing::debug!(pid = child.id(), program = %self.dialer.program, "dialer started");
        self.children.borrow_mut().push(child);
        Ok(())
    }

    fn copy_to_clipboard(&self, clip: &ClipboardPayload) -> Result<(), AppError> {
        tracing::debug!(label = clip.label, mime = clip.mime, "writing clipboard via OSC 52");
        let mut stdout = io::stdout();
        execute!(stdout, CopyToClipboard::to_clipboard_from(clip.text.as_str()))?;
        Ok(())
    }

    fn show_notice(&self, notice: &Notice) -> Result<(), AppError> {
        println!("{}", notice.text);
        Ok(())
    }

    fn tick(&self) {
        self.reap_finished();
    }
}
