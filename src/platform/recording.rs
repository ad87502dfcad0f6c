use super::*;
use std::cell::{Cell, RefCell};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    Dial(String),
    Clipboard { label: String, text: String },
    Notice(String),
}

/// Keeps every platform call in memory. Optionally fails each one after recording it.
#[derive(Debug, Default)]
pub struct RecordingPlatform {
    calls: RefCell<Vec<PlatformCall>>,
    notice_durations: RefCell<Vec<Duration>>,
    ticks: Cell<usize>,
    fail: bool,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.borrow().clone()
    }

    pub fn dial_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, PlatformCall::Dial(_)))
            .count()
    }

    pub fn notice_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, PlatformCall::Notice(_)))
            .count()
    }

    /// Text of the most recent clipboard write.
    pub fn clipboard(&self) -> Option<String> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            PlatformCall::Clipboard { text, .. } => Some(text.clone()),
            _ => None,
        })
    }

    pub fn last_notice_duration(&self) -> Option<Duration> {
        self.notice_durations.borrow().last().copied()
    }

    pub fn tick_count(&self) -> usize {
        self.ticks.get()
    }

    fn record(&self, call: PlatformCall) -> Result<(), AppError> {
        self.calls.borrow_mut().push(call);

        if self.fail {
            return Err(AppError::Platform("recording platform set to fail".to_string()));
        }
        Ok(())
    }
}

impl PlatformActions for RecordingPlatform {
    fn dial(&self, request: &DialRequest) -> Result<(), AppError> {
        self.record(PlatformCall::Dial(request.uri.clone()))
    }

    fn copy_to_clipboard(&self, clip: &ClipboardPayload) -> Result<(), AppError> {
        self.record(PlatformCall::Clipboard {
            label: clip.label.to_string(),
            text: clip.text.clone(),
        })
    }

    fn show_notice(&self, notice: &Notice) -> Result<(), AppError> {
        self.notice_durations.borrow_mut().push(notice.duration);
        self.record(PlatformCall::Notice(notice.text.clone()))
    }

    fn tick(&self) {
        self.ticks.set(self.ticks.get() + 1);
    }
}
