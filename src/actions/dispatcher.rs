use super::*;
use std::time::Duration;

/// Fixed number behind the header action. Not tied to any contact.
pub const HOME_NUMBER: &str = "+1234567890";

/// Short notice duration, the same as a short platform toast.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(2000);

/// Turns action requests into platform calls.
///
/// Platform failures are logged and dropped. They never reach the caller and never
/// change what is on screen.
pub struct ActionDispatcher<P: PlatformActions> {
    platform: P,
    notice_duration: Duration,
}

impl<P: PlatformActions> ActionDispatcher<P> {
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            notice_duration: DEFAULT_NOTICE_DURATION,
        }
    }

    pub fn with_notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration = duration;
        self
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn dispatch(&self, request: &ActionRequest) {
        match request {
            ActionRequest::Dial(number) => self.dial(number),
            ActionRequest::CopyToClipboard(number) => self.copy_to_clipboard(number),
        }
    }

    pub fn dial(&self, number: &str) {
        let request = DialRequest::for_number(number);
        tracing::info!(uri = %request.uri, "dial requested");

        if let Err(e) = self.platform.dial(&request) {
            tracing::warn!(uri = %request.uri, error = %e, "dialer request failed");
        }
    }

    pub fn dial_home(&self) {
        self.dial(HOME_NUMBER);
    }

    pub fn copy_to_clipboard(&self, number: &str) {
        let clip = ClipboardPayload::phone_number(number);
        tracing::info!(label = clip.label, "clipboard write requested");

        if let Err(e) = self.platform.copy_to_clipboard(&clip) {
            // The notice confirms success, so it is skipped here.
            tracing::warn!(error = %e, "clipboard write failed");
            return;
        }

        let notice = Notice::copied(self.notice_duration);
        if let Err(e) = self.platform.show_notice(&notice) {
            tracing::warn!(error = %e, "could not show notice");
        }
    }
}
