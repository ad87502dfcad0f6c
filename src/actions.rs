pub mod dispatcher;
pub mod request;

use crate::errors::AppError;

pub use dispatcher::{ActionDispatcher, HOME_NUMBER};
pub use request::{ActionRequest, ClipboardPayload, DialRequest, Notice};

/// Host capabilities the app delegates to. Every call is one-shot.
pub trait PlatformActions {
    /// Opens the host dialer pre-filled with the request's `tel:` URI.
    fn dial(&self, request: &DialRequest) -> Result<(), AppError>;

    /// Writes plain text to the shared clipboard.
    fn copy_to_clipboard(&self, clip: &ClipboardPayload) -> Result<(), AppError>;

    /// Shows a short, non-blocking message.
    fn show_notice(&self, notice: &Notice) -> Result<(), AppError>;

    /// Periodic housekeeping from the UI loop, such as reaping finished processes.
    fn tick(&self) {}
}

impl<P: PlatformActions + ?Sized> PlatformActions for &P {
    fn dial(&self, request: &DialRequest) -> Result<(), AppError> {
        (**self).dial(request)
    }

    fn copy_to_clipboard(&self, clip: &ClipboardPayload) -> Result<(), AppError> {
        (**self).copy_to_clipboard(clip)
    }

    fn show_notice(&self, notice: &Notice) -> Result<(), AppError> {
        (**self).show_notice(notice)
    }

    fn tick(&self) {
        (**self).tick()
    }
}

impl<P: PlatformActions + ?Sized> PlatformActions for Box<P> {
    fn dial(&self, request: &DialRequest) -> Result<(), AppError> {
        (**self).dial(request)
    }

    fn copy_to_clipboard(&self, clip: &ClipboardPayload) -> Result<(), AppError> {
        (**self).copy_to_clipboard(clip)
    }

    fn show_notice(&self, notice: &Notice) -> Result<(), AppError> {
        (**self).show_notice(notice)
    }

    fn tick(&self) {
        (**self).tick()
    }
}
