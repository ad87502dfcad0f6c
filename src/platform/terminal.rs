use super::*;
use crate::tui::toast::{Toast, ToastQueue};
use std::cell::RefCell;
use std::rc::Rc;

/// Desktop dialing and clipboard, with notices drawn as toasts inside the UI.
/// Without a desktop platform (dry run) requests are only logged.
pub struct TuiPlatform {
    desktop: Option<DesktopPlatform>,
    toasts: Rc<RefCell<ToastQueue>>,
}

impl TuiPlatform {
    pub fn new(desktop: Option<DesktopPlatform>, toasts: Rc<RefCell<ToastQueue>>) -> Self {
        Self { desktop, toasts }
    }
}

impl PlatformActions for TuiPlatform {
    fn dial(&self, request: &DialRequest) -> Result<(), AppError> {
        match &self.desktop {
            Some(desktop) => desktop.dial(request),
            None => {
                tracing::info!(uri = %request.uri, "dry run: dial skipped");
                Ok(())
            }
        }
    }

    fn copy_to_clipboard(&self, clip: &ClipboardPayload) -> Result<(), AppError> {
        match &self.desktop {
            Some(desktop) => desktop.copy_to_clipboard(clip),
            None => {
                tracing::info!(text = %clip.text, "dry run: clipboard write skipped");
                Ok(())
            }
        }
    }

    fn show_notice(&self, notice: &Notice) -> Result<(), AppError> {
        self.toasts
            .borrow_mut()
            .push(Toast::new(&notice.text, notice.duration));
        Ok(())
    }

    fn tick(&self) {
        if let Some(desktop) = &self.desktop {
            desktop.tick();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn notices_become_toasts() -> Result<(), AppError> {
        let toasts = Rc::new(RefCell::new(ToastQueue::default()));
        let platform = TuiPlatform::new(None, Rc::clone(&toasts));

        platform.dial(&DialRequest::for_number("+1234567890"))?;
        platform.copy_to_clipboard(&ClipboardPayload::phone_number("0801"))?;
        assert!(toasts.borrow().is_empty());

        platform.show_notice(&Notice::copied(Duration::from_secs(2)))?;
        platform.show_notice(&Notice::copied(Duration::from_secs(2)))?;

        assert_eq!(toasts.borrow().len(), 2);
        assert_eq!(
            toasts.borrow().latest().map(|t| t.message.as_str()),
            Some("Copied to clipboard")
        );
        Ok(())
    }
}
