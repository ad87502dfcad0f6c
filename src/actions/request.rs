use std::time::Duration;

pub const CLIPBOARD_LABEL: &str = "phoneNumber";
pub const PLAIN_TEXT_MIME: &str = "text/plain";
pub const COPIED_NOTICE: &str = "Copied to clipboard";

/// What a tap asks the host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRequest {
    Dial(String),
    CopyToClipboard(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialRequest {
    pub uri: String,
}

impl DialRequest {
    /// The number goes into the URI literally, no escaping.
    pub fn for_number(number: &str) -> Self {
        Self {
            uri: format!("tel:{number}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardPayload {
    pub label: &'static str,
    pub mime: &'static str,
    pub text: String,
}

impl ClipboardPayload {
    pub fn phone_number(number: &str) -> Self {
        Self {
            label: CLIPBOARD_LABEL,
            mime: PLAIN_TEXT_MIME,
            text: number.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub duration: Duration,
}

impl Notice {
    pub fn copied(duration: Duration) -> Self {
        Self {
            text: COPIED_NOTICE.to_string(),
            duration,
        }
    }
}
