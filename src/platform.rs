pub mod desktop;
pub mod echo;
pub mod recording;
pub mod terminal;

use crate::actions::{ClipboardPayload, DialRequest, Notice, PlatformActions};
use crate::errors::AppError;

pub use desktop::DesktopPlatform;
pub use echo::EchoPlatform;
pub use recording::RecordingPlatform;
pub use terminal::TuiPlatform;
