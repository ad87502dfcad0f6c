pub use crate::actions::{ActionDispatcher, ActionRequest, PlatformActions, HOME_NUMBER};
pub use crate::cli::{command, run_app};
pub use crate::config::{Config, DialerCommand};
pub use crate::domain::{Contact, ContactBook, ImageAsset};
pub use crate::errors::AppError;
pub use crate::grid::{GridRenderer, GridView, Tap, GRID_COLUMNS};
pub use crate::platform::{DesktopPlatform, EchoPlatform, RecordingPlatform};
