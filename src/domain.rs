pub mod book;
pub mod contact;

use crate::errors::AppError;

pub use book::ContactBook;
pub use contact::{Contact, ImageAsset};
