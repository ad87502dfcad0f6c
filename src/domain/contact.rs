use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a bundled visual asset, e.g. `avatar_ada`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ImageAsset(String);

impl ImageAsset {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,

    // Shown and dialed exactly as written, never normalized.
    pub phone: String,

    pub image: ImageAsset,
}

impl Contact {
    pub fn new(name: &str, phone: &str, image: &str) -> Self {
        Contact {
            name: name.to_string(),
            phone: phone.to_string(),
            image: ImageAsset::new(image),
        }
    }

    pub fn validate_name(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation(
                "Contact name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Up to two uppercase initials taken from the name, used as the image placeholder.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}
