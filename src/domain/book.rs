use super::*;
use std::slice;

const BUNDLED_CONTACTS: &str = include_str!("../../assets/contacts.json");

/// Read-only, ordered list of contacts. Loaded once and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    /// Parses the contact list compiled into the binary.
    pub fn bundled() -> Result<Self, AppError> {
        Self::from_json(BUNDLED_CONTACTS)
    }

    pub fn from_json(data: &str) -> Result<Self, AppError> {
        let contacts: Vec<Contact> = serde_json::from_str(data)?;

        for contact in &contacts {
            contact.validate_name()?;
        }

        tracing::debug!(count = contacts.len(), "contact book loaded");
        Ok(Self { contacts })
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Contact> {
        self.contacts.iter()
    }
}

impl<'a> IntoIterator for &'a ContactBook {
    type Item = &'a Contact;
    type IntoIter = slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
