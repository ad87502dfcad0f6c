pub mod geometry;

use crate::actions::{ActionRequest, HOME_NUMBER};
use crate::domain::{ContactBook, ImageAsset};

pub use geometry::{CellRect, GridGeometry, CARD_HEIGHT};

pub const GRID_COLUMNS: usize = 3;

/// Where a tap landed. Index is the contact's position in the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tap {
    Card(usize),
    PhoneNumber(usize),
    HeaderAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Bold,
    Gray,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    pub text: String,
    pub style: TextStyle,
}

/// One rendered cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub index: usize,
    pub row: usize,
    pub column: usize,
    pub image: ImageAsset,
    pub initials: String,
    pub name: StyledText,
    pub phone: StyledText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub columns: usize,
    pub cards: Vec<CardView>,
}

impl GridView {
    pub fn row_count(&self) -> usize {
        self.cards.len().div_ceil(self.columns)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CardView]> {
        self.cards.chunks(self.columns)
    }
}

/// Pure view over a contact book: builds the grid and maps taps to actions.
pub struct GridRenderer<'a> {
    book: &'a ContactBook,
}

impl<'a> GridRenderer<'a> {
    pub fn new(book: &'a ContactBook) -> Self {
        Self { book }
    }

    pub fn render(&self) -> GridView {
        let cards = self
            .book
            .iter()
            .enumerate()
            .map(|(index, contact)| CardView {
                index,
                row: index / GRID_COLUMNS,
                column: index % GRID_COLUMNS,
                image: contact.image.clone(),
                initials: contact.initials(),
                name: StyledText {
                    text: contact.name.clone(),
                    style: TextStyle::Bold,
                },
                phone: StyledText {
                    text: contact.phone.clone(),
                    style: TextStyle::Gray,
                },
            })
            .collect();

        GridView {
            columns: GRID_COLUMNS,
            cards,
        }
    }

    pub fn on_tap(&self, tap: Tap) -> Option<ActionRequest> {
        let request = match tap {
            Tap::HeaderAction => ActionRequest::Dial(HOME_NUMBER.to_string()),
            Tap::Card(index) => ActionRequest::Dial(self.phone_at(index)?),
            Tap::PhoneNumber(index) => ActionRequest::CopyToClipboard(self.phone_at(index)?),
        };
        Some(request)
    }

    fn phone_at(&self, index: usize) -> Option<String> {
        let contact = self.book.get(index);
        if contact.is_none() {
            tracing::debug!(index, len = self.book.len(), "tap outside contact range");
        }
        contact.map(|c| c.phone.clone())
    }
}
