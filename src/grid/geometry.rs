//! Terminal-cell layout of the grid, and hit testing of clicks against it.
//!
//! Each card stacks, top to bottom:
//! ```text
//! ┌──────────────┐
//! │    image     │  IMAGE_LINES rows
//! │              │  spacer
//! │  Bold Name   │  NAME_LINE
//! │ (0401 2345)  │  PHONE_LINE, the copy target including padding
//! └──────────────┘
//! ```
//! Cards touch each other; there is no spacing between cells.

use super::{GridView, Tap, GRID_COLUMNS};

pub const IMAGE_LINES: u16 = 3;
pub const NAME_LINE: u16 = IMAGE_LINES + 1;
pub const PHONE_LINE: u16 = NAME_LINE + 1;
pub const CARD_HEIGHT: u16 = PHONE_LINE + 1;

/// Horizontal padding around the phone text that still counts as the copy target.
pub const PHONE_PADDING: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(y) < u32::from(self.y) + u32::from(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// The grid viewport plus how many card rows are scrolled off the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub area: CellRect,
    pub scroll_rows: usize,
}

impl GridGeometry {
    pub fn new(area: CellRect, scroll_rows: usize) -> Self {
        Self { area, scroll_rows }
    }

    /// Rows that fit fully in the viewport, never less than one.
    pub fn page_rows(&self) -> usize {
        usize::from(self.area.height / CARD_HEIGHT).max(1)
    }

    fn column_span(&self, column: usize) -> (u16, u16) {
        let width = u32::from(self.area.width);
        let start = width * column as u32 / GRID_COLUMNS as u32;
        let end = width * (column as u32 + 1) / GRID_COLUMNS as u32;
        (self.area.x + start as u16, (end - start) as u16)
    }

    /// Screen rectangle of the card at `index`, clipped to the viewport.
    pub fn card_rect(&self, index: usize) -> Option<CellRect> {
        let row = index / GRID_COLUMNS;
        let visible_row = row.checked_sub(self.scroll_rows)?;

        let top = u32::try_from(visible_row).ok()? * u32::from(CARD_HEIGHT);
        if top >= u32::from(self.area.height) {
            return None;
        }

        let (x, width) = self.column_span(index % GRID_COLUMNS);
        let height = (u32::from(self.area.height) - top).min(u32::from(CARD_HEIGHT)) as u16;
        let rect = CellRect::new(x, self.area.y + top as u16, width, height);

        (!rect.is_empty()).then_some(rect)
    }

    /// Copy target for a card: the centred phone text plus padding.
    pub fn phone_rect(&self, index: usize, phone: &str) -> Option<CellRect> {
        let card = self.card_rect(index)?;
        if card.height <= PHONE_LINE {
            return None;
        }

        let text_width = u16::try_from(phone.chars().count()).unwrap_or(u16::MAX);
        let width = text_width.saturating_add(PHONE_PADDING * 2).min(card.width);
        // Same rounding as ratatui's centred lines, so the target sits on the drawn text.
        let x = card.x + card.width / 2 - width / 2;

        Some(CellRect::new(x, card.y + PHONE_LINE, width, 1))
    }

    /// Maps a click to the card under it. The phone text wins over the card.
    pub fn hit_test(&self, view: &GridView, x: u16, y: u16) -> Option<Tap> {
        if !self.area.contains(x, y) {
            return None;
        }

        let first = self.scroll_rows * GRID_COLUMNS;
        let visible = (self.page_rows() + 1) * GRID_COLUMNS;

        view.cards
            .iter()
            .skip(first)
            .take(visible)
            .find_map(|card| {
                let rect = self.card_rect(card.index)?;
                if !rect.contains(x, y) {
                    return None;
                }

                let on_phone = self
                    .phone_rect(card.index, &card.phone.text)
                    .is_some_and(|phone| phone.contains(x, y));

                Some(if on_phone {
                    Tap::PhoneNumber(card.index)
                } else {
                    Tap::Card(card.index)
                })
            })
    }

    /// Scroll offset that keeps `row` on screen, moving as little as possible.
    pub fn scroll_to_show(&self, row: usize) -> usize {
        let page = self.page_rows();

        if row < self.scroll_rows {
            row
        } else if row >= self.scroll_rows + page {
            row + 1 - page
        } else {
            self.scroll_rows
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Contact, ContactBook};
    use crate::grid::GridRenderer;

    fn view_of(phones: &[&str]) -> GridView {
        let book = ContactBook::from_contacts(
            phones
                .iter()
                .enumerate()
                .map(|(i, phone)| Contact::new(&format!("User {i}"), phone, "avatar"))
                .collect(),
        );
        GridRenderer::new(&book).render()
    }

    // 30 columns wide: three 10-column cards. Two full rows of cards fit.
    fn geometry(scroll_rows: usize) -> GridGeometry {
        GridGeometry::new(CellRect::new(0, 3, 30, CARD_HEIGHT * 2), scroll_rows)
    }

    #[test]
    fn cards_tile_without_gaps() {
        let geo = geometry(0);

        let first = geo.card_rect(0).unwrap();
        let second = geo.card_rect(1).unwrap();
        let fourth = geo.card_rect(3).unwrap();

        assert_eq!(first, CellRect::new(0, 3, 10, CARD_HEIGHT));
        assert_eq!(second.x, first.x + first.width);
        assert_eq!(fourth.y, first.y + CARD_HEIGHT);
    }

    #[test]
    fn uneven_width_is_spread_over_columns() {
        let geo = GridGeometry::new(CellRect::new(0, 0, 31, CARD_HEIGHT), 0);

        let widths: Vec<u16> = (0..3).map(|i| geo.card_rect(i).unwrap().width).collect();

        assert_eq!(widths.iter().sum::<u16>(), 31);
    }

    #[test]
    fn phone_text_takes_precedence_over_card() {
        let view = view_of(&["0801"]);
        let geo = geometry(0);
        let phone = geo.phone_rect(0, "0801").unwrap();

        // "0801" plus one column of padding each side, centred in 10 columns.
        assert_eq!(phone, CellRect::new(2, 3 + PHONE_LINE, 6, 1));
        assert_eq!(geo.hit_test(&view, 2, 3 + PHONE_LINE), Some(Tap::PhoneNumber(0)));
        assert_eq!(geo.hit_test(&view, 7, 3 + PHONE_LINE), Some(Tap::PhoneNumber(0)));
        assert_eq!(geo.hit_test(&view, 1, 3 + PHONE_LINE), Some(Tap::Card(0)));
        assert_eq!(geo.hit_test(&view, 4, 3 + NAME_LINE), Some(Tap::Card(0)));
        assert_eq!(geo.hit_test(&view, 4, 3), Some(Tap::Card(0)));
    }

    #[test]
    fn empty_cells_and_outside_clicks_miss() {
        let view = view_of(&["0801"]);
        let geo = geometry(0);

        assert_eq!(geo.hit_test(&view, 15, 4), None);
        assert_eq!(geo.hit_test(&view, 4, 0), None);
        assert_eq!(geo.hit_test(&view, 4, 3 + CARD_HEIGHT), None);

        let empty = view_of(&[]);
        assert_eq!(geo.hit_test(&empty, 4, 4), None);
    }

    #[test]
    fn scroll_shifts_rows() {
        let view = view_of(&["1", "2", "3", "4", "5", "6", "7"]);
        let geo = geometry(1);

        assert_eq!(geo.card_rect(0), None);
        assert_eq!(geo.card_rect(3).map(|r| r.y), Some(3));
        assert_eq!(geo.hit_test(&view, 25, 4), Some(Tap::Card(5)));
        assert_eq!(geo.hit_test(&view, 4, 3 + CARD_HEIGHT), Some(Tap::Card(6)));
    }

    #[test]
    fn odd_padding_stays_on_the_drawn_number() {
        let view = view_of(&["08012"]);
        let geo = geometry(0);

        // " 08012 " is 7 wide in a 10-wide card: drawn at columns 2..9.
        assert_eq!(geo.phone_rect(0, "08012"), Some(CellRect::new(2, 3 + PHONE_LINE, 7, 1)));
        assert_eq!(geo.hit_test(&view, 8, 3 + PHONE_LINE), Some(Tap::PhoneNumber(0)));
        assert_eq!(geo.hit_test(&view, 1, 3 + PHONE_LINE), Some(Tap::Card(0)));
    }

    #[test]
    fn long_numbers_are_clipped_to_the_card() {
        let geo = geometry(0);
        let phone = geo.phone_rect(0, "+44 20 7946 0018 0018").unwrap();

        assert_eq!(phone.width, 10);
        assert_eq!(phone.x, 0);
    }

    #[test]
    fn scroll_follows_selection() {
        let geo = geometry(0);

        assert_eq!(geo.scroll_to_show(1), 0);
        assert_eq!(geo.scroll_to_show(2), 1);
        assert_eq!(geometry(3).scroll_to_show(1), 1);
        assert_eq!(geometry(3).scroll_to_show(4), 3);
    }

    #[test]
    fn short_viewport_still_pages_one_row() {
        let geo = GridGeometry::new(CellRect::new(0, 0, 30, 2), 0);

        assert_eq!(geo.page_rows(), 1);
        assert!(geo.phone_rect(0, "1").is_none());
        assert_eq!(geo.card_rect(0).map(|r| r.height), Some(2));
    }
}
