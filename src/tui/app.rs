//! UI state for the contact grid: selection, scroll and input handling.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::actions::{ActionDispatcher, PlatformActions};
use crate::domain::ContactBook;
use crate::grid::{CellRect, GridGeometry, GridRenderer, GridView, Tap, GRID_COLUMNS};

use super::toast::ToastQueue;

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;
pub const HOME_LABEL: &str = "[⌂ Home]";

/// Screen split into header, grid and footer, plus the header's action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: CellRect,
    pub grid: CellRect,
    pub footer: CellRect,
    pub home_button: CellRect,
}

impl ScreenLayout {
    pub fn new(area: CellRect) -> Self {
        let header_height = HEADER_HEIGHT.min(area.height);
        let footer_height = FOOTER_HEIGHT.min(area.height - header_height);
        let grid_height = area.height - header_height - footer_height;

        let header = CellRect::new(area.x, area.y, area.width, header_height);
        let grid = CellRect::new(area.x, area.y + header_height, area.width, grid_height);
        let footer = CellRect::new(
            area.x,
            area.y + header_height + grid_height,
            area.width,
            footer_height,
        );

        // Right-aligned inside the header border.
        let label_width = HOME_LABEL.chars().count() as u16;
        let home_button = if header.height >= 2 && header.width > label_width + 2 {
            CellRect::new(
                header.x + header.width - label_width - 2,
                header.y + 1,
                label_width,
                1,
            )
        } else {
            CellRect::default()
        };

        Self {
            header,
            grid,
            footer,
            home_button,
        }
    }
}

pub struct App<P: PlatformActions> {
    book: ContactBook,
    view: GridView,
    dispatcher: ActionDispatcher<P>,
    toasts: Rc<RefCell<ToastQueue>>,
    selected: usize,
    scroll_rows: usize,
    viewport: CellRect,
    should_quit: bool,
}

impl<P: PlatformActions> App<P> {
    pub fn new(
        book: ContactBook,
        dispatcher: ActionDispatcher<P>,
        toasts: Rc<RefCell<ToastQueue>>,
    ) -> Self {
        // The book never changes, so the grid is rendered once.
        let view = GridRenderer::new(&book).render();

        Self {
            book,
            view,
            dispatcher,
            toasts,
            selected: 0,
            scroll_rows: 0,
            viewport: CellRect::default(),
            should_quit: false,
        }
    }

    pub fn view(&self) -> &GridView {
        &self.view
    }

    pub fn toasts(&self) -> &Rc<RefCell<ToastQueue>> {
        &self.toasts
    }

    pub fn dispatcher(&self) -> &ActionDispatcher<P> {
        &self.dispatcher
    }

    pub fn selected(&self) -> Option<usize> {
        (!self.view.cards.is_empty()).then_some(self.selected)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn screen(&self) -> ScreenLayout {
        ScreenLayout::new(self.viewport)
    }

    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(self.screen().grid, self.scroll_rows)
    }

    pub fn set_viewport(&mut self, area: CellRect) {
        if self.viewport != area {
            self.viewport = area;
            self.follow_selection();
        }
    }

    pub fn tick(&mut self) {
        self.toasts.borrow_mut().prune();
        self.dispatcher.platform().tick();
    }

    pub fn tap(&self, tap: Tap) {
        match GridRenderer::new(&self.book).on_tap(tap) {
            Some(request) => self.dispatcher.dispatch(&request),
            None => tracing::debug!(?tap, "tap ignored"),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.select_left(),
            KeyCode::Right | KeyCode::Char('l') => self.select_right(),
            KeyCode::Up | KeyCode::Char('k') => self.select_up(),
            KeyCode::Down | KeyCode::Char('j') => self.select_down(),
            KeyCode::Enter | KeyCode::Char('d') => {
                if let Some(index) = self.selected() {
                    self.tap(Tap::Card(index));
                }
            }
            KeyCode::Char('c') | KeyCode::Char('y') => {
                if let Some(index) = self.selected() {
                    self.tap(Tap::PhoneNumber(index));
                }
            }
            KeyCode::Char('H') => self.tap(Tap::HeaderAction),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row),
            MouseEventKind::ScrollDown => self.scroll_by(1),
            MouseEventKind::ScrollUp => self.scroll_by(-1),
            _ => {}
        }
    }

    fn click(&mut self, x: u16, y: u16) {
        if self.screen().home_button.contains(x, y) {
            self.tap(Tap::HeaderAction);
            return;
        }

        let Some(tap) = self.geometry().hit_test(&self.view, x, y) else {
            return;
        };

        if let Tap::Card(index) | Tap::PhoneNumber(index) = tap {
            self.selected = index;
        }
        self.tap(tap);
    }

    fn scroll_by(&mut self, rows: isize) {
        let max_scroll = self
            .view
            .row_count()
            .saturating_sub(self.geometry().page_rows());

        self.scroll_rows = self.scroll_rows.saturating_add_signed(rows).min(max_scroll);
    }

    fn select_left(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.follow_selection();
        }
    }

    fn select_right(&mut self) {
        if self.selected + 1 < self.view.cards.len() {
            self.selected += 1;
            self.follow_selection();
        }
    }

    fn select_up(&mut self) {
        if self.selected >= GRID_COLUMNS {
            self.selected -= GRID_COLUMNS;
            self.follow_selection();
        }
    }

    fn select_down(&mut self) {
        let Some(last) = self.view.cards.len().checked_sub(1) else {
            return;
        };

        if self.selected + GRID_COLUMNS <= last {
            self.selected += GRID_COLUMNS;
        } else if last / GRID_COLUMNS > self.selected / GRID_COLUMNS {
            // Short last row: land on its final card.
            self.selected = last;
        }
        self.follow_selection();
    }

    fn follow_selection(&mut self) {
        self.scroll_rows = self.geometry().scroll_to_show(self.selected / GRID_COLUMNS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Contact;
    use crate::grid::geometry::PHONE_LINE;
    use crate::grid::CARD_HEIGHT;
    use crate::platform::recording::{PlatformCall, RecordingPlatform};
    use crossterm::event::KeyModifiers;

    fn app_with(n: usize) -> App<RecordingPlatform> {
        let book = ContactBook::from_contacts(
            (0..n)
                .map(|i| Contact::new(&format!("User {i}"), &format!("080{i}"), "avatar"))
                .collect(),
        );
        let mut app = App::new(
            book,
            ActionDispatcher::new(RecordingPlatform::new()),
            Rc::new(RefCell::new(ToastQueue::default())),
        );
        // Header 3 rows, grid of two card rows, footer 1 row.
        app.set_viewport(CellRect::new(0, 0, 30, 3 + CARD_HEIGHT * 2 + 1));
        app
    }

    fn press(app: &mut App<RecordingPlatform>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(app: &mut App<RecordingPlatform>, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    fn calls(app: &App<RecordingPlatform>) -> Vec<PlatformCall> {
        app.dispatcher().platform().calls()
    }

    #[test]
    fn layout_splits_screen() {
        let screen = ScreenLayout::new(CellRect::new(0, 0, 30, 16));

        assert_eq!(screen.header, CellRect::new(0, 0, 30, 3));
        assert_eq!(screen.grid, CellRect::new(0, 3, 30, 12));
        assert_eq!(screen.footer, CellRect::new(0, 15, 30, 1));
        assert_eq!(screen.home_button, CellRect::new(20, 1, 8, 1));
    }

    #[test]
    fn enter_dials_selected_contact() {
        let mut app = app_with(4);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert_eq!(calls(&app), vec![PlatformCall::Dial("tel:0801".to_string())]);
    }

    #[test]
    fn copy_key_copies_without_dialing() {
        let mut app = app_with(4);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('c'));

        assert_eq!(
            calls(&app),
            vec![
                PlatformCall::Clipboard {
                    label: "phoneNumber".to_string(),
                    text: "0803".to_string(),
                },
                PlatformCall::Notice("Copied to clipboard".to_string()),
            ]
        );
    }

    #[test]
    fn header_key_and_button_dial_home() {
        let mut app = app_with(2);

        press(&mut app, KeyCode::Char('H'));
        click(&mut app, 21, 1);

        assert_eq!(
            calls(&app),
            vec![
                PlatformCall::Dial("tel:+1234567890".to_string()),
                PlatformCall::Dial("tel:+1234567890".to_string()),
            ]
        );
    }

    #[test]
    fn clicks_follow_tap_precedence() {
        let mut app = app_with(3);

        // Card 2 spans columns 20..30; its phone "0802" sits at 22..28.
        click(&mut app, 25, 3 + PHONE_LINE);
        click(&mut app, 25, 4);

        assert_eq!(
            calls(&app),
            vec![
                PlatformCall::Clipboard {
                    label: "phoneNumber".to_string(),
                    text: "0802".to_string(),
                },
                PlatformCall::Notice("Copied to clipboard".to_string()),
                PlatformCall::Dial("tel:0802".to_string()),
            ]
        );
        assert_eq!(app.selected(), Some(2));
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = app_with(5);

        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected(), Some(0));

        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected(), Some(4));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected(), Some(4));
    }

    #[test]
    fn selection_scrolls_into_view() {
        let mut app = app_with(9);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);

        assert_eq!(app.selected(), Some(6));
        assert_eq!(app.geometry().scroll_rows, 1);
    }

    #[test]
    fn empty_book_ignores_input() {
        let mut app = app_with(0);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('c'));
        click(&mut app, 5, 5);

        assert_eq!(app.selected(), None);
        assert!(calls(&app).is_empty());
    }

    #[test]
    fn tick_expires_toasts_and_ticks_platform() {
        let mut app = app_with(1);
        app.toasts()
            .borrow_mut()
            .push(crate::tui::toast::Toast::new("gone", std::time::Duration::ZERO));

        app.tick();
        app.tick();

        assert!(app.toasts().borrow().is_empty());
        assert_eq!(app.dispatcher().platform().tick_count(), 2);
        assert!(calls(&app).is_empty());
    }

    #[test]
    fn quit_keys() {
        let mut app = app_with(1);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());

        let mut app = app_with(1);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
