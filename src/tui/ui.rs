//! Draws the app:
//! ```text
//! ┌ Contacts App ──────────────────────────┐
//! │                               [⌂ Home] │
//! └────────────────────────────────────────┘
//!     [ AL ]        [ AT ]        [ GH ]
//!   avatar_ada    avatar_alan  avatar_grace
//!
//!  Ada Lovelace   Alan Turing  Grace Hopper
//!  +44 20 7946..  +44 20 79..  +1 202 555..
//!  ←↑↓→ select  Enter dial  c copy number ...
//! ```

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::actions::PlatformActions;
use crate::grid::geometry::IMAGE_LINES;
use crate::grid::{CardView, CellRect, TextStyle};

use super::app::{App, HOME_LABEL};

const CARD_BG: Color = Color::Gray;
const SELECTED_BG: Color = Color::White;

pub fn cell_rect(area: Rect) -> CellRect {
    CellRect::new(area.x, area.y, area.width, area.height)
}

fn rect(cell: CellRect) -> Rect {
    Rect::new(cell.x, cell.y, cell.width, cell.height)
}

pub fn render<P: PlatformActions>(frame: &mut Frame, app: &App<P>) {
    let screen = app.screen();

    render_header(frame, screen.header, screen.home_button);
    render_grid(frame, app);
    render_footer(frame, screen.footer);
    render_toasts(frame, app, screen.grid);
}

fn render_header(frame: &mut Frame, area: CellRect, home_button: CellRect) {
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        " Contacts App ",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(block, rect(area));

    if !home_button.is_empty() {
        let button = Paragraph::new(Span::styled(
            HOME_LABEL,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(button, rect(home_button));
    }
}

fn render_grid<P: PlatformActions>(frame: &mut Frame, app: &App<P>) {
    let geometry = app.geometry();

    if app.view().cards.is_empty() {
        let empty = Paragraph::new("No contacts")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, rect(geometry.area));
        return;
    }

    for card in &app.view().cards {
        if let Some(area) = geometry.card_rect(card.index) {
            let selected = app.selected() == Some(card.index);
            frame.render_widget(card_widget(card, selected), rect(area));
        }
    }
}

fn text_style(style: TextStyle) -> Style {
    match style {
        TextStyle::Bold => Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
        TextStyle::Gray => Style::default().fg(Color::DarkGray),
    }
}

fn card_widget(card: &CardView, selected: bool) -> Paragraph<'static> {
    let bg = if selected { SELECTED_BG } else { CARD_BG };

    // Image placeholder: initials over the asset name.
    let mut lines = vec![Line::default(); usize::from(IMAGE_LINES)];
    lines[0] = Line::from(Span::styled(
        format!("[ {} ]", card.initials),
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    ));
    lines[1] = Line::from(Span::styled(
        card.image.to_string(),
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
    ));

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        card.name.text.clone(),
        text_style(card.name.style),
    )));
    lines.push(Line::from(Span::styled(
        format!(" {} ", card.phone.text),
        text_style(card.phone.style),
    )));

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(bg))
}

fn render_footer(frame: &mut Frame, area: CellRect) {
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let hints = Line::from(vec![
        Span::styled(" ←↑↓→", key),
        Span::raw(" select  "),
        Span::styled("Enter", key),
        Span::raw(" dial  "),
        Span::styled("c", key),
        Span::raw(" copy number  "),
        Span::styled("H", key),
        Span::raw(" home  "),
        Span::styled("q", key),
        Span::raw(" quit"),
    ]);
    frame.render_widget(Paragraph::new(hints), rect(area));
}

fn render_toasts<P: PlatformActions>(frame: &mut Frame, app: &App<P>, area: CellRect) {
    let toasts = app.toasts().borrow();
    let Some(toast) = toasts.latest() else {
        return;
    };

    let width = (toast.message.chars().count() as u16 + 4).min(area.width);
    let height = 3u16.min(area.height);
    if width == 0 || height == 0 {
        return;
    }

    let toast_area = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + area.height - height,
        width,
        height,
    );

    let widget = Paragraph::new(toast.message.as_str())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));

    frame.render_widget(Clear, toast_area);
    frame.render_widget(widget, toast_area);
}
