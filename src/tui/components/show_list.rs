//! # ShowList Component
//!
//! Scrollable card list of tour dates — the list half of the list/map pair.
//! Cards render in catalog order, so the card at position N always describes
//! the show whose map marker is labeled N+1.
//!
//! `ShowList` is a transient component (created each frame) wrapping
//! `&mut ShowListState` (persistent scroll state) and the shows as props.
//! Cards have a fixed height, which keeps the scroll math trivial.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::show::{Show, ShowAction};
use crate::tui::component::Component;

/// Rendered height of one show card: 4 content lines + 2 border rows.
pub const CARD_HEIGHT: u16 = 6;

/// Scroll state for the show list.
/// Must be persisted in the parent TuiState.
pub struct ShowListState {
    pub scroll_state: ScrollViewState,
    /// Last known viewport height (for keep-selected-visible math)
    pub viewport_height: u16,
}

impl Default for ShowListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            viewport_height: 0,
        }
    }

    /// Scroll so the card at `index` is fully visible. If the viewport is
    /// shorter than a card, align the card's top edge.
    pub fn scroll_to(&mut self, index: usize) {
        let top = index as u16 * CARD_HEIGHT;
        let bottom = top + CARD_HEIGHT;
        let offset_y = self.scroll_state.offset().y;

        if top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: top });
        } else if bottom > offset_y + self.viewport_height {
            self.scroll_state.set_offset(Position {
                x: 0,
                y: bottom.saturating_sub(self.viewport_height),
            });
        }
    }
}

/// The list renderer. Created fresh each frame with references to state
/// and the catalog.
pub struct ShowList<'a> {
    pub state: &'a mut ShowListState,
    pub shows: &'a [Show],
    pub selected: Option<usize>,
}

impl<'a> ShowList<'a> {
    pub fn new(state: &'a mut ShowListState, shows: &'a [Show], selected: Option<usize>) -> Self {
        Self {
            state,
            shows,
            selected,
        }
    }
}

impl Component for ShowList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        self.state.viewport_height = area.height;
        if let Some(index) = self.selected {
            self.state.scroll_to(index);
        }

        let total_height = self.shows.len() as u16 * CARD_HEIGHT;
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (index, show) in self.shows.iter().enumerate() {
            let card_rect = Rect::new(0, index as u16 * CARD_HEIGHT, content_width, CARD_HEIGHT);
            let is_selected = self.selected == Some(index);
            scroll_view.render_widget(card(show, index, is_selected), card_rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// One bordered card: venue in the border title, then date, location,
/// action, and the map affordance.
fn card(show: &Show, index: usize, is_selected: bool) -> Paragraph<'static> {
    let border_style = if is_selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };

    let lines = vec![
        Line::from(Span::styled(
            show.long_date(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(show.location()),
        action_line(show),
        map_hint_line(show, index),
    ];

    Paragraph::new(lines).block(
        Block::bordered()
            .title(format!(" {} ", show.venue))
            .border_style(border_style)
            .title_style(border_style),
    )
}

/// Exactly one action control per card, by precedence:
/// sold-out badge > ticket link > "coming soon" placeholder.
pub fn action_line(show: &Show) -> Line<'static> {
    match show.action() {
        ShowAction::SoldOut => Line::from(Span::styled(
            "SOLD OUT",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        ShowAction::Tickets(url) => Line::from(Span::styled(
            format!("Tickets: {url}"),
            Style::default().fg(Color::Green),
        )),
        ShowAction::ComingSoon => Line::from(Span::styled(
            "Tickets coming soon",
            Style::default().add_modifier(Modifier::DIM),
        )),
    }
}

/// "View on map" is only offered for shows that actually have a marker.
fn map_hint_line(show: &Show, index: usize) -> Line<'static> {
    if show.coordinates.is_some() {
        Line::from(Span::styled(
            format!("pin {} · enter: view on map", index + 1),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from("")
    }
}
