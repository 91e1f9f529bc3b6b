//! # DetailPanel Component
//!
//! The shared detail panel under the map: whatever marker (or card) is
//! selected, this shows its venue, long-form date, location, and action,
//! plus the directions affordance for shows with coordinates. Stateless —
//! it renders exactly what `App::selected_show()` hands it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::show::Show;
use crate::tui::component::Component;
use crate::tui::components::show_list::action_line;

pub struct DetailPanel<'a> {
    pub show: Option<&'a Show>,
}

impl Component for DetailPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(" Show Details ");

        let paragraph = match self.show {
            None => Paragraph::new(Span::styled(
                "Select a pin to see show details",
                Style::default().add_modifier(Modifier::DIM),
            )),
            Some(show) => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        show.venue.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        show.long_date(),
                        Style::default().fg(Color::Cyan),
                    )),
                    Line::from(show.location()),
                    action_line(show),
                ];
                if show.coordinates.is_some() {
                    lines.push(Line::from(Span::styled(
                        "d: directions (opens your browser)",
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                Paragraph::new(lines)
            }
        };

        frame.render_widget(paragraph.block(block), area);
    }
}
