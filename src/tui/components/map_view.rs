//! # MapView Component
//!
//! The map half of the list/map pair: a braille canvas with the built-in
//! world-map shape standing in for a tile layer, plus one labeled pin per
//! show that has coordinates. Labels are the 1-based display index, so the
//! pin numbered 3 is always the third card in the list.
//!
//! The component renders whatever surface state the reducer has reached:
//! a placeholder while initializing, the canvas when ready, and a visible
//! degraded pane when initialization failed — the list is never affected.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Map as WorldMap, MapResolution};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::map::{self, MapCamera, MapSurface, Marker};
use crate::core::show::Show;
use crate::tui::component::Component;

pub struct MapView<'a> {
    pub shows: &'a [Show],
    pub markers: &'a [Marker],
    pub selected: Option<usize>,
    pub camera: MapCamera,
    pub surface: &'a MapSurface,
}

impl Component for MapView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.surface {
            MapSurface::Failed(message) => {
                let text = format!(
                    "MAP UNAVAILABLE\n\n{message}\n\nThe show list still works — press Esc."
                );
                let pane = Paragraph::new(text)
                    .block(Block::bordered().title(" Map "))
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true });
                frame.render_widget(pane, area);
            }
            MapSurface::Uninitialized | MapSurface::Initializing => {
                let pane = Paragraph::new("Preparing map...")
                    .block(Block::bordered().title(" Map "))
                    .alignment(Alignment::Center);
                frame.render_widget(pane, area);
            }
            MapSurface::Ready => self.render_canvas(frame, area),
        }
    }
}

impl MapView<'_> {
    fn render_canvas(&self, frame: &mut Frame, area: Rect) {
        let viewport = map::resolve_viewport(self.camera, self.markers);
        let markers = self.markers;
        let shows = self.shows;
        let selected = self.selected;

        let canvas = Canvas::default()
            .block(Block::bordered().title(" Map "))
            .x_bounds(viewport.x_bounds())
            .y_bounds(viewport.y_bounds())
            .paint(move |ctx| {
                ctx.draw(&WorldMap {
                    resolution: MapResolution::High,
                    color: Color::DarkGray,
                });
                ctx.layer(); // pins above the coastlines
                for marker in markers {
                    let is_selected = selected == Some(marker.display_index);
                    ctx.print(marker.lng, marker.lat, pin_line(marker, shows, is_selected));
                }
            });

        frame.render_widget(canvas, area);
    }
}

/// A pin's on-canvas text. The selected pin doubles as its popup: label
/// plus venue, highlighted.
fn pin_line(marker: &Marker, shows: &[Show], is_selected: bool) -> Line<'static> {
    if is_selected {
        let venue = shows
            .get(marker.display_index)
            .map(|s| s.venue.as_str())
            .unwrap_or("?");
        Line::styled(
            format!("({}) {}", marker.label(), venue),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        Line::styled(
            marker.label().to_string(),
            Style::default().fg(Color::Cyan),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{show, show_at};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(
        shows: &[Show],
        selected: Option<usize>,
        camera: MapCamera,
        surface: &MapSurface,
    ) -> String {
        let markers = map::build_markers(shows).unwrap();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut view = MapView {
                    shows,
                    markers: &markers,
                    selected,
                    camera,
                    surface,
                };
                view.render(f, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_selected_pin_pops_up_with_venue() {
        let shows = vec![
            show_at("The Roxy", 2026, 9, 18, 34.0906, -118.3884),
            show_at("First Avenue", 2026, 10, 20, 44.9813, -93.2762),
        ];
        // Tight camera centers the selected pin, so its popup fits on screen.
        let text = render_to_text(&shows, Some(1), MapCamera::Focused(1), &MapSurface::Ready);
        assert!(text.contains("(2) First Avenue"));
        assert!(!text.contains("The Roxy"));
    }

    #[test]
    fn test_failed_surface_renders_degraded_pane() {
        let text = render_to_text(
            &[],
            None,
            MapCamera::Overview,
            &MapSurface::Failed("tile layer gone".to_string()),
        );
        assert!(text.contains("MAP UNAVAILABLE"));
        assert!(text.contains("tile layer gone"));
    }

    #[test]
    fn test_initializing_surface_renders_placeholder() {
        let text = render_to_text(
            &[show("Basement Bar", 2026, 11, 2)],
            None,
            MapCamera::Overview,
            &MapSurface::Initializing,
        );
        assert!(text.contains("Preparing map..."));
    }
}
