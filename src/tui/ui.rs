use crate::core::state::{App, View};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DetailPanel, MapView, ShowList, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Height of the detail panel under the map.
const DETAIL_HEIGHT: u16 = 7;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, status_area] = layout.areas(frame.area());

    // Title bar
    let mut title_bar = TitleBar::new(
        app.band_name.clone(),
        app.view,
        app.status_message.clone(),
    );
    title_bar.render(frame, title_area);

    // Main area — loading spinner, inline error, empty-state guidance,
    // or the active view
    if app.is_loading {
        draw_loading_view(frame, main_area, spinner_frame);
    } else if let Some(error_msg) = &app.load_error {
        draw_error_view(frame, main_area, error_msg);
    } else if app.is_empty_catalog() {
        draw_empty_view(frame, main_area);
    } else {
        match app.view {
            View::List => {
                let mut list = ShowList::new(&mut tui.show_list, &app.shows, app.selected);
                list.render(frame, main_area);
            }
            View::Map => {
                let [map_area, detail_area] =
                    Layout::vertical([Min(0), Length(DETAIL_HEIGHT)]).areas(main_area);
                let mut map = MapView {
                    shows: &app.shows,
                    markers: &app.markers,
                    selected: app.selected,
                    camera: app.camera,
                    surface: &app.surface,
                };
                map.render(frame, map_area);
                let mut panel = DetailPanel {
                    show: app.selected_show(),
                };
                panel.render(frame, detail_area);
            }
        }
    }

    // Key hints
    frame.render_widget(
        Span::styled(key_hints(app.view), Style::default().add_modifier(Modifier::DIM)),
        status_area,
    );
}

fn key_hints(view: View) -> &'static str {
    match view {
        View::List => "q quit · tab map · up/down select · enter view on map · e export · r reload",
        View::Map => "q quit · esc list · up/down pins · 1-9 jump · d directions · e export",
    }
}

fn draw_loading_view(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let paragraph = Paragraph::new(format!("{spinner} Loading shows..."))
        .block(Block::bordered())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Load failure: an inline error pane, never a crash. The user retries
/// with a reload.
fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let text = format!("Couldn't load shows.\n\n{error_msg}\n\nPress r to retry.");
    let error_paragraph = Paragraph::new(text)
        .block(Block::bordered().title(" ERROR "))
        .alignment(Alignment::Center);
    frame.render_widget(error_paragraph, area);
}

/// Loaded fine, nothing booked — guidance, not an error.
fn draw_empty_view(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("No shows on the books right now.\nCheck back soon!")
        .block(Block::bordered().title(" Shows "))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
