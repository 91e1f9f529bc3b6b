//! # TitleBar Component
//!
//! Top status bar showing the band name, the active view, and transient
//! status messages.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational — it receives all data as props and has
//! no internal state, so it renders the same text for the same inputs:
//!
//! ```rust,ignore
//! let title_bar = TitleBar {
//!     band_name: app.band_name.clone(),
//!     view: app.view,
//!     status_message: app.status_message.clone(),
//! };
//! title_bar.render(frame, area);
//! ```
//!
//! ### Conditional Formatting
//!
//! 1. **Status message**: `"The Headliners — Tour Dates [Map] | 3 upcoming shows"`
//! 2. **Default**: `"The Headliners — Tour Dates [List]"`
//!
//! The props come from core `App` state; the TitleBar doesn't care where
//! they come from — it just renders what it's given.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::core::state::View;
use crate::tui::component::Component;

/// Top status bar component.
pub struct TitleBar {
    /// Band name from configuration.
    pub band_name: String,
    /// The active pane, shown as `[List]` or `[Map]`.
    pub view: View,
    /// Transient status (e.g. "Loading shows...", "Calendar saved to ...").
    pub status_message: String,
}

impl TitleBar {
    pub fn new(band_name: String, view: View, status_message: String) -> Self {
        Self {
            band_name,
            view,
            status_message,
        }
    }

    fn view_label(&self) -> &'static str {
        match self.view {
            View::List => "[List]",
            View::Map => "[Map]",
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("{} — Tour Dates {}", self.band_name, self.view_label())
        } else {
            format!(
                "{} — Tour Dates {} | {}",
                self.band_name,
                self.view_label(),
                self.status_message
            )
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
