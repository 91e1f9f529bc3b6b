use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events
pub enum TuiEvent {
    /// Ctrl+C — quits regardless of view.
    ForceQuit,
    Quit,
    /// Tab — flip between the list and the map.
    ToggleView,
    /// Esc — back to the list from anywhere.
    BackToList,
    CursorUp,
    CursorDown,
    /// Enter — "view on map" for the selected card.
    Submit,
    /// e — export the catalog as a calendar file.
    Export,
    /// d — open directions for the selected show.
    Directions,
    /// r — reload the catalog.
    Reload,
    /// 1-9 — jump to the pin with that label (map view only).
    PinDigit(usize),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Tab) => Some(TuiEvent::ToggleView),
                (_, KeyCode::Esc) => Some(TuiEvent::BackToList),
                (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Char('e')) => Some(TuiEvent::Export),
                (_, KeyCode::Char('d')) => Some(TuiEvent::Directions),
                (_, KeyCode::Char('r')) => Some(TuiEvent::Reload),
                (_, KeyCode::Char(c @ '1'..='9')) => {
                    Some(TuiEvent::PinDigit(c as usize - '0' as usize))
                }
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
