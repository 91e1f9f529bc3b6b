//! # Show Model
//!
//! The `Show` struct mirrors the JSON the band website serves (camelCase
//! fields, ISO dates, optional coordinates). Everything downstream — the
//! list, the map, the calendar export — reads the same sorted `Vec<Show>`,
//! and a show's position in that vec is its **display index**: the one
//! handle that correlates a list card with its map marker.
//!
//! Parsing is strict: a payload that deserializes but carries an impossible
//! coordinate fails validation, so rendering never sees garbage.

use chrono::NaiveDate;
use serde::Deserialize;

/// Geographic position of a venue.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One scheduled performance, as served in `shows.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub venue: String,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    /// Calendar date only — shows are whole-day events.
    pub date: NaiveDate,
    pub coordinates: Option<Coordinates>,
    pub ticket_url: Option<String>,
    #[serde(default)]
    pub sold_out: bool,
}

/// The single action control a show card offers.
/// Precedence: sold-out badge > ticket link > "coming soon" placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowAction<'a> {
    SoldOut,
    Tickets(&'a str),
    ComingSoon,
}

impl Show {
    /// The action control for this show, by precedence.
    pub fn action(&self) -> ShowAction<'_> {
        if self.sold_out {
            ShowAction::SoldOut
        } else if let Some(url) = self.ticket_url.as_deref() {
            ShowAction::Tickets(url)
        } else {
            ShowAction::ComingSoon
        }
    }

    /// Display location: the street address when known, else "City, ST".
    pub fn location(&self) -> String {
        match self.address.as_deref() {
            Some(addr) => addr.to_string(),
            None => format!("{}, {}", self.city, self.state),
        }
    }

    /// Long-form date for cards and the detail panel,
    /// e.g. "Friday, September 18, 2026".
    pub fn long_date(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }

    /// External map-search deep link for the "directions" action.
    /// None for shows without coordinates.
    pub fn directions_url(&self) -> Option<String> {
        let c = self.coordinates?;
        Some(format!(
            "https://www.openstreetmap.org/search?query={}#map=16/{:.5}/{:.5}",
            urlencoding::encode(&self.venue),
            c.lat,
            c.lng
        ))
    }

    /// Reject payloads that deserialized but make no sense.
    pub fn validate(&self) -> Result<(), String> {
        if self.venue.trim().is_empty() {
            return Err(format!("show on {} has an empty venue", self.date));
        }
        if let Some(c) = self.coordinates {
            if !c.lat.is_finite() || !c.lng.is_finite() {
                return Err(format!("{}: non-finite coordinates", self.venue));
            }
            if !(-90.0..=90.0).contains(&c.lat) || !(-180.0..=180.0).contains(&c.lng) {
                return Err(format!(
                    "{}: coordinates out of range ({}, {})",
                    self.venue, c.lat, c.lng
                ));
            }
        }
        Ok(())
    }
}

/// Sort shows ascending by date. `sort_by_key` is stable, so same-day shows
/// keep their source order — display indices depend on this.
pub fn sort_by_date(shows: &mut [Show]) {
    shows.sort_by_key(|s| s.date);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{show, show_at};

    #[test]
    fn test_sold_out_beats_ticket_link() {
        let mut s = show("The Roxy", 2026, 9, 18);
        s.ticket_url = Some("https://tickets.example/roxy".to_string());
        s.sold_out = true;
        assert_eq!(s.action(), ShowAction::SoldOut);
    }

    #[test]
    fn test_ticket_link_when_not_sold_out() {
        let mut s = show("The Roxy", 2026, 9, 18);
        s.ticket_url = Some("https://tickets.example/roxy".to_string());
        assert_eq!(
            s.action(),
            ShowAction::Tickets("https://tickets.example/roxy")
        );
    }

    #[test]
    fn test_coming_soon_when_no_ticket_url() {
        let s = show("The Roxy", 2026, 9, 18);
        assert_eq!(s.action(), ShowAction::ComingSoon);
    }

    #[test]
    fn test_location_prefers_address() {
        let mut s = show("The Roxy", 2026, 9, 18);
        s.address = Some("9009 W Sunset Blvd".to_string());
        assert_eq!(s.location(), "9009 W Sunset Blvd");
    }

    #[test]
    fn test_location_falls_back_to_city_state() {
        let s = show("The Roxy", 2026, 9, 18);
        assert_eq!(s.location(), "Springfield, IL");
    }

    #[test]
    fn test_long_date_format() {
        let s = show("The Roxy", 2026, 9, 18);
        assert_eq!(s.long_date(), "Friday, September 18, 2026");
    }

    #[test]
    fn test_sort_is_stable_for_same_day_shows() {
        let mut shows = vec![
            show("Later", 2026, 10, 1),
            show("First", 2026, 9, 18),
            show("Second", 2026, 9, 18),
        ];
        sort_by_date(&mut shows);
        let venues: Vec<&str> = shows.iter().map(|s| s.venue.as_str()).collect();
        assert_eq!(venues, vec!["First", "Second", "Later"]);
    }

    #[test]
    fn test_directions_url_encodes_venue_and_coordinates() {
        let s = show_at("First Ave & 7th St", 2026, 9, 18, 44.97813, -93.27623);
        let url = s.directions_url().unwrap();
        assert!(url.contains("First%20Ave%20%26%207th%20St"));
        assert!(url.contains("#map=16/44.97813/-93.27623"));
    }

    #[test]
    fn test_directions_url_absent_without_coordinates() {
        let s = show("The Roxy", 2026, 9, 18);
        assert_eq!(s.directions_url(), None);
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "venue": "The Roxy",
            "address": "9009 W Sunset Blvd",
            "city": "West Hollywood",
            "state": "CA",
            "date": "2026-09-18",
            "coordinates": { "lat": 34.0906, "lng": -118.3884 },
            "ticketUrl": "https://tickets.example/roxy",
            "soldOut": true
        }"#;
        let s: Show = serde_json::from_str(json).unwrap();
        assert_eq!(s.venue, "The Roxy");
        assert_eq!(s.date, NaiveDate::from_ymd_opt(2026, 9, 18).unwrap());
        assert_eq!(s.coordinates.unwrap().lat, 34.0906);
        assert!(s.sold_out);
    }

    #[test]
    fn test_deserialize_sparse_record_defaults() {
        let json = r#"{
            "venue": "Basement Bar",
            "city": "Omaha",
            "state": "NE",
            "date": "2026-11-02"
        }"#;
        let s: Show = serde_json::from_str(json).unwrap();
        assert_eq!(s.address, None);
        assert_eq!(s.coordinates, None);
        assert_eq!(s.ticket_url, None);
        assert!(!s.sold_out);
    }

    #[test]
    fn test_deserialize_rejects_bad_date() {
        let json = r#"{
            "venue": "Basement Bar",
            "city": "Omaha",
            "state": "NE",
            "date": "next friday"
        }"#;
        assert!(serde_json::from_str::<Show>(json).is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_coordinates() {
        let s = show_at("Nowhere", 2026, 9, 18, 123.0, 0.0);
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_venue() {
        let s = show("  ", 2026, 9, 18);
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_show_without_coordinates() {
        let s = show("Basement Bar", 2026, 11, 2);
        assert!(s.validate().is_ok());
    }
}
