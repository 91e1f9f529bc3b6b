//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::catalog::{CatalogError, CatalogSource};
use crate::core::show::{Coordinates, Show};
use crate::core::state::App;

/// A canned catalog source for tests that never touch the network.
pub struct StaticCatalog(pub Vec<Show>);

#[async_trait]
impl CatalogSource for StaticCatalog {
    fn origin(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<Vec<Show>, CatalogError> {
        Ok(self.0.clone())
    }
}

/// A show without coordinates or tickets, in the default test town.
pub fn show(venue: &str, year: i32, month: u32, day: u32) -> Show {
    Show {
        venue: venue.to_string(),
        address: None,
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        coordinates: None,
        ticket_url: None,
        sold_out: false,
    }
}

/// Like [`show`], but pinned to a map position.
pub fn show_at(venue: &str, year: i32, month: u32, day: u32, lat: f64, lng: f64) -> Show {
    Show {
        coordinates: Some(Coordinates { lat, lng }),
        ..show(venue, year, month, day)
    }
}

/// Creates a test App backed by an empty StaticCatalog.
pub fn test_app() -> App {
    App::new(
        Arc::new(StaticCatalog(Vec::new())),
        "The Headliners".to_string(),
        std::env::temp_dir(),
    )
}
