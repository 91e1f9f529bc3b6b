//! HTTP catalog source: GETs the band site's static `shows.json`.

use async_trait::async_trait;
use log::{debug, info};

use crate::catalog::source::{CatalogError, CatalogSource};
use crate::core::show::{self, Show};

pub struct HttpCatalog {
    url: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    fn origin(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<Show>, CatalogError> {
        info!("Fetching shows from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        let shows = parse_catalog(&body)?;
        debug!("Fetched {} shows", shows.len());
        Ok(shows)
    }
}

/// Deserialize, validate, and date-sort a shows payload. This is the single
/// place the catalog gets sorted — list, map, and export all consume the
/// result as-is.
pub fn parse_catalog(body: &str) -> Result<Vec<Show>, CatalogError> {
    let mut shows: Vec<Show> =
        serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))?;
    for s in &shows {
        s.validate().map_err(CatalogError::Parse)?;
    }
    show::sort_by_date(&mut shows);
    Ok(shows)
}
