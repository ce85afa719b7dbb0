// SPDX-License-Identifier: MPL-2.0
//! Thumbnail download.

use iced::widget::image;
use std::time::Duration;

use crate::error::{Error, Result};

/// Upper bound for a single thumbnail request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Downloads thumbnails into iced image handles.
#[derive(Debug, Clone)]
pub struct ThumbnailFetcher {
    client: reqwest::Client,
}

impl ThumbnailFetcher {
    /// Creates a fetcher sending `user_agent`, if given.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(user_agent: Option<&str>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().timeout(REQUEST_TIMEOUT);
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent.to_string());
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Fetches `url` and returns the image bytes as a handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] on transport failures, HTTP error statuses
    /// and non-image responses.
    pub async fn fetch(&self, url: &str) -> Result<image::Handle> {
        let response = self.client.get(url).send().await?.error_for_status()?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());
        check_content_type(content_type)?;

        let bytes = response.bytes().await?;
        log::debug!("fetched thumbnail {url} ({} bytes)", bytes.len());
        Ok(image::Handle::from_bytes(bytes.to_vec()))
    }
}

/// Fetches one thumbnail with a default client.
///
/// # Errors
///
/// See [`ThumbnailFetcher::fetch`].
pub async fn fetch_thumbnail(url: String) -> Result<image::Handle> {
    ThumbnailFetcher::new(None)?.fetch(&url).await
}

/// Accepts `image/*` responses and responses without a content type.
fn check_content_type(content_type: Option<&str>) -> Result<()> {
    match content_type {
        None => Ok(()),
        Some(value) if value.trim().to_ascii_lowercase().starts_with("image/") => Ok(()),
        Some(value) => Err(Error::Network(format!(
            "expected an image, got content type '{value}'"
        ))),
    }
}
