// SPDX-License-Identifier: MPL-2.0
//! Remote media loading.
//!
//! Only thumbnails are fetched here. Video data is streamed by the media
//! element itself.

pub mod thumbnail;

pub use thumbnail::{fetch_thumbnail, ThumbnailFetcher};
