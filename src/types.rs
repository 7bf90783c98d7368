// Read-only display models handed to the card by its container.
// Both are value snapshots: nothing in the card mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(
    strum::EnumCount, strum::EnumIter, strum::Display, Debug, Clone, Copy, PartialEq, Eq, Default,
    Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentType {
    #[default]
    Collection,
    Episode,
    Screencast,
    Product,
}

#[derive(Debug, Error, PartialEq)]
pub enum ProgressError {
    #[error("progress must be within 0.0..=1.0, got {0}")]
    OutOfRange(f32),
}

/// Completion fraction, always within `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Progress(f32);

impl Progress {
    pub fn new(value: f32) -> Result<Self, ProgressError> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ProgressError::OutOfRange(value))
        }
    }

    /// Clamp into range; NaN becomes 0.
    pub fn clamped(value: f32) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }

    /// Whole percent, rounded to nearest.
    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl TryFrom<f32> for Progress {
    type Error = ProgressError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Progress::new(value)
    }
}

impl From<Progress> for f32 {
    fn from(p: Progress) -> f32 {
        p.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "progress", rename_all = "snake_case")]
pub enum ViewProgress {
    #[default]
    NotStarted,
    InProgress(Progress),
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "progress", rename_all = "snake_case")]
pub enum DownloadProgress {
    #[default]
    Downloadable,
    Enqueued,
    InProgress(Progress),
    Downloaded,
    NotDownloadable,
}

/// Static description of one catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentListDisplayable {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(default)]
    pub card_view_subtitle: String,
    #[serde(default)]
    pub description_plain_text: String,
    #[serde(default)]
    pub professional: bool,
    pub released_at: DateTime<Utc>,
    /// Seconds.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub card_artwork_url: Option<Url>,
    #[serde(default)]
    pub ordinal: Option<u32>,
    #[serde(default)]
    pub technology_triple_string: String,
    #[serde(default)]
    pub content_summary_metadata_string: String,
    #[serde(default)]
    pub contributor_string: String,
    #[serde(default)]
    pub video_identifier: Option<u64>,
}

/// Per-user state of an item.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DynamicContentDisplayable {
    #[serde(default)]
    pub view_progress: ViewProgress,
    #[serde(default)]
    pub download_progress: DownloadProgress,
    #[serde(default)]
    pub bookmarked: bool,
}
