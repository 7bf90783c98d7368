// Items shown in the card list: a JSON catalog file, or the built-in
// preview set when no file is configured.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use url::Url;

use crate::types::{
    ContentListDisplayable, ContentType, DownloadProgress, DynamicContentDisplayable, Progress,
    ViewProgress,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub content: ContentListDisplayable,
    #[serde(default)]
    pub dynamic: DynamicContentDisplayable,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>, CatalogError> {
    let display = path.to_string_lossy().to_string();
    let data = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: display.clone(),
        source,
    })?;
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(&data).map_err(|source| CatalogError::Json {
            path: display.clone(),
            source,
        })?;
    log::info!("Loaded {} catalog entries from {}", entries.len(), display);
    Ok(entries)
}

const PREVIEW_ARTWORK: &str =
    "https://files.betamax.raywenderlich.com/attachments/collections/216/9eb9899d-47d0-429d-96f0-e15ac9542ecc.png";

fn preview_content(id: u64, released_at: DateTime<Utc>) -> ContentListDisplayable {
    ContentListDisplayable {
        id,
        name: "Drawing in iOS with SwiftUI".into(),
        parent_name: None,
        content_type: ContentType::Collection,
        card_view_subtitle: "iOS & Swift".into(),
        description_plain_text: "Learn about drawing using SwiftUI by creating custom controls using a combination of SwiftUI and something else that will be cut off".into(),
        professional: true,
        released_at,
        duration: 10080,
        card_artwork_url: Url::parse(PREVIEW_ARTWORK).ok(),
        ordinal: None,
        technology_triple_string: "Swift 5.1, iOS 13, Xcode 11".into(),
        content_summary_metadata_string: "Video Course (2 hrs, 48 mins)".into(),
        contributor_string: "By Audrey Tam".into(),
        video_identifier: None,
    }
}

fn in_progress(p: f32) -> ViewProgress {
    ViewProgress::InProgress(Progress::clamped(p))
}

/// One card per interesting combination of flags and progress.
pub fn preview_catalog(now: DateTime<Utc>) -> Vec<CatalogEntry> {
    let dynamic = |view_progress, bookmarked| DynamicContentDisplayable {
        view_progress,
        download_progress: DownloadProgress::Downloadable,
        bookmarked,
    };

    vec![
        CatalogEntry {
            content: ContentListDisplayable {
                professional: false,
                ..preview_content(1, now)
            },
            dynamic: dynamic(ViewProgress::NotStarted, false),
        },
        CatalogEntry {
            content: preview_content(2, now),
            dynamic: dynamic(in_progress(0.4), true),
        },
        CatalogEntry {
            content: preview_content(3, now),
            dynamic: dynamic(ViewProgress::Completed, false),
        },
        CatalogEntry {
            content: preview_content(4, now),
            dynamic: dynamic(in_progress(0.8), false),
        },
        CatalogEntry {
            content: preview_content(5, now),
            dynamic: dynamic(ViewProgress::NotStarted, false),
        },
        CatalogEntry {
            content: ContentListDisplayable {
                name: "Getting Started".into(),
                parent_name: Some("Drawing in iOS with SwiftUI".into()),
                content_type: ContentType::Episode,
                duration: 840,
                ordinal: Some(1),
                card_artwork_url: None,
                ..preview_content(6, now)
            },
            dynamic: dynamic(ViewProgress::NotStarted, true),
        },
    ]
}
