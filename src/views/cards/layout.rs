//! What a card shows, decided once from the two display models.
//!
//! Every optional element is an `Option` or an enum variant so the painter
//! in `items::card` only has to walk this value.

use chrono::NaiveDate;
use url::Url;

use crate::localization::translate;
use crate::types::{
    ContentListDisplayable, ContentType, DynamicContentDisplayable, Progress, ViewProgress,
};
use crate::ui_constants::card::{DESCRIPTION_MAX_LINES, TITLE_MAX_LINES};

use super::release_date::released_at_date_time_string;

#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// `None` = unlimited.
    pub max_lines: Option<usize>,
}

/// Second slot of the tag row: exactly one of these is shown.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusTag {
    Completed { label: String },
    ReleasedAt(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagRow {
    /// Label of the Pro badge when the item is professional.
    pub pro: Option<String>,
    pub status: StatusTag,
    pub bookmarked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub id: u64,
    pub title: TextLine,
    pub subtitle: TextLine,
    pub artwork_url: Option<Url>,
    pub description: TextLine,
    pub tags: TagRow,
    pub progress: Option<Progress>,
}

impl CardLayout {
    pub fn build(
        model: &ContentListDisplayable,
        dynamic: &DynamicContentDisplayable,
        today: NaiveDate,
    ) -> Self {
        let status = match dynamic.view_progress {
            ViewProgress::Completed => StatusTag::Completed {
                label: translate("tag-completed"),
            },
            ViewProgress::NotStarted | ViewProgress::InProgress(_) => StatusTag::ReleasedAt(
                released_at_date_time_string(model.released_at, model.duration, today),
            ),
        };

        let progress = match dynamic.view_progress {
            ViewProgress::InProgress(p) => Some(p),
            ViewProgress::NotStarted | ViewProgress::Completed => None,
        };

        Self {
            id: model.id,
            title: TextLine {
                text: card_title(model),
                max_lines: Some(TITLE_MAX_LINES),
            },
            subtitle: TextLine {
                text: model.card_view_subtitle.clone(),
                max_lines: None,
            },
            artwork_url: model.card_artwork_url.clone(),
            description: TextLine {
                text: model.description_plain_text.clone(),
                max_lines: Some(DESCRIPTION_MAX_LINES),
            },
            tags: TagRow {
                pro: model.professional.then(|| translate("tag-pro")),
                status,
                bookmarked: dynamic.bookmarked,
            },
            progress,
        }
    }
}

/// Episodes are prefixed with the collection they belong to.
pub fn card_title(model: &ContentListDisplayable) -> String {
    match (&model.parent_name, model.content_type) {
        (Some(parent), ContentType::Episode) => format!("{}: {}", parent, model.name),
        _ => model.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DownloadProgress;
    use chrono::{TimeZone, Utc};
    use strum::IntoEnumIterator;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 2, 1).unwrap()
    }

    fn swiftui_course() -> ContentListDisplayable {
        ContentListDisplayable {
            id: 1,
            name: "Drawing in iOS with SwiftUI".into(),
            parent_name: None,
            content_type: ContentType::Collection,
            card_view_subtitle: "iOS & Swift".into(),
            description_plain_text: "Learn about drawing using SwiftUI by creating custom controls."
                .into(),
            professional: true,
            released_at: Utc.with_ymd_and_hms(2019, 10, 4, 12, 0, 0).unwrap(),
            duration: 10080,
            card_artwork_url: Url::parse("https://example.com/artwork/216.png").ok(),
            ordinal: None,
            technology_triple_string: String::new(),
            content_summary_metadata_string: String::new(),
            contributor_string: String::new(),
            video_identifier: None,
        }
    }

    fn dynamic(view_progress: ViewProgress, bookmarked: bool) -> DynamicContentDisplayable {
        DynamicContentDisplayable {
            view_progress,
            download_progress: DownloadProgress::Downloadable,
            bookmarked,
        }
    }

    fn in_progress(p: f32) -> ViewProgress {
        ViewProgress::InProgress(Progress::new(p).unwrap())
    }

    #[test]
    fn episode_with_parent_is_prefixed() {
        let model = ContentListDisplayable {
            name: "Getting Started".into(),
            parent_name: Some("SwiftUI Fundamentals".into()),
            content_type: ContentType::Episode,
            ..swiftui_course()
        };
        assert_eq!(card_title(&model), "SwiftUI Fundamentals: Getting Started");
    }

    #[test]
    fn only_episodes_with_parent_are_prefixed() {
        for content_type in ContentType::iter() {
            for parent_name in [None, Some("Parent".to_string())] {
                let model = ContentListDisplayable {
                    name: "Name".into(),
                    parent_name: parent_name.clone(),
                    content_type,
                    ..swiftui_course()
                };
                let expected = if content_type == ContentType::Episode && parent_name.is_some() {
                    "Parent: Name"
                } else {
                    "Name"
                };
                assert_eq!(card_title(&model), expected, "{content_type} {parent_name:?}");
            }
        }
    }

    #[test]
    fn branches_follow_view_progress() {
        let model = swiftui_course();
        for (vp, expect_bar, expect_completed) in [
            (ViewProgress::NotStarted, false, false),
            (in_progress(0.0), true, false),
            (in_progress(0.4), true, false),
            (in_progress(1.0), true, false),
            (ViewProgress::Completed, false, true),
        ] {
            let layout = CardLayout::build(&model, &dynamic(vp, false), today());
            assert_eq!(layout.progress.is_some(), expect_bar, "{vp:?}");
            let completed = matches!(layout.tags.status, StatusTag::Completed { .. });
            assert_eq!(completed, expect_completed, "{vp:?}");
        }
    }

    #[test]
    fn pro_and_bookmark_follow_flags() {
        for professional in [false, true] {
            for bookmarked in [false, true] {
                let model = ContentListDisplayable {
                    professional,
                    ..swiftui_course()
                };
                let layout =
                    CardLayout::build(&model, &dynamic(ViewProgress::NotStarted, bookmarked), today());
                assert_eq!(layout.tags.pro.is_some(), professional);
                assert_eq!(layout.tags.bookmarked, bookmarked);
            }
        }
    }

    #[test]
    fn not_started_pro_course() {
        let layout = CardLayout::build(
            &swiftui_course(),
            &dynamic(ViewProgress::NotStarted, false),
            today(),
        );
        assert_eq!(layout.title.text, "Drawing in iOS with SwiftUI");
        assert_eq!(layout.title.max_lines, Some(2));
        assert_eq!(layout.subtitle.max_lines, None);
        assert_eq!(layout.description.max_lines, Some(2));
        assert_eq!(layout.progress, None);
        assert!(!layout.tags.bookmarked);
        assert_eq!(layout.tags.pro.as_deref(), Some("Pro"));
        assert_eq!(
            layout.tags.status,
            StatusTag::ReleasedAt("Oct 4, 2019 • 2 hrs, 48 mins".into())
        );
    }

    #[test]
    fn in_progress_bookmarked_course() {
        let layout = CardLayout::build(&swiftui_course(), &dynamic(in_progress(0.4), true), today());
        assert_eq!(layout.progress.map(Progress::percent), Some(40));
        assert!(layout.tags.bookmarked);
        assert!(matches!(layout.tags.status, StatusTag::ReleasedAt(_)));
    }

    #[test]
    fn completed_course() {
        let layout = CardLayout::build(
            &swiftui_course(),
            &dynamic(ViewProgress::Completed, false),
            today(),
        );
        assert_eq!(
            layout.tags.status,
            StatusTag::Completed {
                label: "Completed".into()
            }
        );
        assert_eq!(layout.progress, None);
    }

    #[test]
    fn missing_artwork_is_omitted() {
        let model = ContentListDisplayable {
            card_artwork_url: None,
            ..swiftui_course()
        };
        let layout = CardLayout::build(&model, &DynamicContentDisplayable::default(), today());
        assert!(layout.artwork_url.is_none());
    }
}
