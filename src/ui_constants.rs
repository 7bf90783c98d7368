// Layout numbers shared by the card list.

/// Default card width in logical pixels
pub const CARD_WIDTH: f32 = 420.0;

/// Gap between cards in the list
pub const CARD_GAP: f32 = 12.0;

pub mod spacing {
    /// Medium spacing (8px)
    pub const MEDIUM: f32 = 8.0;

    /// Large spacing (16px)
    pub const LARGE: f32 = 16.0;
}

/// Card-specific layout constants
pub mod card {
    /// Inner margin of the card body
    pub const PADDING: f32 = 15.0;

    /// Corner radius of the card
    pub const ROUNDING: f32 = 6.0;

    /// Vertical gap inside the title/subtitle stack
    pub const TEXT_STACK_SPACING: f32 = 5.0;

    /// Room kept free to the right of the title
    pub const TITLE_TRAILING: f32 = 15.0;

    pub const TITLE_MAX_LINES: usize = 2;

    pub const DESCRIPTION_MAX_LINES: usize = 2;

    /// Extra leading between description lines
    pub const DESCRIPTION_LINE_SPACING: f32 = 3.0;

    /// Gap above the tag row
    pub const TAG_ROW_TOP_GAP: f32 = 18.0;

    /// Gap after the Pro badge
    pub const PRO_TRAILING: f32 = 5.0;

    pub const BOOKMARK_SIZE: f32 = 21.0;
}

pub mod thumbnail {
    pub const SIZE: f32 = 60.0;

    pub const ROUNDING: f32 = 6.0;

    /// Fade-in duration once the texture is ready
    pub const FADE_SECS: f32 = 0.3;
}

pub mod tag {
    pub const HEIGHT: f32 = 20.0;

    pub const PAD_X: f32 = 6.0;

    pub const ROUNDING: f32 = 4.0;
}

pub mod progress_bar {
    pub const HEIGHT: f32 = 4.0;
}
