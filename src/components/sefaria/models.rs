use crate::utils::text::RawText;
use serde::de::IgnoredAny;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

/// The daily study texts tracked by the digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentCategory {
    Tanya,
    Rambam,
    DafYomi,
    HalakhahYomit,
}

impl ContentCategory {
    /// Processing order used by the digest
    pub const ALL: [ContentCategory; 4] = [
        ContentCategory::Tanya,
        ContentCategory::Rambam,
        ContentCategory::DafYomi,
        ContentCategory::HalakhahYomit,
    ];

    /// Title as it appears in `calendar_items[].title.en`
    pub fn calendar_title(self) -> &'static str {
        match self {
            ContentCategory::Tanya => "Tanya Yomi",
            ContentCategory::Rambam => "Daily Rambam (3 Chapters)",
            ContentCategory::DafYomi => "Daf Yomi",
            ContentCategory::HalakhahYomit => "Halakhah Yomit",
        }
    }

    /// Short name used in prompts and error messages
    pub fn label(self) -> &'static str {
        match self {
            ContentCategory::Tanya => "Tanya",
            ContentCategory::Rambam => "Rambam",
            ContentCategory::DafYomi => "Daf Yomi",
            ContentCategory::HalakhahYomit => "Halakhah Yomit",
        }
    }

    /// Whether the reading spans from today's reference to tomorrow's
    pub fn is_ranged(self) -> bool {
        matches!(self, ContentCategory::Tanya)
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Response of the calendars endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarResponse {
    /// Day the upstream served, `YYYY-MM-DD`
    pub date: Option<String>,
    #[serde(default)]
    pub calendar_items: Vec<CalendarItem>,
}

impl CalendarResponse {
    pub fn served_date(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
    }
}

/// One scheduled reading
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarItem {
    #[serde(default)]
    pub title: CalendarTitle,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarTitle {
    #[serde(default)]
    pub en: String,
}

/// Reference identifier(s) resolved from the calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedReference {
    Single(String),
    /// Today's reference through tomorrow's
    Range(String, String),
}

impl fmt::Display for ResolvedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedReference::Single(reference) => f.write_str(reference),
            ResolvedReference::Range(start, end) => write!(f, "{} - {}", start, end),
        }
    }
}

/// Response of the texts endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextResponse {
    #[serde(default)]
    pub versions: Vec<TextVersion>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextVersion {
    #[serde(default)]
    pub text: VersionText,
}

/// A version's `text` field; anything other than an array reads as empty
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum VersionText {
    Fragments(Vec<RawText>),
    Other(IgnoredAny),
}

impl Default for VersionText {
    fn default() -> Self {
        VersionText::Fragments(Vec::new())
    }
}

impl TextResponse {
    /// Fragments of the first returned version
    pub fn first_version_fragments(&self) -> &[RawText] {
        match self.versions.first().map(|version| &version.text) {
            Some(VersionText::Fragments(fragments)) => fragments.as_slice(),
            _ => &[],
        }
    }
}
