//! Locale tags and locale-aware case mapping.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A BCP 47-ish language tag (only the primary language subtag matters here).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(Cow<'static, str>);

impl Locale {
    /// English
    pub const ENGLISH: Self = Self(Cow::Borrowed("en"));
    /// Russian
    pub const RUSSIAN: Self = Self(Cow::Borrowed("ru"));
    /// Ukrainian
    pub const UKRAINIAN: Self = Self(Cow::Borrowed("uk"));
    /// Arabic
    pub const ARABIC: Self = Self(Cow::Borrowed("ar"));
    /// Turkish
    pub const TURKISH: Self = Self(Cow::Borrowed("tr"));

    /// Creates a locale from a language tag such as `"de"` or `"tr-TR"`.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Cow::Owned(tag.into()))
    }

    /// Full tag as given.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.0
    }

    /// Primary language subtag, lower-cased.
    #[must_use]
    pub fn language(&self) -> String {
        self.0
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }

    /// Upper-cases `text` using this locale's rules.
    ///
    /// Turkic languages map the dotted and dotless i separately; everything
    /// else uses the Unicode default mapping.
    #[must_use]
    pub fn to_upper(&self, text: &str) -> String {
        match self.language().as_str() {
            "tr" | "az" => text
                .chars()
                .flat_map(|c| match c {
                    'i' => vec!['İ'],
                    'ı' => vec!['I'],
                    other => other.to_uppercase().collect(),
                })
                .collect(),
            _ => text.to_uppercase(),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::ENGLISH
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
