use serde::{Deserialize, Serialize};

use std::fmt;

fn is_false(value: &bool) -> bool {
    !value
}

/// A single styled, optionally-translated unit of text within an action's
/// text field.
///
/// `translation` is always an array (never null) and `is_blank` defaults to
/// false; style flags are omitted from the wire format when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub text: String,
    #[serde(default)]
    pub translation: Vec<String>,
    #[serde(default)]
    pub is_blank: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub highlight: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl Word {
    /// Create an unstyled, untranslated word.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            translation: Vec::new(),
            is_blank: false,
            bold: false,
            italic: false,
            underline: false,
            highlight: false,
            audio_url: None,
        }
    }

    /// Read one style flag.
    pub fn style(&self, flag: StyleFlag) -> bool {
        match flag {
            StyleFlag::Bold => self.bold,
            StyleFlag::Italic => self.italic,
            StyleFlag::Underline => self.underline,
            StyleFlag::Highlight => self.highlight,
        }
    }

    /// Write one style flag.
    pub fn set_style(&mut self, flag: StyleFlag, on: bool) {
        match flag {
            StyleFlag::Bold => self.bold = on,
            StyleFlag::Italic => self.italic = on,
            StyleFlag::Underline => self.underline = on,
            StyleFlag::Highlight => self.highlight = on,
        }
    }
}

/// The four togglable text styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleFlag {
    Bold,
    Italic,
    Underline,
    Highlight,
}

impl StyleFlag {
    /// Every style flag, for iteration in tests and toolbars.
    pub const ALL: [StyleFlag; 4] = [
        StyleFlag::Bold,
        StyleFlag::Italic,
        StyleFlag::Underline,
        StyleFlag::Highlight,
    ];
}

impl fmt::Display for StyleFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleFlag::Bold => write!(f, "bold"),
            StyleFlag::Italic => write!(f, "italic"),
            StyleFlag::Underline => write!(f, "underline"),
            StyleFlag::Highlight => write!(f, "highlight"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_word_has_empty_translation_and_no_styles() {
        let word = Word::plain("hello");
        assert_eq!(word.text, "hello");
        assert!(word.translation.is_empty());
        assert!(!word.is_blank);
        for flag in StyleFlag::ALL {
            assert!(!word.style(flag));
        }
    }

    #[test]
    fn deserialize_minimal_word_defaults_translation() {
        let word: Word = serde_json::from_str(r#"{"text":"hola"}"#).unwrap();
        assert_eq!(word.text, "hola");
        assert_eq!(word.translation, Vec::<String>::new());
        assert!(!word.is_blank);
        assert!(!word.bold);
    }

    #[test]
    fn serialize_omits_unset_flags() {
        let mut word = Word::plain("hi");
        word.set_style(StyleFlag::Bold, true);
        let json = serde_json::to_value(&word).unwrap();
        assert_eq!(json["bold"], true);
        assert!(json.get("italic").is_none());
        assert!(json.get("audioUrl").is_none());
        // translation always serializes, even when empty
        assert_eq!(json["translation"], serde_json::json!([]));
    }

    #[test]
    fn style_flags_round_trip_through_accessors() {
        let mut word = Word::plain("w");
        for flag in StyleFlag::ALL {
            word.set_style(flag, true);
            assert!(word.style(flag));
            word.set_style(flag, false);
            assert!(!word.style(flag));
        }
    }
}
