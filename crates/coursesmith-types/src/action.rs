//! The closed sum of session content blocks ("actions") and the default
//! content registry.
//!
//! Every action on the wire is an object tagged by `"type"`; the tag set is
//! closed. [`ActionType`] enumerates the tags, [`ActionContent`] carries the
//! per-tag payloads, and [`ActionType::default_content`] is the registry
//! producing the canonical empty shape for each tag. A content value whose
//! fields disagree with its tag is unrepresentable by construction.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::word::Word;

fn default_true() -> bool {
    true
}

fn default_explain_size() -> u32 {
    16
}

/// Tag for one of the twelve action content variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    Explain,
    Reading,
    Audio,
    Image,
    Chat,
    Choice,
    MatchCard,
    FillSentenceByTyping,
    FillSentenceWithChoice,
    WriteSentence,
    WriteSentenceInChat,
    Column,
}

impl ActionType {
    /// Every tag, for exhaustiveness tests and "add action" menus.
    pub const ALL: [ActionType; 12] = [
        ActionType::Explain,
        ActionType::Reading,
        ActionType::Audio,
        ActionType::Image,
        ActionType::Chat,
        ActionType::Choice,
        ActionType::MatchCard,
        ActionType::FillSentenceByTyping,
        ActionType::FillSentenceWithChoice,
        ActionType::WriteSentence,
        ActionType::WriteSentenceInChat,
        ActionType::Column,
    ];

    /// The registry: canonical default content for this tag.
    ///
    /// Pure function of the tag; the match is exhaustive so adding a variant
    /// without a default fails to compile.
    pub fn default_content(self) -> ActionContent {
        match self {
            ActionType::Explain => ActionContent::Explain {
                text: Vec::new(),
                alignment: Alignment::Left,
                size: 16,
            },
            ActionType::Reading => ActionContent::Reading {
                text: Vec::new(),
                is_hide: false,
                is_readable: true,
            },
            ActionType::Audio => ActionContent::Audio {
                audio: String::new(),
            },
            ActionType::Image => ActionContent::Image { url: String::new() },
            ActionType::Chat => ActionContent::Chat {
                text: Vec::new(),
                sender: ChatSender::default(),
                position: ChatPosition::Left,
                is_display: true,
                is_readable: true,
            },
            ActionType::Choice => ActionContent::Choice { items: Vec::new() },
            ActionType::MatchCard => ActionContent::MatchCard { items: Vec::new() },
            ActionType::FillSentenceByTyping => ActionContent::FillSentenceByTyping {
                sentence: Vec::new(),
            },
            ActionType::FillSentenceWithChoice => ActionContent::FillSentenceWithChoice {
                sentence: Vec::new(),
            },
            ActionType::WriteSentence => ActionContent::WriteSentence {
                sentence: Vec::new(),
                expect_sentence: Vec::new(),
            },
            ActionType::WriteSentenceInChat => ActionContent::WriteSentenceInChat {
                sentence: Vec::new(),
                expect_sentence: Vec::new(),
                position: ChatPosition::Left,
            },
            ActionType::Column => ActionContent::Column {
                actions: Vec::new(),
            },
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionType::Explain => "Explain",
            ActionType::Reading => "Reading",
            ActionType::Audio => "Audio",
            ActionType::Image => "Image",
            ActionType::Chat => "Chat",
            ActionType::Choice => "Choice",
            ActionType::MatchCard => "MatchCard",
            ActionType::FillSentenceByTyping => "FillSentenceByTyping",
            ActionType::FillSentenceWithChoice => "FillSentenceWithChoice",
            ActionType::WriteSentence => "WriteSentence",
            ActionType::WriteSentenceInChat => "WriteSentenceInChat",
            ActionType::Column => "Column",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ActionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Explain" => Ok(ActionType::Explain),
            "Reading" => Ok(ActionType::Reading),
            "Audio" => Ok(ActionType::Audio),
            "Image" => Ok(ActionType::Image),
            "Chat" => Ok(ActionType::Chat),
            "Choice" => Ok(ActionType::Choice),
            "MatchCard" => Ok(ActionType::MatchCard),
            "FillSentenceByTyping" => Ok(ActionType::FillSentenceByTyping),
            "FillSentenceWithChoice" => Ok(ActionType::FillSentenceWithChoice),
            "WriteSentence" => Ok(ActionType::WriteSentence),
            "WriteSentenceInChat" => Ok(ActionType::WriteSentenceInChat),
            "Column" => Ok(ActionType::Column),
            other => Err(format!("invalid action type: '{other}'")),
        }
    }
}

/// Horizontal alignment for explanatory text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::Left
    }
}

/// Side of the chat a bubble (or answer input) sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatPosition {
    Left,
    Right,
}

impl Default for ChatPosition {
    fn default() -> Self {
        ChatPosition::Left
    }
}

/// Display identity of a chat bubble's sender.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSender {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
}

/// One selectable answer in a multiple-choice action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceItem {
    pub text: Word,
    #[serde(default)]
    pub is_correct: bool,
}

/// One side of a matching card: either text or an audio clip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

/// A left/right pair the learner must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCardItem {
    pub left: MatchSide,
    pub right: MatchSide,
}

/// One segment of a typed fill-in-the-blank sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingSegment {
    pub text: String,
    #[serde(default)]
    pub is_blank: bool,
}

/// One segment of a choice-based fill-in-the-blank sentence.
///
/// `in_sentence` marks whether the segment renders inline; `choice` carries
/// the distractor offered for a blank, when any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceSegment {
    pub text: String,
    #[serde(default)]
    pub is_blank: bool,
    #[serde(default)]
    pub in_sentence: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice: Option<String>,
}

/// The restricted sub-variant set a layout column may nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum ColumnAction {
    Image {
        url: String,
    },
    Reading {
        #[serde(default)]
        text: Vec<Word>,
        #[serde(default)]
        is_hide: bool,
        #[serde(default = "default_true")]
        is_readable: bool,
    },
    Audio {
        audio: String,
    },
}

impl ColumnAction {
    /// The tag of the nested variant, drawn from the outer tag set.
    pub fn action_type(&self) -> ActionType {
        match self {
            ColumnAction::Image { .. } => ActionType::Image,
            ColumnAction::Reading { .. } => ActionType::Reading,
            ColumnAction::Audio { .. } => ActionType::Audio,
        }
    }
}

/// Content payload of one action, tagged by `"type"` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum ActionContent {
    /// Explanatory text with alignment and font size.
    Explain {
        #[serde(default)]
        text: Vec<Word>,
        #[serde(default)]
        alignment: Alignment,
        #[serde(default = "default_explain_size")]
        size: u32,
    },
    /// A reading passage, optionally hidden until revealed.
    Reading {
        #[serde(default)]
        text: Vec<Word>,
        #[serde(default)]
        is_hide: bool,
        #[serde(default = "default_true")]
        is_readable: bool,
    },
    /// A standalone audio clip.
    Audio {
        #[serde(default)]
        audio: String,
    },
    /// A standalone image.
    Image {
        #[serde(default)]
        url: String,
    },
    /// A chat bubble attributed to a named sender.
    Chat {
        #[serde(default)]
        text: Vec<Word>,
        #[serde(default)]
        sender: ChatSender,
        #[serde(default)]
        position: ChatPosition,
        #[serde(default = "default_true")]
        is_display: bool,
        #[serde(default = "default_true")]
        is_readable: bool,
    },
    /// Multiple choice over styled words.
    Choice {
        #[serde(default)]
        items: Vec<ChoiceItem>,
    },
    /// Card matching pairs.
    MatchCard {
        #[serde(default)]
        items: Vec<MatchCardItem>,
    },
    /// Fill-in-the-blank answered by typing.
    FillSentenceByTyping {
        #[serde(default)]
        sentence: Vec<TypingSegment>,
    },
    /// Fill-in-the-blank answered by choosing among offered words.
    FillSentenceWithChoice {
        #[serde(default)]
        sentence: Vec<ChoiceSegment>,
    },
    /// Free sentence construction against an expected answer.
    WriteSentence {
        #[serde(default)]
        sentence: Vec<String>,
        #[serde(default)]
        expect_sentence: Vec<String>,
    },
    /// Free sentence construction rendered as a chat reply.
    WriteSentenceInChat {
        #[serde(default)]
        sentence: Vec<String>,
        #[serde(default)]
        expect_sentence: Vec<String>,
        #[serde(default)]
        position: ChatPosition,
    },
    /// A layout column nesting up to [`COLUMN_MAX_ACTIONS`] restricted
    /// sub-actions.
    Column {
        #[serde(default)]
        actions: Vec<ColumnAction>,
    },
}

/// Upper bound on nested actions inside a [`ActionContent::Column`].
pub const COLUMN_MAX_ACTIONS: usize = 2;

impl ActionContent {
    /// The tag this content belongs to.
    pub fn action_type(&self) -> ActionType {
        match self {
            ActionContent::Explain { .. } => ActionType::Explain,
            ActionContent::Reading { .. } => ActionType::Reading,
            ActionContent::Audio { .. } => ActionType::Audio,
            ActionContent::Image { .. } => ActionType::Image,
            ActionContent::Chat { .. } => ActionType::Chat,
            ActionContent::Choice { .. } => ActionType::Choice,
            ActionContent::MatchCard { .. } => ActionType::MatchCard,
            ActionContent::FillSentenceByTyping { .. } => ActionType::FillSentenceByTyping,
            ActionContent::FillSentenceWithChoice { .. } => ActionType::FillSentenceWithChoice,
            ActionContent::WriteSentence { .. } => ActionType::WriteSentence,
            ActionContent::WriteSentenceInChat { .. } => ActionType::WriteSentenceInChat,
            ActionContent::Column { .. } => ActionType::Column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_has_a_default_that_round_trips() {
        for tag in ActionType::ALL {
            let content = tag.default_content();
            assert_eq!(content.action_type(), tag, "default content for {tag} carries wrong tag");
            // and the default survives serde intact
            let json = serde_json::to_string(&content).unwrap();
            let back: ActionContent = serde_json::from_str(&json).unwrap();
            assert_eq!(back, content, "default content for {tag} lost fields in serde");
        }
    }

    #[test]
    fn action_type_display_from_str_round_trip() {
        for tag in ActionType::ALL {
            let parsed: ActionType = tag.to_string().parse().unwrap();
            assert_eq!(parsed, tag);
        }
        assert!("Bogus".parse::<ActionType>().is_err());
    }

    #[test]
    fn explain_default_matches_canonical_shape() {
        let content = ActionType::Explain.default_content();
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "Explain", "text": [], "alignment": "left", "size": 16})
        );
    }

    #[test]
    fn chat_default_matches_canonical_shape() {
        let content = ActionType::Chat.default_content();
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "Chat",
                "text": [],
                "sender": {"name": "", "imageUrl": ""},
                "position": "left",
                "isDisplay": true,
                "isReadable": true
            })
        );
    }

    #[test]
    fn tagged_union_deserializes_from_wire_shape() {
        let content: ActionContent = serde_json::from_str(
            r#"{"type":"FillSentenceByTyping","sentence":[{"text":"der","isBlank":true},{"text":"Hund","isBlank":false}]}"#,
        )
        .unwrap();
        match content {
            ActionContent::FillSentenceByTyping { sentence } => {
                assert_eq!(sentence.len(), 2);
                assert!(sentence[0].is_blank);
                assert_eq!(sentence[1].text, "Hund");
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let content: ActionContent =
            serde_json::from_str(r#"{"type":"Reading","text":[]}"#).unwrap();
        match content {
            ActionContent::Reading { is_hide, is_readable, .. } => {
                assert!(!is_hide);
                assert!(is_readable);
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn column_nests_restricted_sub_variants() {
        let content: ActionContent = serde_json::from_str(
            r#"{"type":"Column","actions":[{"type":"Image","url":"a.png"},{"type":"Audio","audio":"b.mp3"}]}"#,
        )
        .unwrap();
        match content {
            ActionContent::Column { actions } => {
                assert_eq!(actions.len(), 2);
                assert_eq!(actions[0].action_type(), ActionType::Image);
                assert_eq!(actions[1].action_type(), ActionType::Audio);
            }
            other => panic!("wrong variant: {other:?}"),
        }
        // Explain is not a legal column child
        assert!(
            serde_json::from_str::<ColumnAction>(r#"{"type":"Explain","text":[]}"#).is_err()
        );
    }
}
