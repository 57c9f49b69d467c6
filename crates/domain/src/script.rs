//! Screenplay parts: the tagged sum type behind trailer scripts and opening
//! cinematics. Each part is one cue in a screenplay; the `kind` tag is the
//! discriminant on the wire.

use serde::{Deserialize, Serialize};

/// One screenplay cue. Dialogue and narration carry a speaking character and
/// the language the line is delivered in; the remaining kinds are pure text.
///
/// Rendering matches exhaustively on this enum, so adding a part kind is a
/// compile error until every projection handles it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ScriptPart {
    /// Voice-over narration.
    Narration {
        character: String,
        language: String,
        text: String,
    },
    /// An on-screen character speaking.
    Dialogue {
        character: String,
        language: String,
        text: String,
    },
    /// Stage direction: what happens in the shot.
    Action { text: String },
    /// Camera direction.
    Camera { text: String },
    SoundEffect { text: String },
    /// A hard cut, with what we cut to.
    Cut { text: String },
    /// Text displayed full-screen.
    TitleCard { text: String },
}

impl ScriptPart {
    /// The cue text, regardless of kind.
    pub fn text(&self) -> &str {
        match self {
            Self::Narration { text, .. }
            | Self::Dialogue { text, .. }
            | Self::Action { text }
            | Self::Camera { text }
            | Self::SoundEffect { text }
            | Self::Cut { text }
            | Self::TitleCard { text } => text,
        }
    }

    /// Speaker and language, for the kinds that have one.
    pub fn speaker(&self) -> Option<(&str, &str)> {
        match self {
            Self::Narration {
                character, language, ..
            }
            | Self::Dialogue {
                character, language, ..
            } => Some((character, language)),
            _ => None,
        }
    }

    /// The wire-level discriminant for this part.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Narration { .. } => "narration",
            Self::Dialogue { .. } => "dialogue",
            Self::Action { .. } => "action",
            Self::Camera { .. } => "camera",
            Self::SoundEffect { .. } => "soundEffect",
            Self::Cut { .. } => "cut",
            Self::TitleCard { .. } => "titleCard",
        }
    }

    /// Every discriminant the wire format accepts, in declaration order.
    pub const KINDS: [&'static str; 7] = [
        "narration",
        "dialogue",
        "action",
        "camera",
        "soundEffect",
        "cut",
        "titleCard",
    ];
}

/// An ordered screenplay. Order is meaning here: parts render exactly in the
/// order the document lists them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screenplay {
    pub parts: Vec<ScriptPart>,
}
