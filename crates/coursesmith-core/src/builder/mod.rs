//! The ephemeral session document model.
//!
//! While a session is open for editing it is represented as an ordered tree
//! of [`Screen`]s and [`Action`]s carrying ephemeral identities. None of the
//! ephemeral state (ids, collapse flags, local display counters) survives a
//! save: [`engine::SessionBuilder::screens_payload`] strips it and recomputes
//! every `sequence` from array position.

use uuid::Uuid;

use coursesmith_types::action::ActionContent;

use std::fmt;

mod engine;

pub use engine::SessionBuilder;

/// Identifier for a screen, valid only within one open editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(pub Uuid);

impl ScreenId {
    /// Fresh ephemeral id (UUID v7; uniqueness within the session is the
    /// only invariant relied upon).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ScreenId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for an action, valid only within one open editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub Uuid);

impl ActionId {
    /// Fresh ephemeral id.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ActionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One content block inside a screen, as held in the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub id: ActionId,
    /// Position at creation time; recomputed from array order on save.
    pub sequence: u32,
    pub content: ActionContent,
}

/// One page/step of the session, as held in the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub id: ScreenId,
    /// Position at creation time; recomputed from array order on save.
    pub sequence: u32,
    /// Display-only counter ("Screen N"); monotonically assigned and never
    /// reused, so labels stay stable across deletions.
    pub local_id: u32,
    pub is_collapsed: bool,
    pub actions: Vec<Action>,
}

/// Direction for the neighbor-swap screen move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}
