use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::action::ActionType;

/// Unique identifier for a template, wrapping a UUID v7 (time-sortable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub Uuid);

impl TemplateId {
    /// Create a new TemplateId using UUID v7 (time-sortable, guaranteed ordering).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create a TemplateId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for TemplateId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TemplateId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// The structural signature of one screen: its ordered action-type tags.
///
/// Carries no authored content. `sequence` equals the screen's index within
/// the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateScreen {
    #[serde(default)]
    pub sequence: u32,
    pub action_types: Vec<ActionType>,
}

/// A persisted session structure template.
///
/// Stores only the per-screen type sequences (the signature) plus naming
/// metadata -- never action content. Applying a template regenerates every
/// action from the registry defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    /// Session kind this template belongs to; used as the duplicate-check
    /// filter key alongside `is_active`.
    #[serde(rename = "type")]
    pub session_type: String,
    pub is_active: bool,
    pub screens: Vec<TemplateScreen>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating (or overwriting) a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub session_type: String,
    pub is_active: bool,
    pub screens: Vec<TemplateScreen>,
}
