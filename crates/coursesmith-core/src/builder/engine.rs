//! The session builder engine: every mutation the authoring UI performs on
//! the open document goes through [`SessionBuilder`].
//!
//! All mutations are synchronous, in-memory, and atomic with respect to each
//! other. Lookups by an id that no longer exists degrade to a no-op or
//! `None`; nothing here panics on stale references.

use coursesmith_types::action::{
    ActionContent, ActionType, COLUMN_MAX_ACTIONS, ColumnAction,
};
use coursesmith_types::session::{ActionPayload, ScreenPayload};
use coursesmith_types::template::Template;

use super::{Action, ActionId, MoveDirection, Screen, ScreenId};

/// In-memory document model for one open session.
///
/// Array order of `screens` (and of each screen's `actions`) is
/// authoritative while editing; persisted `sequence` fields are recomputed
/// only when [`screens_payload`](Self::screens_payload) is called.
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    screens: Vec<Screen>,
    /// Next "Screen N" label; monotonic, never reused after deletions.
    next_local_id: u32,
    /// At most one action is open for content editing at a time.
    active_action: Option<ActionId>,
}

impl SessionBuilder {
    /// Empty document with no screens.
    pub fn new() -> Self {
        Self {
            screens: Vec::new(),
            next_local_id: 1,
            active_action: None,
        }
    }

    /// Hydrate a builder from a persisted payload, assigning fresh ephemeral
    /// ids throughout. Collapse state starts expanded and local ids restart
    /// at 1.
    pub fn from_screens(payload: &[ScreenPayload]) -> Self {
        let screens: Vec<Screen> = payload
            .iter()
            .enumerate()
            .map(|(index, screen)| Screen {
                id: ScreenId::new(),
                sequence: index as u32,
                local_id: index as u32 + 1,
                is_collapsed: false,
                actions: screen
                    .actions
                    .iter()
                    .enumerate()
                    .map(|(position, action)| Action {
                        id: ActionId::new(),
                        sequence: position as u32,
                        content: action.content.clone(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            next_local_id: screens.len() as u32 + 1,
            screens,
            active_action: None,
        }
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Append a new empty screen and return its ephemeral id.
    pub fn add_screen(&mut self) -> ScreenId {
        let id = ScreenId::new();
        self.screens.push(Screen {
            id,
            sequence: self.screens.len() as u32,
            local_id: self.next_local_id,
            is_collapsed: false,
            actions: Vec::new(),
        });
        self.next_local_id += 1;
        id
    }

    /// Remove the matching screen. No cascading side effects: an active
    /// action inside the removed screen simply becomes a stale reference
    /// that [`find_active_action`](Self::find_active_action) resolves to
    /// `None`.
    pub fn delete_screen(&mut self, id: ScreenId) {
        self.screens.retain(|screen| screen.id != id);
    }

    /// Swap the screen at `index` with its immediate neighbor. A local
    /// transposition, not an arbitrary reposition; no-op at either boundary.
    /// Returns whether a swap happened.
    pub fn move_screen(&mut self, index: usize, direction: MoveDirection) -> bool {
        if index >= self.screens.len() {
            return false;
        }
        match direction {
            MoveDirection::Up => {
                if index == 0 {
                    return false;
                }
                self.screens.swap(index, index - 1);
            }
            MoveDirection::Down => {
                if index + 1 >= self.screens.len() {
                    return false;
                }
                self.screens.swap(index, index + 1);
            }
        }
        true
    }

    /// Flip one screen's collapse flag.
    pub fn toggle_screen_collapse(&mut self, id: ScreenId) {
        if let Some(screen) = self.screens.iter_mut().find(|screen| screen.id == id) {
            screen.is_collapsed = !screen.is_collapsed;
        }
    }

    /// Force every screen's collapse flag to `collapsed`, regardless of
    /// prior per-screen state. An unconditional overwrite, not a toggle.
    pub fn set_all_collapsed(&mut self, collapsed: bool) {
        for screen in &mut self.screens {
            screen.is_collapsed = collapsed;
        }
    }

    /// Append a registry-default action of `action_type` to the named
    /// screen. Returns the new action's id, or `None` for a stale screen id.
    pub fn add_action(&mut self, screen_id: ScreenId, action_type: ActionType) -> Option<ActionId> {
        let screen = self.screens.iter_mut().find(|screen| screen.id == screen_id)?;
        let id = ActionId::new();
        screen.actions.push(Action {
            id,
            sequence: screen.actions.len() as u32,
            content: action_type.default_content(),
        });
        Some(id)
    }

    /// Remove one action. Clears the active-selection pointer if it was the
    /// action being removed.
    pub fn delete_action(&mut self, screen_id: ScreenId, action_id: ActionId) {
        if let Some(screen) = self.screens.iter_mut().find(|screen| screen.id == screen_id) {
            screen.actions.retain(|action| action.id != action_id);
        }
        if self.active_action == Some(action_id) {
            self.active_action = None;
        }
    }

    /// Relocate the action `from` to the position currently occupied by
    /// `to`; all other actions keep their relative order (array move, not
    /// swap). Returns whether anything changed.
    pub fn reorder_actions(&mut self, screen_id: ScreenId, from: ActionId, to: ActionId) -> bool {
        let Some(screen) = self.screens.iter_mut().find(|screen| screen.id == screen_id) else {
            return false;
        };
        let Some(from_index) = screen.actions.iter().position(|action| action.id == from) else {
            return false;
        };
        let Some(to_index) = screen.actions.iter().position(|action| action.id == to) else {
            return false;
        };
        if from_index == to_index {
            return false;
        }
        let action = screen.actions.remove(from_index);
        screen.actions.insert(to_index, action);
        true
    }

    /// Apply an in-place edit to the one action whose id matches, wherever
    /// it lives. Ids are unique within a builder session, so a single linear
    /// scan resolves it. Returns whether the action was found.
    ///
    /// This is the closed-sum rendition of a shallow partial update: the
    /// closure mutates exactly the fields it touches.
    pub fn update_action(&mut self, id: ActionId, edit: impl FnOnce(&mut ActionContent)) -> bool {
        for screen in &mut self.screens {
            if let Some(action) = screen.actions.iter_mut().find(|action| action.id == id) {
                edit(&mut action.content);
                return true;
            }
        }
        false
    }

    /// Append a nested entry to a column action, respecting the column
    /// capacity. Returns whether the entry was added (false for stale ids,
    /// non-column targets, and full columns).
    pub fn push_column_action(&mut self, id: ActionId, entry: ColumnAction) -> bool {
        let mut pushed = false;
        self.update_action(id, |content| {
            if let ActionContent::Column { actions } = content {
                if actions.len() < COLUMN_MAX_ACTIONS {
                    actions.push(entry);
                    pushed = true;
                }
            }
        });
        pushed
    }

    /// Select (or clear) the action open for content editing. Setting a new
    /// id silently replaces any previous selection.
    pub fn set_active_action(&mut self, id: Option<ActionId>) {
        self.active_action = id;
    }

    pub fn active_action_id(&self) -> Option<ActionId> {
        self.active_action
    }

    /// Resolve the active selection. Returns `None` when nothing is selected
    /// or when the id is stale (the action was deleted since selection);
    /// never panics.
    pub fn find_active_action(&self) -> Option<&Action> {
        let id = self.active_action?;
        self.find_action(id)
    }

    /// Linear search for an action by id across all screens.
    pub fn find_action(&self, id: ActionId) -> Option<&Action> {
        self.screens
            .iter()
            .flat_map(|screen| screen.actions.iter())
            .find(|action| action.id == id)
    }

    /// Find the screen containing an action, for breadcrumb-style lookups.
    pub fn screen_of_action(&self, id: ActionId) -> Option<&Screen> {
        self.screens
            .iter()
            .find(|screen| screen.actions.iter().any(|action| action.id == id))
    }

    /// Emit the persistence-ready payload: ephemeral ids stripped, every
    /// `sequence` recomputed from array position.
    pub fn screens_payload(&self) -> Vec<ScreenPayload> {
        self.screens
            .iter()
            .enumerate()
            .map(|(index, screen)| ScreenPayload {
                sequence: index as u32,
                actions: screen
                    .actions
                    .iter()
                    .enumerate()
                    .map(|(position, action)| ActionPayload {
                        sequence: position as u32,
                        content: action.content.clone(),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Replace the entire document with screens synthesized from a
    /// template's signature. Every action is the registry default for its
    /// tag -- authored content never travels through a template. Destructive
    /// and all-or-nothing; callers gate it behind explicit confirmation when
    /// the current document is non-empty.
    pub fn apply_template(&mut self, template: &Template) {
        self.screens = template
            .screens
            .iter()
            .enumerate()
            .map(|(index, screen)| Screen {
                id: ScreenId::new(),
                sequence: index as u32,
                local_id: index as u32 + 1,
                is_collapsed: false,
                actions: screen
                    .action_types
                    .iter()
                    .enumerate()
                    .map(|(position, action_type)| Action {
                        id: ActionId::new(),
                        sequence: position as u32,
                        content: action_type.default_content(),
                    })
                    .collect(),
            })
            .collect();
        self.next_local_id = self.screens.len() as u32 + 1;
        self.active_action = None;
    }
}
