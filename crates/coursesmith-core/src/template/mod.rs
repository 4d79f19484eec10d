//! Template signature extraction and structural equality.
//!
//! A template records only *structure*: for each screen, the ordered list of
//! action-type tags. Two templates are structurally equivalent iff they have
//! the same screen count and, per screen index, an identical ordered tag
//! list. Authored content and CEFR level are deliberately ignored so the
//! same structure can be reused across difficulty levels.

use coursesmith_types::action::ActionType;
use coursesmith_types::template::TemplateScreen;

use crate::builder::SessionBuilder;

mod service;

pub use service::{CreateOutcome, TemplateService};

/// Extract the structural signature of the current document as persistable
/// template screens. Content never travels along.
pub fn extract(builder: &SessionBuilder) -> Vec<TemplateScreen> {
    builder
        .screens()
        .iter()
        .enumerate()
        .map(|(index, screen)| TemplateScreen {
            sequence: index as u32,
            action_types: screen
                .actions
                .iter()
                .map(|action| action.content.action_type())
                .collect(),
        })
        .collect()
}

/// The bare ordered-list-of-ordered-tag-lists form of a signature.
pub fn signature_of(screens: &[TemplateScreen]) -> Vec<Vec<ActionType>> {
    screens
        .iter()
        .map(|screen| screen.action_types.clone())
        .collect()
}

/// Order-sensitive structural equality between two signatures.
///
/// `sequence` fields are ignored; array order is what counts.
pub fn structurally_equal(a: &[TemplateScreen], b: &[TemplateScreen]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b.iter())
            .all(|(left, right)| left.action_types == right.action_types)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screens(signature: &[&[ActionType]]) -> Vec<TemplateScreen> {
        signature
            .iter()
            .enumerate()
            .map(|(index, types)| TemplateScreen {
                sequence: index as u32,
                action_types: types.to_vec(),
            })
            .collect()
    }

    #[test]
    fn extraction_mirrors_builder_structure() {
        let mut builder = SessionBuilder::new();
        let first = builder.add_screen();
        builder.add_action(first, ActionType::Explain);
        builder.add_action(first, ActionType::Reading);
        let second = builder.add_screen();
        builder.add_action(second, ActionType::Image);

        let extracted = extract(&builder);
        assert_eq!(
            signature_of(&extracted),
            vec![
                vec![ActionType::Explain, ActionType::Reading],
                vec![ActionType::Image],
            ]
        );
        assert_eq!(extracted[0].sequence, 0);
        assert_eq!(extracted[1].sequence, 1);
    }

    #[test]
    fn equality_requires_identical_ordered_tags() {
        let a = screens(&[&[ActionType::Explain, ActionType::Reading]]);
        let b = screens(&[&[ActionType::Explain, ActionType::Reading]]);
        assert!(structurally_equal(&a, &b));
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a = screens(&[&[ActionType::Explain, ActionType::Reading]]);
        let b = screens(&[&[ActionType::Reading, ActionType::Explain]]);
        assert!(!structurally_equal(&a, &b));
    }

    #[test]
    fn equality_requires_same_screen_count() {
        let a = screens(&[&[ActionType::Explain]]);
        let b = screens(&[&[ActionType::Explain], &[]]);
        assert!(!structurally_equal(&a, &b));
    }

    #[test]
    fn sequence_fields_do_not_affect_equality() {
        let mut a = screens(&[&[ActionType::Audio]]);
        let b = screens(&[&[ActionType::Audio]]);
        a[0].sequence = 42;
        assert!(structurally_equal(&a, &b));
    }

    #[test]
    fn empty_documents_are_structurally_equal() {
        assert!(structurally_equal(&[], &[]));
    }
}
