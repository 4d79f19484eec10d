use coursesmith_types::word::{StyleFlag, Word};

use std::collections::BTreeSet;

use super::tokenizer::{join_words, parse_translations, tokenize};

/// Text the placeholder token created by "add word" carries.
const PLACEHOLDER_TEXT: &str = "word";

/// The current token selection, built by click semantics.
///
/// `anchor` remembers the last plainly-clicked (or toggled) index so a
/// subsequent shift-click can extend to a contiguous range in either
/// direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indices: BTreeSet<usize>,
    anchor: Option<usize>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Selected indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    fn clear(&mut self) {
        self.indices.clear();
        self.anchor = None;
    }

    /// Drop `removed` from the selection and shift higher indices down,
    /// keeping the selection aligned after a token deletion.
    fn shift_after_removal(&mut self, removed: usize) {
        self.indices = self
            .indices
            .iter()
            .filter(|&&index| index != removed)
            .map(|&index| if index > removed { index - 1 } else { index })
            .collect();
        self.anchor = match self.anchor {
            Some(anchor) if anchor == removed => None,
            Some(anchor) if anchor > removed => Some(anchor - 1),
            other => other,
        };
    }
}

/// Editor over one `Word` sequence, combining the token list with its
/// selection state.
#[derive(Debug, Clone, Default)]
pub struct RichTextEditor {
    words: Vec<Word>,
    selection: Selection,
}

impl RichTextEditor {
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            selection: Selection::default(),
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn into_words(self) -> Vec<Word> {
        self.words
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The joined string bulk mode presents for editing.
    pub fn bulk_text(&self) -> String {
        join_words(&self.words)
    }

    /// Commit a bulk edit: retokenize the input and replace every token.
    ///
    /// Destructive by contract -- prior style flags and translations on all
    /// tokens are lost. Callers obtain explicit confirmation first.
    pub fn commit_bulk(&mut self, input: &str) {
        self.words = tokenize(input);
        self.selection.clear();
    }

    /// Plain click: select exactly this token, replacing any prior
    /// selection. Out-of-range clicks are ignored.
    pub fn click(&mut self, index: usize) {
        if index >= self.words.len() {
            return;
        }
        self.selection.indices.clear();
        self.selection.indices.insert(index);
        self.selection.anchor = Some(index);
    }

    /// Shift-click: extend to the contiguous range between the last anchor
    /// and this index, inclusive, regardless of direction. Without an
    /// anchor it behaves like a plain click.
    pub fn shift_click(&mut self, index: usize) {
        if index >= self.words.len() {
            return;
        }
        let Some(anchor) = self.selection.anchor else {
            self.click(index);
            return;
        };
        let (lo, hi) = if anchor <= index { (anchor, index) } else { (index, anchor) };
        self.selection.indices = (lo..=hi).collect();
    }

    /// Ctrl/cmd-click: toggle this token's membership without clearing the
    /// rest of the selection.
    pub fn toggle_click(&mut self, index: usize) {
        if index >= self.words.len() {
            return;
        }
        if !self.selection.indices.remove(&index) {
            self.selection.indices.insert(index);
        }
        self.selection.anchor = Some(index);
    }

    /// Selection-uniform style toggle: if every selected token already has
    /// the style, clear it on all of them; otherwise set it on all of them.
    /// No-op on an empty selection.
    pub fn toggle_style(&mut self, flag: StyleFlag) {
        if self.selection.is_empty() {
            return;
        }
        let all_set = self
            .selection
            .indices()
            .all(|index| self.words[index].style(flag));
        for index in self.selection.indices.iter().copied().collect::<Vec<_>>() {
            self.words[index].set_style(flag, !all_set);
        }
    }

    /// Replace one token's translations from a comma-separated string.
    pub fn set_translations(&mut self, index: usize, raw: &str) {
        if let Some(word) = self.words.get_mut(index) {
            word.translation = parse_translations(raw);
        }
    }

    /// Mark or unmark one token as a blank.
    pub fn set_blank(&mut self, index: usize, is_blank: bool) {
        if let Some(word) = self.words.get_mut(index) {
            word.is_blank = is_blank;
        }
    }

    /// Remove the token at `index`; subsequent tokens shift down and the
    /// selection is realigned. Out-of-range indices are ignored.
    pub fn delete_word(&mut self, index: usize) {
        if index >= self.words.len() {
            return;
        }
        self.words.remove(index);
        self.selection.shift_after_removal(index);
    }

    /// Append the placeholder token new-word insertion produces.
    pub fn push_placeholder(&mut self) {
        self.words.push(Word::plain(PLACEHOLDER_TEXT));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(text: &str) -> RichTextEditor {
        RichTextEditor::new(tokenize(text))
    }

    #[test]
    fn commit_bulk_replaces_every_token_destructively() {
        let mut ed = editor("alt bewährt");
        ed.click(0);
        ed.toggle_style(StyleFlag::Bold);
        ed.set_translations(0, "old");
        assert!(ed.words()[0].bold);

        ed.commit_bulk("ganz  neu ");
        let texts: Vec<&str> = ed.words().iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["ganz", "neu"]);
        assert!(ed.words().iter().all(|w| !w.bold && w.translation.is_empty()));
        assert!(ed.selection().is_empty());
    }

    #[test]
    fn bulk_text_joins_with_single_spaces() {
        let ed = editor("eins zwei drei");
        assert_eq!(ed.bulk_text(), "eins zwei drei");
    }

    #[test]
    fn plain_click_replaces_selection() {
        let mut ed = editor("a b c d");
        ed.click(1);
        ed.click(3);
        assert_eq!(ed.selection().len(), 1);
        assert!(ed.selection().contains(3));
    }

    #[test]
    fn shift_click_extends_in_either_direction() {
        let mut ed = editor("a b c d e");
        ed.click(3);
        ed.shift_click(1);
        let selected: Vec<usize> = ed.selection().indices().collect();
        assert_eq!(selected, vec![1, 2, 3]);

        ed.click(1);
        ed.shift_click(4);
        let selected: Vec<usize> = ed.selection().indices().collect();
        assert_eq!(selected, vec![1, 2, 3, 4]);
    }

    #[test]
    fn shift_click_without_anchor_acts_like_click() {
        let mut ed = editor("a b c");
        ed.shift_click(2);
        let selected: Vec<usize> = ed.selection().indices().collect();
        assert_eq!(selected, vec![2]);
    }

    #[test]
    fn toggle_click_keeps_other_members() {
        let mut ed = editor("a b c d");
        ed.click(0);
        ed.toggle_click(2);
        ed.toggle_click(3);
        let selected: Vec<usize> = ed.selection().indices().collect();
        assert_eq!(selected, vec![0, 2, 3]);

        ed.toggle_click(2);
        let selected: Vec<usize> = ed.selection().indices().collect();
        assert_eq!(selected, vec![0, 3]);
    }

    #[test]
    fn out_of_range_clicks_are_ignored() {
        let mut ed = editor("a b");
        ed.click(9);
        ed.shift_click(9);
        ed.toggle_click(9);
        assert!(ed.selection().is_empty());
    }

    #[test]
    fn style_toggle_is_selection_uniform() {
        let mut ed = editor("a b c");
        ed.words.get_mut(0).unwrap().set_style(StyleFlag::Bold, true);

        // mixed selection: set on all
        ed.click(0);
        ed.toggle_click(1);
        ed.toggle_style(StyleFlag::Bold);
        assert!(ed.words()[0].bold);
        assert!(ed.words()[1].bold);
        assert!(!ed.words()[2].bold);

        // uniform selection: clear on all
        ed.toggle_style(StyleFlag::Bold);
        assert!(!ed.words()[0].bold);
        assert!(!ed.words()[1].bold);
    }

    #[test]
    fn style_toggle_without_selection_is_noop() {
        let mut ed = editor("a b");
        ed.toggle_style(StyleFlag::Highlight);
        assert!(ed.words().iter().all(|w| !w.highlight));
    }

    #[test]
    fn translations_parse_from_comma_separated_input() {
        let mut ed = editor("Hund");
        ed.set_translations(0, " dog ,, hound ");
        assert_eq!(ed.words()[0].translation, vec!["dog", "hound"]);
    }

    #[test]
    fn delete_word_shifts_selection_down() {
        let mut ed = editor("a b c d");
        ed.click(1);
        ed.toggle_click(3);
        ed.delete_word(1);

        let texts: Vec<&str> = ed.words().iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c", "d"]);
        // index 1 dropped, index 3 shifted to 2
        let selected: Vec<usize> = ed.selection().indices().collect();
        assert_eq!(selected, vec![2]);
    }

    #[test]
    fn push_placeholder_appends_fresh_word_token() {
        let mut ed = editor("a");
        ed.push_placeholder();
        assert_eq!(ed.words().len(), 2);
        assert_eq!(ed.words()[1], Word::plain("word"));
    }
}
