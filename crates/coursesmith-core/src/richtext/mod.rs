//! Rich text editing over `Word` token sequences.
//!
//! Two mutually exclusive modes operate on the same token list: bulk mode
//! treats the whole sequence as one joined string and destructively
//! retokenizes it on commit; token mode builds a click selection and applies
//! uniform style toggles, translations, and per-token edits.

mod editor;
mod tokenizer;

pub use editor::{RichTextEditor, Selection};
pub use tokenizer::{join_words, parse_translations, tokenize};
