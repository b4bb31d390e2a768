//! Core annotation engine.
//!
//! Text flows through a two-step pipeline:
//!
//! 1. **Scan**: [`Annotator::scan`] finds quoted uppercase key literals.
//! 2. **Resolve**: each key is walked through the [`TranslationStore`];
//!    keys with nothing to show are dropped.
//!
//! ## Module Structure
//!
//! - `annotator`: key-literal pattern, scanning and resolution
//! - `file_scanner`: collecting source files to annotate
//! - `position`: byte offset ↔ line/column conversion
//! - `store`: loading the translation file
//! - `table`: nested table and dotted-key traversal

pub mod annotator;
pub mod file_scanner;
pub mod position;
pub mod store;
pub mod table;

pub use annotator::{
    Annotator, KeyOccurrence, KeyOccurrences, QuoteStyle, ResolvedAnnotation, scan_keys,
};
pub use position::{LineIndex, Position};
pub use store::{LoadError, TranslationStore};
pub use table::{Lookup, TranslationTable};
