//! Key-literal scanning and resolution.
//!
//! A key literal is a quoted run of uppercase letters, digits, `_` and `.`:
//! `"ERROR.NOT_FOUND"` or `'ERROR.NOT_FOUND'`. Every scan is a full pass over
//! the text; nothing is cached between calls.

use std::sync::LazyLock;

use log::trace;
use regex::{CaptureMatches, Regex};

use super::store::TranslationStore;

// Opening and closing quote may differ: `'KEY"` is accepted.
static LOOSE_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]([A-Z0-9_.]+)['"]"#).unwrap());

// Closing quote must equal the opening one. The key is in group 1 or 2.
static MATCHED_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"'([A-Z0-9_.]+)'|"([A-Z0-9_.]+)""#).unwrap());

/// How strictly key literals must be quoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteStyle {
    /// Either quote character may open or close the literal.
    #[default]
    Loose,
    /// The closing quote must match the opening quote.
    Matched,
}

impl QuoteStyle {
    fn regex(self) -> &'static Regex {
        match self {
            QuoteStyle::Loose => &LOOSE_KEY_REGEX,
            QuoteStyle::Matched => &MATCHED_KEY_REGEX,
        }
    }
}

/// A key literal found in a text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOccurrence<'t> {
    /// Key text without the quotes.
    pub key: &'t str,
    /// Byte offset of the opening quote.
    pub start: usize,
    /// Byte offset just past the closing quote.
    pub end: usize,
}

impl KeyOccurrence<'_> {
    /// Whether `offset` falls on the literal, closing edge included.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }
}

/// A key literal together with the text to show for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAnnotation<'t> {
    pub occurrence: KeyOccurrence<'t>,
    pub value: String,
}

/// Lazy iterator over the key literals of a text, left to right.
pub struct KeyOccurrences<'t> {
    captures: CaptureMatches<'static, 't>,
}

impl<'t> Iterator for KeyOccurrences<'t> {
    type Item = KeyOccurrence<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let captures = self.captures.next()?;
        let whole = captures.get(0)?;
        let key = captures.iter().skip(1).flatten().next()?;
        Some(KeyOccurrence {
            key: key.as_str(),
            start: whole.start(),
            end: whole.end(),
        })
    }
}

/// Scan `text` for key literals without resolving them.
pub fn scan_keys(text: &str, quote_style: QuoteStyle) -> KeyOccurrences<'_> {
    KeyOccurrences {
        captures: quote_style.regex().captures_iter(text),
    }
}

/// Finds key literals in text and resolves them against a [`TranslationStore`].
#[derive(Debug, Clone, Copy)]
pub struct Annotator<'s> {
    store: &'s TranslationStore,
    quote_style: QuoteStyle,
}

impl<'s> Annotator<'s> {
    pub fn new(store: &'s TranslationStore) -> Self {
        Self {
            store,
            quote_style: QuoteStyle::default(),
        }
    }

    pub fn with_quote_style(mut self, quote_style: QuoteStyle) -> Self {
        self.quote_style = quote_style;
        self
    }

    pub fn store(&self) -> &'s TranslationStore {
        self.store
    }

    pub fn scan<'t>(&self, text: &'t str) -> KeyOccurrences<'t> {
        scan_keys(text, self.quote_style)
    }

    /// Resolve every key literal in `text`, dropping the ones with nothing to show.
    pub fn resolve<'t>(&self, text: &'t str) -> impl Iterator<Item = ResolvedAnnotation<'t>> {
        let annotator = *self;
        self.scan(text)
            .filter_map(move |occurrence| annotator.resolve_occurrence(occurrence))
    }

    /// The resolved key literal under `offset`, if any.
    pub fn hover_at<'t>(&self, text: &'t str, offset: usize) -> Option<ResolvedAnnotation<'t>> {
        let occurrence = self
            .scan(text)
            .take_while(|occurrence| occurrence.start <= offset)
            .find(|occurrence| occurrence.contains(offset))?;
        self.resolve_occurrence(occurrence)
    }

    fn resolve_occurrence<'t>(&self, occurrence: KeyOccurrence<'t>) -> Option<ResolvedAnnotation<'t>> {
        match self.store.lookup(occurrence.key) {
            Some(value) if !value.is_empty() => Some(ResolvedAnnotation {
                occurrence,
                value: value.into_owned(),
            }),
            _ => {
                trace!("No translation for key {}", occurrence.key);
                None
            }
        }
    }
}
