//! Dictionary lemmatizer with stemmer fallback.
//!
//! Known irregular inflected forms map to their base form via a shared
//! immutable table; anything else falls through to the Porter stemmer.
//! Lookup is case-insensitive.

use crate::text::lemmas::IRREGULAR_FORMS;
use crate::text::stemmer::stem;
use std::collections::HashMap;
use std::sync::LazyLock;

static IRREGULAR: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(IRREGULAR_FORMS.len());
    for &(form, lemma) in IRREGULAR_FORMS {
        map.insert(form, lemma);
    }
    map
});

/// Maps inflected forms to their lemma, falling back to the stemmer on a
/// dictionary miss.
///
/// The shared base table is built once per process; `add_word` extends a
/// per-instance overlay that is consulted before the base table.
#[derive(Debug, Clone, Default)]
pub struct Lemmatizer {
    extra: HashMap<String, String>,
}

impl Lemmatizer {
    /// Creates a lemmatizer over the built-in irregular-form table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an additional `form → lemma` mapping. The form is folded
    /// to lowercase; the lemma is returned verbatim on lookup.
    pub fn add_word(&mut self, form: &str, lemma: &str) {
        self.extra
            .insert(form.to_ascii_lowercase(), lemma.to_string());
    }

    /// Returns the lemma for `word`: the dictionary value on a hit, the
    /// stemmed lowercase form otherwise.
    pub fn lemmatize(&self, word: &str) -> String {
        let lower = word.to_ascii_lowercase();
        if let Some(lemma) = self.extra.get(&lower) {
            return lemma.clone();
        }
        if let Some(&lemma) = IRREGULAR.get(lower.as_str()) {
            return lemma.to_string();
        }
        stem(&lower)
    }
}
