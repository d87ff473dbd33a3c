//! Vocabulary record type and its binding table

use serde::{Deserialize, Serialize};

use super::binding::{FieldBinding, FieldKind, FieldValue, RowRecord};

/// One word-sense produced by the generator or replayed from the store
///
/// A lookup key maps to an ordered sequence of entries: a word with several
/// parts of speech or meanings comes back as one entry per sense. Entries
/// are immutable once produced; a key's value is only ever replaced
/// wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyEntry {
    /// The word or phrase itself (the lookup key, before normalization)
    pub vocabulary: String,
    /// Part of speech for this sense (verb, noun, adj, adv)
    pub part_of_speech: String,
    /// Phonetic transcription
    pub phonetic_transcription: String,
    /// Meaning of this sense
    pub definition: String,
    /// Synonyms, at most a handful
    pub synonyms: Vec<String>,
    /// Antonyms
    pub antonyms: Vec<String>,
    /// Common collocations and phrases
    pub phrases: Vec<String>,
    /// Example sentence using the word
    pub example_sentence: String,
    /// Translation of the example sentence
    pub sentence_translation: String,
    /// Derived word forms in other parts of speech
    pub forms: Vec<String>,
    /// Review bookkeeping flag carried in the store
    pub archived: i64,
}

impl VocabularyEntry {
    /// The canonical cache/store key for this entry
    pub fn key(&self) -> String {
        normalize_key(&self.vocabulary)
    }
}

/// Normalize a lookup key: trim surrounding whitespace and case-fold
///
/// Applied identically on the read and write paths so a key is only ever
/// stored under one canonical form.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

static BINDINGS: &[FieldBinding<VocabularyEntry>] = &[
    FieldBinding {
        column: "vocabulary",
        kind: FieldKind::Text,
        get: |r| FieldValue::Text(r.vocabulary.clone()),
        set: |r, v| {
            if let FieldValue::Text(s) = v {
                r.vocabulary = s;
            }
        },
    },
    FieldBinding {
        column: "part_of_speech",
        kind: FieldKind::Text,
        get: |r| FieldValue::Text(r.part_of_speech.clone()),
        set: |r, v| {
            if let FieldValue::Text(s) = v {
                r.part_of_speech = s;
            }
        },
    },
    FieldBinding {
        column: "phonetic_transcription",
        kind: FieldKind::Text,
        get: |r| FieldValue::Text(r.phonetic_transcription.clone()),
        set: |r, v| {
            if let FieldValue::Text(s) = v {
                r.phonetic_transcription = s;
            }
        },
    },
    FieldBinding {
        column: "definition",
        kind: FieldKind::Text,
        get: |r| FieldValue::Text(r.definition.clone()),
        set: |r, v| {
            if let FieldValue::Text(s) = v {
                r.definition = s;
            }
        },
    },
    FieldBinding {
        column: "synonyms",
        kind: FieldKind::MultiValue,
        get: |r| FieldValue::Multi(r.synonyms.clone()),
        set: |r, v| {
            if let FieldValue::Multi(items) = v {
                r.synonyms = items;
            }
        },
    },
    FieldBinding {
        column: "antonyms",
        kind: FieldKind::MultiValue,
        get: |r| FieldValue::Multi(r.antonyms.clone()),
        set: |r, v| {
            if let FieldValue::Multi(items) = v {
                r.antonyms = items;
            }
        },
    },
    FieldBinding {
        column: "phrases",
        kind: FieldKind::MultiValue,
        get: |r| FieldValue::Multi(r.phrases.clone()),
        set: |r, v| {
            if let FieldValue::Multi(items) = v {
                r.phrases = items;
            }
        },
    },
    FieldBinding {
        column: "example_sentence",
        kind: FieldKind::Text,
        get: |r| FieldValue::Text(r.example_sentence.clone()),
        set: |r, v| {
            if let FieldValue::Text(s) = v {
                r.example_sentence = s;
            }
        },
    },
    FieldBinding {
        column: "sentence_translation",
        kind: FieldKind::Text,
        get: |r| FieldValue::Text(r.sentence_translation.clone()),
        set: |r, v| {
            if let FieldValue::Text(s) = v {
                r.sentence_translation = s;
            }
        },
    },
    FieldBinding {
        column: "forms",
        kind: FieldKind::MultiValue,
        get: |r| FieldValue::Multi(r.forms.clone()),
        set: |r, v| {
            if let FieldValue::Multi(items) = v {
                r.forms = items;
            }
        },
    },
    FieldBinding {
        column: "archived",
        kind: FieldKind::Integer,
        get: |r| FieldValue::Integer(r.archived),
        set: |r, v| {
            if let FieldValue::Integer(n) = v {
                r.archived = n;
            }
        },
    },
];

impl RowRecord for VocabularyEntry {
    fn bindings() -> &'static [FieldBinding<Self>] {
        BINDINGS
    }
}

/// The default store header: one column per bound field, in binding order
pub fn default_columns() -> Vec<String> {
    VocabularyEntry::bindings()
        .iter()
        .map(|b| b.column.to_string())
        .collect()
}
