use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::conjugation::Conjugations;
use crate::enums::{ArticleCategory, Gender, OriginType, Usage, VerbCategory, VoiceType, WordCategory};
use crate::wire::{blank_as_none, null_as_default};

/// A dictionary entry for one headword
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meanings: Vec<Meaning>,
    /// Alternate headwords, only filled in when the word was not found
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggestions: Vec<String>,
}

impl WordEntry {
    pub fn is_not_found(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// True when any meaning carries a conjugation table
    pub fn is_verb(&self) -> bool {
        self.meanings.iter().any(|m| m.conjugations.is_some())
    }

    /// First conjugation table found among the meanings
    pub fn conjugations(&self) -> Option<&Conjugations> {
        self.meanings.iter().find_map(|m| m.conjugations.as_ref())
    }

    /// All senses across meanings, in presentation order
    pub fn definitions(&self) -> impl Iterator<Item = &Definition> {
        self.meanings.iter().flat_map(|m| m.definitions.iter())
    }
}

/// A group of senses sharing etymology and, for verbs, a conjugation table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
    #[serde(rename = "senses", default, deserialize_with = "null_as_default")]
    pub definitions: Vec<Definition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conjugations: Option<Conjugations>,
}

/// One numbered sense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub raw: String,
    #[serde(default)]
    pub meaning_number: i64,
    pub category: WordCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verb_category: Option<VerbCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<Article>,
    pub usage: Usage,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub synonyms: BTreeSet<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub antonyms: BTreeSet<String>,
}

impl Definition {
    /// Verb sub-category, only when the sense is a verb
    pub fn verb_category(&self) -> Option<VerbCategory> {
        match self.category {
            WordCategory::Verb => self.verb_category,
            _ => None,
        }
    }
}

/// Etymology of a meaning
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    #[serde(default)]
    pub raw: String,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<OriginType>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub voice: Option<VoiceType>,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub category: ArticleCategory,
    pub gender: Gender,
}
