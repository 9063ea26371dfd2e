//! Closed value sets used by dictionary entries.
//!
//! Every enum here rejects unknown wire values on decode. There is no
//! catch-all variant: a value the service adds later surfaces as a decode
//! error instead of being silently folded into something else.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! wire_names {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Every member, in declaration order
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Name used on the wire
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }

            /// Parse a wire name, `None` when it is not a member
            pub fn from_wire(s: &str) -> Option<Self> {
                match s {
                    $($name => Some($ty::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Grammatical category of a sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordCategory {
    Article, // artículo
    Noun,    // sustantivo
    Pronoun,
    Adjective,
    Verb,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
}

wire_names!(WordCategory {
    Article => "article",
    Noun => "noun",
    Pronoun => "pronoun",
    Adjective => "adjective",
    Verb => "verb",
    Adverb => "adverb",
    Preposition => "preposition",
    Conjunction => "conjunction",
    Interjection => "interjection",
});

/// Sub-classification of verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbCategory {
    Transitive,
    Intransitive,
    Copulative,
    Reflexive,
    Defective,
    Pronominal, // recíprocos
    Auxiliary,
    Predicative,
}

wire_names!(VerbCategory {
    Transitive => "transitive",
    Intransitive => "intransitive",
    Copulative => "copulative",
    Reflexive => "reflexive",
    Defective => "defective",
    Pronominal => "pronominal",
    Auxiliary => "auxiliary",
    Predicative => "predicative",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleCategory {
    Definite,
    Indefinite,
    Neuter,
}

wire_names!(ArticleCategory {
    Definite => "definite",
    Indefinite => "indefinite",
    Neuter => "neuter",
});

/// How current a sense is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Usage {
    Common,
    Rare,
    Outdated,
    Colloquial,
    Obsolete, // desuso
    Unknown,
}

wire_names!(Usage {
    Common => "common",
    Rare => "rare",
    Outdated => "outdated",
    Colloquial => "colloquial",
    Obsolete => "obsolete",
    Unknown => "unknown",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OriginType {
    #[serde(rename = "lat")]
    Latin,
    #[serde(rename = "uncertain")]
    Uncertain,
}

wire_names!(OriginType {
    Latin => "lat",
    Uncertain => "uncertain",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceType {
    Onomatopoeic,
    Expressive,
}

wire_names!(VoiceType {
    Onomatopoeic => "onomatopoeic",
    Expressive => "expressive",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Masculine,
    Feminine,
    MasculineAndFeminine,
    Unknown,
}

wire_names!(Gender {
    Masculine => "masculine",
    Feminine => "feminine",
    MasculineAndFeminine => "masculine_and_feminine",
    Unknown => "unknown",
});

/// Verb mood, used to pick a sub-table out of [`crate::Conjugations`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbalMode {
    Indicative,
    Subjunctive,
    Imperative,
    #[serde(rename = "nonpersonal")]
    NonPersonal,
}

wire_names!(VerbalMode {
    Indicative => "indicative",
    Subjunctive => "subjunctive",
    Imperative => "imperative",
    NonPersonal => "nonpersonal",
});
