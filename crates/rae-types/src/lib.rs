pub mod conjugation;
pub mod entry;
pub mod enums;
pub mod wire;

pub use conjugation::{
    Conjugation, ConjugationImperative, ConjugationIndicative, ConjugationNonPersonal,
    ConjugationSubjunctive, Conjugations, Tense,
};
pub use entry::{Article, Definition, Meaning, Origin, WordEntry};
pub use enums::{
    ArticleCategory, Gender, OriginType, Usage, VerbCategory, VerbalMode, VoiceType, WordCategory,
};
