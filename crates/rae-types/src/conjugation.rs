use serde::{Deserialize, Serialize};

use crate::enums::VerbalMode;

/// Forms of one tense across person and number. Cells that do not exist for
/// a tense are left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conjugation {
    pub singular_first_person: String,
    pub singular_second_person: String,
    pub singular_formal_second_person: String,
    pub singular_third_person: String,
    pub plural_first_person: String,
    pub plural_second_person: String,
    pub plural_formal_second_person: String,
    pub plural_third_person: String,
}

impl Conjugation {
    /// Cells in presentation order, labelled
    pub fn forms(&self) -> [(&'static str, &str); 8] {
        [
            ("yo", self.singular_first_person.as_str()),
            ("tú / vos", self.singular_second_person.as_str()),
            ("usted", self.singular_formal_second_person.as_str()),
            ("él / ella", self.singular_third_person.as_str()),
            ("nosotros", self.plural_first_person.as_str()),
            ("vosotros", self.plural_second_person.as_str()),
            ("ustedes", self.plural_formal_second_person.as_str()),
            ("ellos / ellas", self.plural_third_person.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConjugationNonPersonal {
    pub infinitive: String,
    pub participle: String,
    pub gerund: String,
    pub compound_infinitive: String,
    pub compound_gerund: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConjugationIndicative {
    pub present: Conjugation,
    pub present_perfect: Conjugation,     // pretérito perfecto compuesto
    pub imperfect: Conjugation,           // pretérito imperfecto
    pub past_perfect: Conjugation,        // pretérito pluscuamperfecto
    pub preterite: Conjugation,           // pretérito perfecto simple
    pub past_anterior: Conjugation,       // pretérito anterior
    pub future: Conjugation,
    pub future_perfect: Conjugation,
    pub conditional: Conjugation,
    pub conditional_perfect: Conjugation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConjugationSubjunctive {
    pub present: Conjugation,
    pub present_perfect: Conjugation,
    pub imperfect: Conjugation,
    pub past_perfect: Conjugation,
    pub future: Conjugation,
    pub future_perfect: Conjugation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConjugationImperative {
    pub singular_second_person: String,
    pub singular_formal_second_person: String,
    pub plural_second_person: String,
    pub plural_formal_second_person: String,
}

/// Full conjugation table of a verb
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conjugations {
    pub non_personal: ConjugationNonPersonal,
    pub indicative: ConjugationIndicative,
    pub subjunctive: ConjugationSubjunctive,
    pub imperative: ConjugationImperative,
}

/// One named row of a conjugation table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tense<'a> {
    /// A tense conjugated across all persons
    Personal(&'static str, &'a Conjugation),
    /// A single form with no person, or one imperative cell
    Single(&'static str, &'a str),
}

impl Tense<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Tense::Personal(name, _) | Tense::Single(name, _) => *name,
        }
    }
}

impl Conjugations {
    /// Rows of one mood, in the order the service presents them
    pub fn tenses(&self, mode: VerbalMode) -> Vec<Tense<'_>> {
        match mode {
            VerbalMode::NonPersonal => {
                let np = &self.non_personal;
                vec![
                    Tense::Single("infinitive", &np.infinitive),
                    Tense::Single("participle", &np.participle),
                    Tense::Single("gerund", &np.gerund),
                    Tense::Single("compound infinitive", &np.compound_infinitive),
                    Tense::Single("compound gerund", &np.compound_gerund),
                ]
            }
            VerbalMode::Indicative => {
                let ind = &self.indicative;
                vec![
                    Tense::Personal("present", &ind.present),
                    Tense::Personal("present perfect", &ind.present_perfect),
                    Tense::Personal("imperfect", &ind.imperfect),
                    Tense::Personal("past perfect", &ind.past_perfect),
                    Tense::Personal("preterite", &ind.preterite),
                    Tense::Personal("past anterior", &ind.past_anterior),
                    Tense::Personal("future", &ind.future),
                    Tense::Personal("future perfect", &ind.future_perfect),
                    Tense::Personal("conditional", &ind.conditional),
                    Tense::Personal("conditional perfect", &ind.conditional_perfect),
                ]
            }
            VerbalMode::Subjunctive => {
                let sub = &self.subjunctive;
                vec![
                    Tense::Personal("present", &sub.present),
                    Tense::Personal("present perfect", &sub.present_perfect),
                    Tense::Personal("imperfect", &sub.imperfect),
                    Tense::Personal("past perfect", &sub.past_perfect),
                    Tense::Personal("future", &sub.future),
                    Tense::Personal("future perfect", &sub.future_perfect),
                ]
            }
            VerbalMode::Imperative => {
                let imp = &self.imperative;
                vec![
                    Tense::Single("tú / vos", &imp.singular_second_person),
                    Tense::Single("usted", &imp.singular_formal_second_person),
                    Tense::Single("vosotros", &imp.plural_second_person),
                    Tense::Single("ustedes", &imp.plural_formal_second_person),
                ]
            }
        }
    }
}
