use std::fmt::Write;

use rae_types::{Conjugations, Definition, Tense, VerbalMode, WordEntry, WordCategory};

/// Multi-line view of a full entry
pub fn entry(entry: &WordEntry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", entry.word);

    for meaning in &entry.meanings {
        if let Some(origin) = &meaning.origin {
            if !origin.text.is_empty() {
                let _ = writeln!(out, "  [{}]", origin.text);
            }
        }
        for definition in &meaning.definitions {
            let _ = writeln!(out, "  {}", sense(definition));
        }
    }

    out
}

/// One line per entry, used for search results
pub fn summary(entry: &WordEntry) -> String {
    match entry.definitions().next() {
        Some(first) => format!("{}: {}", entry.word, first.description),
        None => entry.word.clone(),
    }
}

fn sense(definition: &Definition) -> String {
    let mut tags = vec![definition.category.as_str()];
    if let Some(verb) = definition.verb_category() {
        tags.push(verb.as_str());
    }
    if let Some(gender) = definition.gender {
        tags.push(gender.as_str());
    }
    if definition.category == WordCategory::Article {
        if let Some(article) = &definition.article {
            tags.push(article.category.as_str());
        }
    }

    let mut line = format!(
        "{}. ({}) {}",
        definition.meaning_number,
        tags.join(", "),
        definition.description
    );

    if !definition.synonyms.is_empty() {
        let synonyms: Vec<&str> = definition.synonyms.iter().map(String::as_str).collect();
        let _ = write!(line, " Sin.: {}.", synonyms.join(", "));
    }
    if !definition.antonyms.is_empty() {
        let antonyms: Vec<&str> = definition.antonyms.iter().map(String::as_str).collect();
        let _ = write!(line, " Ant.: {}.", antonyms.join(", "));
    }

    line
}

/// Table for one mood. Empty cells are skipped.
pub fn conjugations(table: &Conjugations, mode: VerbalMode) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", mode.as_str().to_uppercase());

    for tense in table.tenses(mode) {
        match tense {
            Tense::Single(name, form) => {
                if !form.is_empty() {
                    let _ = writeln!(out, "  {name:<20} {form}");
                }
            }
            Tense::Personal(name, conjugation) => {
                let _ = writeln!(out, "  {name}");
                for (person, form) in conjugation.forms() {
                    if !form.is_empty() {
                        let _ = writeln!(out, "    {person:<14} {form}");
                    }
                }
            }
        }
    }

    out
}
