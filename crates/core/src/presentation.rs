//! Cosmetic presentation helpers: name-based avatar selection and roster
//! shuffling.
//!
//! The gender guess is a hand-curated heuristic used only to pick an avatar
//! image. It is never stored or returned as a field of its own.

use std::sync::LazyLock;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

use crate::person::{Person, SpecialEffect};

// ---------------------------------------------------------------------------
// Name lists
// ---------------------------------------------------------------------------

const FEMALE_NAMES: &[&str] = &[
    "manon", "selena", "séléna", "zoe", "zoé", "maelle", "maëlle", "gladys", "lea", "léa",
    "lyloo", "zoia", "zoïa", "elisa", "magata", "lilie", "marie", "eva", "kymia", "clarysse",
    "solene", "solène", "aurore", "laure-helene", "laure-hélène", "sophie", "caroline", "karine",
    "fanny", "laurence",
];

const MALE_NAMES: &[&str] = &[
    "mederik", "médérik", "theo", "théo", "mael", "maël", "jean-noel", "jean-noël", "maxence",
    "luis", "dylan", "pablo", "tom", "jules", "valentin", "axel", "gregoire", "grégoire",
    "thibault", "sebastien", "sébastien", "maewen", "maëwen",
];

/// Endings that mark an unlisted first name as female.
const FEMALE_SUFFIXES: &[&str] = &["a", "ie", "ine", "elle", "ette"];

static PARENTHESIZED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)").expect("valid regex"));

/// Everything outside ASCII letters, the Latin-1 letter block, whitespace
/// and hyphens.
static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\x{C0}-\x{FF}\s-]").expect("valid regex"));

static NORMALIZED_MALE: LazyLock<Vec<String>> =
    LazyLock::new(|| MALE_NAMES.iter().map(|n| clean_name(n)).collect());

static NORMALIZED_FEMALE: LazyLock<Vec<String>> =
    LazyLock::new(|| FEMALE_NAMES.iter().map(|n| clean_name(n)).collect());

// ---------------------------------------------------------------------------
// Gender inference
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

/// Guess the gender of a display name.
///
/// Total and deterministic. The last whitespace-separated token of the
/// cleaned name is taken as the first name and matched against the male
/// list, then the female list (substring containment in either direction),
/// then a suffix rule. Anything left over is male.
pub fn infer_gender(name: &str) -> Gender {
    let first_name = extract_first_name(name);

    let matches = |list: &[String]| {
        list.iter()
            .any(|n| first_name.contains(n.as_str()) || n.contains(first_name.as_str()))
    };

    if matches(NORMALIZED_MALE.as_slice()) {
        return Gender::Male;
    }
    if matches(NORMALIZED_FEMALE.as_slice()) {
        return Gender::Female;
    }
    if FEMALE_SUFFIXES.iter().any(|s| first_name.ends_with(s)) {
        return Gender::Female;
    }
    Gender::Male
}

/// Strip parenthesized asides and foreign symbols, trim, lowercase, and fold
/// accents.
fn clean_name(name: &str) -> String {
    let without_parens = PARENTHESIZED_RE.replace_all(name, "");
    let letters_only = DISALLOWED_RE.replace_all(&without_parens, "");
    letters_only
        .trim()
        .to_lowercase()
        .chars()
        .map(fold_accent)
        .collect()
}

fn extract_first_name(full_name: &str) -> String {
    let cleaned = clean_name(full_name);
    cleaned
        .split_whitespace()
        .last()
        .unwrap_or_default()
        .to_string()
}

/// Map a lowercase Latin-1 letter to its unaccented base letter.
///
/// Letters without a canonical decomposition (æ, ð, ø, þ, ß) are kept.
fn fold_accent(c: char) -> char {
    match c {
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Avatars
// ---------------------------------------------------------------------------

pub const AVATAR_BOY: &str = "/images/snoopy-boy.png";
pub const AVATAR_GIRL: &str = "/images/snoopy-girl.png";
pub const AVATAR_THEO: &str = "/images/snoopy-theo.png";
pub const AVATAR_MAGATA: &str = "/images/snoopy-magata.png";

/// Avatar image path for a roster entry.
pub fn avatar_for(person: &Person) -> &'static str {
    match person.special_effect {
        Some(SpecialEffect::Theo) => AVATAR_THEO,
        Some(SpecialEffect::Magata) => AVATAR_MAGATA,
        _ => match infer_gender(&person.name) {
            Gender::Female => AVATAR_GIRL,
            Gender::Male => AVATAR_BOY,
        },
    }
}

// ---------------------------------------------------------------------------
// Shuffling
// ---------------------------------------------------------------------------

/// Uniformly random permutation of `persons`, drawn from `rng`.
pub fn shuffle_roster<R: Rng + ?Sized>(persons: &[Person], rng: &mut R) -> Vec<Person> {
    let mut shuffled = persons.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
