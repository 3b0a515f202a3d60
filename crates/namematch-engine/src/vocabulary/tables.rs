// Built-in vocabulary tables for US business names

/// Legal-entity suffix phrases, as they appear in directory listings.
///
/// Entries are normalized when a `Vocabulary` is built, so dotted and
/// slashed spellings (`l.l.c.`, `d/b/a`) end up as space-separated letters.
pub const LEGAL_SUFFIXES: &[&str] = &[
    // Long forms
    "professional limited liability company",
    "limited liability company",
    "limited liability partnership",
    "limited partnership",
    "professional corporation",
    "professional association",
    "incorporated",
    "corporation",
    "company",
    "limited",
    "enterprises",
    "holdings",
    "solutions",
    "partners",
    "associates",
    // Abbreviations
    "llc",
    "l.l.c.",
    "inc",
    "inc.",
    "corp",
    "corp.",
    "co",
    "co.",
    "ltd",
    "ltd.",
    "llp",
    "l.l.p.",
    "lp",
    "l.p.",
    "pllc",
    "p.l.l.c.",
    "pc",
    "p.c.",
    "pa",
    "p.a.",
    "dba",
    "d/b/a",
];

/// Words dropped from anywhere in a core name.
///
/// `&` never survives normalization; it is listed so that vocabularies
/// built from raw text see the same set.
pub const FILLER_WORDS: &[&str] = &["the", "and", "&", "of", "at", "in", "on", "for", "a", "an"];

/// Suffix tokens appended to the core name when generating variations.
/// Kept verbatim, since directories render them with this casing.
pub const COMMON_SUFFIX_TOKENS: &[&str] = &["LLC", "Inc", "Corp", "Co", "Inc.", "LLC."];

/// Whole-word abbreviations, `(full, abbreviated)`. Applied in both
/// directions.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("saint", "st"),
    ("mount", "mt"),
    ("doctor", "dr"),
    ("mister", "mr"),
];
