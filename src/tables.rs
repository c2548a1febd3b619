//! Fixed glossing data: lemma overrides and POS fallbacks.
//!
//! The lemma table ships as `data/lemma_glosses.tsv` and is parsed once on
//! first use. The POS tables are small enough to live here as literals.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::OtherHasher;

pub(crate) type GlossMap = HashMap<&'static str, &'static str, OtherHasher>;

static LEMMA_GLOSSES: &str = include_str!("../data/lemma_glosses.tsv");

// Descriptive labels, used whenever the flexcode says nothing reliable.
static POS_GLOSSES: &[(&str, &str)] = &[
    ("substantive", "N"),
    ("verb", "V"),
    ("adjective", "ADJ"),
    ("adverb", "ADV"),
    ("preposition", "PREP"),
    ("particle", "PTCL"),
    ("pronoun", "PRON"),
    ("numeral", "NUM"),
    ("interjection", "INTJ"),
    ("entity_name", "N"),
    ("epitheton_title", "TITL"),
    ("root", "ROOT"),
];

static SUB_POS_GLOSSES: &[(&str, &str)] = &[
    ("substantive_masc", "N.m"),
    ("substantive_fem", "N.f"),
    ("personal_pronoun", "PRON.pers"),
    ("demonstrative_pronoun", "DEM"),
    ("relative_pronoun", "PRON.rel"),
    ("interrogative_pronoun", "INTG"),
    ("nisbe_adjective_preposition", "PREP-adjz"),
    ("nisbe_adjective_substantive", "N-adjz"),
    ("cardinal", "NUM.card"),
    ("ordinal", "NUM.ord"),
    ("person_name", "PN"),
    ("royal_name", "ROYLN"),
    ("kings_name", "ROYLN"),
    ("gods_name", "DN"),
    ("place_name", "TOPN"),
    ("org_name", "ORGN"),
    ("artifact_name", "N"),
    ("animal_name", "N"),
    ("title", "TITL"),
    ("epith_god", "EPITH"),
    ("epith_king", "EPITH"),
    ("particle_enclitic", "PTCL"),
    ("particle_nonenclitic", "PTCL"),
    ("prepositional_adverb", "ADV"),
];

// Flexcode 3 means "not specified": the POS carries the unmarked form.
static POS_DEFAULT_GLOSSES: &[(&str, &str)] = &[
    ("substantive", "N:sg"),
    ("adjective", "ADJ:m.sg"),
    ("adverb", "ADV"),
    ("preposition", "PREP"),
    ("particle", "PTCL"),
    ("pronoun", "PRON"),
    ("numeral", "NUM"),
    ("interjection", "INTJ"),
    ("entity_name", "N:sg"),
    ("epitheton_title", "TITL"),
];

static SUB_POS_DEFAULT_GLOSSES: &[(&str, &str)] = &[
    ("substantive_masc", "N.m:sg"),
    ("substantive_fem", "N.f:sg"),
    ("nisbe_adjective_preposition", "PREP-adjz:m.sg"),
    ("nisbe_adjective_substantive", "N-adjz:m.sg"),
    ("personal_pronoun", "PRON.pers"),
    ("demonstrative_pronoun", "DEM.m.sg"),
    ("relative_pronoun", "PRON.rel:m.sg"),
    ("interrogative_pronoun", "INTG"),
    ("cardinal", "NUM.card:m"),
    ("ordinal", "NUM.ord:sg.m"),
    ("person_name", "PN"),
    ("royal_name", "ROYLN"),
    ("kings_name", "ROYLN"),
    ("gods_name", "DN"),
    ("place_name", "TOPN"),
    ("org_name", "ORGN"),
    ("title", "TITL"),
    ("epith_god", "EPITH"),
    ("epith_king", "EPITH"),
    ("prepositional_adverb", "ADV"),
];

fn build(entries: &[(&'static str, &'static str)]) -> GlossMap {
    entries.iter().copied().collect()
}

/// Parses `key \t value` lines; blank lines and `#` comments are skipped.
pub(crate) fn parse_tsv(source: &'static str) -> GlossMap {
    source
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('\t'))
        .collect()
}

lazy_static! {
    static ref LEMMA_TABLE: GlossMap = parse_tsv(LEMMA_GLOSSES);
    static ref POS_TABLE: GlossMap = build(POS_GLOSSES);
    static ref SUB_POS_TABLE: GlossMap = build(SUB_POS_GLOSSES);
    static ref POS_DEFAULT_TABLE: GlossMap = build(POS_DEFAULT_GLOSSES);
    static ref SUB_POS_DEFAULT_TABLE: GlossMap = build(SUB_POS_DEFAULT_GLOSSES);
}

/// Fixed gloss for closed-class lemmas (pronouns, articles, demonstratives).
pub fn lemma_gloss(lemma_id: &str) -> Option<&'static str> {
    LEMMA_TABLE.get(lemma_id).copied()
}

pub fn lemma_count() -> usize {
    LEMMA_TABLE.len()
}

fn lookup(sub_table: &GlossMap, pos_table: &GlossMap, pos: &str, sub_pos: &str) -> &'static str {
    if !sub_pos.is_empty() {
        if let Some(gloss) = sub_table.get(sub_pos).copied().filter(|g| !g.is_empty()) {
            return gloss;
        }
    }
    if !pos.is_empty() {
        if let Some(gloss) = pos_table.get(pos).copied() {
            return gloss;
        }
    }
    ""
}

/// Descriptive category label; sub-POS wins over POS. Empty when neither is known.
pub fn pos_gloss(pos: &str, sub_pos: &str) -> &'static str {
    lookup(&SUB_POS_TABLE, &POS_TABLE, pos, sub_pos)
}

/// Morphological default for the "not specified" flexcode 3.
pub fn default_gloss(pos: &str, sub_pos: &str) -> &'static str {
    lookup(&SUB_POS_DEFAULT_TABLE, &POS_DEFAULT_TABLE, pos, sub_pos)
}
