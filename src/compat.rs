//! Plausibility of a POS label for a decoded category.
//!
//! Every branch owns a [`Compat`] rule: an allow-list, a warn-list, and an
//! implicit catch-all that flags the pairing as invalid. The outcome is
//! advisory only.

use crate::diagnostic::Severity;

/// Accepted by every category: lemmas whose POS was never assigned.
pub const UNCHECKED_POS: &[&str] = &["non valid lemma", "undefined"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosPattern {
    Pos(&'static str),
    /// POS given without any sub-POS. An empty or absent subtype counts the
    /// same as the `nan` of tabular exports, so `{type: "adjective"}` with no
    /// subtype matches `PosBare("adjective")` just like `adjective(nan)`.
    PosBare(&'static str),
    /// POS whose sub-POS is anything but the named one (including none).
    PosExcept(&'static str, &'static str),
    PosAndSub(&'static str, &'static str),
    Sub(&'static str),
    /// Sub-POS equals the class the decoder derived (cardinal/ordinal).
    SubIsFormClass,
}

/// `nan` is what tabular exports leave in an empty subtype column.
pub fn has_no_sub_pos(sub_pos: &str) -> bool {
    sub_pos.is_empty() || sub_pos == "nan"
}

impl PosPattern {
    pub fn matches(&self, pos: &str, sub_pos: &str, form_class: &str) -> bool {
        match *self {
            PosPattern::Pos(p) => pos == p,
            PosPattern::PosBare(p) => pos == p && has_no_sub_pos(sub_pos),
            PosPattern::PosExcept(p, s) => pos == p && sub_pos != s,
            PosPattern::PosAndSub(p, s) => pos == p && sub_pos == s,
            PosPattern::Sub(s) => sub_pos == s,
            PosPattern::SubIsFormClass => sub_pos == form_class,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    Suspicious,
    Invalid,
}

impl Verdict {
    pub fn severity(&self) -> Option<Severity> {
        match self {
            Verdict::Allowed => None,
            Verdict::Suspicious => Some(Severity::Warning),
            Verdict::Invalid => Some(Severity::Error),
        }
    }
}

#[derive(Debug)]
pub struct Compat {
    pub allowed: &'static [PosPattern],
    pub suspicious: &'static [PosPattern],
}

impl Compat {
    pub fn judge(&self, pos: &str, sub_pos: &str, form_class: &str) -> Verdict {
        let hit = |patterns: &[PosPattern]| patterns.iter().any(|p| p.matches(pos, sub_pos, form_class));
        if UNCHECKED_POS.iter().any(|p| *p == pos) || hit(self.allowed) {
            Verdict::Allowed
        } else if hit(self.suspicious) {
            Verdict::Suspicious
        } else {
            Verdict::Invalid
        }
    }
}

use PosPattern::*;

pub static VERB_ONLY: Compat = Compat { allowed: &[Pos("verb")], suspicious: &[] };

pub static SUFFIX_CONJUGATION: Compat = Compat {
    allowed: &[Pos("verb")],
    suspicious: &[PosBare("adjective")],
};

pub static RESULTATIVE: Compat = Compat {
    allowed: &[Pos("verb"), PosBare("adjective")],
    suspicious: &[PosExcept("epitheton_title", "title"), PosBare("adverb")],
};

// participles and relative forms
pub static ADJECTIVAL_VERB: Compat = Compat {
    allowed: &[Pos("verb")],
    suspicious: &[PosBare("adjective"), Pos("substantive"), Pos("entity_name"), Pos("epitheton_title")],
};

pub static IMPERATIVE: Compat = Compat {
    allowed: &[Pos("verb")],
    suspicious: &[PosExcept("particle", "particle_enclitic"), Pos("interjection")],
};

pub static NOMINAL_VERB_FORM: Compat = Compat {
    allowed: &[Pos("verb")],
    suspicious: &[PosExcept("adverb", "prepositional_adverb"), Pos("substantive")],
};

// complementary infinitive and infinitive
pub static INFINITIVE: Compat = Compat {
    allowed: &[Pos("verb")],
    suspicious: &[Pos("substantive")],
};

pub static NOUN: Compat = Compat {
    allowed: &[Pos("substantive"), Pos("entity_name"), Pos("epitheton_title")],
    suspicious: &[Pos("verb"), Pos("adjective"), Pos("pronoun"), Pos("numeral"), Pos("preposition")],
};

pub static ADJECTIVE: Compat = Compat {
    allowed: &[
        Pos("adjective"),
        Pos("pronoun"),
        Pos("numeral"),
        PosExcept("epitheton_title", "title"),
    ],
    suspicious: &[
        Pos("substantive"),
        Pos("entity_name"),
        Pos("epitheton_title"),
        Pos("preposition"),
        Pos("verb"),
    ],
};

pub static ADVERB: Compat = Compat {
    allowed: &[Pos("adverb")],
    suspicious: &[Pos("adjective"), PosExcept("epitheton_title", "title"), Pos("preposition")],
};

pub static NUMBER: Compat = Compat {
    allowed: &[PosBare("numeral"), SubIsFormClass],
    suspicious: &[Pos("numeral"), Pos("substantive"), Pos("adjective"), Pos("epitheton_title")],
};

pub static POSSESSIVE_ARTICLE: Compat = Compat {
    allowed: &[PosBare("pronoun"), Sub("demonstrative_pronoun")],
    suspicious: &[Pos("substantive"), Sub("personal_pronoun"), PosBare("adjective")],
};

pub static RELATIVE_PRONOUN: Compat = Compat {
    allowed: &[PosAndSub("pronoun", "relative_pronoun")],
    suspicious: &[
        PosBare("pronoun"),
        Pos("substantive"),
        Pos("entity_name"),
        PosBare("adjective"),
        PosExcept("particle", "particle_enclitic"),
        Sub("nisbe_adjective_preposition"),
    ],
};

pub static ADMIRATIVE: Compat = Compat {
    allowed: &[Pos("adjective")],
    suspicious: &[Pos("verb")],
};

pub static POSTERIOR_PARTICIPLE: Compat = Compat {
    allowed: &[Pos("verb")],
    suspicious: &[PosBare("adjective")],
};

pub static PREPOSITION: Compat = Compat {
    allowed: &[Pos("preposition")],
    suspicious: &[
        PosExcept("particle", "particle_nonenclitic"),
        Sub("nisbe_adjective_preposition"),
        Sub("prepositional_adverb"),
        Pos("adverb"),
        Pos("adjective"),
        Pos("substantive"),
        Pos("entity_name"),
        Pos("epitheton_title"),
    ],
};

pub static PARTICLE: Compat = Compat {
    allowed: &[Pos("particle")],
    suspicious: &[Pos("adverb"), Pos("interjection"), Pos("preposition"), Sub("interrogative_pronoun")],
};

pub static AUXILIARY: Compat = Compat {
    allowed: &[Pos("verb"), PosExcept("particle", "particle_enclitic")],
    suspicious: &[Pos("preposition")],
};
