//! Verb stem classes, as far as the sub-POS label reveals them.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StemType {
    /// weak-final (tertiae/quartae/quintae infirmae, plus the irregular verbs)
    Inf,
    /// geminating
    Gem,
    /// 2- to 6-radical and causative strong verbs
    Strong,
}

impl StemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StemType::Inf => "inf",
            StemType::Gem => "gem",
            StemType::Strong => "strong",
        }
    }
}

impl fmt::Display for StemType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn stem_type(sub_pos: &str) -> Option<StemType> {
    match sub_pos {
        "verb_3-inf" | "verb_4-inf" | "verb_5-inf" | "verb_caus_3-inf" | "verb_caus_4-inf"
        | "verb_irr" => Some(StemType::Inf),
        "verb_2-gem" | "verb_3-gem" | "verb_caus_2-gem" | "verb_caus_3-gem" => Some(StemType::Gem),
        "verb_2-lit" | "verb_3-lit" | "verb_4-lit" | "verb_5-lit" | "verb_6-lit"
        | "verb_caus_2-lit" | "verb_caus_3-lit" | "verb_caus_4-lit" | "verb_caus_5-lit" => {
            Some(StemType::Strong)
        }
        _ => None,
    }
}

/// Label form of [`stem_type`]; empty for non-verbs and unknown labels.
pub fn stem_type_label(sub_pos: &str) -> &'static str {
    stem_type(sub_pos).map(|s| s.as_str()).unwrap_or("")
}
