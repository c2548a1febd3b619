//! The flexcode decoder.
//!
//! A flexcode is read as up to five decimal digits. The leading one or two
//! digits pick a grammatical category; the remaining ones are peeled off with
//! `/` and `%` into a form slot and a state slot whose widths differ per
//! category. Categories are tried in the order of [`BRANCHES`], narrow ranges
//! before wide ones, and the first whose selector accepts the code decodes it.
//!
//! Decoding is best-effort. Unknown digit patterns and implausible POS labels
//! are reported as diagnostics while the gloss is still assembled from
//! whatever was recognized.

use std::fmt;

use crate::compat::{self, Compat};
use crate::diagnostic::{Diagnostic, DiagnosticSink, Severity};
use crate::flexcode::Flexcode;
use crate::stem::{StemType, stem_type};
use crate::tables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Status,
    SuffixConjugation,
    Resultative,
    Participle,
    RelativeForm,
    Imperative,
    NominalVerbForm,
    ComplementaryInfinitive,
    NegativeComplement,
    Infinitive,
    Noun,
    Adjective,
    Adverb,
    Number,
    PossessiveArticle,
    RelativePronoun,
    Admirative,
    PosteriorParticiple,
    Preposition,
    Particle,
    Auxiliary,
    Unresolved,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Category::Status => "status code",
            Category::SuffixConjugation => "suffix conjugation",
            Category::Resultative => "resultative",
            Category::Participle => "participle",
            Category::RelativeForm => "relative form",
            Category::Imperative => "imperative",
            Category::NominalVerbForm => "nominal verb form",
            Category::ComplementaryInfinitive => "complementary infinitive",
            Category::NegativeComplement => "negative complement",
            Category::Infinitive => "infinitive",
            Category::Noun => "substantive",
            Category::Adjective => "adjective",
            Category::Adverb => "adverb",
            Category::Number => "number",
            Category::PossessiveArticle => "possessive article",
            Category::RelativePronoun => "relative pronoun",
            Category::Admirative => "admirative suffix",
            Category::PosteriorParticiple => "posterior participle",
            Category::Preposition => "preposition",
            Category::Particle => "particle",
            Category::Auxiliary => "auxiliary",
            Category::Unresolved => "unresolved",
        };
        f.write_str(name)
    }
}

/// Digit value to gloss fragment.
pub type DigitTable = &'static [(u64, &'static str)];

fn lookup(table: DigitTable, code: u64) -> Option<&'static str> {
    table.iter().find(|(c, _)| *c == code).map(|(_, s)| *s)
}

/// One decode in progress.
pub(crate) struct Decoding<'a> {
    code: Flexcode,
    flex: u64,
    pos: &'a str,
    sub_pos: &'a str,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Decoding<'a> {
    fn report(&self, severity: Severity, message: String) {
        self.sink.emit(&Diagnostic {
            pos: self.pos.to_string(),
            sub_pos: self.sub_pos.to_string(),
            flexcode: self.code.to_string(),
            severity,
            message,
        });
    }
    fn warn(&self, message: impl Into<String>) {
        self.report(Severity::Warning, message.into());
    }
    fn error(&self, message: impl Into<String>) {
        self.report(Severity::Error, message.into());
    }
    fn stem(&self) -> Option<StemType> {
        stem_type(self.sub_pos)
    }
    // A non-zero last digit is a suffix pronoun.
    fn suffix_state(&self) -> &'static str {
        if self.code.state_digit() == 0 { "" } else { ":stpr" }
    }
    // Two-digit pronoun slot shared by relative pronouns, particles and compound adjectives.
    fn pronoun_state(&self, slot: u64, what: &str) -> &'static str {
        match slot {
            0 => "",
            1..=9 => ":stpr",
            15..=24 => "",
            _ => {
                self.error(format!("Invalid {} flexcode (pronoun, pattern xxx0x / xxx15-24): {}", what, self.code));
                ""
            }
        }
    }
    fn check(&self, compat: &Compat, decoded: &Decoded) {
        let verdict = compat.judge(self.pos, self.sub_pos, decoded.form_class);
        let Some(severity) = verdict.severity() else { return };
        let label = match severity {
            Severity::Warning => "Suspicious",
            Severity::Error => "Invalid",
        };
        self.report(
            severity,
            format!("{} POS<>flexcode combination: {}({})<>{}", label, self.pos, self.sub_pos, decoded.gloss),
        );
    }
}

pub(crate) struct Decoded {
    gloss: String,
    // cardinal/ordinal, for the number category
    form_class: &'static str,
}

impl Decoded {
    fn new(gloss: String) -> Self {
        Self { gloss, form_class: "" }
    }
}

pub struct Branch {
    pub category: Category,
    selects: fn(&Flexcode) -> bool,
    decode: fn(&Decoding) -> Decoded,
    compat: Option<&'static Compat>,
}

impl Branch {
    pub fn selects(&self, code: &Flexcode) -> bool {
        (self.selects)(code)
    }
}

fn thousands(code: &Flexcode) -> u64 {
    code.reduced() / 1000
}
fn hundreds(code: &Flexcode) -> u64 {
    code.reduced() / 100
}
fn ten_thousands(code: &Flexcode) -> u64 {
    code.reduced() / 10_000
}

pub static BRANCHES: &[Branch] = &[
    Branch { category: Category::Status, selects: |c| c.is_status(), decode: status, compat: None },
    Branch {
        category: Category::SuffixConjugation,
        selects: |c| ten_thousands(c) == 1 || (82..=87).contains(&thousands(c)),
        decode: suffix_conjugation,
        compat: Some(&compat::SUFFIX_CONJUGATION),
    },
    Branch {
        category: Category::Resultative,
        selects: |c| ten_thousands(c) == 2,
        decode: resultative,
        compat: Some(&compat::RESULTATIVE),
    },
    Branch {
        category: Category::Participle,
        selects: |c| ten_thousands(c) == 3,
        decode: participle,
        compat: Some(&compat::ADJECTIVAL_VERB),
    },
    Branch {
        category: Category::RelativeForm,
        selects: |c| ten_thousands(c) == 4,
        decode: relative_form,
        compat: Some(&compat::ADJECTIVAL_VERB),
    },
    Branch {
        category: Category::Imperative,
        selects: |c| ten_thousands(c) == 5,
        decode: imperative,
        compat: Some(&compat::IMPERATIVE),
    },
    Branch {
        category: Category::NominalVerbForm,
        selects: |c| thousands(c) == 60,
        decode: nominal_verb_form,
        compat: Some(&compat::NOMINAL_VERB_FORM),
    },
    Branch {
        category: Category::ComplementaryInfinitive,
        selects: |c| thousands(c) == 62,
        decode: complementary_infinitive,
        compat: Some(&compat::INFINITIVE),
    },
    Branch {
        category: Category::NegativeComplement,
        selects: |c| thousands(c) == 63,
        decode: negative_complement,
        compat: Some(&compat::VERB_ONLY),
    },
    Branch {
        category: Category::Infinitive,
        selects: |c| thousands(c) == 61 || (64..=69).contains(&thousands(c)),
        decode: infinitive,
        compat: Some(&compat::INFINITIVE),
    },
    Branch { category: Category::Noun, selects: |c| thousands(c) == 70, decode: noun, compat: Some(&compat::NOUN) },
    Branch {
        category: Category::Adjective,
        selects: |c| thousands(c) == 71,
        decode: adjective,
        compat: Some(&compat::ADJECTIVE),
    },
    Branch { category: Category::Adverb, selects: |c| thousands(c) == 72, decode: adverb, compat: Some(&compat::ADVERB) },
    Branch { category: Category::Number, selects: |c| thousands(c) == 74, decode: number, compat: Some(&compat::NUMBER) },
    Branch {
        category: Category::PossessiveArticle,
        selects: |c| hundreds(c) == 800,
        decode: possessive_article,
        compat: Some(&compat::POSSESSIVE_ARTICLE),
    },
    Branch {
        category: Category::RelativePronoun,
        selects: |c| hundreds(c) >= 801 && thousands(c) <= 81,
        decode: relative_pronoun,
        compat: Some(&compat::RELATIVE_PRONOUN),
    },
    Branch {
        category: Category::Admirative,
        selects: |c| thousands(c) == 90,
        decode: admirative,
        compat: Some(&compat::ADMIRATIVE),
    },
    Branch {
        category: Category::PosteriorParticiple,
        selects: |c| hundreds(c) == 910,
        decode: posterior_participle,
        compat: Some(&compat::POSTERIOR_PARTICIPLE),
    },
    Branch {
        category: Category::Preposition,
        selects: |c| hundreds(c) == 930,
        decode: preposition,
        compat: Some(&compat::PREPOSITION),
    },
    Branch {
        category: Category::Particle,
        selects: |c| hundreds(c) == 940,
        decode: particle,
        compat: Some(&compat::PARTICLE),
    },
    Branch {
        category: Category::Auxiliary,
        selects: |c| thousands(c) == 96,
        decode: auxiliary,
        compat: Some(&compat::AUXILIARY),
    },
];

/// The category a code decodes as, without decoding it.
pub fn category(code: &Flexcode) -> Category {
    BRANCHES
        .iter()
        .find(|b| b.selects(code))
        .map(|b| b.category)
        .unwrap_or(Category::Unresolved)
}

pub(crate) fn decode_flexcode(code: Flexcode, pos: &str, sub_pos: &str, sink: &dyn DiagnosticSink) -> String {
    let branch = BRANCHES.iter().find(|b| b.selects(&code));
    let cx = Decoding { flex: code.reduced(), code, pos, sub_pos, sink };
    match branch {
        Some(branch) => {
            let decoded = (branch.decode)(&cx);
            if let Some(compat) = branch.compat {
                cx.check(compat, &decoded);
            }
            decoded.gloss
        }
        None => unresolved(&cx),
    }
}

// ---------------- status codes ----------------

/// Placeholder for a status code when no POS fallback exists.
pub fn status_placeholder(code: u64) -> &'static str {
    match code {
        0 => "(unedited)",
        1 | 2 => "(?)",
        3 => "—",
        4 => "(unclear)",
        5 => "(problematic)",
        9 => "(to be reviewed)",
        _ => "",
    }
}

fn status(cx: &Decoding) -> Decoded {
    // status codes are below ten, so the reduced code is the whole code
    let code = cx.flex;
    // 3 is "not specified": the POS stands for its unmarked form
    let fallback = if code == 3 {
        tables::default_gloss(cx.pos, cx.sub_pos)
    } else {
        tables::pos_gloss(cx.pos, cx.sub_pos)
    };
    let gloss = if fallback.is_empty() { status_placeholder(code) } else { fallback };
    Decoded::new(gloss.to_string())
}

fn unresolved(cx: &Decoding) -> String {
    cx.error(format!("Unhandled flex code: {}", cx.code));
    match tables::pos_gloss(cx.pos, cx.sub_pos) {
        "" => "(unresolved)".to_string(),
        gloss => gloss.to_string(),
    }
}

// ---------------- verbal categories ----------------

/// Suffix conjugation forms, keyed by the tens and hundreds digits (1xXXx).
pub static SUFFIX_CONJUGATION_FORMS: DigitTable = &[
    (2, ".act"),
    (4, ".pass"),
    (10, ".act"),
    (12, ".pass"),
    (14, ".act"),
    (16, ".pass"),
    (17, "-pass"),
    (18, ".act"),
    (19, "-pass"),
    (20, ".act"),
    (22, ".act"),
    (24, ".pass"),
    (28, "-pass"),
    (30, "-pass"),
    (32, "-pass"),
    (36, "-pass"),
    (38, ".act-ant"),
    (40, ".act-ant"),
    (42, ".act-ant"),
    (44, "-ant-pass"),
    (48, "-ant-pass"),
    (50, ".act-cnsv"),
    (54, ".act-cnsv"),
    (56, "-cnsv-pass"),
    (57, "-cnsv-pass"),
    (60, ".act-oblv"),
    (61, ".act"),
    (64, ".act-oblv"),
    (65, ".act"),
    (66, "-oblv-pass"),
    (67, "-pass"),
    (70, "-oblv-pass"),
    (71, "-pass"),
    (72, ".act-post"),
    (73, ".act"),
    (76, ".act-post"),
    (77, ".act"),
    (78, "-post-pass"),
    (79, "-pass"),
    (80, ".act-ant"),
    (81, "-ant-pass"),
    (82, "-post-pass"),
    (83, "-pass"),
    (84, ".act-compl"),
    (85, ".act-compl"),
    (86, ".pass-compl"),
    (87, ".pass-compl"),
    (90, ".act"),
    (91, ".pass"),
    (92, ".act"),
    (93, ".pass"),
    (94, ".pass"),
    (95, "-pass"),
    (96, "-pass"),
    (97, ".act"),
    (98, ".pass"),
    (99, ".act-compl"),
];

fn suffix_conjugation(cx: &Decoding) -> Decoded {
    let mut base = "V\\tam";
    // ten-thousands and thousands (auxiliary) digits carry nothing further
    let form = cx.flex % 1000 / 10;
    let mut ending = "";
    if form == 0 {
        cx.warn(format!("Underspecified suffix conjugation flexcode (form, pattern 1x00x): {}", cx.code));
    } else if let Some(e) = lookup(SUFFIX_CONJUGATION_FORMS, form) {
        ending = e;
        match (form, cx.stem()) {
            // reduplicated weak-final stem: jrr
            (10 | 36 | 92, Some(StemType::Inf)) => base = "V~ipfv",
            // sDmm, nDrr
            (12 | 93, Some(StemType::Strong | StemType::Inf)) => base = "V~post",
            _ => {}
        }
    } else {
        cx.error(format!("Invalid suffix conjugation flexcode (form, pattern 1xXXx): {}", cx.code));
    }
    Decoded::new(format!("{}{}{}", base, ending, cx.suffix_state()))
}

/// Resultative (pseudoparticiple) endings. 34, 38 and 31 are the
/// gender-neutral third persons.
pub static RESULTATIVE_ENDINGS: DigitTable = &[
    (1, "-1sg"),
    (2, "-2sg.m"),
    (3, "-2sg.f"),
    (4, "-3sg.m"),
    (34, "-3sg"),
    (5, "-3sg.f"),
    (6, "-1pl"),
    (7, "-2pl"),
    (8, "-3pl.m"),
    (38, "-3pl"),
    (9, "-3pl.f"),
    (10, "-2du"),
    (11, "-3du.m"),
    (31, "-3du"),
    (12, "-3du.f"),
    (13, "-1du"),
];

fn resultative(cx: &Decoding) -> Decoded {
    if cx.flex % 10_000 / 1000 > 7 {
        cx.error(format!("Invalid resultative flexcode (pattern 2[0-7]xxx): {}", cx.code));
    }
    // last digit is auxiliary information, not a suffix pronoun
    let ending = match cx.flex % 1000 / 10 {
        0 => {
            cx.warn(format!("Underspecified resultative form (ending, pattern 2x00x): {}", cx.code));
            ""
        }
        e => lookup(RESULTATIVE_ENDINGS, e).unwrap_or_else(|| {
            cx.error(format!("Invalid resultative flexcode (ending, pattern 2x[1-13/31/34/38]x): {}", cx.code));
            ""
        }),
    };
    Decoded::new(format!("V\\res{}", ending))
}

/// Participle voice, gender and number.
pub static PARTICIPLE_FORMS: DigitTable = &[
    (1, ".act.m.sg"),
    (2, ".act.f.sg"),
    (32, ".act.f"),
    (3, ".act.m.pl"),
    (4, ".act.f.pl"),
    (5, ".act.m.du"),
    (6, ".act.f.du"),
    (7, ".pass.m.sg"),
    (8, ".pass.f.sg"),
    (38, ".pass.f"),
    (9, ".pass.m.pl"),
    (10, ".pass.f.pl"),
    (11, ".pass.m.du"),
    (12, ".pass.f.du"),
];

fn participle(cx: &Decoding) -> Decoded {
    let mut base = "V\\ptcp";
    match cx.flex % 10_000 / 1000 {
        1 if cx.stem() == Some(StemType::Inf) => base = "V~ptcp.distr",
        0..=2 => {}
        _ => cx.error(format!("Invalid participle flexcode (pattern 3[0-2]xxx): {}", cx.code)),
    }
    let form = match cx.flex % 1000 / 10 {
        0 => {
            cx.warn(format!(
                "Underspecified participle flexcode (genus verbi/number/gender, pattern 3x00x): {}",
                cx.code
            ));
            ""
        }
        f => lookup(PARTICIPLE_FORMS, f).unwrap_or_else(|| {
            cx.error(format!(
                "Invalid participle flexcode (genus verbi/number/gender, pattern 3x[1-12/32/38]x): {}",
                cx.code
            ));
            ""
        }),
    };
    Decoded::new(format!("{}{}{}", base, form, cx.suffix_state()))
}

/// Relative form gender/number; the flag marks the anterior (n-) forms.
pub static RELATIVE_FORMS: &[(u64, &str, bool)] = &[
    (1, ".m.sg-ant", true),
    (31, ".m-ant", true),
    (2, ".f.sg-ant", true),
    (32, ".f-ant", true),
    (3, ".m.pl-ant", true),
    (4, ".f.pl-ant", true),
    (5, ".m.du-ant", true),
    (6, ".f.du-ant", true),
    (7, ".m.sg", false),
    (8, ".f.sg", false),
    (38, ".f", false),
    (9, ".m.pl", false),
    (10, ".f.pl", false),
    (11, ".m.du", false),
    (12, ".f.du", false),
];

fn relative_form(cx: &Decoding) -> Decoded {
    let mut base = "V\\rel";
    let mut reduplicated = false;
    match cx.flex % 10_000 / 1000 {
        1 => reduplicated = cx.stem() == Some(StemType::Inf),
        0 | 2 => {}
        _ => cx.error(format!("Invalid relative form flexcode (pattern 4[0-2]xxx): {}", cx.code)),
    }
    let mut form = "";
    let mut anterior = false;
    match cx.flex % 1000 / 10 {
        0 => cx.warn(format!(
            "Underspecified relative form flexcode (number/gender/tense, pattern 4x00x): {}",
            cx.code
        )),
        f => match RELATIVE_FORMS.iter().find(|(c, _, _)| *c == f) {
            Some(&(_, s, ant)) => {
                form = s;
                anterior = ant;
            }
            None => cx.error(format!(
                "Invalid relative form flexcode (number/gender/tense, pattern 4x[1-12/31/32/38]x): {}",
                cx.code
            )),
        },
    }
    if reduplicated {
        if anterior {
            cx.warn(format!("Anterior relative form with reduplicating stem ({})<>{}", cx.sub_pos, base));
        } else {
            base = "V~rel.ipfv";
        }
    }
    Decoded::new(format!("{}{}{}", base, form, cx.suffix_state()))
}

pub static IMPERATIVE_FORMS: DigitTable = &[
    (1, ".sg"),
    (2, ".pl"),
    (3, ".du"),
    // jmj.tw=
    (4, ""),
];

fn imperative(cx: &Decoding) -> Decoded {
    if cx.flex % 10_000 / 1000 > 2 {
        cx.error(format!("Invalid imperative flexcode (pattern 5[0-2]xxx): {}", cx.code));
    }
    let form = match cx.flex % 1000 / 10 {
        0 => {
            cx.warn(format!("Underspecified imperative flexcode (pattern 5x0xx): {}", cx.code));
            ""
        }
        f => lookup(IMPERATIVE_FORMS, f).unwrap_or_else(|| {
            cx.error(format!("Invalid imperative flexcode (pattern 5x[1-4]xx): {}", cx.code));
            ""
        }),
    };
    Decoded::new(format!("V\\imp{}{}", form, cx.suffix_state()))
}

pub static NOMINAL_VERB_FORMS: DigitTable = &[
    (1, "\\nmlz.m"),
    (2, "\\nmlz.m"),
    (3, "\\nmlz.f"),
    (4, "\\nmlz.f"),
    (5, "\\nmlz"),
];

pub static COMPLEMENTARY_INFINITIVE_FORMS: DigitTable =
    &[(1, ".f"), (2, ".f"), (3, ".f"), (4, ".m"), (5, ".f")];

// ending and gemination are recorded, but not glossed
pub static NEGATIVE_COMPLEMENT_FORMS: DigitTable = &[(1, ""), (2, ""), (3, ""), (4, ""), (5, ""), (6, "")];

/// Shared layout of the 6xxxx categories: form in the hundreds digit, a
/// zero tens digit, state in the last digit.
fn hundreds_form(cx: &Decoding, what: &str, pattern: &str) -> u64 {
    let rest = cx.flex % 1000;
    if rest / 10 % 10 > 0 {
        cx.error(format!("Invalid {} flexcode (pattern {}x0x): {}", what, pattern, cx.code));
    }
    rest / 100
}

fn nominal_verb_form(cx: &Decoding) -> Decoded {
    let form = match hundreds_form(cx, "nominal verb form", "60") {
        0 => {
            cx.error(format!(
                "Underspecified nominal/adverbial verb form flexcode (pattern 600xx): {}",
                cx.code
            ));
            "\\nmlz/advz"
        }
        f => lookup(NOMINAL_VERB_FORMS, f).unwrap_or_else(|| {
            cx.error(format!("Invalid nominal verb form flexcode (pattern 60[1-5]xx): {}", cx.code));
            ""
        }),
    };
    Decoded::new(format!("V{}{}", form, cx.suffix_state()))
}

fn complementary_infinitive(cx: &Decoding) -> Decoded {
    let form = match hundreds_form(cx, "complementary infinitive", "62") {
        0 => {
            cx.warn(format!("Underspecified complementary infinitive flexcode (pattern 620xx): {}", cx.code));
            ""
        }
        f => lookup(COMPLEMENTARY_INFINITIVE_FORMS, f).unwrap_or_else(|| {
            cx.error(format!("Invalid complementary infinitive flexcode (pattern 62[1-5]0x): {}", cx.code));
            ""
        }),
    };
    Decoded::new(format!("V\\adv.inf{}{}", form, cx.suffix_state()))
}

fn negative_complement(cx: &Decoding) -> Decoded {
    let form = match hundreds_form(cx, "negative complement", "63") {
        0 => {
            cx.warn(format!("Underspecified negative complement flexcode (pattern 630xx): {}", cx.code));
            ""
        }
        f => lookup(NEGATIVE_COMPLEMENT_FORMS, f).unwrap_or_else(|| {
            cx.error(format!("Invalid negative complement flexcode (pattern 63[1-6]0x): {}", cx.code));
            ""
        }),
    };
    Decoded::new(format!("V\\advz{}{}", form, cx.suffix_state()))
}

fn infinitive(cx: &Decoding) -> Decoded {
    Decoded::new(format!("V\\inf{}", cx.suffix_state()))
}

// ---------------- nominal categories ----------------

fn noun(cx: &Decoding) -> Decoded {
    let rest = cx.flex % 1000;
    let mut state = match rest % 100 / 10 {
        0 => "",
        5 => ":stpr",
        6 => ":stc",
        _ => {
            cx.error(format!("Invalid substantive flexcode (state, pattern 70x[0/5/6]x): {}", cx.code));
            ""
        }
    };
    if rest % 10 != 0 && state != ":stpr" {
        cx.warn(format!("Erroneous substantive stat.pr. flexcode [state] (pattern 70x5x): {}", cx.code));
        state = ":stpr";
    }
    let number = match rest / 100 {
        0 => ":sg",
        1 => ":pl",
        3 => ":du",
        _ => {
            cx.error(format!("Invalid substantive flexcode (number, pattern 70[0/1/3]xx): {}", cx.code));
            ""
        }
    };
    let mut gender = "";
    if cx.pos == "substantive" {
        match cx.sub_pos {
            "substantive_masc" => gender = ".m",
            "substantive_fem" => gender = ".f",
            _ => cx.warn(format!(
                "Underspecified substantive form: no gender on noun ({}): N{}{}",
                cx.code, number, state
            )),
        }
    }
    Decoded::new(format!("N{}{}{}", gender, number, state))
}

pub static ADJECTIVE_FORMS: DigitTable =
    &[(1, ":m.sg"), (2, ":f.sg"), (3, ":m.pl"), (4, ":f.pl"), (5, ":m.du"), (6, ":f.du")];

fn adjective(cx: &Decoding) -> Decoded {
    let mut base = match cx.sub_pos {
        "nisbe_adjective_preposition" => "PREP-adjz",
        "nisbe_adjective_substantive" => "N-adjz",
        _ => "ADJ",
    };
    let rest = cx.flex % 1000;
    let mut form = "";
    let mut state = "";
    match rest / 100 {
        0 => {
            let gn = rest / 10;
            if gn == 0 {
                cx.warn(format!("Underspecified adjective flexcode (number/gender, pattern 71000): {}", cx.code));
            } else {
                match lookup(ADJECTIVE_FORMS, gn) {
                    Some(f) => form = f,
                    None => cx.error(format!(
                        "Invalid adjective flexcode (number/gender, pattern 710[1-6]0): {}",
                        cx.code
                    )),
                }
            }
            if cx.code.state_digit() != 0 {
                cx.error(format!(
                    "Invalid adjective flexcode (suffix without stat.pr., pattern 710x0): {}",
                    cx.code
                ));
            }
        }
        // compounds such as nfr-sw, with a dependent pronoun
        1 => match rest % 100 {
            1..=9 => {
                state = ":stpr";
                cx.error(format!(
                    "Invalid adjective flexcode (suffix pronoun instead of dep. pronoun, pattern 711[15-24]): {}",
                    cx.code
                ));
            }
            slot => state = cx.pronoun_state(slot, "adjective"),
        },
        2 => {
            // 20..25 count from zero, unlike the 710x0 forms
            match rest / 10 {
                // late nA-prefixed adjective in a suffix conjugation, nA:nfr=f
                26 => base = "vblz-ADJ",
                gn => match lookup(ADJECTIVE_FORMS, gn - 19) {
                    Some(f) => form = f,
                    None => cx.error(format!(
                        "Invalid adjective flexcode (number/gender, pattern 712[0-6]x): {}",
                        cx.code
                    )),
                },
            }
            state = cx.suffix_state();
        }
        _ => cx.error(format!(
            "Invalid adjective flexcode (number/gender, pattern 71[0-2][0-6]x): {}",
            cx.code
        )),
    }
    Decoded::new(format!("{}{}{}", base, form, state))
}

fn adverb(cx: &Decoding) -> Decoded {
    if cx.flex % 1000 / 10 != 0 {
        cx.error(format!("Invalid adverbial flexcode (pattern 7200x): {}", cx.code));
    }
    // 72000 too: the suffix is there but destroyed
    Decoded::new("ADV:stpr".to_string())
}

fn number(cx: &Decoding) -> Decoded {
    let (form, class) = match cx.flex % 1000 / 10 {
        0 => {
            cx.warn(format!("Underspecified number form (pattern 7400x): {}", cx.code));
            ("", "")
        }
        1 => (".ord:sg.m", "ordinal"),
        2 => (".ord:sg.f", "ordinal"),
        3 => (".card:m", "cardinal"),
        4 => (".card:f", "cardinal"),
        _ => {
            cx.error(format!("Invalid number form (pattern 740[1-4]x): {}", cx.code));
            ("", "")
        }
    };
    Decoded { gloss: format!("NUM{}{}", form, cx.suffix_state()), form_class: class }
}

// ---------------- closed classes ----------------

fn possessive_article(cx: &Decoding) -> Decoded {
    if cx.flex % 100 / 10 != 0 {
        cx.error(format!("Invalid possessive article flexcode (pattern 8000x): {}", cx.code));
    }
    Decoded::new(format!("ART.poss{}", cx.suffix_state()))
}

pub static RELATIVE_PRONOUN_FORMS: DigitTable = &[
    (1, ":m.sg"),
    (2, ":f.sg"),
    (3, ":m.pl"),
    (4, ":f.pl"),
    (11, ":m.sg"),
    (12, ":f.sg"),
    (13, ":m.pl"),
    (14, ":f.pl"),
];

fn relative_pronoun(cx: &Decoding) -> Decoded {
    let rest = cx.flex % 10_000;
    let state = cx.pronoun_state(rest % 100, "relative pronoun");
    let form = match rest / 100 {
        0 | 10 => {
            cx.warn(format!("Underspecified relative pronoun form (pattern 8[0-1][1-4]xx): {}", cx.code));
            ""
        }
        f => lookup(RELATIVE_PRONOUN_FORMS, f).unwrap_or_else(|| {
            cx.error(format!(
                "Invalid relative pronoun flexcode (gender/number, pattern 8[0-1][1-4]xx): {}",
                cx.code
            ));
            ""
        }),
    };
    Decoded::new(format!("PRON.rel{}{}", form, state))
}

fn admirative(cx: &Decoding) -> Decoded {
    if cx.flex % 1000 / 10 != 0 {
        cx.error(format!("Invalid admirative suffix flexcode (pattern 9000x): {}", cx.code));
    }
    Decoded::new(format!("ADJ-excl{}", cx.suffix_state()))
}

/// sDm.tj.fj forms.
pub static POSTERIOR_PARTICIPLE_FORMS: DigitTable = &[(0, "-m.sg"), (10, "-f.sg"), (20, "-m.pl")];

fn posterior_participle(cx: &Decoding) -> Decoded {
    let form = lookup(POSTERIOR_PARTICIPLE_FORMS, cx.flex % 100).unwrap_or_else(|| {
        cx.error(format!("Invalid posterior participle flexcode (pattern 910[0-2]0): {}", cx.code));
        ""
    });
    Decoded::new(format!("V:ptcp.post{}", form))
}

fn preposition(cx: &Decoding) -> Decoded {
    if cx.flex % 100 / 10 != 0 {
        cx.error(format!("Invalid preposition flexcode (pattern 9300x): {}", cx.code));
    }
    Decoded::new(format!("PREP{}", cx.suffix_state()))
}

fn particle(cx: &Decoding) -> Decoded {
    let state = cx.pronoun_state(cx.flex % 100, "particle");
    Decoded::new(format!("PTCL{}", state))
}

fn auxiliary(cx: &Decoding) -> Decoded {
    match cx.flex % 1000 / 10 {
        20 | 30..=38 | 40..=43 => {}
        _ => cx.warn(format!("Invalid auxiliary flexcode (form, pattern 9620x, 9630x-9643x): {}", cx.code)),
    }
    Decoded::new(format!("AUX{}", cx.suffix_state()))
}
