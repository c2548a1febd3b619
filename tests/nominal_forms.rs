use linggloss::{CollectingSink, Diagnostic, Glosser, PosInfo, Severity, compute_gloss, decode};

fn run(code: i64, pos: &str, sub_pos: &str) -> (String, Vec<Diagnostic>) {
    let glosser = Glosser::with_sink(CollectingSink::new());
    let gloss = glosser.decode(code, pos, sub_pos);
    (gloss, glosser.into_sink().take())
}

fn severities(diagnostics: &[Diagnostic]) -> Vec<Severity> {
    diagnostics.iter().map(|d| d.severity).collect()
}

#[test]
fn masculine_noun_in_construct_state() {
    let pos = PosInfo::with_subtype("substantive", "substantive_masc");
    assert_eq!(compute_gloss(70060, "125581", &pos), "N.m:sg:stc");
}

#[test]
fn noun_number_and_state() {
    let cases = [
        (70000, "N.m:sg"),
        (70100, "N.m:pl"),
        (70300, "N.m:du"),
        (70050, "N.m:sg:stpr"),
        (70051, "N.m:sg:stpr"),
        (70160, "N.m:pl:stc"),
    ];
    for (code, gloss) in cases {
        let (got, diagnostics) = run(code, "substantive", "substantive_masc");
        assert_eq!(got, gloss, "flexcode {code}");
        assert!(diagnostics.is_empty(), "flexcode {code}: {diagnostics:?}");
    }
    assert_eq!(decode(70100, "substantive", "substantive_fem"), "N.f:pl");
}

#[test]
fn suffix_digit_forces_pronominal_state() {
    let (gloss, diagnostics) = run(70061, "substantive", "substantive_masc");
    assert_eq!(gloss, "N.m:sg:stpr");
    assert_eq!(severities(&diagnostics), vec![Severity::Warning]);

    let (gloss, diagnostics) = run(70001, "substantive", "substantive_fem");
    assert_eq!(gloss, "N.f:sg:stpr");
    assert_eq!(severities(&diagnostics), vec![Severity::Warning]);
}

#[test]
fn noun_problems() {
    let (gloss, diagnostics) = run(70200, "substantive", "substantive_masc");
    assert_eq!(gloss, "N.m");
    assert_eq!(severities(&diagnostics), vec![Severity::Error]);

    let (gloss, diagnostics) = run(70020, "substantive", "substantive_masc");
    assert_eq!(gloss, "N.m:sg");
    assert_eq!(severities(&diagnostics), vec![Severity::Error]);
}

#[test]
fn gender_only_on_substantives() {
    let (gloss, diagnostics) = run(70000, "substantive", "");
    assert_eq!(gloss, "N:sg");
    assert_eq!(severities(&diagnostics), vec![Severity::Warning]);
    assert!(diagnostics[0].message.starts_with("Underspecified substantive form: no gender"));

    let (gloss, diagnostics) = run(70000, "entity_name", "person_name");
    assert_eq!(gloss, "N:sg");
    assert!(diagnostics.is_empty());
}

#[test]
fn adjective_gender_and_number() {
    let cases = [
        (71010, "ADJ:m.sg"),
        (71020, "ADJ:f.sg"),
        (71030, "ADJ:m.pl"),
        (71040, "ADJ:f.pl"),
        (71050, "ADJ:m.du"),
        (71060, "ADJ:f.du"),
    ];
    for (code, gloss) in cases {
        let (got, diagnostics) = run(code, "adjective", "");
        assert_eq!(got, gloss, "flexcode {code}");
        assert!(diagnostics.is_empty(), "flexcode {code}: {diagnostics:?}");
    }
    assert_eq!(decode(71010, "adjective", "nisbe_adjective_preposition"), "PREP-adjz:m.sg");
    assert_eq!(decode(71020, "adjective", "nisbe_adjective_substantive"), "N-adjz:f.sg");
}

#[test]
fn adjective_with_suffix_pronoun() {
    assert_eq!(decode(71200, "adjective", ""), "ADJ:m.sg");
    assert_eq!(decode(71201, "adjective", ""), "ADJ:m.sg:stpr");
    assert_eq!(decode(71250, "adjective", ""), "ADJ:f.du");
    assert_eq!(decode(71260, "adjective", ""), "vblz-ADJ");
    assert_eq!(decode(71261, "adjective", ""), "vblz-ADJ:stpr");

    let (gloss, diagnostics) = run(71270, "adjective", "");
    assert_eq!(gloss, "ADJ");
    assert_eq!(severities(&diagnostics), vec![Severity::Error]);
}

#[test]
fn adjective_with_dependent_pronoun() {
    assert_eq!(decode(71100, "adjective", ""), "ADJ");
    assert_eq!(decode(71115, "adjective", ""), "ADJ");
    assert_eq!(decode(71124, "adjective", ""), "ADJ");

    let (gloss, diagnostics) = run(71105, "adjective", "");
    assert_eq!(gloss, "ADJ:stpr");
    assert_eq!(severities(&diagnostics), vec![Severity::Error]);

    let (gloss, diagnostics) = run(71130, "adjective", "");
    assert_eq!(gloss, "ADJ");
    assert_eq!(severities(&diagnostics), vec![Severity::Error]);
}

#[test]
fn adjective_problems() {
    let (gloss, diagnostics) = run(71000, "adjective", "");
    assert_eq!(gloss, "ADJ");
    assert_eq!(severities(&diagnostics), vec![Severity::Warning]);

    // a suffix digit without the 712xx prefix
    let (gloss, diagnostics) = run(71011, "adjective", "");
    assert_eq!(gloss, "ADJ:m.sg");
    assert_eq!(severities(&diagnostics), vec![Severity::Error]);

    let (gloss, diagnostics) = run(71300, "adjective", "");
    assert_eq!(gloss, "ADJ");
    assert_eq!(severities(&diagnostics), vec![Severity::Error]);
}

#[test]
fn adverbs_always_carry_a_suffix() {
    assert_eq!(decode(72000, "adverb", ""), "ADV:stpr");
    assert_eq!(decode(72003, "adverb", ""), "ADV:stpr");

    let (gloss, diagnostics) = run(72010, "adverb", "");
    assert_eq!(gloss, "ADV:stpr");
    assert_eq!(severities(&diagnostics), vec![Severity::Error]);
}

#[test]
fn numbers() {
    assert_eq!(decode(74010, "numeral", "ordinal"), "NUM.ord:sg.m");
    assert_eq!(decode(74020, "numeral", "ordinal"), "NUM.ord:sg.f");
    assert_eq!(decode(74030, "numeral", "cardinal"), "NUM.card:m");
    assert_eq!(decode(74040, "numeral", ""), "NUM.card:f");
    assert_eq!(decode(74031, "numeral", ""), "NUM.card:m:stpr");

    let (gloss, diagnostics) = run(74000, "numeral", "");
    assert_eq!(gloss, "NUM");
    assert_eq!(severities(&diagnostics), vec![Severity::Warning]);

    let (gloss, diagnostics) = run(74050, "numeral", "");
    assert_eq!(gloss, "NUM");
    assert_eq!(severities(&diagnostics), vec![Severity::Error]);
}
