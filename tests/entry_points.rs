use linggloss::tables::lemma_count;
use linggloss::{CollectingSink, Glosser, INVALID_CODE, PosInfo, Severity, compute_gloss, lemma_gloss};

#[test]
fn lemma_override_short_circuits() {
    let noun = PosInfo::with_subtype("substantive", "substantive_masc");
    assert_eq!(compute_gloss(3, "10030", &noun), "=1sg");
    assert_eq!(compute_gloss(70060, "851167", &noun), "PRON.3pl");
    assert_eq!(compute_gloss(10020, "850845", &PosInfo::new("verb")), "DEM.m.sg");
    assert_eq!(compute_gloss(0, "d1172", &PosInfo::default()), "=2pl");
    assert_eq!(compute_gloss(0, "dm156", &PosInfo::default()), "=2pl");
}

#[test]
fn lemma_override_ignores_unparseable_code() {
    let glosser = Glosser::with_sink(CollectingSink::new());
    assert_eq!(glosser.gloss("not-a-number", "10030", &PosInfo::default()), "=1sg");
    assert!(glosser.sink().is_empty());
}

#[test]
fn lemma_table_is_loaded() {
    // one entry per data line, comments and blank lines skipped
    assert_eq!(lemma_count(), 141);
}

#[test]
fn unknown_lemma_decodes_flexcode() {
    assert_eq!(lemma_gloss("125581"), None);
    let noun = PosInfo::with_subtype("substantive", "substantive_masc");
    assert_eq!(compute_gloss(70060, "125581", &noun), "N.m:sg:stc");
    assert_eq!(compute_gloss(70060, "", &noun), "N.m:sg:stc");
}

#[test]
fn invalid_codes() {
    let glosser = Glosser::with_sink(CollectingSink::new());
    for raw in ["not-a-number", "", "1.5", "--1", "0x10", "99999999999999999999"] {
        assert_eq!(glosser.gloss(raw, "x", &PosInfo::default()), INVALID_CODE, "input {raw:?}");
    }
    let diagnostics = glosser.sink().take();
    assert_eq!(diagnostics.len(), 6);
    assert!(diagnostics.iter().all(|d| d.severity == Severity::Error));
    assert_eq!(diagnostics[0].flexcode, "not-a-number");
    assert_eq!(diagnostics[0].message, "Invalid flexcode [no number]: not-a-number");
}

#[test]
fn numeral_strings() {
    let noun = PosInfo::with_subtype("substantive", "substantive_masc");
    assert_eq!(compute_gloss("70060", "", &noun), "N.m:sg:stc");
    assert_eq!(compute_gloss(" 70060 ", "", &noun), "N.m:sg:stc");
    assert_eq!(compute_gloss("7_0060", "", &noun), "N.m:sg:stc");
    assert_eq!(compute_gloss("+10020", "", &PosInfo::new("verb")), "V\\tam.act");
    assert_eq!(compute_gloss("-10020", "", &PosInfo::new("verb")), "V\\tam.act");
    let owned = String::from("10021");
    assert_eq!(compute_gloss(&owned, "", &PosInfo::new("verb")), "V\\tam.act:stpr");
}

#[test]
fn extreme_integers_do_not_panic() {
    assert_eq!(compute_gloss(i64::MIN, "", &PosInfo::default()), "(unresolved)");
    assert_eq!(compute_gloss(i64::MAX, "", &PosInfo::new("verb")), "V");
}

#[test]
fn pos_info_from_json() {
    let full: PosInfo = serde_json::from_str(r#"{"type": "substantive", "subtype": "substantive_masc"}"#).unwrap();
    assert_eq!(full, PosInfo::with_subtype("substantive", "substantive_masc"));
    let bare: PosInfo = serde_json::from_str(r#"{"type": "verb"}"#).unwrap();
    assert_eq!(bare.pos(), "verb");
    assert_eq!(bare.sub_pos(), "");
    let empty: PosInfo = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, PosInfo::default());
}
