use serde::{Deserialize, Serialize};

use crate::decoder::decode_flexcode;
use crate::diagnostic::{Diagnostic, DiagnosticSink, NoSink, Severity};
use crate::flexcode::{Flexcode, RawFlexcode};
use crate::tables::lemma_gloss;

/// Returned when the flexcode is not a number.
pub const INVALID_CODE: &str = "(invalid code)";

/// Part of speech of a lemma, in the `{type, subtype}` shape of BTS exports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosInfo {
    #[serde(rename = "type", default)]
    pub pos: Option<String>,
    #[serde(default)]
    pub subtype: Option<String>,
}

impl PosInfo {
    pub fn new(pos: &str) -> Self {
        Self { pos: Some(pos.to_string()), subtype: None }
    }
    pub fn with_subtype(pos: &str, subtype: &str) -> Self {
        Self { pos: Some(pos.to_string()), subtype: Some(subtype.to_string()) }
    }
    pub fn pos(&self) -> &str {
        self.pos.as_deref().unwrap_or("")
    }
    pub fn sub_pos(&self) -> &str {
        self.subtype.as_deref().unwrap_or("")
    }
}

/// Glosses tokens, reporting what it finds odd to its sink.
#[derive(Debug, Default, Clone)]
pub struct Glosser<S: DiagnosticSink = NoSink> {
    sink: S,
}

impl Glosser<NoSink> {
    pub fn new() -> Self {
        Self { sink: NoSink }
    }
}

impl<S: DiagnosticSink> Glosser<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Leipzig gloss of one token. A lemma with a fixed gloss wins over
    /// whatever the flexcode says, even an unparseable one.
    pub fn gloss<'a>(&self, flexcode: impl Into<RawFlexcode<'a>>, lemma_id: &str, pos: &PosInfo) -> String {
        if let Some(fixed) = lemma_gloss(lemma_id) {
            return fixed.to_string();
        }
        self.decode(flexcode, pos.pos(), pos.sub_pos())
    }

    /// Gloss from the flexcode alone, without lemma overrides.
    pub fn decode<'a>(&self, flexcode: impl Into<RawFlexcode<'a>>, pos: &str, sub_pos: &str) -> String {
        let raw = flexcode.into();
        match Flexcode::parse(raw) {
            Ok(code) => decode_flexcode(code, pos, sub_pos, &self.sink),
            Err(e) => {
                self.sink.emit(&Diagnostic {
                    pos: pos.to_string(),
                    sub_pos: sub_pos.to_string(),
                    flexcode: raw.to_string(),
                    severity: Severity::Error,
                    message: e.to_string(),
                });
                INVALID_CODE.to_string()
            }
        }
    }
}

/// [`Glosser::gloss`] with diagnostics dropped.
pub fn compute_gloss<'a>(flexcode: impl Into<RawFlexcode<'a>>, lemma_id: &str, pos: &PosInfo) -> String {
    Glosser::new().gloss(flexcode, lemma_id, pos)
}

/// [`Glosser::decode`] with diagnostics dropped.
pub fn decode<'a>(flexcode: impl Into<RawFlexcode<'a>>, pos: &str, sub_pos: &str) -> String {
    Glosser::new().decode(flexcode, pos, sub_pos)
}
