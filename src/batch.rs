//! Line-oriented glossing for the binary's default mode.
//!
//! Input lines are `flexcode \t lemma_id \t pos \t sub_pos`; trailing columns
//! may be left out. Blank lines and `#` comments produce no output.

use std::io::{BufRead, Write};

use crate::diagnostic::DiagnosticSink;
use crate::error::Result;
use crate::gloss::{Glosser, PosInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    pub flexcode: &'a str,
    pub lemma_id: &'a str,
    pub pos: PosInfo,
}

fn column(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

pub fn parse_record(line: &str) -> Option<Record<'_>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() || line.trim_start().starts_with('#') {
        return None;
    }
    let mut columns = line.split('\t');
    let flexcode = columns.next().unwrap_or("");
    let lemma_id = columns.next().unwrap_or("").trim();
    let pos = PosInfo {
        pos: column(columns.next()),
        subtype: column(columns.next()),
    };
    Some(Record { flexcode, lemma_id, pos })
}

/// Writes one gloss per record and returns how many were written.
pub fn gloss_lines<R, W, S>(glosser: &Glosser<S>, input: R, mut output: W) -> Result<usize>
where
    R: BufRead,
    W: Write,
    S: DiagnosticSink,
{
    let mut count = 0;
    for line in input.lines() {
        let line = line?;
        if let Some(record) = parse_record(&line) {
            writeln!(output, "{}", glosser.gloss(record.flexcode, record.lemma_id, &record.pos))?;
            count += 1;
        }
    }
    output.flush()?;
    Ok(count)
}
