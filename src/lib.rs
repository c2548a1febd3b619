//! linggloss – Leipzig glosses from BTS flexcodes.
//!
//! The Thesaurus Linguae Aegyptiae annotates every Earlier Egyptian token with
//! a numeric *flexcode* describing its inflection. This crate turns such a
//! code, together with the token's lemma ID and part of speech, into an
//! interlinear gloss following the Leipzig Glossing Rules:
//! * `10020` on a verb reads `V\tam.act` (suffix conjugation, active).
//! * `70060` on a masculine substantive reads `N.m:sg:stc` (construct state).
//! * `-10168` decodes exactly like `10168`; the sign is recorded, not used.
//!
//! Closed-class lemmas (pronouns, demonstratives, articles) carry a fixed
//! gloss that wins over any flexcode.
//!
//! ## Modules
//! * [`gloss`] – Entry points: [`gloss::compute_gloss`] and [`gloss::Glosser`].
//! * [`decoder`] – The ordered branch table and its digit tables.
//! * [`compat`] – Which parts of speech plausibly carry which kind of code.
//! * [`tables`] – Lemma overrides and POS fallback labels.
//! * [`stem`] – Verb stem classes read off the sub-POS label.
//! * [`flexcode`] – Coercion of integer and string codes.
//! * [`diagnostic`] – Advisory findings and the sinks that receive them.
//! * [`bts`] – The verbalized flexcode labels of the BTS editor.
//! * [`settings`], [`batch`] and [`server`] – Configuration, the line-oriented
//!   mode and the HTTP surface of the binary.
//!
//! ## Diagnostics
//! Decoding never fails. Underspecified codes, unknown digit patterns and
//! implausible POS pairings are reported to a [`diagnostic::DiagnosticSink`]
//! as lines of the form `POS \t SubPOS \t Flexcode \t Severity: message`.
//! The default sink drops them; [`diagnostic::CollectingSink`],
//! [`diagnostic::WriterSink`] and [`diagnostic::TracingSink`] keep them.
//!
//! ## Quick Start
//! ```
//! use linggloss::{compute_gloss, resolve_flexcode, PosInfo};
//! let pos = PosInfo::with_subtype("substantive", "substantive_masc");
//! assert_eq!(compute_gloss(70060, "125581", &pos), "N.m:sg:stc");
//! assert_eq!(resolve_flexcode(96423), Some("Aux.tw=.stpr.2sgf_(Prep)_Verb"));
//! ```
//!
//! The library installs no tracing subscriber; that is left to the binary.

use std::hash::BuildHasherDefault;

use seahash::SeaHasher;

pub mod batch;
pub mod bts;
pub mod compat;
pub mod decoder;
pub mod diagnostic;
pub mod error;
pub mod flexcode;
pub mod gloss;
pub mod server;
pub mod settings;
pub mod stem;
pub mod tables;

// we will use a fast hashing algo for the static lookup maps
pub type OtherHasher = BuildHasherDefault<SeaHasher>;

pub use bts::resolve_flexcode;
pub use diagnostic::{
    CollectingSink, Diagnostic, DiagnosticSink, FanoutSink, FnSink, NoSink, Severity, TracingSink, WriterSink,
};
pub use error::{GlossError, Result};
pub use flexcode::{Flexcode, RawFlexcode};
pub use gloss::{Glosser, INVALID_CODE, PosInfo, compute_gloss, decode};
pub use stem::{StemType, stem_type, stem_type_label};
pub use tables::{default_gloss, lemma_gloss, pos_gloss};
