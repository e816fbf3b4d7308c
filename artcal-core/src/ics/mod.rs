//! ICS file generation and parsing.
//!
//! Generation writes content lines directly so property order, escaping and
//! folding follow RFC 5545 exactly. Parsing goes through the icalendar
//! crate's parser.

mod generate;
mod parse;
mod uid;

pub use generate::{IcsEvent, PRODID, fold_line, generate_ics};
pub use parse::{ArtifactSummary, parse_artifact};
pub use uid::generate_uid;
