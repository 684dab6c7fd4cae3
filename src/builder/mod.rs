//! Reading sentences and TELL/ASK blocks into expressions.
//!
//! The library core accepts only parsed expressions; this module is the boundary that produces them.
//!
//! A knowledge file is a `TELL` block of semicolon-separated sentences followed by an `ASK` block with a single query:
//!
//! ```text
//! TELL
//! p2 => p3; p3 => p1; c => e; b & e => f; f & g => h; a; b; p2;
//! ASK
//! d
//! ```
//!
//! The reader upper-cases its input before parsing, so file symbols are propositional regardless of how they were written.
//! Expressions built programmatically keep their original case.

mod sentence;

pub use sentence::parse_sentence;

use crate::{
    structures::expression::Expression,
    types::err::{ErrorKind, ParseError},
};

/// Reads a TELL/ASK block into the told sentences and the query.
pub fn read_tell_ask(
    mut reader: impl std::io::BufRead,
) -> Result<(Vec<Expression>, Expression), ErrorKind> {
    let mut text = String::new();
    if reader.read_to_string(&mut text).is_err() {
        return Err(ParseError::Read.into());
    }
    let text = text.to_uppercase();

    let Some(tell_at) = text.find("TELL") else {
        return Err(ParseError::MissingTell.into());
    };
    let after_tell = &text[tell_at + "TELL".len()..];

    let Some(ask_at) = after_tell.find("ASK") else {
        return Err(ParseError::MissingAsk.into());
    };
    let tell_section = &after_tell[..ask_at];
    let ask_section = after_tell[ask_at + "ASK".len()..]
        .trim()
        .trim_end_matches(';')
        .trim_end();

    let mut sentences = Vec::new();
    for chunk in tell_section.split(';') {
        let chunk = chunk.trim();
        if !chunk.is_empty() {
            sentences.push(parse_sentence(chunk)?);
        }
    }

    if ask_section.is_empty() {
        return Err(ParseError::Empty.into());
    }
    let query = parse_sentence(ask_section)?;

    Ok((sentences, query))
}
