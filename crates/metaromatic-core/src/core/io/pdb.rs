use crate::core::io::traits::StructureFile;
use crate::core::models::atom::AtomRecord;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, trace};

const ATOM_RECORD: &str = "ATOM";
const END_OF_MODEL: &str = "ENDMDL";
const FIRST_ALT_LOC: char = 'A';
// ATOM serial name resName chain resSeq x y z
const MIN_ATOM_FIELDS: usize = 8;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: PdbParseErrorKind },
}

#[derive(Debug, Error, PartialEq)]
pub enum PdbParseErrorKind {
    #[error("ATOM record has only {found} fields, coordinates are missing")]
    TooFewFields { found: usize },
    #[error("Invalid integer in {field} field (value: '{value}')")]
    InvalidInt { field: &'static str, value: String },
    #[error("Invalid float in {field} field (value: '{value}')")]
    InvalidFloat { field: &'static str, value: String },
}

/// Reader for whitespace-separated PDB `ATOM` records.
///
/// Only `ATOM` records are kept, reading stops at the first `ENDMDL`, and of
/// the alternate locations only the blank and `A` conformations survive. Records
/// whose residue number carries an insertion code, or has no readable residue
/// number at all, are skipped. A blank chain column is read as the empty chain
/// id. All chains are returned; chain selection happens during classification.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<AtomRecord>, Self::Error> {
        let mut records = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            let tokens: Vec<&str> = line.split_whitespace().collect();

            match tokens.first().copied() {
                Some(ATOM_RECORD) => {
                    if let Some(record) = parse_atom_record(&tokens)
                        .map_err(|kind| PdbError::Parse {
                            line: line_num,
                            kind,
                        })?
                    {
                        records.push(record);
                    }
                }
                Some(END_OF_MODEL) => {
                    debug!(line = line_num, "Reached end of first model.");
                    break;
                }
                _ => {}
            }
        }

        debug!(num_records = records.len(), "Read ATOM records.");
        Ok(records)
    }
}

fn parse_atom_record(tokens: &[&str]) -> Result<Option<AtomRecord>, PdbParseErrorKind> {
    if tokens.len() < MIN_ATOM_FIELDS {
        return Err(PdbParseErrorKind::TooFewFields {
            found: tokens.len(),
        });
    }

    let serial: usize = tokens[1]
        .parse()
        .map_err(|_| PdbParseErrorKind::InvalidInt {
            field: "serial",
            value: tokens[1].into(),
        })?;
    let atom_name = tokens[2];

    let (alt_loc, residue_name) = split_alt_loc(tokens[3]);
    if alt_loc.is_some_and(|loc| loc != FIRST_ALT_LOC) {
        trace!(serial, "Skipping alternate location {:?}.", alt_loc);
        return Ok(None);
    }

    // Four-digit residue numbers run into the chain column. A blank chain leaves
    // no token at all, so the residue number is followed directly by `x`.
    let (chain_id, residue_token, coords_start) = if let Some((chain, residue)) =
        split_chain_and_residue(tokens[4])
    {
        (chain, residue, 5)
    } else if has_blank_chain(tokens) {
        ("", tokens[4], 5)
    } else {
        (tokens[4], tokens.get(5).copied().unwrap_or(""), 6)
    };
    if tokens.len() < coords_start + 3 {
        return Err(PdbParseErrorKind::TooFewFields {
            found: tokens.len(),
        });
    }

    if residue_token.ends_with(|c: char| c.is_ascii_alphabetic()) {
        trace!(serial, residue_token, "Skipping residue with insertion code.");
        return Ok(None);
    }
    let Ok(residue_number) = residue_token.parse::<isize>() else {
        trace!(serial, residue_token, "Skipping record without a residue number.");
        return Ok(None);
    };

    let coordinate = |offset: usize, field: &'static str| -> Result<f64, PdbParseErrorKind> {
        let value = tokens[coords_start + offset];
        value.parse().map_err(|_| PdbParseErrorKind::InvalidFloat {
            field,
            value: value.into(),
        })
    };
    let position = Point3::new(coordinate(0, "x")?, coordinate(1, "y")?, coordinate(2, "z")?);

    Ok(Some(AtomRecord::new(
        serial,
        atom_name,
        residue_name,
        chain_id,
        residue_number,
        position,
    )))
}

fn split_alt_loc(token: &str) -> (Option<char>, &str) {
    let mut chars = token.chars();
    match (chars.next(), token.chars().count()) {
        (Some(alt_loc), 4) => (Some(alt_loc), chars.as_str()),
        _ => (None, token),
    }
}

fn has_blank_chain(tokens: &[&str]) -> bool {
    tokens[4].parse::<isize>().is_ok() && tokens.get(5).is_some_and(|t| t.contains('.'))
}

fn split_chain_and_residue(token: &str) -> Option<(&str, &str)> {
    let first = token.chars().next()?;
    if !first.is_ascii_alphabetic() || token.len() < 2 {
        return None;
    }
    let (chain, residue) = token.split_at(first.len_utf8());
    residue.parse::<isize>().ok().map(|_| (chain, residue))
}
