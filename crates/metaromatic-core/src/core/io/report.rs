use crate::core::models::interaction::InteractionCandidate;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Writes candidates as CSV with a kebab-case header row, one row per candidate
/// in the order given.
pub fn write_candidates_csv<W: Write>(
    candidates: &[InteractionCandidate],
    writer: W,
) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if candidates.is_empty() {
        csv_writer.write_record([
            "methionine-residue",
            "aromatic-residue",
            "aromatic-kind",
            "distance",
            "theta",
            "phi",
        ])?;
    }
    for candidate in candidates {
        csv_writer.serialize(candidate)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::residue::ResidueKind;

    fn candidate(met: isize, aro: isize, kind: ResidueKind) -> InteractionCandidate {
        InteractionCandidate {
            methionine_residue: met,
            aromatic_residue: aro,
            aromatic_kind: kind,
            distance: 4.5,
            theta: 60.25,
            phi: 120.5,
        }
    }

    #[test]
    fn writes_header_and_one_row_per_candidate() {
        let mut buffer = Vec::new();
        write_candidates_csv(
            &[
                candidate(18, 54, ResidueKind::Tyrosine),
                candidate(18, 90, ResidueKind::Tryptophan),
            ],
            &mut buffer,
        )
        .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[0],
            "methionine-residue,aromatic-residue,aromatic-kind,distance,theta,phi"
        );
        assert_eq!(lines[1], "18,54,TYR,4.5,60.25,120.5");
        assert_eq!(lines[2], "18,90,TRP,4.5,60.25,120.5");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn empty_candidate_list_still_writes_header() {
        let mut buffer = Vec::new();
        write_candidates_csv(&[], &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text.trim_end(),
            "methionine-residue,aromatic-residue,aromatic-kind,distance,theta,phi"
        );
    }
}
