//! The individual stages of a Met-aromatic analysis.
//!
//! Each task is a pure function over the output of the previous one: records are
//! classified into residue groups, aromatic groups become ring midpoints,
//! methionine groups become lone-pair vectors, and the scanner pairs the two.
//! Bridge detection post-processes the scanner's candidates.

pub mod bridging;
pub mod classification;
pub mod lone_pairs;
pub mod ring_geometry;
pub mod scanning;
