//! Transect ordering and traversal optimization
//!
//! Operates on the raw chord list before role tagging: entry rotation,
//! shortest-distance reordering for the refly pass, and the alternate
//! transect repartition. Every operation preserves the (entry, exit)
//! pairing per chord; only chord order and intra-chord point order change.

use heapless::Vec;

use crate::geo;
use super::types::{Coordinate, RawTransect, MAX_TRANSECTS};

/// Reverse the chord order. First chord becomes last and so forth.
pub fn reverse_transect_order(transects: &mut [RawTransect]) {
    transects.reverse();
}

/// Reverse the point order within each chord. Entry becomes exit and so forth.
pub fn reverse_transect_points(transects: &mut [RawTransect]) {
    for transect in transects.iter_mut() {
        transect.reverse();
    }
}

/// Apply the entry rotation toggle: flip the whole path.
///
/// Reverses point order within every chord and then the chord order, so the
/// path is flown outside-in instead of inside-out. This is the only entry
/// adjustment with geometric meaning for a spiral.
pub fn apply_entry_rotation(transects: &mut [RawTransect], rotate: bool) {
    if transects.is_empty() || !rotate {
        return;
    }

    reverse_transect_points(transects);
    reverse_transect_order(transects);
}

/// Reorder the chords so the path begins closest to `anchor`.
///
/// Compares the anchor distance to the first chord's first and last points
/// and the last chord's first and last points, scanning in that order and
/// keeping the first strict minimum. A winner on the last-chord side
/// reverses the chord order; a winner on a last-point side reverses the
/// point order within every chord.
pub fn optimize_for_shortest_distance(anchor: Coordinate, transects: &mut [RawTransect]) {
    if transects.is_empty() {
        return;
    }

    let first = transects[0];
    let last = transects[transects.len() - 1];
    let candidates = [first[0], first[1], last[0], last[1]];

    let mut shortest_index = 0;
    let mut shortest_distance = geo::calculate_distance(
        candidates[0].latitude,
        candidates[0].longitude,
        anchor.latitude,
        anchor.longitude,
    );
    for (index, candidate) in candidates.iter().enumerate().skip(1) {
        let distance = geo::calculate_distance(
            candidate.latitude,
            candidate.longitude,
            anchor.latitude,
            anchor.longitude,
        );
        if distance < shortest_distance {
            shortest_index = index;
            shortest_distance = distance;
        }
    }

    if shortest_index > 1 {
        reverse_transect_order(transects);
    }
    if shortest_index & 1 == 1 {
        reverse_transect_points(transects);
    }
}

/// Repartition the chord list for alternate-transect traversal.
///
/// Takes all even-indexed chords in order, then all odd-indexed chords in
/// reverse order. Adjacent spiral arms end up far apart in the flown
/// sequence, which keeps repositioning hops short for fixed-wing flight.
pub fn interleave_alternate_transects(transects: &mut Vec<RawTransect, MAX_TRANSECTS>) {
    let mut alternating: Vec<RawTransect, MAX_TRANSECTS> = Vec::new();

    for (index, transect) in transects.iter().enumerate() {
        if index % 2 == 0 {
            let _ = alternating.push(*transect);
        }
    }
    for (index, transect) in transects.iter().enumerate().rev() {
        if index % 2 != 0 {
            let _ = alternating.push(*transect);
        }
    }

    *transects = alternating;
}
