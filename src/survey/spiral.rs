//! Archimedean spiral arm generation
//!
//! Produces the raw spiral chords for one survey pass in a flat-earth local
//! tangent plane anchored at the polygon centroid, converted to geodetic
//! coordinates. The spiral radius grows as `r(a) = spacing * a / (2π)` and
//! generation halts at the first sample whose radius leaves the survey
//! circle.
//!
//! The angle advances once per chord endpoint, so consecutive chords do NOT
//! share an endpoint: the path is a sequence of disjoint two-point chords
//! approximating the spiral, not a continuous polyline. Downstream ordering
//! and trigger planning rely on the chord pairing staying intact.

use core::f64::consts::TAU;

use heapless::Vec;
use log::warn;

use crate::geo;
use super::types::{Coordinate, RawTransect, SpiralConfig, MAX_TRANSECTS};

/// Generate the raw spiral chords for one pass, innermost first.
///
/// Returns an empty list when `radius`, `resolution`, or `spiral_spacing`
/// is not positive. Capacity exhaustion truncates the spiral with a
/// warning; the chords generated so far are kept.
pub fn generate_arms(center: Coordinate, config: &SpiralConfig) -> Vec<RawTransect, MAX_TRANSECTS> {
    let mut chords: Vec<RawTransect, MAX_TRANSECTS> = Vec::new();

    if config.radius <= 0.0 || config.resolution <= 0.0 || config.spiral_spacing <= 0.0 {
        return chords;
    }

    let angle_increment = 1.0 / config.resolution;
    let mut angle = 0.0;

    loop {
        let entry = match sample(center, config, angle) {
            Some(coord) => coord,
            None => break,
        };
        angle += angle_increment;

        let exit = match sample(center, config, angle) {
            Some(coord) => coord,
            None => break,
        };
        angle += angle_increment;

        if chords.push([entry, exit]).is_err() {
            warn!(
                "spiral chord capacity reached, truncating path at {} chords",
                chords.len()
            );
            break;
        }
    }

    chords
}

/// Compute one spiral sample, or None once the arm leaves the survey circle
fn sample(center: Coordinate, config: &SpiralConfig, angle: f64) -> Option<Coordinate> {
    let r = config.spiral_spacing * angle / TAU;
    if r > config.radius {
        return None;
    }

    let east = r * libm::cos(angle);
    let north = r * libm::sin(angle);

    let (lat, lon) = geo::ned_to_geo(north, east, center.latitude, center.longitude);
    Some(Coordinate::new(lat, lon))
}
