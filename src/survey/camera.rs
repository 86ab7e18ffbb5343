//! Camera trigger planning
//!
//! Two jobs: overlay interior hover points on a transect when the
//! hover-and-capture strategy is active, and estimate the total camera shot
//! count for the survey. The estimate uses one of three mutually exclusive
//! strategies depending on the trigger settings and whether a concrete
//! command list is available.

use log::{debug, warn};

use crate::geo;
use crate::mission::{
    MissionCommand, MAV_CMD_DO_SET_CAM_TRIGG_DIST, MAV_CMD_IMAGE_START_CAPTURE,
    MAV_CMD_NAV_WAYPOINT,
};
use super::types::{
    CameraConfig, Coordinate, PointRole, RawTransect, Transect, TransectPoint,
    MAX_TRANSECT_POINTS,
};

/// Tag a raw chord's entry and exit points and insert interior hover points.
///
/// With hover-and-capture active and `trigger_distance` shorter than the
/// chord, `floor(length / trigger_distance)` hover points go in at
/// `trigger_distance` multiples along the entry-to-exit bearing. If the
/// point capacity runs out mid-insertion the condition is logged, the
/// remaining insertions are dropped, and the points inserted so far are
/// kept; the exit point is always appended last.
pub fn attach_camera_points(chord: &RawTransect, camera: &CameraConfig) -> Transect {
    let mut transect = Transect::new();

    let _ = transect.push(TransectPoint {
        coord: chord[0],
        role: PointRole::SurveyEntry,
    });

    if camera.trigger_camera() && camera.hover_and_capture_enabled() {
        let length = geo::calculate_distance(
            chord[0].latitude,
            chord[0].longitude,
            chord[1].latitude,
            chord[1].longitude,
        );
        if camera.trigger_distance < length {
            let azimuth = geo::calculate_bearing(
                chord[0].latitude,
                chord[0].longitude,
                chord[1].latitude,
                chord[1].longitude,
            );
            let inner_count = libm::floor(length / camera.trigger_distance) as usize;
            debug!("inserting {} interior hover points", inner_count);

            for index in 0..inner_count {
                // Leave room for the exit point
                if transect.len() >= MAX_TRANSECT_POINTS - 1 {
                    warn!(
                        "transect point capacity reached, dropping {} hover points",
                        inner_count - index
                    );
                    break;
                }
                let (lat, lon) = geo::offset_position(
                    chord[0].latitude,
                    chord[0].longitude,
                    camera.trigger_distance * (index + 1) as f64,
                    azimuth,
                );
                let _ = transect.push(TransectPoint {
                    coord: Coordinate::new(lat, lon),
                    role: PointRole::InteriorHoverTrigger,
                });
            }
        }
    }

    let _ = transect.push(TransectPoint {
        coord: chord[1],
        role: PointRole::SurveyExit,
    });

    transect
}

/// Estimate the total camera shot count for the survey.
///
/// Strategy selection, mutually exclusive:
/// 1. No camera or `trigger_distance == 0`: count is 0.
/// 2. Triggering through turnarounds: the whole-path cumulative distance
///    divided by the trigger interval, rounded up. `complex_distance` is
///    the cumulative distance computed at rebuild, an input here.
/// 3. A loaded command list replays the actual capture commands.
/// 4. Otherwise each transect contributes its camera-active distance
///    divided by the trigger interval, rounded up; with a turnaround
///    margin (and hover off) the outer two points are excluded.
pub fn estimate_shot_count(
    transects: &[Transect],
    loaded_commands: Option<&[MissionCommand]>,
    camera: &CameraConfig,
    has_turnaround: bool,
    complex_distance: f64,
) -> u32 {
    if !camera.trigger_camera() {
        return 0;
    }
    let trigger_distance = camera.trigger_distance;

    if camera.trigger_in_turnaround {
        return libm::ceil(complex_distance / trigger_distance) as u32;
    }

    if let Some(commands) = loaded_commands {
        return replay_commands(commands, camera);
    }

    let mut shots = 0u32;
    for transect in transects {
        if transect.len() < 2 {
            continue;
        }
        let (first, last) = if has_turnaround && !camera.hover_and_capture_enabled() {
            (transect[1].coord, transect[transect.len() - 2].coord)
        } else {
            (transect[0].coord, transect[transect.len() - 1].coord)
        };
        let distance =
            geo::calculate_distance(first.latitude, first.longitude, last.latitude, last.longitude);
        shots += libm::ceil(distance / trigger_distance) as u32;
    }
    shots
}

/// Replay a loaded command list and count the shots it would take.
///
/// Hover-and-capture missions carry one discrete capture command per shot.
/// Distance-triggered missions are tracked through trigger start/stop
/// pairs, accumulating the distance between the waypoints bracketing each
/// active window.
fn replay_commands(commands: &[MissionCommand], camera: &CameraConfig) -> u32 {
    if camera.hover_and_capture_enabled() {
        return commands
            .iter()
            .filter(|command| command.command == MAV_CMD_IMAGE_START_CAPTURE)
            .count() as u32;
    }

    let mut shots = 0u32;
    let mut waiting_for_trigger_stop = false;
    let mut window_start: Option<Coordinate> = None;
    let mut window_end: Option<Coordinate> = None;

    for command in commands {
        if command.command == MAV_CMD_NAV_WAYPOINT {
            let coord = Coordinate::new(command.latitude(), command.longitude());
            if waiting_for_trigger_stop {
                window_end = Some(coord);
            } else {
                window_start = Some(coord);
            }
        } else if command.command == MAV_CMD_DO_SET_CAM_TRIGG_DIST {
            if command.param1 > 0.0 {
                waiting_for_trigger_stop = true;
            } else {
                waiting_for_trigger_stop = false;
                if let (Some(start), Some(end)) = (window_start, window_end) {
                    let distance = geo::calculate_distance(
                        start.latitude,
                        start.longitude,
                        end.latitude,
                        end.longitude,
                    );
                    shots += libm::ceil(distance / camera.trigger_distance) as u32;
                }
                window_start = None;
                window_end = None;
            }
        }
    }

    shots
}
