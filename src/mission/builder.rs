//! Transect list to mission command expansion
//!
//! Expands a generated survey path into the vehicle command form: one
//! waypoint per transect point plus camera commands matching the active
//! trigger strategy. The expansion is the source of the command lists that
//! the shot-count estimator can replay after a plan load.

use log::warn;

use crate::survey::types::{CameraConfig, Transect};
use super::{MissionCommand, MissionCommandList};

/// Expand a transect list into mission commands.
///
/// Camera commands depend on the trigger strategy:
/// - hover and capture: an image capture command after every waypoint
/// - distance triggering per transect: trigger-distance start after each
///   transect's entry waypoint, stop after its exit waypoint
/// - distance triggering through turnarounds: one start after the first
///   waypoint of the path and one stop after the last
///
/// Capacity exhaustion truncates the expansion with a warning; the commands
/// built so far are returned.
pub fn build_mission_commands(
    transects: &[Transect],
    camera: &CameraConfig,
    altitude: f32,
) -> MissionCommandList {
    let mut commands = MissionCommandList::new();

    let hover = camera.hover_and_capture_enabled();
    let trigger = camera.trigger_camera();
    let hold_s = if hover && trigger {
        camera.hover_capture_delay_s as f32
    } else {
        0.0
    };

    'transects: for (transect_index, transect) in transects.iter().enumerate() {
        for (point_index, point) in transect.iter().enumerate() {
            let waypoint = MissionCommand::new_waypoint(
                commands.len() as u16,
                point.coord.latitude,
                point.coord.longitude,
                altitude,
                hold_s,
            );
            if !push_command(&mut commands, waypoint) {
                break 'transects;
            }

            if !trigger {
                continue;
            }

            if hover {
                let capture = MissionCommand::new_image_capture(commands.len() as u16);
                if !push_command(&mut commands, capture) {
                    break 'transects;
                }
                continue;
            }

            let first_point = point_index == 0;
            let last_point = point_index + 1 == transect.len();
            let (start_here, stop_here) = if camera.trigger_in_turnaround {
                // One trigger window spanning the whole path
                (
                    transect_index == 0 && first_point,
                    transect_index + 1 == transects.len() && last_point,
                )
            } else {
                (first_point, last_point)
            };

            if start_here {
                let start = MissionCommand::new_set_trigger_distance(
                    commands.len() as u16,
                    camera.trigger_distance as f32,
                );
                if !push_command(&mut commands, start) {
                    break 'transects;
                }
            }
            if stop_here {
                let stop = MissionCommand::new_set_trigger_distance(commands.len() as u16, 0.0);
                if !push_command(&mut commands, stop) {
                    break 'transects;
                }
            }
        }
    }

    commands
}

fn push_command(commands: &mut MissionCommandList, command: MissionCommand) -> bool {
    if commands.push(command).is_err() {
        warn!(
            "mission command capacity reached, truncating expansion at {} commands",
            commands.len()
        );
        return false;
    }
    true
}
