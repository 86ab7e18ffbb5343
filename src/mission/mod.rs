//! Mission Command Types
//!
//! Pure data structures for the vehicle-command form of a survey: the
//! expansion of a transect list into waypoint and camera commands, and the
//! command list replayed by the shot-count estimator after a plan load.
//!
//! # Command Format
//!
//! - Uses MAVLink MISSION_ITEM_INT format (scaled integer coordinates)
//! - Sequence number for ordering
//! - Command type (waypoint, camera trigger distance, image capture)
//!
//! # Note
//!
//! This module contains only pure data types and the transect expansion.
//! Uploading commands to a vehicle is the owning controller's concern.

pub mod builder;
pub mod command;

use heapless::Vec;

pub use builder::build_mission_commands;
pub use command::{
    cmd_has_location, is_nav_command, MAV_CMD_DO_SET_CAM_TRIGG_DIST, MAV_CMD_IMAGE_START_CAPTURE,
    MAV_CMD_NAV_LAST, MAV_CMD_NAV_WAYPOINT,
};

/// Maximum number of commands in one mission expansion
pub const MAX_MISSION_COMMANDS: usize = 2048;

/// MAV_FRAME_GLOBAL_RELATIVE_ALT
const FRAME_GLOBAL_RELATIVE_ALT: u8 = 3;

/// MAV_FRAME_MISSION (frame for DO commands without a location)
const FRAME_MISSION: u8 = 2;

/// Mission command
///
/// Represents a single command in vehicle form. Uses MAVLink
/// MISSION_ITEM_INT format with scaled integer coordinates for better
/// precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionCommand {
    /// Sequence number (0-indexed)
    pub seq: u16,
    /// Frame of reference (MAV_FRAME_GLOBAL_RELATIVE_ALT, etc.)
    pub frame: u8,
    /// Command ID (MAV_CMD_NAV_WAYPOINT, MAV_CMD_DO_SET_CAM_TRIGG_DIST, etc.)
    pub command: u16,
    /// Autocontinue to next command (0=false, 1=true)
    pub autocontinue: u8,
    /// PARAM1 (command-specific, e.g. hold time or trigger distance)
    pub param1: f32,
    /// PARAM2 (command-specific)
    pub param2: f32,
    /// PARAM3 (command-specific)
    pub param3: f32,
    /// PARAM4 (command-specific)
    pub param4: f32,
    /// X coordinate (latitude in degrees * 1e7)
    pub x: i32,
    /// Y coordinate (longitude in degrees * 1e7)
    pub y: i32,
    /// Z coordinate (altitude in meters)
    pub z: f32,
}

impl Default for MissionCommand {
    fn default() -> Self {
        Self {
            seq: 0,
            frame: 0,
            command: 0,
            autocontinue: 1,
            param1: 0.0,
            param2: 0.0,
            param3: 0.0,
            param4: 0.0,
            x: 0,
            y: 0,
            z: 0.0,
        }
    }
}

impl MissionCommand {
    /// Create a waypoint command at the given coordinate.
    ///
    /// `hold_s` becomes param1 (hold time at the waypoint in seconds).
    pub fn new_waypoint(seq: u16, lat: f64, lon: f64, alt: f32, hold_s: f32) -> Self {
        Self {
            seq,
            frame: FRAME_GLOBAL_RELATIVE_ALT,
            command: MAV_CMD_NAV_WAYPOINT,
            param1: hold_s,
            x: libm::round(lat * 1e7) as i32,
            y: libm::round(lon * 1e7) as i32,
            z: alt,
            ..Self::default()
        }
    }

    /// Create a camera trigger distance command.
    ///
    /// `distance_m` > 0 starts triggering at that interval, 0 stops it.
    pub fn new_set_trigger_distance(seq: u16, distance_m: f32) -> Self {
        Self {
            seq,
            frame: FRAME_MISSION,
            command: MAV_CMD_DO_SET_CAM_TRIGG_DIST,
            param1: distance_m,
            ..Self::default()
        }
    }

    /// Create a single image capture command
    pub fn new_image_capture(seq: u16) -> Self {
        Self {
            seq,
            frame: FRAME_MISSION,
            command: MAV_CMD_IMAGE_START_CAPTURE,
            // param3: number of images to capture
            param3: 1.0,
            ..Self::default()
        }
    }

    /// Get latitude in degrees
    pub fn latitude(&self) -> f64 {
        self.x as f64 / 1e7
    }

    /// Get longitude in degrees
    pub fn longitude(&self) -> f64 {
        self.y as f64 / 1e7
    }

    /// Get altitude in meters
    pub fn altitude(&self) -> f32 {
        self.z
    }
}

/// Mission command list
pub type MissionCommandList = Vec<MissionCommand, MAX_MISSION_COMMANDS>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waypoint_scaled_coordinates() {
        let cmd = MissionCommand::new_waypoint(0, 37.0, -122.0, 50.0, 0.0);
        assert_eq!(cmd.x, 370000000);
        assert_eq!(cmd.y, -1220000000);
        assert!((cmd.latitude() - 37.0).abs() < 1e-7);
        assert!((cmd.longitude() - (-122.0)).abs() < 1e-7);
        assert!((cmd.altitude() - 50.0).abs() < 1e-6);
        assert_eq!(cmd.command, MAV_CMD_NAV_WAYPOINT);
        assert_eq!(cmd.frame, FRAME_GLOBAL_RELATIVE_ALT);
    }

    #[test]
    fn test_waypoint_rounding() {
        // 1e7 scaling must round, not truncate
        let cmd = MissionCommand::new_waypoint(0, 47.37690009, 8.0, 50.0, 0.0);
        assert_eq!(cmd.x, 473769001);
    }

    #[test]
    fn test_waypoint_hold_time() {
        let cmd = MissionCommand::new_waypoint(3, 0.0, 0.0, 30.0, 4.0);
        assert_eq!(cmd.seq, 3);
        assert!((cmd.param1 - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_trigger_distance_command() {
        let start = MissionCommand::new_set_trigger_distance(1, 25.0);
        assert_eq!(start.command, MAV_CMD_DO_SET_CAM_TRIGG_DIST);
        assert!(start.param1 > 0.0);

        let stop = MissionCommand::new_set_trigger_distance(2, 0.0);
        assert!((stop.param1 - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_image_capture_command() {
        let cmd = MissionCommand::new_image_capture(7);
        assert_eq!(cmd.command, MAV_CMD_IMAGE_START_CAPTURE);
        assert_eq!(cmd.seq, 7);
        assert!((cmd.param3 - 1.0).abs() < 1e-6);
    }
}
