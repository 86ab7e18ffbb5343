//! Mission Command Classification
//!
//! Command identifiers and helpers for classifying mission commands as NAV
//! (navigation) or DO (immediate action), following the MAVLink convention
//! where command IDs <= MAV_CMD_NAV_LAST (95) are NAV commands.

/// MAV_CMD_NAV_WAYPOINT command ID.
pub const MAV_CMD_NAV_WAYPOINT: u16 = 16;

/// MAV_CMD_NAV_LAST: command IDs at or below this value are NAV commands.
pub const MAV_CMD_NAV_LAST: u16 = 95;

/// MAV_CMD_DO_SET_CAM_TRIGG_DIST command ID.
///
/// param1 > 0 starts distance-based camera triggering at that interval;
/// param1 = 0 stops it.
pub const MAV_CMD_DO_SET_CAM_TRIGG_DIST: u16 = 206;

/// MAV_CMD_IMAGE_START_CAPTURE command ID (one discrete capture per command
/// in hover-and-capture expansions).
pub const MAV_CMD_IMAGE_START_CAPTURE: u16 = 2000;

/// Classify a command as NAV (drives navigation) or DO (immediate action).
pub fn is_nav_command(command_id: u16) -> bool {
    command_id <= MAV_CMD_NAV_LAST
}

/// Check if a command carries a geographic location (lat/lon).
///
/// Equivalent to `is_nav_command`: NAV commands carry location data while
/// DO commands do not.
pub fn cmd_has_location(command_id: u16) -> bool {
    is_nav_command(command_id)
}
