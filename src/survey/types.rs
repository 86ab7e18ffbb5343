//! Survey planning type definitions
//!
//! This module contains the value types shared by the spiral generator,
//! transect orderer, and camera trigger planner:
//! - `Coordinate`: WGS-84 geographic position
//! - `TransectPoint` / `Transect` / `TransectList`: the generated flight path
//! - `SpiralConfig` / `CameraConfig`: settings snapshots supplied by the caller

use heapless::Vec;

/// Maximum number of transects in one survey path (both passes combined)
pub const MAX_TRANSECTS: usize = 512;

/// Maximum points per transect (entry + exit + interior hover points)
pub const MAX_TRANSECT_POINTS: usize = 16;

/// Geographic coordinate (WGS-84 degrees)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to +90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to +180)
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Role of a point within a transect
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointRole {
    /// First point of a transect
    SurveyEntry,
    /// Last point of a transect
    SurveyExit,
    /// Interior stop-and-shoot point (hover and capture mode)
    InteriorHoverTrigger,
}

/// A single tagged point on the flight path
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransectPoint {
    /// Geodetic position
    pub coord: Coordinate,
    /// Role within the transect
    pub role: PointRole,
}

/// One flight leg: an entry point, optional interior hover points in
/// traversal order, and an exit point.
pub type Transect = Vec<TransectPoint, MAX_TRANSECT_POINTS>;

/// Ordered sequence of transects forming the full survey path
pub type TransectList = Vec<Transect, MAX_TRANSECTS>;

/// Raw spiral chord before role tagging and hover insertion
pub type RawTransect = [Coordinate; 2];

/// Survey entry location.
///
/// Carried for plan-format compatibility with rectangular grid surveys,
/// where the entry corner changes the lawnmower layout. A spiral has a
/// single natural entry at its innermost point, so the corner selection is
/// a no-op here; only the rotation toggle
/// ([`SpiralSurvey::rotate_entry_point`](super::SpiralSurvey::rotate_entry_point))
/// affects spiral traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryLocation {
    /// Top-left corner (default)
    #[default]
    TopLeft,
    /// Top-right corner
    TopRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-right corner
    BottomRight,
}

impl EntryLocation {
    /// Decode from the stored integer value; unknown values fall back to
    /// the default corner.
    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => EntryLocation::TopRight,
            2 => EntryLocation::BottomLeft,
            3 => EntryLocation::BottomRight,
            _ => EntryLocation::TopLeft,
        }
    }

    /// Integer value for parameter and plan-format storage
    pub fn as_i32(self) -> i32 {
        match self {
            EntryLocation::TopLeft => 0,
            EntryLocation::TopRight => 1,
            EntryLocation::BottomLeft => 2,
            EntryLocation::BottomRight => 3,
        }
    }
}

/// Spiral survey settings snapshot.
///
/// Supplied by the owning controller; the planner treats it as read-only
/// per rebuild.
#[derive(Clone, Debug)]
pub struct SpiralConfig {
    /// Survey circle radius in meters; generation stops once the spiral arm
    /// leaves this circle
    pub radius: f64,
    /// Samples per radian; the angular step between spiral samples is
    /// `1 / resolution`
    pub resolution: f64,
    /// Distance between successive spiral wraps in meters
    pub spiral_spacing: f64,
    /// Fly even-indexed transects first, then odd-indexed ones in reverse
    pub fly_alternate_transects: bool,
    /// Declared for grid-survey compatibility; spiral generation does not
    /// split concave polygons
    pub split_concave_polygons: bool,
    /// Entry corner (no-op for spirals, see [`EntryLocation`])
    pub entry_point: EntryLocation,
    /// Fly a second spiral pass to fill coverage gaps
    pub refly_enabled: bool,
    /// Extra maneuvering distance beyond transect endpoints in meters;
    /// 0 disables the turnaround margin
    pub turnaround_distance: f64,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            resolution: 10.0,
            spiral_spacing: 20.0,
            fly_alternate_transects: false,
            split_concave_polygons: false,
            entry_point: EntryLocation::TopLeft,
            refly_enabled: false,
            turnaround_distance: 0.0,
        }
    }
}

/// Camera and trigger settings snapshot
#[derive(Clone, Debug)]
pub struct CameraConfig {
    /// A camera is configured for this vehicle
    pub has_camera: bool,
    /// Distance between shots in meters; 0 disables distance cueing
    pub trigger_distance: f64,
    /// Stop at each shot point instead of triggering while moving
    pub hover_and_capture: bool,
    /// Keep the distance trigger running through turnarounds; selects the
    /// cumulative-distance shot count strategy
    pub trigger_in_turnaround: bool,
    /// Dwell time at each hover point in seconds
    pub hover_capture_delay_s: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            has_camera: false,
            trigger_distance: 25.0,
            hover_and_capture: false,
            trigger_in_turnaround: false,
            hover_capture_delay_s: 4.0,
        }
    }
}

impl CameraConfig {
    /// Whether the camera should be triggered at all
    pub fn trigger_camera(&self) -> bool {
        self.has_camera && self.trigger_distance > 0.0
    }

    /// Whether hover-and-capture applies (requires a configured camera)
    pub fn hover_and_capture_enabled(&self) -> bool {
        self.has_camera && self.hover_and_capture
    }
}
