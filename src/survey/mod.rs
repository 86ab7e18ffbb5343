//! Spiral survey planning
//!
//! Converts a survey polygon plus spiral settings into an ordered transect
//! list with camera trigger placement and a derived shot count.
//!
//! # Pipeline
//!
//! [`spiral`] generates raw chords around the polygon centroid, [`order`]
//! applies entry rotation / refly optimization / alternate repartition, and
//! [`camera`] tags points and overlays hover triggers. [`SpiralSurvey`]
//! drives the pipeline and owns the latest result; every rebuild replaces
//! the previous path wholesale.
//!
//! # Modules
//!
//! - [`types`]: Coordinates, transects, settings snapshots
//! - [`polygon`]: Survey area polygon
//! - [`spiral`]: Archimedean spiral chord generation
//! - [`order`]: Transect ordering and traversal optimization
//! - [`camera`]: Hover point insertion and shot-count estimation

pub mod camera;
pub mod order;
pub mod polygon;
pub mod spiral;
pub mod types;

use heapless::Vec;
use log::warn;

use crate::geo;
use crate::mission::{self, MissionCommand, MissionCommandList};

pub use polygon::{SurveyPolygon, MAX_POLYGON_VERTICES};
pub use types::{
    CameraConfig, Coordinate, EntryLocation, PointRole, SpiralConfig, Transect, TransectList,
    TransectPoint, MAX_TRANSECTS, MAX_TRANSECT_POINTS,
};

/// Spiral survey planner.
///
/// Owns the latest generated transect list and its derived values. The
/// polygon and settings are snapshots replaced by the owning controller;
/// after any mutation the controller calls [`rebuild`](Self::rebuild).
/// While the suppress flag is set (bulk settings load), rebuild requests
/// are ignored so partial intermediate states never produce a path.
pub struct SpiralSurvey {
    polygon: SurveyPolygon,
    config: SpiralConfig,
    camera: CameraConfig,
    transects: TransectList,
    /// Commands from a plan load; invalidated by any rebuild
    loaded_commands: MissionCommandList,
    camera_shots: u32,
    complex_distance: f64,
    /// Entry rotation toggle ("flip the whole path")
    rotate: bool,
    /// Bulk-load guard: while set, rebuild() is a no-op
    suppress_rebuild: bool,
}

impl SpiralSurvey {
    /// Create a planner from initial snapshots.
    ///
    /// The path starts empty; call [`rebuild`](Self::rebuild) to generate.
    pub fn new(polygon: SurveyPolygon, config: SpiralConfig, camera: CameraConfig) -> Self {
        Self {
            polygon,
            config,
            camera,
            transects: Vec::new(),
            loaded_commands: Vec::new(),
            camera_shots: 0,
            complex_distance: 0.0,
            rotate: false,
            suppress_rebuild: false,
        }
    }

    // --- Snapshots ---

    /// Replace the survey polygon snapshot
    pub fn set_polygon(&mut self, polygon: SurveyPolygon) {
        self.polygon = polygon;
    }

    /// Replace the spiral settings snapshot
    pub fn set_config(&mut self, config: SpiralConfig) {
        self.config = config;
    }

    /// Replace the camera settings snapshot and refresh the shot count.
    ///
    /// Camera settings that change path geometry (hover insertion) still
    /// need a full [`rebuild`](Self::rebuild) by the caller.
    pub fn set_camera(&mut self, camera: CameraConfig) {
        self.camera = camera;
        if !self.suppress_rebuild {
            self.recalc_camera_shots();
        }
    }

    /// Current spiral settings snapshot
    pub fn config(&self) -> &SpiralConfig {
        &self.config
    }

    /// Current camera settings snapshot
    pub fn camera(&self) -> &CameraConfig {
        &self.camera
    }

    /// Current survey polygon
    pub fn polygon(&self) -> &SurveyPolygon {
        &self.polygon
    }

    // --- Rebuild control ---

    /// Set or clear the suppress-rebuild guard.
    ///
    /// Callers set this while bulk-loading multiple settings so that
    /// intermediate states never trigger a premature rebuild, then clear it
    /// and request the final rebuild.
    pub fn set_suppress_rebuild(&mut self, suppress: bool) {
        self.suppress_rebuild = suppress;
    }

    /// Whether rebuild requests are currently suppressed
    pub fn suppress_rebuild(&self) -> bool {
        self.suppress_rebuild
    }

    /// Rebuild the transect list and derived values from the current
    /// snapshots.
    ///
    /// The previous path is discarded wholesale, along with any loaded
    /// command list (a rebuilt path invalidates it). Invalid geometry
    /// (polygon with fewer than 3 vertices, non-positive radius,
    /// resolution, or spacing) yields an empty path.
    pub fn rebuild(&mut self) {
        if self.suppress_rebuild {
            return;
        }

        self.transects.clear();
        self.loaded_commands.clear();

        self.rebuild_single_pass(false);
        if self.config.refly_enabled {
            self.rebuild_single_pass(true);
        }

        self.complex_distance = total_path_distance(&self.transects);
        self.recalc_camera_shots();
    }

    fn rebuild_single_pass(&mut self, refly: bool) {
        if self.polygon.vertex_count() < 3 {
            return;
        }
        let center = match self.polygon.centroid() {
            Some(coord) => coord,
            None => return,
        };

        let mut chords = spiral::generate_arms(center, &self.config);

        order::apply_entry_rotation(&mut chords, self.rotate);

        if refly {
            // Connect the refly pass to wherever the primary pass ended
            let anchor = self
                .transects
                .last()
                .and_then(|transect| transect.last())
                .map(|point| point.coord);
            if let Some(anchor) = anchor {
                order::optimize_for_shortest_distance(anchor, &mut chords);
            }
        }

        if self.config.fly_alternate_transects {
            order::interleave_alternate_transects(&mut chords);
        }

        for chord in &chords {
            let transect = camera::attach_camera_points(chord, &self.camera);
            if self.transects.push(transect).is_err() {
                warn!(
                    "transect list capacity reached, truncating survey at {} transects",
                    self.transects.len()
                );
                break;
            }
        }
    }

    /// Toggle the entry rotation and rebuild
    pub fn rotate_entry_point(&mut self) {
        self.rotate = !self.rotate;
        self.rebuild();
    }

    /// Whether the entry rotation toggle is currently set
    pub fn entry_rotated(&self) -> bool {
        self.rotate
    }

    // --- Results ---

    /// The generated transect list
    pub fn transects(&self) -> &[Transect] {
        &self.transects
    }

    /// Estimated camera shot count for the current path and settings
    pub fn camera_shots(&self) -> u32 {
        self.camera_shots
    }

    /// Cumulative distance of the whole path in meters
    pub fn complex_distance(&self) -> f64 {
        self.complex_distance
    }

    /// Recompute the shot count from the current path and settings.
    ///
    /// Runs automatically after a rebuild and a camera change; callers
    /// invoke it directly after installing loaded commands whose plan file
    /// carried no shot count.
    pub fn recalc_camera_shots(&mut self) {
        let loaded = if self.loaded_commands.is_empty() {
            None
        } else {
            Some(self.loaded_commands.as_slice())
        };
        self.camera_shots = camera::estimate_shot_count(
            &self.transects,
            loaded,
            &self.camera,
            self.has_turnaround(),
            self.complex_distance,
        );
    }

    fn has_turnaround(&self) -> bool {
        self.config.turnaround_distance > 0.0
    }

    // --- Mission commands ---

    /// Install a command list loaded from a plan file.
    ///
    /// Shot counting replays these instead of estimating from transects
    /// until the next rebuild discards them.
    pub fn set_loaded_commands(&mut self, commands: &[MissionCommand]) -> Result<(), &'static str> {
        self.loaded_commands.clear();
        self.loaded_commands
            .extend_from_slice(commands)
            .map_err(|_| "mission command list full (max 2048 commands)")
    }

    /// Expand the current path into mission commands at the given altitude
    pub fn build_mission_commands(&self, altitude: f32) -> MissionCommandList {
        mission::build_mission_commands(&self.transects, &self.camera, altitude)
    }

    // --- Timing ---

    /// Seconds between camera shots at the given speed; 0 when stationary
    pub fn time_between_shots(&self, vehicle_speed: f64) -> f64 {
        if vehicle_speed == 0.0 {
            0.0
        } else {
            self.camera.trigger_distance / vehicle_speed
        }
    }

    /// Total hover dwell time added by hover-and-capture in seconds.
    ///
    /// The vehicle stops at every transect point in this mode, so each
    /// point contributes one capture dwell.
    pub fn additional_time_delay(&self) -> f64 {
        if !self.camera.hover_and_capture_enabled() {
            return 0.0;
        }

        let mut hover_time = 0.0;
        for transect in &self.transects {
            hover_time += self.camera.hover_capture_delay_s * transect.len() as f64;
        }
        hover_time
    }
}

/// Cumulative distance over the flattened point sequence, including the
/// hops between transects
fn total_path_distance(transects: &[Transect]) -> f64 {
    let mut total = 0.0;
    let mut previous: Option<Coordinate> = None;

    for transect in transects {
        for point in transect {
            if let Some(prev) = previous {
                total += geo::calculate_distance(
                    prev.latitude,
                    prev.longitude,
                    point.coord.latitude,
                    point.coord.longitude,
                );
            }
            previous = Some(point.coord);
        }
    }

    total
}
