//! Spiral Survey Parameter Definitions
//!
//! Maps the spiral and camera settings to parameter store entries for
//! runtime configuration from a GCS, following ArduPilot naming
//! conventions.
//!
//! # Parameters
//!
//! - `SPIR_RADIUS` - Survey circle radius in meters (**visible in GCS**)
//! - `SPIR_RESOLUTION` - Spiral samples per radian (**visible in GCS**)
//! - `SPIR_SPACING` - Distance between spiral wraps in meters (**visible in GCS**)
//! - `SPIR_ALT_TRANS` - Fly alternate transects (**visible in GCS**)
//! - `SPIR_SPLIT_POLY` - Split concave polygons (**visible in GCS**)
//! - `SPIR_ENTRY_PT` - Entry location enumerant (**visible in GCS**)
//! - `SPIR_REFLY` - Enable the refly pass (**visible in GCS**)
//! - `SPIR_TURNAROUND` - Turnaround margin in meters (**visible in GCS**)
//! - `CAM_TRIG_DIST` - Camera trigger distance in meters (**visible in GCS**)
//! - `CAM_HOVER_CAP` - Hover and capture mode (**visible in GCS**)
//! - `CAM_TRIG_TURN` - Trigger through turnarounds (**visible in GCS**)
//! - `CAM_HOVER_DELAY` - Hover capture dwell in seconds (**visible in GCS**)
//!
//! Loading clamps out-of-range values, so a survey configured from a stale
//! or damaged store still gets usable settings; a store missing entries
//! falls back to the defaults entirely.

use crate::survey::types::{CameraConfig, EntryLocation, SpiralConfig};
use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};

// --- Defaults ---

const DEFAULT_RADIUS: f32 = 100.0;
const DEFAULT_RESOLUTION: f32 = 10.0;
const DEFAULT_SPACING: f32 = 20.0;
const DEFAULT_TURNAROUND: f32 = 0.0;
const DEFAULT_TRIGGER_DISTANCE: f32 = 25.0;
const DEFAULT_HOVER_DELAY: f32 = 4.0;

// --- Ranges ---

const MIN_RADIUS: f32 = 1.0;
const MAX_RADIUS: f32 = 10_000.0;

const MIN_RESOLUTION: f32 = 0.1;
const MAX_RESOLUTION: f32 = 1000.0;

const MIN_SPACING: f32 = 0.1;
const MAX_SPACING: f32 = 1000.0;

const MIN_TURNAROUND: f32 = 0.0;
const MAX_TURNAROUND: f32 = 100.0;

const MIN_TRIGGER_DISTANCE: f32 = 0.0;
const MAX_TRIGGER_DISTANCE: f32 = 1000.0;

const MIN_HOVER_DELAY: f32 = 0.0;
const MAX_HOVER_DELAY: f32 = 60.0;

/// Spiral survey parameters loaded from the parameter store
#[derive(Debug, Clone)]
pub struct SurveyParams {
    /// Survey circle radius in meters
    pub radius: f32,
    /// Spiral samples per radian
    pub resolution: f32,
    /// Distance between spiral wraps in meters
    pub spiral_spacing: f32,
    /// Fly alternate transects
    pub fly_alternate_transects: bool,
    /// Split concave polygons (grid-survey compatibility)
    pub split_concave_polygons: bool,
    /// Entry location enumerant
    pub entry_point: EntryLocation,
    /// Fly a second spiral pass
    pub refly: bool,
    /// Turnaround margin in meters
    pub turnaround_distance: f32,
    /// Camera trigger distance in meters (0 disables)
    pub trigger_distance: f32,
    /// Hover and capture mode
    pub hover_and_capture: bool,
    /// Trigger through turnarounds
    pub trigger_in_turnaround: bool,
    /// Hover capture dwell in seconds
    pub hover_capture_delay: f32,
}

impl Default for SurveyParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            resolution: DEFAULT_RESOLUTION,
            spiral_spacing: DEFAULT_SPACING,
            fly_alternate_transects: false,
            split_concave_polygons: false,
            entry_point: EntryLocation::TopLeft,
            refly: false,
            turnaround_distance: DEFAULT_TURNAROUND,
            trigger_distance: DEFAULT_TRIGGER_DISTANCE,
            hover_and_capture: false,
            trigger_in_turnaround: false,
            hover_capture_delay: DEFAULT_HOVER_DELAY,
        }
    }
}

impl SurveyParams {
    /// Register survey parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            "SPIR_RADIUS",
            ParamValue::Float(DEFAULT_RADIUS),
            ParamFlags::empty(),
        )?;
        store.register(
            "SPIR_RESOLUTION",
            ParamValue::Float(DEFAULT_RESOLUTION),
            ParamFlags::empty(),
        )?;
        store.register(
            "SPIR_SPACING",
            ParamValue::Float(DEFAULT_SPACING),
            ParamFlags::empty(),
        )?;
        store.register(
            "SPIR_ALT_TRANS",
            ParamValue::Bool(false),
            ParamFlags::empty(),
        )?;
        store.register(
            "SPIR_SPLIT_POLY",
            ParamValue::Bool(false),
            ParamFlags::empty(),
        )?;
        store.register("SPIR_ENTRY_PT", ParamValue::Int(0), ParamFlags::empty())?;
        store.register("SPIR_REFLY", ParamValue::Bool(false), ParamFlags::empty())?;
        store.register(
            "SPIR_TURNAROUND",
            ParamValue::Float(DEFAULT_TURNAROUND),
            ParamFlags::empty(),
        )?;
        store.register(
            "CAM_TRIG_DIST",
            ParamValue::Float(DEFAULT_TRIGGER_DISTANCE),
            ParamFlags::empty(),
        )?;
        store.register(
            "CAM_HOVER_CAP",
            ParamValue::Bool(false),
            ParamFlags::empty(),
        )?;
        store.register(
            "CAM_TRIG_TURN",
            ParamValue::Bool(false),
            ParamFlags::empty(),
        )?;
        store.register(
            "CAM_HOVER_DELAY",
            ParamValue::Float(DEFAULT_HOVER_DELAY),
            ParamFlags::empty(),
        )?;

        Ok(())
    }

    /// Load survey parameters from the parameter store.
    ///
    /// Missing entries fall back to defaults; out-of-range values are
    /// clamped.
    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            radius: load_float(store, "SPIR_RADIUS", DEFAULT_RADIUS, MIN_RADIUS, MAX_RADIUS),
            resolution: load_float(
                store,
                "SPIR_RESOLUTION",
                DEFAULT_RESOLUTION,
                MIN_RESOLUTION,
                MAX_RESOLUTION,
            ),
            spiral_spacing: load_float(
                store,
                "SPIR_SPACING",
                DEFAULT_SPACING,
                MIN_SPACING,
                MAX_SPACING,
            ),
            fly_alternate_transects: load_bool(store, "SPIR_ALT_TRANS", false),
            split_concave_polygons: load_bool(store, "SPIR_SPLIT_POLY", false),
            entry_point: EntryLocation::from_i32(load_int(store, "SPIR_ENTRY_PT", 0)),
            refly: load_bool(store, "SPIR_REFLY", false),
            turnaround_distance: load_float(
                store,
                "SPIR_TURNAROUND",
                DEFAULT_TURNAROUND,
                MIN_TURNAROUND,
                MAX_TURNAROUND,
            ),
            trigger_distance: load_float(
                store,
                "CAM_TRIG_DIST",
                DEFAULT_TRIGGER_DISTANCE,
                MIN_TRIGGER_DISTANCE,
                MAX_TRIGGER_DISTANCE,
            ),
            hover_and_capture: load_bool(store, "CAM_HOVER_CAP", false),
            trigger_in_turnaround: load_bool(store, "CAM_TRIG_TURN", false),
            hover_capture_delay: load_float(
                store,
                "CAM_HOVER_DELAY",
                DEFAULT_HOVER_DELAY,
                MIN_HOVER_DELAY,
                MAX_HOVER_DELAY,
            ),
        }
    }

    /// Convert to a [`SpiralConfig`] snapshot for the planner
    pub fn to_spiral_config(&self) -> SpiralConfig {
        SpiralConfig {
            radius: self.radius as f64,
            resolution: self.resolution as f64,
            spiral_spacing: self.spiral_spacing as f64,
            fly_alternate_transects: self.fly_alternate_transects,
            split_concave_polygons: self.split_concave_polygons,
            entry_point: self.entry_point,
            refly_enabled: self.refly,
            turnaround_distance: self.turnaround_distance as f64,
        }
    }

    /// Convert to a [`CameraConfig`] snapshot.
    ///
    /// `has_camera` comes from the vehicle capability query, not from the
    /// parameter store.
    pub fn to_camera_config(&self, has_camera: bool) -> CameraConfig {
        CameraConfig {
            has_camera,
            trigger_distance: self.trigger_distance as f64,
            hover_and_capture: self.hover_and_capture,
            trigger_in_turnaround: self.trigger_in_turnaround,
            hover_capture_delay_s: self.hover_capture_delay as f64,
        }
    }

    /// Validate survey parameters
    pub fn is_valid(&self) -> bool {
        if self.radius < MIN_RADIUS || self.radius > MAX_RADIUS {
            return false;
        }
        if self.resolution < MIN_RESOLUTION || self.resolution > MAX_RESOLUTION {
            return false;
        }
        if self.spiral_spacing < MIN_SPACING || self.spiral_spacing > MAX_SPACING {
            return false;
        }
        if self.turnaround_distance < MIN_TURNAROUND || self.turnaround_distance > MAX_TURNAROUND {
            return false;
        }
        if self.trigger_distance < MIN_TRIGGER_DISTANCE
            || self.trigger_distance > MAX_TRIGGER_DISTANCE
        {
            return false;
        }
        if self.hover_capture_delay < MIN_HOVER_DELAY || self.hover_capture_delay > MAX_HOVER_DELAY
        {
            return false;
        }

        // Consistency: a wrap spacing wider than the survey circle produces
        // a single stub arm
        if self.spiral_spacing > self.radius {
            return false;
        }

        true
    }
}

/// Load a float parameter from the store with clamping
fn load_float(store: &ParameterStore, name: &str, default: f32, min: f32, max: f32) -> f32 {
    match store.get(name) {
        Some(ParamValue::Float(v)) => v.clamp(min, max),
        Some(ParamValue::Int(v)) => (*v as f32).clamp(min, max),
        _ => default,
    }
}

/// Load a bool parameter from the store
fn load_bool(store: &ParameterStore, name: &str, default: bool) -> bool {
    match store.get(name) {
        Some(ParamValue::Bool(v)) => *v,
        Some(ParamValue::Int(v)) => *v != 0,
        _ => default,
    }
}

/// Load an int parameter from the store
fn load_int(store: &ParameterStore, name: &str, default: i32) -> i32 {
    match store.get(name) {
        Some(ParamValue::Int(v)) => *v,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_params_defaults() {
        let params = SurveyParams::default();

        assert!((params.radius - 100.0).abs() < 0.001);
        assert!((params.resolution - 10.0).abs() < 0.001);
        assert!((params.spiral_spacing - 20.0).abs() < 0.001);
        assert!(!params.fly_alternate_transects);
        assert!(!params.refly);
        assert_eq!(params.entry_point, EntryLocation::TopLeft);
        assert!((params.trigger_distance - 25.0).abs() < 0.001);
        assert!((params.hover_capture_delay - 4.0).abs() < 0.001);
        assert!(params.is_valid());
    }

    #[test]
    fn test_register_defaults_populates_all_12() {
        let mut store = ParameterStore::new();
        SurveyParams::register_defaults(&mut store).unwrap();

        assert!(store.get("SPIR_RADIUS").is_some());
        assert!(store.get("SPIR_RESOLUTION").is_some());
        assert!(store.get("SPIR_SPACING").is_some());
        assert!(store.get("SPIR_ALT_TRANS").is_some());
        assert!(store.get("SPIR_SPLIT_POLY").is_some());
        assert!(store.get("SPIR_ENTRY_PT").is_some());
        assert!(store.get("SPIR_REFLY").is_some());
        assert!(store.get("SPIR_TURNAROUND").is_some());
        assert!(store.get("CAM_TRIG_DIST").is_some());
        assert!(store.get("CAM_HOVER_CAP").is_some());
        assert!(store.get("CAM_TRIG_TURN").is_some());
        assert!(store.get("CAM_HOVER_DELAY").is_some());
        assert_eq!(store.len(), 12);
    }

    #[test]
    fn test_from_store_reads_defaults() {
        let mut store = ParameterStore::new();
        SurveyParams::register_defaults(&mut store).unwrap();

        let params = SurveyParams::from_store(&store);
        assert!((params.radius - 100.0).abs() < 0.001);
        assert!((params.spiral_spacing - 20.0).abs() < 0.001);
        assert!(!params.refly);
    }

    #[test]
    fn test_from_store_reads_custom_values() {
        let mut store = ParameterStore::new();
        SurveyParams::register_defaults(&mut store).unwrap();

        store.set("SPIR_RADIUS", ParamValue::Float(250.0)).unwrap();
        store.set("SPIR_REFLY", ParamValue::Bool(true)).unwrap();
        store.set("SPIR_ENTRY_PT", ParamValue::Int(2)).unwrap();

        let params = SurveyParams::from_store(&store);
        assert!((params.radius - 250.0).abs() < 0.001);
        assert!(params.refly);
        assert_eq!(params.entry_point, EntryLocation::BottomLeft);
    }

    #[test]
    fn test_from_store_empty_store_gives_defaults() {
        // An upstream load failure hands the planner an unpopulated store;
        // the defaults must come back usable.
        let store = ParameterStore::new();
        let params = SurveyParams::from_store(&store);
        assert!(params.is_valid());
        assert!((params.radius - DEFAULT_RADIUS).abs() < 0.001);
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let mut store = ParameterStore::new();
        SurveyParams::register_defaults(&mut store).unwrap();

        store.set("SPIR_RADIUS", ParamValue::Float(0.01)).unwrap();
        let params = SurveyParams::from_store(&store);
        assert!((params.radius - MIN_RADIUS).abs() < 0.001);

        store
            .set("SPIR_RADIUS", ParamValue::Float(99_999.0))
            .unwrap();
        let params = SurveyParams::from_store(&store);
        assert!((params.radius - MAX_RADIUS).abs() < 0.001);

        store
            .set("CAM_TRIG_DIST", ParamValue::Float(-10.0))
            .unwrap();
        let params = SurveyParams::from_store(&store);
        assert!((params.trigger_distance - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_int_accepted_for_float_parameter() {
        let mut store = ParameterStore::new();
        SurveyParams::register_defaults(&mut store).unwrap();

        store.set("SPIR_SPACING", ParamValue::Int(15)).unwrap();
        let params = SurveyParams::from_store(&store);
        assert!((params.spiral_spacing - 15.0).abs() < 0.001);
    }

    #[test]
    fn test_to_spiral_config() {
        let params = SurveyParams {
            radius: 150.0,
            resolution: 20.0,
            spiral_spacing: 10.0,
            fly_alternate_transects: true,
            refly: true,
            turnaround_distance: 5.0,
            ..SurveyParams::default()
        };

        let config = params.to_spiral_config();
        assert!((config.radius - 150.0).abs() < 0.001);
        assert!((config.resolution - 20.0).abs() < 0.001);
        assert!((config.spiral_spacing - 10.0).abs() < 0.001);
        assert!(config.fly_alternate_transects);
        assert!(config.refly_enabled);
        assert!((config.turnaround_distance - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_to_camera_config() {
        let params = SurveyParams {
            trigger_distance: 40.0,
            hover_and_capture: true,
            trigger_in_turnaround: true,
            hover_capture_delay: 2.5,
            ..SurveyParams::default()
        };

        let camera = params.to_camera_config(true);
        assert!(camera.has_camera);
        assert!((camera.trigger_distance - 40.0).abs() < 0.001);
        assert!(camera.hover_and_capture);
        assert!(camera.trigger_in_turnaround);
        assert!((camera.hover_capture_delay_s - 2.5).abs() < 0.001);

        let camera = params.to_camera_config(false);
        assert!(!camera.has_camera);
    }

    #[test]
    fn test_is_valid_rejects_inconsistent_params() {
        // Spacing wider than the survey circle
        let params = SurveyParams {
            radius: 5.0,
            spiral_spacing: 10.0,
            ..SurveyParams::default()
        };
        assert!(!params.is_valid());

        let params = SurveyParams {
            hover_capture_delay: 120.0,
            ..SurveyParams::default()
        };
        assert!(!params.is_valid());
    }
}
