//! Host integration tests for the spiral survey planning pipeline:
//! parameter store -> settings snapshots -> spiral generation -> ordering
//! -> camera trigger overlay -> shot count.

use spiral_survey_core::geo;
use spiral_survey_core::parameters::{ParamValue, ParameterStore, SurveyParams};
use spiral_survey_core::survey::{
    CameraConfig, Coordinate, PointRole, SpiralConfig, SpiralSurvey, SurveyPolygon,
};

fn survey_polygon() -> SurveyPolygon {
    SurveyPolygon::from_vertices(&[
        Coordinate::new(47.3749, 8.5397),
        Coordinate::new(47.3749, 8.5437),
        Coordinate::new(47.3789, 8.5437),
        Coordinate::new(47.3789, 8.5397),
    ])
    .unwrap()
}

fn flatten(survey: &SpiralSurvey) -> Vec<Coordinate> {
    survey
        .transects()
        .iter()
        .flat_map(|t| t.iter().map(|p| p.coord))
        .collect()
}

#[test]
fn full_pipeline_from_parameter_store() {
    // Configure through the store the way a GCS would
    let mut store = ParameterStore::new();
    SurveyParams::register_defaults(&mut store).unwrap();
    store.set("SPIR_RADIUS", ParamValue::Float(100.0)).unwrap();
    store.set("SPIR_RESOLUTION", ParamValue::Float(10.0)).unwrap();
    store.set("SPIR_SPACING", ParamValue::Float(20.0)).unwrap();
    store.set("CAM_TRIG_DIST", ParamValue::Float(25.0)).unwrap();

    let params = SurveyParams::from_store(&store);
    assert!(params.is_valid());

    let mut survey = SpiralSurvey::new(
        survey_polygon(),
        params.to_spiral_config(),
        params.to_camera_config(true),
    );
    survey.rebuild();

    // radius=100, resolution=10, spacing=20 stops after chord 156 (the
    // next sample's implied radius exceeds the survey circle)
    assert_eq!(survey.transects().len(), 157);
    assert!(survey.camera_shots() > 0);
    assert!(survey.complex_distance() > 0.0);

    // Every generated point stays inside the survey circle
    let center = survey.polygon().centroid().unwrap();
    for point in flatten(&survey) {
        let r = geo::calculate_distance(
            center.latitude,
            center.longitude,
            point.latitude,
            point.longitude,
        );
        assert!(r <= 100.0 + 1e-6, "point at radius {}", r);
    }
}

#[test]
fn bulk_settings_load_with_suppressed_rebuild() {
    let mut survey = SpiralSurvey::new(
        survey_polygon(),
        SpiralConfig::default(),
        CameraConfig::default(),
    );

    // Load multiple settings without intermediate rebuilds, the way a plan
    // loader applies a multi-field update
    survey.set_suppress_rebuild(true);
    survey.set_config(SpiralConfig {
        radius: 80.0,
        ..SpiralConfig::default()
    });
    survey.set_camera(CameraConfig {
        has_camera: true,
        trigger_distance: 25.0,
        ..CameraConfig::default()
    });
    survey.rebuild();
    assert!(
        survey.transects().is_empty(),
        "suppressed rebuild must not produce a path"
    );

    survey.set_suppress_rebuild(false);
    survey.rebuild();
    assert!(!survey.transects().is_empty());
    assert!(survey.camera_shots() > 0);
}

#[test]
fn rotation_flips_traversal_and_is_involutive() {
    let mut survey = SpiralSurvey::new(
        survey_polygon(),
        SpiralConfig::default(),
        CameraConfig::default(),
    );
    survey.rebuild();
    let original = flatten(&survey);

    survey.rotate_entry_point();
    let rotated = flatten(&survey);
    let reversed: Vec<Coordinate> = original.iter().rev().copied().collect();
    assert_eq!(rotated, reversed);

    survey.rotate_entry_point();
    assert_eq!(flatten(&survey), original);
}

#[test]
fn refly_pass_connects_to_primary_exit() {
    let mut survey = SpiralSurvey::new(
        survey_polygon(),
        SpiralConfig {
            refly_enabled: true,
            ..SpiralConfig::default()
        },
        CameraConfig::default(),
    );
    survey.rebuild();

    let transects = survey.transects();
    let half = transects.len() / 2;
    assert_eq!(transects.len(), half * 2, "two equal passes");

    // An identical second spiral's closest end to the primary exit is that
    // same outermost point, so the refly pass is flipped to start there.
    let primary_exit = transects[half - 1].last().unwrap().coord;
    let refly_start = transects[half].first().unwrap().coord;
    let hop = geo::calculate_distance(
        primary_exit.latitude,
        primary_exit.longitude,
        refly_start.latitude,
        refly_start.longitude,
    );
    assert!(hop < 1.0, "refly should start at the primary exit, hop {} m", hop);
}

#[test]
fn hover_and_capture_inserts_interior_points() {
    let mut survey = SpiralSurvey::new(
        survey_polygon(),
        SpiralConfig::default(),
        CameraConfig {
            has_camera: true,
            trigger_distance: 5.0,
            hover_and_capture: true,
            ..CameraConfig::default()
        },
    );
    survey.rebuild();

    let mut interior_total = 0usize;
    for transect in survey.transects() {
        assert_eq!(transect.first().unwrap().role, PointRole::SurveyEntry);
        assert_eq!(transect.last().unwrap().role, PointRole::SurveyExit);

        let entry = transect.first().unwrap().coord;
        let exit = transect.last().unwrap().coord;
        let length = geo::calculate_distance(
            entry.latitude,
            entry.longitude,
            exit.latitude,
            exit.longitude,
        );
        let interior = transect
            .iter()
            .filter(|p| p.role == PointRole::InteriorHoverTrigger)
            .count();
        if length > 5.0 {
            assert!(interior > 0, "expected hover points on a {} m transect", length);
        }
        interior_total += interior;
    }
    assert!(interior_total > 0);

    // Every hover point adds dwell time
    assert!(survey.additional_time_delay() > 0.0);
}

#[test]
fn expanded_commands_replay_to_matching_shot_count() {
    let mut survey = SpiralSurvey::new(
        survey_polygon(),
        SpiralConfig::default(),
        CameraConfig {
            has_camera: true,
            trigger_distance: 10.0,
            ..CameraConfig::default()
        },
    );
    survey.rebuild();
    let estimated = survey.camera_shots();
    assert!(estimated > 0);

    // Expand to vehicle commands, load them back (as after a plan file
    // round trip), and replay
    let commands = survey.build_mission_commands(50.0);
    assert!(!commands.is_empty());
    survey.set_loaded_commands(&commands).unwrap();
    survey.recalc_camera_shots();

    assert_eq!(
        survey.camera_shots(),
        estimated,
        "replaying the expansion should agree with the transect estimate"
    );
}

#[test]
fn turnaround_strategy_overrides_all_others() {
    let mut survey = SpiralSurvey::new(
        survey_polygon(),
        SpiralConfig::default(),
        CameraConfig {
            has_camera: true,
            trigger_distance: 10.0,
            trigger_in_turnaround: true,
            ..CameraConfig::default()
        },
    );
    survey.rebuild();

    let expected = (survey.complex_distance() / 10.0).ceil() as u32;
    assert_eq!(survey.camera_shots(), expected);
}

#[test]
fn default_params_survive_failed_upstream_load() {
    // An empty store (upstream load failed before registration) still
    // yields a working survey from defaults
    let params = SurveyParams::from_store(&ParameterStore::new());
    let mut survey = SpiralSurvey::new(
        survey_polygon(),
        params.to_spiral_config(),
        params.to_camera_config(false),
    );
    survey.rebuild();
    assert!(!survey.transects().is_empty());
}
