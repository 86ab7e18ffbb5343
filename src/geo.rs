//! Geographic calculations for survey planning
//!
//! Great-circle distance/bearing/offset primitives plus the flat-earth
//! local-tangent-plane conversion used to place spiral samples around the
//! survey centroid. Coordinates are WGS-84 degrees, distances are meters,
//! bearings are degrees clockwise from true north.

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Wrap an angle in degrees to [0, 360)
pub fn wrap_360(angle: f64) -> f64 {
    let mut wrapped = angle % 360.0;
    if wrapped < 0.0 {
        wrapped += 360.0;
    }
    wrapped
}

/// Wrap an angle in degrees to [-180, 180)
pub fn wrap_180(angle: f64) -> f64 {
    let wrapped = wrap_360(angle);
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Great-circle distance between two coordinates in meters (haversine)
pub fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let half_lat = libm::sin(d_lat / 2.0);
    let half_lon = libm::sin(d_lon / 2.0);

    let a = half_lat * half_lat
        + libm::cos(lat1.to_radians()) * libm::cos(lat2.to_radians()) * half_lon * half_lon;
    let c = 2.0 * libm::atan2(libm::sqrt(a), libm::sqrt(1.0 - a));

    EARTH_RADIUS_M * c
}

/// Initial bearing from the first coordinate to the second in degrees [0, 360)
pub fn calculate_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let y = libm::sin(d_lon) * libm::cos(lat2_rad);
    let x = libm::cos(lat1_rad) * libm::sin(lat2_rad)
        - libm::sin(lat1_rad) * libm::cos(lat2_rad) * libm::cos(d_lon);

    wrap_360(libm::atan2(y, x).to_degrees())
}

/// Destination point at a given distance and bearing from a start coordinate.
///
/// Returns `(latitude, longitude)` of the great-circle destination.
pub fn offset_position(lat: f64, lon: f64, distance_m: f64, bearing_deg: f64) -> (f64, f64) {
    let angular = distance_m / EARTH_RADIUS_M;
    let bearing = bearing_deg.to_radians();
    let lat1 = lat.to_radians();
    let lon1 = lon.to_radians();

    let lat2 = libm::asin(
        libm::sin(lat1) * libm::cos(angular)
            + libm::cos(lat1) * libm::sin(angular) * libm::cos(bearing),
    );
    let lon2 = lon1
        + libm::atan2(
            libm::sin(bearing) * libm::sin(angular) * libm::cos(lat1),
            libm::cos(angular) - libm::sin(lat1) * libm::sin(lat2),
        );

    (lat2.to_degrees(), wrap_180(lon2.to_degrees()))
}

/// Convert a local north/east offset in meters to geodetic degrees.
///
/// Flat-earth tangent-plane approximation anchored at the origin coordinate;
/// the down component is fixed at zero (survey paths are planar). Accurate
/// to well under a meter at survey scale (a few km from the origin).
pub fn ned_to_geo(north_m: f64, east_m: f64, origin_lat: f64, origin_lon: f64) -> (f64, f64) {
    let d_lat = north_m / EARTH_RADIUS_M;
    let d_lon = east_m / (EARTH_RADIUS_M * libm::cos(origin_lat.to_radians()));

    (
        origin_lat + d_lat.to_degrees(),
        origin_lon + d_lon.to_degrees(),
    )
}
