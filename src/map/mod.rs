use consts::EARTH_RADIUS_KM;
use models::LatLng;

pub mod consts;
pub mod models;
pub mod widgets;

/// Great-circle distance in kilometers between two points, using the haversine formula on a
/// spherical Earth.
pub fn distance_km(from: LatLng, to: LatLng) -> f64 {
    let phi_1 = from.lat.to_radians();
    let phi_2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lng - from.lng).to_radians();
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push `a` a hair above 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * (a.sqrt().atan2((1.0 - a).sqrt()));
    EARTH_RADIUS_KM * c
}

pub fn describe_distance(distance_km: f64, city_name: &str) -> String {
    format!("You were {distance_km:.2} km away from {city_name}.")
}
