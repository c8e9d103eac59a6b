//! Great-circle distance on a spherical Earth.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.009;

/// Kilometres per international nautical mile.
pub const KM_PER_NAUTICAL_MILE: f64 = 1.852;

/// Great-circle distance between two `(latitude, longitude)` pairs given in
/// degrees, in nautical miles.
///
/// Uses the `atan2` form of the spherical law, which stays accurate for both
/// very short and near-antipodal legs.
///
/// # Examples
///
/// ```
/// use tug_route::fuel::great_circle_nm;
///
/// // One degree of arc is roughly sixty nautical miles.
/// let d = great_circle_nm((0.0, 0.0), (0.0, 1.0));
/// assert!((d - 60.04).abs() < 0.01);
/// ```
pub fn great_circle_nm(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat1, lng1) = (a.0.to_radians(), a.1.to_radians());
    let (lat2, lng2) = (b.0.to_radians(), b.1.to_radians());

    let (sin_lat1, cos_lat1) = lat1.sin_cos();
    let (sin_lat2, cos_lat2) = lat2.sin_cos();
    let (sin_dlng, cos_dlng) = (lng2 - lng1).sin_cos();

    let y = ((cos_lat2 * sin_dlng).powi(2)
        + (cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_dlng).powi(2))
    .sqrt();
    let x = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_dlng;

    EARTH_RADIUS_KM * y.atan2(x) / KM_PER_NAUTICAL_MILE
}
