//! Waypoint type.

use crate::fuel::great_circle_nm;

/// One stop on a towing route.
///
/// Coordinates are in degrees. The remaining attributes describe the leg
/// that *departs* this waypoint: the vessel's rated power, the towed load,
/// and the speed and sea state along that leg.
///
/// Waypoints carry no identity beyond their field values; two waypoints with
/// equal fields are interchangeable.
///
/// # Examples
///
/// ```
/// use tug_route::Waypoint;
///
/// let wp = Waypoint::new(51.9, 4.1)
///     .with_engine_power(1200.0)
///     .with_tow_size(350.0)
///     .with_wind_speed(8.0);
/// assert_eq!(wp.engine_power, 1200.0);
/// assert_eq!(wp.wave_height, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Magnitude of the towed load.
    pub tow_size: f64,
    /// Rated power of the towing vessel.
    pub engine_power: f64,
    /// Towing speed on the departing leg.
    pub towing_speed: f64,
    /// Wind speed on the departing leg.
    pub wind_speed: f64,
    /// Wave height on the departing leg.
    pub wave_height: f64,
}

impl Waypoint {
    /// Creates a waypoint at the given coordinates with every other
    /// attribute set to zero.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            tow_size: 0.0,
            engine_power: 0.0,
            towing_speed: 0.0,
            wind_speed: 0.0,
            wave_height: 0.0,
        }
    }

    pub fn with_tow_size(mut self, tow_size: f64) -> Self {
        self.tow_size = tow_size;
        self
    }

    pub fn with_engine_power(mut self, engine_power: f64) -> Self {
        self.engine_power = engine_power;
        self
    }

    pub fn with_towing_speed(mut self, towing_speed: f64) -> Self {
        self.towing_speed = towing_speed;
        self
    }

    pub fn with_wind_speed(mut self, wind_speed: f64) -> Self {
        self.wind_speed = wind_speed;
        self
    }

    pub fn with_wave_height(mut self, wave_height: f64) -> Self {
        self.wave_height = wave_height;
        self
    }

    /// `(latitude, longitude)` in degrees.
    pub fn coords(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Great-circle distance to `other` in nautical miles.
    pub fn distance_nm_to(&self, other: &Waypoint) -> f64 {
        great_circle_nm(self.coords(), other.coords())
    }
}
