use crate::consts::{
    BUS_DURATION_RANGE, BUS_EMISSION_FACTOR, CAR_DURATION_RANGE, CAR_EMISSION_FACTOR,
    SUBWAY_DURATION_RANGE, SUBWAY_EMISSION_FACTOR, TRAIN_DURATION_RANGE, TRAIN_EMISSION_FACTOR,
};
use serde::{Deserialize, Serialize};

/// The public-transport alternatives, in the order they are generated and
/// compared against the car baseline.
pub const TRANSPORT_MODES: [TravelMode; 3] =
    [TravelMode::Bus, TravelMode::Train, TravelMode::Subway];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum TravelMode {
    Car,
    Bus,
    Train,
    Subway,
    Carpool,
}

impl TravelMode {
    /// Fixed factor converting minutes of travel into an emissions score.
    /// Carpool has no factor of its own; its score is derived from the car
    /// score during the comparison.
    pub fn emission_factor(&self) -> Option<f64> {
        match self {
            TravelMode::Car => Some(CAR_EMISSION_FACTOR),
            TravelMode::Bus => Some(BUS_EMISSION_FACTOR),
            TravelMode::Train => Some(TRAIN_EMISSION_FACTOR),
            TravelMode::Subway => Some(SUBWAY_EMISSION_FACTOR),
            TravelMode::Carpool => None,
        }
    }

    /// Inclusive duration bounds, in minutes, used when simulating travel
    /// data for this mode.
    pub fn duration_range(&self) -> Option<(u32, u32)> {
        match self {
            TravelMode::Car => Some(CAR_DURATION_RANGE),
            TravelMode::Bus => Some(BUS_DURATION_RANGE),
            TravelMode::Train => Some(TRAIN_DURATION_RANGE),
            TravelMode::Subway => Some(SUBWAY_DURATION_RANGE),
            TravelMode::Carpool => None,
        }
    }

    pub fn emissions_for_duration(&self, duration_minutes: u32) -> Option<f64> {
        self.emission_factor()
            .map(|factor| duration_minutes as f64 * factor)
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TravelMode::Car => write!(f, "Car"),
            TravelMode::Bus => write!(f, "Bus"),
            TravelMode::Train => write!(f, "Train"),
            TravelMode::Subway => write!(f, "Subway"),
            TravelMode::Carpool => write!(f, "Carpool"),
        }
    }
}
