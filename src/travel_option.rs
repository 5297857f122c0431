use crate::consts::CARPOOL_CAR_SHARE;
use crate::mode::TravelMode;
use serde::{Deserialize, Serialize};

/// One candidate for a trip: a mode together with its simulated duration and
/// the emissions score derived from it. Candidates only live for the duration
/// of a single comparison.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct TravelOption {
    pub mode: TravelMode,
    pub duration_minutes: u32,
    pub emissions: f64,
}

impl TravelOption {
    /// Builds a candidate from a simulated duration. Returns None for
    /// Carpool, which has no duration-based score.
    pub fn from_duration(mode: TravelMode, duration_minutes: u32) -> Option<TravelOption> {
        let emissions = mode.emissions_for_duration(duration_minutes)?;
        Some(TravelOption {
            mode,
            duration_minutes,
            emissions,
        })
    }

    /// A carpool rides the same car, so it keeps the car's duration and
    /// halves the car's score.
    pub fn carpool_from_car(car_option: &TravelOption) -> TravelOption {
        TravelOption {
            mode: TravelMode::Carpool,
            duration_minutes: car_option.duration_minutes,
            emissions: car_option.emissions * CARPOOL_CAR_SHARE,
        }
    }
}

impl std::fmt::Display for TravelOption {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} ({} min, emissions {})",
            self.mode, self.duration_minutes, self.emissions
        )
    }
}
