pub mod consts;
pub mod data;
pub mod display;
pub mod error;
pub mod location;
pub mod mode;
pub mod simulation;
pub mod travel_option;

pub use error::AdvisorError;
pub use location::Location;
pub use mode::{TravelMode, TRANSPORT_MODES};
pub use travel_option::TravelOption;

use log::debug;
use simulation::TravelDataProvider;

/// Runs one travel-mode comparison between the two endpoints and returns
/// the candidate with the lowest emissions score.
///
/// The three data feeds are consulted in a fixed order: car travel time,
/// public-transport candidates, carpool availability. Any feed or scoring
/// failure is reported as a single `Computation` failure; nothing panics
/// and no other error kind escapes.
pub fn find_best_option(
    provider: &mut impl TravelDataProvider,
    start: &Location,
    destination: &Location,
) -> Result<TravelOption, AdvisorError> {
    let car_duration = provider
        .car_travel_time(start, destination)
        .map_err(AdvisorError::into_computation)?;
    let car_option = TravelOption::from_duration(TravelMode::Car, car_duration)
        .ok_or_else(|| AdvisorError::computation("car candidate could not be scored"))?;
    debug!("Car baseline: {car_option}");

    let transport_candidates = provider
        .transport_candidates(start, destination)
        .map_err(AdvisorError::into_computation)?;

    let carpool_available = provider
        .carpool_available(start, destination)
        .map_err(AdvisorError::into_computation)?;

    Ok(select_minimal_emissions_option(
        car_option,
        &transport_candidates,
        carpool_available,
    ))
}

/// Selection policy: the car is the baseline, transport candidates replace
/// it in generation order on a strictly lower score, and an available
/// carpool is considered last. Ties keep the earlier-found option.
pub fn select_minimal_emissions_option(
    car_option: TravelOption,
    transport_candidates: &[TravelOption],
    carpool_available: bool,
) -> TravelOption {
    let mut best_option = car_option;

    for candidate in transport_candidates {
        debug!("Considering {candidate}");
        if candidate.emissions < best_option.emissions {
            best_option = *candidate;
        }
    }

    if carpool_available {
        let carpool_option = TravelOption::carpool_from_car(&car_option);
        debug!("Carpool is available: {carpool_option}");
        if carpool_option.emissions < best_option.emissions {
            best_option = carpool_option;
        }
    }

    best_option
}
