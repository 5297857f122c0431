use crate::error::AdvisorError;
use crate::location::Location;
use crate::mode::{TravelMode, TRANSPORT_MODES};
use crate::travel_option::TravelOption;
use log::debug;
use rand::rngs::ThreadRng;
use rand::Rng;

/// Boundary to the travel data feeds. In a real deployment these would be
/// API calls for traffic, timetables and carpool availability; here every
/// implementation fabricates or replays data.
pub trait TravelDataProvider {
    /// Current car travel time between the two endpoints, in minutes.
    fn car_travel_time(
        &mut self,
        start: &Location,
        destination: &Location,
    ) -> Result<u32, AdvisorError>;

    /// The public-transport candidates for the trip, already scored, in
    /// generation order.
    fn transport_candidates(
        &mut self,
        start: &Location,
        destination: &Location,
    ) -> Result<Vec<TravelOption>, AdvisorError>;

    fn carpool_available(
        &mut self,
        start: &Location,
        destination: &Location,
    ) -> Result<bool, AdvisorError>;
}

/// The default provider: draws every duration uniformly from the per-mode
/// bounds and flips an unweighted coin for carpool availability. The RNG is
/// owned, so a seeded generator makes a whole run deterministic.
pub struct SimulatedTravelData<R: Rng> {
    rng: R,
}

impl SimulatedTravelData<ThreadRng> {
    pub fn from_thread_rng() -> Self {
        SimulatedTravelData {
            rng: rand::thread_rng(),
        }
    }
}

impl<R: Rng> SimulatedTravelData<R> {
    pub fn new(rng: R) -> Self {
        SimulatedTravelData { rng }
    }

    fn generate_duration_for_mode(&mut self, mode: TravelMode) -> Result<u32, AdvisorError> {
        let (min, max) = mode
            .duration_range()
            .ok_or_else(|| AdvisorError::computation(format!("no duration range for {mode}")))?;
        Ok(self.rng.gen_range(min..=max))
    }
}

impl<R: Rng> TravelDataProvider for SimulatedTravelData<R> {
    fn car_travel_time(
        &mut self,
        start: &Location,
        destination: &Location,
    ) -> Result<u32, AdvisorError> {
        debug!("Simulating car travel time from {start} to {destination}");
        self.generate_duration_for_mode(TravelMode::Car)
    }

    fn transport_candidates(
        &mut self,
        start: &Location,
        destination: &Location,
    ) -> Result<Vec<TravelOption>, AdvisorError> {
        debug!("Simulating public transport options from {start} to {destination}");
        let mut candidate_list = vec![];
        for mode in TRANSPORT_MODES {
            let duration_minutes = self.generate_duration_for_mode(mode)?;
            let candidate = TravelOption::from_duration(mode, duration_minutes)
                .ok_or_else(|| AdvisorError::computation(format!("no emission factor for {mode}")))?;
            candidate_list.push(candidate);
        }
        Ok(candidate_list)
    }

    fn carpool_available(
        &mut self,
        start: &Location,
        destination: &Location,
    ) -> Result<bool, AdvisorError> {
        debug!("Simulating carpool availability from {start} to {destination}");
        Ok(self.rng.gen_bool(0.5))
    }
}
