use crate::error::AdvisorError;
use crate::location::Location;
use crate::mode::TRANSPORT_MODES;
use crate::simulation::TravelDataProvider;
use crate::travel_option::TravelOption;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use uuid::Uuid;

/// Everything one comparison drew from its data feeds, in generation order.
/// Writing this to a file and replaying it later reproduces the run exactly.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ScenarioData {
    pub id: Uuid,
    pub start: Location,
    pub destination: Location,
    pub car_duration_minutes: u32,
    pub transport_candidates: Vec<TravelOption>,
    pub carpool_available: bool,
}

impl ScenarioData {
    /// Draws one full set of inputs from the provider and packages it as a
    /// replayable scenario.
    pub fn record(
        provider: &mut impl TravelDataProvider,
        start: &Location,
        destination: &Location,
    ) -> Result<ScenarioData, AdvisorError> {
        let car_duration_minutes = provider.car_travel_time(start, destination)?;
        let transport_candidates = provider.transport_candidates(start, destination)?;
        let carpool_available = provider.carpool_available(start, destination)?;

        Ok(ScenarioData {
            id: Uuid::new_v4(),
            start: start.clone(),
            destination: destination.clone(),
            car_duration_minutes,
            transport_candidates,
            carpool_available,
        })
    }

    /// Trivial bounds checks on a loaded scenario. Durations must sit inside
    /// the per-mode bounds and the three transport candidates must appear in
    /// generation order with non-negative scores.
    pub fn validate(&self) -> Result<(), AdvisorError> {
        let (car_min, car_max) = crate::consts::CAR_DURATION_RANGE;
        if self.car_duration_minutes < car_min || self.car_duration_minutes > car_max {
            return Err(AdvisorError::scenario(format!(
                "car duration {} outside [{car_min}, {car_max}]",
                self.car_duration_minutes
            )));
        }

        if self.transport_candidates.len() != TRANSPORT_MODES.len() {
            return Err(AdvisorError::scenario(format!(
                "expected {} transport candidates, found {}",
                TRANSPORT_MODES.len(),
                self.transport_candidates.len()
            )));
        }

        for (candidate, expected_mode) in self.transport_candidates.iter().zip(TRANSPORT_MODES) {
            if candidate.mode != expected_mode {
                return Err(AdvisorError::scenario(format!(
                    "expected a {expected_mode} candidate, found {}",
                    candidate.mode
                )));
            }
            let (min, max) = expected_mode
                .duration_range()
                .expect("transport modes carry duration bounds");
            if candidate.duration_minutes < min || candidate.duration_minutes > max {
                return Err(AdvisorError::scenario(format!(
                    "{} duration {} outside [{min}, {max}]",
                    candidate.mode, candidate.duration_minutes
                )));
            }
            if candidate.emissions < 0.0 {
                return Err(AdvisorError::scenario(format!(
                    "{} has a negative emissions score",
                    candidate.mode
                )));
            }
        }

        Ok(())
    }
}

pub fn read_scenario_from_file(path: &Path) -> Result<ScenarioData, AdvisorError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let scenario: ScenarioData = serde_json::from_reader(reader)?;
    scenario.validate()?;
    Ok(scenario)
}

pub fn write_scenario_to_file(scenario: &ScenarioData, path: &Path) -> Result<(), AdvisorError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, scenario)?;
    Ok(())
}

/// Replays a recorded scenario through the provider seam, ignoring the
/// endpoints it is asked about in favor of the recorded ones.
pub struct RecordedTravelData {
    scenario: ScenarioData,
}

impl RecordedTravelData {
    pub fn new(scenario: ScenarioData) -> RecordedTravelData {
        RecordedTravelData { scenario }
    }

    pub fn from_file(path: &Path) -> Result<RecordedTravelData, AdvisorError> {
        Ok(RecordedTravelData::new(read_scenario_from_file(path)?))
    }

    pub fn scenario(&self) -> &ScenarioData {
        &self.scenario
    }
}

impl TravelDataProvider for RecordedTravelData {
    fn car_travel_time(
        &mut self,
        _start: &Location,
        _destination: &Location,
    ) -> Result<u32, AdvisorError> {
        Ok(self.scenario.car_duration_minutes)
    }

    fn transport_candidates(
        &mut self,
        _start: &Location,
        _destination: &Location,
    ) -> Result<Vec<TravelOption>, AdvisorError> {
        Ok(self.scenario.transport_candidates.clone())
    }

    fn carpool_available(
        &mut self,
        _start: &Location,
        _destination: &Location,
    ) -> Result<bool, AdvisorError> {
        Ok(self.scenario.carpool_available)
    }
}
