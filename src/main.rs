use eco_navigator::consts::{
    DEFAULT_DESTINATION_LOCATION, DEFAULT_START_LOCATION, LOG_LEVEL, READ_JSON,
    SCENARIO_FILE_PATH, WRITE_JSON,
};
use eco_navigator::data::{self, RecordedTravelData, ScenarioData};
use eco_navigator::display::{BestOptionInfo, ScenarioFileInfo, TerminalMessage};
use eco_navigator::simulation::SimulatedTravelData;
use eco_navigator::{find_best_option, AdvisorError, Location, TravelOption};
use log::error;
use std::path::Path;

fn main() {
    env_logger::builder()
        .filter_level(LOG_LEVEL)
        .format_target(false)
        .format_timestamp(None)
        .init();

    let start_location = Location::new(DEFAULT_START_LOCATION);
    let destination_location = Location::new(DEFAULT_DESTINATION_LOCATION);

    match run_comparison(&start_location, &destination_location) {
        Ok(best_option) => {
            println!("{}", TerminalMessage::BestOption(BestOptionInfo::new(&best_option)));
        }
        Err(advisor_error) => {
            error!("{advisor_error}");
            println!("{}", TerminalMessage::ComparisonFailed);
        }
    }
}

fn run_comparison(
    start_location: &Location,
    destination_location: &Location,
) -> Result<TravelOption, AdvisorError> {
    let scenario_path = Path::new(SCENARIO_FILE_PATH);

    if READ_JSON {
        println!(
            "{}",
            TerminalMessage::ScenarioReplayed(ScenarioFileInfo::new(scenario_path))
        );
        let mut recorded_provider = RecordedTravelData::from_file(scenario_path)?;
        return find_best_option(&mut recorded_provider, start_location, destination_location);
    }

    let mut simulated_provider = SimulatedTravelData::from_thread_rng();

    if WRITE_JSON {
        // Record the drawn inputs first so the reported winner comes from
        // the same data that lands in the file.
        let scenario = ScenarioData::record(
            &mut simulated_provider,
            start_location,
            destination_location,
        )?;
        data::write_scenario_to_file(&scenario, scenario_path)?;
        println!(
            "{}",
            TerminalMessage::ScenarioRecorded(ScenarioFileInfo::new(scenario_path))
        );
        let mut recorded_provider = RecordedTravelData::new(scenario);
        return find_best_option(&mut recorded_provider, start_location, destination_location);
    }

    find_best_option(&mut simulated_provider, start_location, destination_location)
}
