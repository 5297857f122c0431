use eco_navigator::data::{
    read_scenario_from_file, write_scenario_to_file, RecordedTravelData, ScenarioData,
};
use eco_navigator::error::AdvisorError;
use eco_navigator::find_best_option;
use eco_navigator::location::Location;
use eco_navigator::mode::TravelMode;
use eco_navigator::travel_option::TravelOption;
use std::path::Path;
use uuid::{uuid, Uuid};

fn sample_scenario() -> ScenarioData {
    ScenarioData {
        id: Uuid::new_v4(),
        start: Location::new("Harbor District"),
        destination: Location::new("University Hill"),
        car_duration_minutes: 100,
        transport_candidates: vec![
            TravelOption::from_duration(TravelMode::Bus, 40).unwrap(),
            TravelOption::from_duration(TravelMode::Train, 90).unwrap(),
            TravelOption::from_duration(TravelMode::Subway, 80).unwrap(),
        ],
        carpool_available: false,
    }
}

#[test]
fn can_replay_a_recorded_scenario_file() {
    let fixture_path = Path::new("./tests/test_data/fixed_scenario.json");
    let scenario = read_scenario_from_file(fixture_path).unwrap();

    assert_eq!(scenario.id, uuid!("7c9e6679-7425-40de-944b-e07fc1f90ae7"));
    assert_eq!(scenario.start, Location::new("Harbor District"));
    assert_eq!(scenario.destination, Location::new("University Hill"));

    let start = scenario.start.clone();
    let destination = scenario.destination.clone();
    let mut provider = RecordedTravelData::new(scenario);
    let best_option = find_best_option(&mut provider, &start, &destination).unwrap();
    assert_eq!(best_option.mode, TravelMode::Subway);
    assert_eq!(best_option.emissions, 8.0);
}

#[test]
fn written_scenarios_read_back_unchanged() {
    let scenario = sample_scenario();
    let file_path =
        std::env::temp_dir().join(format!("eco_navigator_scenario_{}.json", scenario.id));

    write_scenario_to_file(&scenario, &file_path).unwrap();
    let reloaded = read_scenario_from_file(&file_path).unwrap();
    std::fs::remove_file(&file_path).unwrap();

    assert_eq!(reloaded, scenario);
}

#[test]
fn recording_a_provider_replays_to_the_same_winner() {
    let scenario = sample_scenario();
    let start = scenario.start.clone();
    let destination = scenario.destination.clone();

    let mut original_provider = RecordedTravelData::new(scenario);
    let recorded =
        ScenarioData::record(&mut original_provider, &start, &destination).unwrap();
    assert_eq!(recorded.car_duration_minutes, 100);

    let mut replayed_provider = RecordedTravelData::new(recorded);
    let best_option = find_best_option(&mut replayed_provider, &start, &destination).unwrap();
    assert_eq!(best_option.mode, TravelMode::Subway);
}

#[test]
fn out_of_range_durations_are_rejected() {
    let mut scenario = sample_scenario();
    scenario.car_duration_minutes = 20;
    assert!(matches!(
        scenario.validate(),
        Err(AdvisorError::Scenario { .. })
    ));

    let mut scenario = sample_scenario();
    scenario.transport_candidates[2] = TravelOption {
        mode: TravelMode::Subway,
        duration_minutes: 500,
        emissions: 50.0,
    };
    assert!(matches!(
        scenario.validate(),
        Err(AdvisorError::Scenario { .. })
    ));
}

#[test]
fn misordered_transport_candidates_are_rejected() {
    let mut scenario = sample_scenario();
    scenario.transport_candidates.swap(0, 1);
    assert!(matches!(
        scenario.validate(),
        Err(AdvisorError::Scenario { .. })
    ));

    let mut scenario = sample_scenario();
    scenario.transport_candidates.pop();
    assert!(matches!(
        scenario.validate(),
        Err(AdvisorError::Scenario { .. })
    ));
}

#[test]
fn a_missing_scenario_file_reports_an_io_error() {
    let result = read_scenario_from_file(Path::new("./tests/test_data/no_such_file.json"));
    assert!(matches!(result, Err(AdvisorError::Io { .. })));
}
