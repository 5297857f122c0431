use log::LevelFilter;

pub const CAR_EMISSION_FACTOR: f64 = 0.5;
pub const BUS_EMISSION_FACTOR: f64 = 0.3;
pub const TRAIN_EMISSION_FACTOR: f64 = 0.2;
pub const SUBWAY_EMISSION_FACTOR: f64 = 0.1;
// A carpool shares the car's trip, so its score is a share of the car score
// rather than its own duration times a factor
pub const CARPOOL_CAR_SHARE: f64 = 0.5;

// Inclusive duration bounds in minutes for the simulated data feeds
pub const CAR_DURATION_RANGE: (u32, u32) = (30, 120);
pub const BUS_DURATION_RANGE: (u32, u32) = (40, 100);
pub const TRAIN_DURATION_RANGE: (u32, u32) = (35, 90);
pub const SUBWAY_DURATION_RANGE: (u32, u32) = (30, 80);

pub const DEFAULT_START_LOCATION: &str = "Downtown Terminal";
pub const DEFAULT_DESTINATION_LOCATION: &str = "Airport Business Park";

pub const SCENARIO_FILE_PATH: &str = "scenario_data.json";
pub const READ_JSON: bool = option_env!("READ_DATA").is_some();
pub const WRITE_JSON: bool = option_env!("WRITE_DATA").is_some();

pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
