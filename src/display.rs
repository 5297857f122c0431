use crate::travel_option::TravelOption;
use crate::TravelMode;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// User-facing lines the CLI prints. Everything the binary writes to the
/// terminal goes through one of these variants.
pub enum TerminalMessage {
    BestOption(BestOptionInfo),
    ComparisonFailed,
    ScenarioRecorded(ScenarioFileInfo),
    ScenarioReplayed(ScenarioFileInfo),
}

impl Display for TerminalMessage {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        match self {
            TerminalMessage::BestOption(info) => write!(f, "{info}"),
            TerminalMessage::ComparisonFailed => {
                write!(f, "Failed to determine the best travel route.")
            }
            TerminalMessage::ScenarioRecorded(info) => {
                write!(f, "Recorded scenario data to {}", info.path.display())
            }
            TerminalMessage::ScenarioReplayed(info) => {
                write!(f, "Replaying recorded scenario data from {}", info.path.display())
            }
        }
    }
}

pub struct BestOptionInfo {
    mode: TravelMode,
    emissions: f64,
}

impl BestOptionInfo {
    pub fn new(best_option: &TravelOption) -> BestOptionInfo {
        BestOptionInfo {
            mode: best_option.mode,
            emissions: best_option.emissions,
        }
    }
}

impl Display for BestOptionInfo {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "The best travel mode for minimal carbon footprint is: {} with emissions: {} units",
            self.mode, self.emissions
        )
    }
}

pub struct ScenarioFileInfo {
    path: PathBuf,
}

impl ScenarioFileInfo {
    pub fn new(path: &Path) -> ScenarioFileInfo {
        ScenarioFileInfo {
            path: path.to_path_buf(),
        }
    }
}
