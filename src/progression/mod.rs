//! Progression tracks: cost curves, the discrete-time simulator and the
//! speed modifier that couples it to loadout scoring.

mod simulator;
mod speed;
mod track;

pub use simulator::Simulator;
pub use speed::{speed, PotionEffects, PotionToggle, SpeedConfig};
pub use track::{RateInputs, TrackParams, TrackState};
