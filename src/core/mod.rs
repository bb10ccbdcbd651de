pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, SimulationConfig};
pub use error::{BastionError, Result};
pub use types::{GridPosition, KindProfile, PodId, Turn, UnitId, UnitKind};
