pub mod constants;
pub mod errors;
pub mod evaluation;
pub mod goals;
pub mod intents;
pub mod metrics;
pub mod storage;
pub mod streaks;
pub mod timesheet;
pub mod utils;

pub use errors::{Error, Result};
pub use goals::*;
pub use intents::*;
