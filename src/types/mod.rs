pub mod error;
pub mod utils;

pub use error::{AgentKitError, Result};
pub use utils::{display_name, log_filter_error};
