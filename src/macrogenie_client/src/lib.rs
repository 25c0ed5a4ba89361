mod session_client;
mod telemetry;

pub use session_client::SessionClient;
pub use telemetry::{init_error_reporting, init_tracing};
