// src/logging.rs

use crate::errors::{EmpathError, EmpathResult};
use crate::models::ApiCallLog;
use flexi_logger::{FileSpec, Logger, LoggerHandle};

/// Starts the file logger. The terminal belongs to the TUI, so everything
/// goes to `empath.log` in the working directory. Keep the handle alive for
/// the lifetime of the process.
pub fn init_logging(log_level: &str) -> EmpathResult<LoggerHandle> {
    let handle = Logger::try_with_str(log_level)
        .map_err(|e| EmpathError::config_error(format!("Invalid log level: {}", e)))?
        .log_to_file(
            FileSpec::default()
                .basename("empath")
                .suppress_timestamp(),
        )
        .start()
        .map_err(|e| EmpathError::config_error(format!("Failed to start logger: {}", e)))?;

    Ok(handle)
}

pub fn log_api_call(call: &ApiCallLog) {
    log::debug!(
        "[{}] {} - {} - Status: {} - Time: {}ms",
        call.timestamp.to_rfc3339(),
        call.endpoint,
        call.request_summary,
        call.response_status,
        call.response_time_ms
    );
}
