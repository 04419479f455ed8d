use chrono::NaiveDate;
use std::time::Duration;
use tokio_shutdown::Shutdown;

/// Format of the stored last-connection date.
pub const CONNECTION_DATE_FORMAT: &str = "%d/%m/%Y";

/// Sleeps for `timeout`, returning `true` early if shutdown was requested.
pub async fn shutdown_waiting(timeout: Duration, shutdown_handler: Shutdown) -> bool {
    tokio::select! {
        _ = tokio::time::sleep(timeout) => false,
        _ = shutdown_handler.handle() => true,
    }
}

pub fn connection_date(date: NaiveDate) -> String {
    date.format(CONNECTION_DATE_FORMAT).to_string()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}
