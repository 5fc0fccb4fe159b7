use chrono::{DateTime, Utc};

/// Current wall-clock time as fractional seconds since the Unix epoch.
///
/// The run loop is the only caller; everything below it takes `now` as an
/// argument so tests can pass synthetic timestamps.
pub fn now_epoch() -> f64 {
    epoch_seconds(Utc::now())
}

fn epoch_seconds(t: DateTime<Utc>) -> f64 {
    t.timestamp() as f64 + t.timestamp_subsec_micros() as f64 / 1_000_000.0
}
