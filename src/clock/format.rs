/// Render a remaining time for display.
///
/// The value is rounded *up* to whole centiseconds, so any strictly positive
/// time shows at least `0.01`. Above a minute the centiseconds are dropped:
///
/// ```text
/// 3661.0 -> "1:01:01"
///   61.0 -> "1:01"
///    9.5 -> "9.50"
/// ```
pub fn format_time(seconds: f64) -> String {
    let seconds = if seconds.is_nan() { 0.0 } else { seconds.max(0.0) };
    let mut total = (seconds * 100.0).ceil() as u64;

    let centis = total % 100;
    total /= 100;
    let secs = total % 60;
    total /= 60;
    let mins = total % 60;
    let hours = total / 60;

    if hours != 0 {
        format!("{hours}:{mins:02}:{secs:02}")
    } else if mins != 0 {
        format!("{mins}:{secs:02}")
    } else {
        format!("{secs}.{centis:02}")
    }
}
