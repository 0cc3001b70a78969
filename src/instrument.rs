use std::time::{Duration, Instant};

/// Wraps a computation with debug logging and elapsed-time measurement.
/// Applied at component boundaries instead of being baked into each function.
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    log::debug!("{label}: started");
    let result = f();
    log::debug!("{label}: finished in {}", fmt_dur(start.elapsed()));
    result
}

pub fn fmt_dur(d: Duration) -> String {
    let ms = d.as_millis();
    if ms >= 1000 { format!("{:.1}s", d.as_secs_f64()) } else { format!("{ms}ms") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_returns_inner_value() {
        let value = timed("test", || 40 + 2);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_fmt_dur_milliseconds() {
        let s = fmt_dur(Duration::from_millis(250));
        assert!(s.ends_with("ms"), "Sub-second durations should use 'ms': got '{s}'");
        assert!(s.contains("250"), "Should show the millisecond value: got '{s}'");
    }

    #[test]
    fn test_fmt_dur_seconds() {
        let s = fmt_dur(Duration::from_millis(1_500));
        assert!(s.ends_with('s'), "Durations >= 1s should use 's': got '{s}'");
        assert!(s.contains("1.5"), "Should show decimal seconds: got '{s}'");
    }
}
