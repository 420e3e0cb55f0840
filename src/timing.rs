use std::time::{Duration, Instant};

// Run `f` and report how long it took
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let now = Instant::now();
    let output = f();
    (output, now.elapsed())
}

// Fractional milliseconds, for reports
pub fn millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed() {
        let (value, elapsed) = timed(|| {
            std::thread::sleep(Duration::from_millis(5));
            42
        });
        assert_eq!(value, 42);
        assert!(elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn test_millis() {
        assert!((millis(Duration::from_micros(1500)) - 1.5).abs() < 1e-9);
        assert_eq!(millis(Duration::ZERO), 0.0);
    }
}
