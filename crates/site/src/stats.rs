//! Stats counters that count up once, the first time the stats band scrolls into view.

use std::time::Duration;

pub const TICK: Duration = Duration::from_millis(16);
pub const COUNT_DURATION: Duration = Duration::from_millis(2000);

/// Leading integer of a stat label ("100+" → 100), like the browser's `parseInt`.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Frame-by-frame count from `start` to `end`; yields the label text for each tick.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    current: f64,
    increment: f64,
    end: i64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(start: i64, end: i64, duration: Duration) -> Self {
        let ticks = duration.as_secs_f64() / TICK.as_secs_f64();
        Self {
            current: start as f64,
            increment: (end - start) as f64 / ticks,
            end,
            done: false,
        }
    }
}

impl Iterator for CounterAnimation {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.end as f64 {
            self.done = true;
            return Some(format!("{}+", self.end));
        }
        Some(format!("{}+", self.current.floor() as i64))
    }
}

/// Owns the stat labels and the one-shot "already animated" flag.
#[derive(Debug, Clone)]
pub struct StatsCounter {
    labels: Vec<String>,
    has_animated: bool,
}

impl StatsCounter {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            has_animated: false,
        }
    }

    pub fn has_animated(&self) -> bool {
        self.has_animated
    }

    /// Called when the stats band becomes visible. The first call returns one animation per numeric
    /// label (keyed by label index); later calls return nothing. Non-numeric labels stay as written.
    pub fn on_visible(&mut self) -> Vec<(usize, CounterAnimation)> {
        if self.has_animated {
            return Vec::new();
        }
        self.has_animated = true;
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(i, label)| {
                parse_leading_int(label).map(|n| (i, CounterAnimation::new(0, n, COUNT_DURATION)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("100+"), Some(100));
        assert_eq!(parse_leading_int(" 24/7"), Some(24));
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int("24h Support"), Some(24));
        assert_eq!(parse_leading_int("Support"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_animation_counts_up_and_ends_on_target() {
        let frames: Vec<String> = CounterAnimation::new(0, 100, COUNT_DURATION).collect();

        // 2000ms / 16ms = 125 ticks
        assert!(frames.len() >= 125 && frames.len() <= 126, "{}", frames.len());
        assert_eq!(frames.first().unwrap(), "0+");
        assert_eq!(frames.last().unwrap(), "100+");
        let values: Vec<i64> = frames
            .iter()
            .map(|f| f.trim_end_matches('+').parse().unwrap())
            .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let frames: Vec<String> = CounterAnimation::new(0, 0, COUNT_DURATION).collect();
        assert_eq!(frames, vec!["0+"]);
    }

    #[test]
    fn test_stats_animate_once() {
        let mut stats = StatsCounter::new(vec![
            "100+".to_string(),
            "50+".to_string(),
            "Support".to_string(),
        ]);

        let first = stats.on_visible();
        assert!(stats.has_animated());
        let indices: Vec<usize> = first.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 1]);
        assert!(stats.on_visible().is_empty());
    }
}
