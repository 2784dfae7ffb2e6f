//! Millisecond intervals to ffmpeg-ready timestamp strings.

use std::time::Duration;

use crate::error::{Error, Result};

/// Render a span as `H:MM:SS`, with six fractional digits when the span is
/// not a whole number of seconds. Hours are unpadded.
fn render_span(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let mins = (ms % 3_600_000) / 60_000;
    let secs = (ms % 60_000) / 1_000;
    let micros = (ms % 1_000) * 1_000;
    if micros == 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}:{:02}.{:06}", hours, mins, secs, micros)
    }
}

/// Truncate a rendered span to eleven chars, pad the hour field to two
/// digits, and drop the pad again if the hours were already two digits.
/// Single-digit hours therefore keep at most millisecond precision.
fn stamp(rendered: &str) -> String {
    let trimmed: String = rendered.chars().take(11).collect();
    let mut out = format!("0{}", trimmed);
    if out.as_bytes().get(3) == Some(&b':') {
        out.remove(0);
    }
    out
}

/// Convert a millisecond interval into a start timestamp, an end timestamp,
/// and the spanned duration.
///
/// A start of exactly 0 renders as `00:00:00.000` - explicit fractional part,
/// no truncation. Every other bound goes through [`stamp`]. Clip duration
/// arithmetic downstream depends on this asymmetry, so it is kept as is.
pub fn milliseconds_to_interval(start_ms: i64, end_ms: i64) -> Result<(String, String, Duration)> {
    if start_ms < 0 || end_ms < start_ms {
        return Err(Error::InvalidInterval {
            start: start_ms,
            end: end_ms,
        });
    }
    let (start_ms, end_ms) = (start_ms as u64, end_ms as u64);

    let start = if start_ms == 0 {
        format!("0{}.000", render_span(0))
    } else {
        stamp(&render_span(start_ms))
    };
    let end = stamp(&render_span(end_ms));
    let duration = Duration::from_millis(end_ms - start_ms);

    Ok((start, end, duration))
}

/// Render a duration the way the extractor expects its `-t` argument:
/// unpadded hours, six fractional digits for partial seconds.
pub fn format_duration(duration: Duration) -> String {
    render_span(duration.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_spans_the_interval() {
        for (s, e) in [(0, 0), (0, 1500), (2000, 3500), (123, 456_789)] {
            let (_, _, d) = milliseconds_to_interval(s, e).unwrap();
            assert_eq!(d.as_millis() as i64, e - s);
        }
    }

    #[test]
    fn zero_start_gets_explicit_millis() {
        let (start, end, d) = milliseconds_to_interval(0, 1500).unwrap();
        assert_eq!(start, "00:00:00.000");
        assert_eq!(end, "00:00:01.500");
        assert_eq!(d.as_millis(), 1500);
    }

    #[test]
    fn whole_second_start_has_no_millis_suffix() {
        let (start, end, _) = milliseconds_to_interval(2000, 3500).unwrap();
        assert_eq!(start, "00:00:02");
        assert_eq!(end, "00:00:03.500");
    }

    #[test]
    fn fractional_start_keeps_milliseconds() {
        let (start, _, _) = milliseconds_to_interval(2500, 9000).unwrap();
        assert_eq!(start, "00:00:02.500");
    }

    #[test]
    fn double_digit_hours_drop_the_pad() {
        let (start, _, _) = milliseconds_to_interval(36_000_000, 36_000_001).unwrap();
        assert_eq!(start, "10:00:00");
    }

    #[test]
    fn rejects_backwards_and_negative_intervals() {
        assert!(matches!(
            milliseconds_to_interval(500, 400),
            Err(Error::InvalidInterval { start: 500, end: 400 })
        ));
        assert!(milliseconds_to_interval(-1, 100).is_err());
    }

    #[test]
    fn duration_renders_unpadded() {
        let (_, _, d) = milliseconds_to_interval(0, 1500).unwrap();
        assert_eq!(format_duration(d), "0:00:01.500000");
        let (_, _, d) = milliseconds_to_interval(1000, 3000).unwrap();
        assert_eq!(format_duration(d), "0:00:02");
    }
}
