//! Parsing for duration strings like "30s", "15m", "1h30m".

use std::time::Duration;

/// Parses a duration made of one or more `<number><unit>` segments.
///
/// A single bare number is read as seconds. Used as a clap value parser.
pub(crate) fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("invalid duration: empty value".to_string());
    }

    let mut total = 0.0;
    let mut rest = s;
    while !rest.is_empty() {
        // Find where the number ends and the unit begins
        let num_end = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        let (num_str, tail) = rest.split_at(num_end);
        let num: f64 = num_str
            .parse()
            .map_err(|_| format!("invalid duration number: {}", num_str))?;

        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_end);

        let multiplier = match unit.trim() {
            "ns" => 1e-9,
            "us" | "µs" => 1e-6,
            "ms" => 1e-3,
            "s" => 1.0,
            "" if next.is_empty() && total == 0.0 && rest.len() == s.len() => 1.0,
            "m" => 60.0,
            "h" => 3600.0,
            _ => return Err(format!("unknown duration unit: {:?}", unit)),
        };

        total += num * multiplier;
        rest = next;
    }

    Duration::try_from_secs_f64(total).map_err(|e| format!("invalid duration {s:?}: {e}"))
}
