/// Parse a duration such as `30m`, `1h30m`, `1.5h` or `90s` into whole seconds.
///
/// Units: `h`, `m`, `s`, `ms`, `us`/`µs`, `ns`. A bare integer is seconds.
/// Fractions of a second are truncated.
pub fn parse_duration(input: &str) -> Result<i64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("empty duration".to_string());
    }

    if let Ok(secs) = trimmed.parse::<i64>() {
        return Ok(secs);
    }

    let (sign, mut rest) = match trimmed.strip_prefix('-') {
        Some(stripped) => (-1.0, stripped),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let invalid = || format!("invalid duration '{}'", input);
    let mut total = 0.0_f64;

    while !rest.is_empty() {
        let num_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if num_len == 0 {
            return Err(invalid());
        }
        let value: f64 = rest[..num_len].parse().map_err(|_| invalid())?;
        rest = &rest[num_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let scale = match &rest[..unit_len] {
            "h" => 3600.0,
            "m" => 60.0,
            "s" => 1.0,
            "ms" => 1e-3,
            "us" | "µs" | "μs" => 1e-6,
            "ns" => 1e-9,
            "" => return Err(format!("missing unit in duration '{}'", input)),
            unit => return Err(format!("unknown unit '{}' in duration '{}'", unit, input)),
        };
        total += value * scale;
        rest = &rest[unit_len..];
    }

    Ok((sign * total).trunc() as i64)
}

/// `parse_duration` for flag values: the result must be at least one second.
pub fn parse_duration_arg(input: &str) -> Result<i64, String> {
    let secs = parse_duration(input)?;
    if secs <= 0 {
        return Err(format!("delay must be at least 1s, got '{}'", input));
    }
    Ok(secs)
}

/// Format seconds the way Go prints a `time.Duration`: `0s`, `45s`, `2m5s`, `1h0m30s`.
pub fn format_duration(secs: i64) -> String {
    if secs == 0 {
        return "0s".to_string();
    }

    let sign = if secs < 0 { "-" } else { "" };
    let abs = secs.unsigned_abs();
    let hours = abs / 3600;
    let minutes = (abs % 3600) / 60;
    let seconds = abs % 60;

    if hours > 0 {
        format!("{}{}h{}m{}s", sign, hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}{}m{}s", sign, minutes, seconds)
    } else {
        format!("{}{}s", sign, seconds)
    }
}
