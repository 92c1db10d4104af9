use chrono::NaiveDateTime;
use std::time::Duration;

pub fn format_duration(duration: Duration) -> String {
    format!("{:.2} s", duration.as_secs_f64())
}

pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["bytes", "KiB", "MiB", "GiB", "TiB"];
    let mut value = bytes as f64;
    let mut unit_index = 0;

    while value >= 1024.0 && unit_index < UNITS.len() - 1 {
        value /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} bytes", bytes)
    } else {
        format!("{value:.2} {} ({} bytes)", UNITS[unit_index], bytes)
    }
}

/// Convierte fechas PDF (`D:YYYYMMDDHHmmSS...`) a un formato legible.
/// Si el valor no se puede interpretar se devuelve tal cual.
pub fn format_pdf_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let digits: String = trimmed
        .strip_prefix("D:")
        .unwrap_or(trimmed)
        .chars()
        .take_while(char::is_ascii_digit)
        .take(14)
        .collect();

    if digits.len() < 8 {
        return raw.to_string();
    }

    let padded = format!("{digits:0<14}");
    match NaiveDateTime::parse_from_str(&padded, "%Y%m%d%H%M%S") {
        Ok(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_dates_are_normalized() {
        assert_eq!(format_pdf_date("D:20240105093000+01'00'"), "2024-01-05 09:30:00");
        assert_eq!(format_pdf_date("D:20240105"), "2024-01-05 00:00:00");
    }

    #[test]
    fn unparseable_pdf_dates_are_kept() {
        assert_eq!(format_pdf_date("ayer"), "ayer");
        assert_eq!(format_pdf_date("D:20241399"), "D:20241399");
    }

    #[test]
    fn sizes_use_binary_units() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2.00 KiB (2048 bytes)");
    }
}
