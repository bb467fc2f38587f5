/// Championship points for a classified finishing position.
pub fn points_for_position(position: u32) -> u32 {
    match position {
        1 => 25,
        2 => 18,
        3 => 15,
        4 => 12,
        5 => 10,
        6 => 8,
        7 => 6,
        8 => 4,
        9 => 2,
        10 => 1,
        _ => 0,
    }
}

/// Formats seconds as `m:ss.mmm`.
pub fn format_lap_time(seconds: f64) -> String {
    let total_ms = (seconds * 1000.0).round() as u64;
    let minutes = total_ms / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;
    format!("{}:{:02}.{:03}", minutes, secs, millis)
}

pub fn country_flag_url(base_url: &str, country_code: &str) -> String {
    let code = country_code.trim();
    if code.is_empty() {
        return String::new();
    }
    format!("{}/{}.png", base_url, code.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_table_is_exact() {
        let expected = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];
        for (i, points) in expected.iter().enumerate() {
            assert_eq!(points_for_position(i as u32 + 1), *points);
        }
        assert_eq!(points_for_position(11), 0);
        assert_eq!(points_for_position(20), 0);
        assert_eq!(points_for_position(0), 0);
    }

    #[test]
    fn points_never_increase_down_the_order() {
        for p in 1..10 {
            assert!(points_for_position(p) >= points_for_position(p + 1));
        }
    }

    #[test]
    fn lap_time_format() {
        assert_eq!(format_lap_time(91.1), "1:31.100");
        assert_eq!(format_lap_time(59.9999), "1:00.000");
        assert_eq!(format_lap_time(7.25), "0:07.250");
    }

    #[test]
    fn flag_url_lowercases_code() {
        assert_eq!(
            country_flag_url("https://flagcdn.com/w320", "NED"),
            "https://flagcdn.com/w320/ned.png"
        );
        assert_eq!(country_flag_url("https://flagcdn.com/w320", " "), "");
    }
}
