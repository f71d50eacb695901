/// The 16 compass points, clockwise from north, 22.5° apart.
pub const DIRECTIONS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

const SECTOR_WIDTH: f64 = 360.0 / DIRECTIONS.len() as f64;

/// Maps a heading in degrees to its compass point label.
///
/// The input does not need to be clamped: negative headings and headings
/// past 360 wrap around. Halfway values round up, so 11.25° is "NNE".
pub fn heading_to_dir(heading: f64) -> &'static str {
    // NaN casts to 0 and infinities saturate, so the index is always in range
    let sector = (heading / SECTOR_WIDTH + 0.5).floor() as i64;
    DIRECTIONS[sector.rem_euclid(DIRECTIONS.len() as i64) as usize]
}

/// Wraps any angle in degrees into [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    ((degrees % 360.0) + 360.0) % 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_points() {
        assert_eq!(heading_to_dir(0.0), "N");
        assert_eq!(heading_to_dir(90.0), "E");
        assert_eq!(heading_to_dir(180.0), "S");
        assert_eq!(heading_to_dir(270.0), "W");
    }

    #[test]
    fn intercardinal_points() {
        assert_eq!(heading_to_dir(22.5), "NNE");
        assert_eq!(heading_to_dir(45.0), "NE");
        assert_eq!(heading_to_dir(202.5), "SSW");
        assert_eq!(heading_to_dir(337.5), "NNW");
    }

    #[test]
    fn near_north_wraps_to_n() {
        assert_eq!(heading_to_dir(359.0), "N");
        assert_eq!(heading_to_dir(360.0), "N");
        assert_eq!(heading_to_dir(348.75), "N");
        assert_eq!(heading_to_dir(348.7), "NNW");
    }

    #[test]
    fn half_sector_rounds_up() {
        assert_eq!(heading_to_dir(11.25), "NNE");
        assert_eq!(heading_to_dir(-11.25), "N");
    }

    #[test]
    fn negative_headings() {
        assert_eq!(heading_to_dir(-90.0), "W");
        assert_eq!(heading_to_dir(-22.5), "NNW");
        assert_eq!(heading_to_dir(-720.0), "N");
    }

    #[test]
    fn periodic_over_full_turns() {
        for step in 0..720 {
            let h = step as f64 * 0.5 - 180.0;
            assert_eq!(heading_to_dir(h), heading_to_dir(h + 360.0), "heading {h}");
        }
    }

    #[test]
    fn non_finite_input_still_yields_a_label() {
        for h in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(DIRECTIONS.contains(&heading_to_dir(h)));
        }
    }

    #[test]
    fn normalize_wraps_into_range() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        // -1e-15 + 360 rounds to exactly 360, which the last modulo folds to 0
        assert_eq!(normalize_degrees(-1e-15), 0.0);
    }
}
