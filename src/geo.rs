//! Great-circle distance

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two WGS84 points given in degrees
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + lat1.to_radians().cos()
            * lat2.to_radians().cos()
            * (d_lon / 2.0).sin()
            * (d_lon / 2.0).sin();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Distance for display, one decimal
pub fn format_distance(km: f64) -> String {
    format!("{:.1} km away", km)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POINTS: [(f64, f64); 5] = [
        (28.5618571, -80.577366),
        (34.632093, -120.610829),
        (9.0477206, 167.7431292),
        (-33.8688, 151.2093),
        (90.0, 0.0),
    ];

    #[test]
    fn same_point_is_zero() {
        for (lat, lon) in POINTS {
            assert_eq!(distance_km(lat, lon, lat, lon), 0.0);
        }
    }

    #[test]
    fn symmetric() {
        for (lat1, lon1) in POINTS {
            for (lat2, lon2) in POINTS {
                assert_eq!(
                    distance_km(lat1, lon1, lat2, lon2),
                    distance_km(lat2, lon2, lat1, lon1)
                );
            }
        }
    }

    #[test]
    fn known_distances() {
        // One degree of longitude along the equator
        let d = distance_km(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111.195).abs() < 0.001, "{d}");

        // Antipodes
        let d = distance_km(0.0, 0.0, 0.0, 180.0);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6, "{d}");

        // Cape Canaveral SLC-40 to Vandenberg SLC-4E
        let d = distance_km(28.5618571, -80.577366, 34.632093, -120.610829);
        assert!((d - 3825.9).abs() < 0.1, "{d}");
    }

    #[test]
    fn format_one_decimal() {
        assert_eq!(format_distance(3790.456), "3790.5 km away");
        assert_eq!(format_distance(0.0), "0.0 km away");
    }
}
