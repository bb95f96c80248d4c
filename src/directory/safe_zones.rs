// Safe zones and nearby police stations
// Nearest-first ranking of the hard-coded points of interest

use crate::chat::Language;
use thiserror::Error;

/// Mean earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Errors when reading a user-entered position
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    /// Latitude or longitude is not a number
    #[error("Could not parse coordinate: {0}")]
    Unparseable(String),
    /// Latitude outside [-90, 90]
    #[error("Latitude out of range: {0}")]
    InvalidLatitude(f64),
    /// Longitude outside [-180, 180]
    #[error("Longitude out of range: {0}")]
    InvalidLongitude(f64),
}

/// A point on the globe in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

impl Coordinates {
    /// Create validated coordinates
    pub fn new(lat: f64, lng: f64) -> Result<Self, LocationError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(LocationError::InvalidLatitude(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(LocationError::InvalidLongitude(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Parse coordinates from two text fields
    pub fn parse(lat: &str, lng: &str) -> Result<Self, LocationError> {
        let parse = |value: &str| {
            value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| LocationError::Unparseable(value.to_string()))
        };
        Self::new(parse(lat)?, parse(lng)?)
    }
}

/// Kind of safe place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneKind {
    /// Police station
    Police,
    /// Hospital
    Hospital,
    /// Shopping mall
    Mall,
    /// Metro station
    Metro,
    /// Public park
    Park,
}

impl ZoneKind {
    /// Display label
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (ZoneKind::Police, Language::En) => "Police Station",
            (ZoneKind::Police, Language::Hi) => "पुलिस स्टेशन",
            (ZoneKind::Hospital, Language::En) => "Hospital",
            (ZoneKind::Hospital, Language::Hi) => "अस्पताल",
            (ZoneKind::Mall, Language::En) => "Shopping Mall",
            (ZoneKind::Mall, Language::Hi) => "शॉपिंग मॉल",
            (ZoneKind::Metro, Language::En) => "Metro Station",
            (ZoneKind::Metro, Language::Hi) => "मेट्रो स्टेशन",
            (ZoneKind::Park, Language::En) => "Public Park",
            (ZoneKind::Park, Language::Hi) => "सार्वजनिक पार्क",
        }
    }
}

/// A hard-coded point of interest considered safe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeZone {
    /// Stable identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Where it is
    pub position: Coordinates,
    /// What it is
    pub kind: ZoneKind,
    /// Phone number, if the place has one
    pub phone: Option<&'static str>,
    /// Short tags (CCTV, 24/7, ...)
    pub features: &'static [&'static str],
}

/// The four sample safe zones
pub static SAMPLE_SAFE_ZONES: [SafeZone; 4] = [
    SafeZone {
        id: "1",
        name: "Central Police Station",
        position: Coordinates {
            lat: 28.6139,
            lng: 77.2090,
        },
        kind: ZoneKind::Police,
        phone: Some("100"),
        features: &["24/7", "Emergency Response", "Women Cell"],
    },
    SafeZone {
        id: "2",
        name: "Apollo Hospital",
        position: Coordinates {
            lat: 28.6120,
            lng: 77.2100,
        },
        kind: ZoneKind::Hospital,
        phone: Some("1066"),
        features: &["24/7", "Emergency Ward", "Ambulance"],
    },
    SafeZone {
        id: "3",
        name: "Select City Walk Mall",
        position: Coordinates {
            lat: 28.6110,
            lng: 77.2080,
        },
        kind: ZoneKind::Mall,
        phone: None,
        features: &["CCTV", "Security", "Crowded", "Well Lit"],
    },
    SafeZone {
        id: "4",
        name: "Saket Metro Station",
        position: Coordinates {
            lat: 28.6100,
            lng: 77.2070,
        },
        kind: ZoneKind::Metro,
        phone: None,
        features: &["24/7", "CCTV", "Security", "Crowded"],
    },
];

/// A police station listed in the location tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoliceStation {
    /// Station name
    pub name: &'static str,
    /// Approximate distance as displayed
    pub distance: &'static str,
    /// Number to dial
    pub phone: &'static str,
    /// Street address
    pub address: &'static str,
}

/// Police stations shown alongside the current location
pub static NEARBY_POLICE_STATIONS: [PoliceStation; 3] = [
    PoliceStation {
        name: "Central Police Station",
        distance: "0.5 km",
        phone: "100",
        address: "MG Road",
    },
    PoliceStation {
        name: "Women Police Station",
        distance: "1.2 km",
        phone: "100",
        address: "Park Street",
    },
    PoliceStation {
        name: "Cyber Crime Unit",
        distance: "2.1 km",
        phone: "1930",
        address: "Tech Hub",
    },
];

/// A safe zone paired with its distance from the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedZone<'a> {
    /// The zone
    pub zone: &'a SafeZone,
    /// Great-circle distance in kilometres
    pub distance_km: f64,
}

/// Great-circle distance between two points in kilometres
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Rank `zones` by distance from `origin`, nearest first, keeping at most
/// `limit`
///
/// Zones at equal distance keep their input order.
pub fn nearest_safe_zones(origin: Coordinates, zones: &[SafeZone], limit: usize) -> Vec<RankedZone<'_>> {
    let mut ranked: Vec<RankedZone<'_>> = zones
        .iter()
        .map(|zone| RankedZone {
            zone,
            distance_km: haversine_km(origin, zone.position),
        })
        .collect();
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked.truncate(limit);
    ranked
}

/// Google Maps link: directions to `destination`, or a map centred on
/// `origin` when there is none
pub fn directions_url(origin: Coordinates, destination: Option<Coordinates>) -> String {
    match destination {
        Some(dest) => format!(
            "https://www.google.com/maps/dir/{},{}/{},{}",
            origin.lat, origin.lng, dest.lat, dest.lng
        ),
        None => format!(
            "https://www.google.com/maps/@{},{},15z",
            origin.lat, origin.lng
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELHI: Coordinates = Coordinates {
        lat: 28.6139,
        lng: 77.2090,
    };
    const MUMBAI: Coordinates = Coordinates {
        lat: 19.0760,
        lng: 72.8777,
    };

    #[test]
    fn test_haversine_known_distance() {
        let distance = haversine_km(DELHI, MUMBAI);
        assert!((distance - 1148.09).abs() < 0.5, "got {}", distance);
    }

    #[test]
    fn test_haversine_zero_and_symmetric() {
        assert_eq!(haversine_km(DELHI, DELHI), 0.0);
        let there = haversine_km(DELHI, MUMBAI);
        let back = haversine_km(MUMBAI, DELHI);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_nearest_zones_sorted_ascending() {
        let ranked = nearest_safe_zones(DELHI, &SAMPLE_SAFE_ZONES, 4);
        let ids: Vec<_> = ranked.iter().map(|r| r.zone.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert!(ranked.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
        assert_eq!(ranked[0].distance_km, 0.0);
    }

    #[test]
    fn test_nearest_zones_from_metro() {
        let origin = Coordinates::new(28.6100, 77.2070).unwrap();
        let ranked = nearest_safe_zones(origin, &SAMPLE_SAFE_ZONES, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].zone.kind, ZoneKind::Metro);
        assert_eq!(ranked[1].zone.kind, ZoneKind::Mall);
    }

    #[test]
    fn test_nearest_zones_empty_input() {
        assert!(nearest_safe_zones(DELHI, &[], 4).is_empty());
    }

    #[test]
    fn test_coordinates_validation() {
        assert!(Coordinates::new(28.6, 77.2).is_ok());
        assert_eq!(
            Coordinates::new(91.0, 0.0),
            Err(LocationError::InvalidLatitude(91.0))
        );
        assert_eq!(
            Coordinates::new(0.0, -181.0),
            Err(LocationError::InvalidLongitude(-181.0))
        );
        assert!(matches!(
            Coordinates::parse("abc", "77.2"),
            Err(LocationError::Unparseable(_))
        ));
        assert!(matches!(
            Coordinates::parse("NaN", "77.2"),
            Err(LocationError::Unparseable(_))
        ));
        assert_eq!(
            Coordinates::parse(" 28.5 ", "77.25").unwrap(),
            Coordinates {
                lat: 28.5,
                lng: 77.25
            }
        );
    }

    #[test]
    fn test_directions_url() {
        assert_eq!(
            directions_url(DELHI, Some(MUMBAI)),
            "https://www.google.com/maps/dir/28.6139,77.209/19.076,72.8777"
        );
        assert_eq!(
            directions_url(DELHI, None),
            "https://www.google.com/maps/@28.6139,77.209,15z"
        );
    }
}
