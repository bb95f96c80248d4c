// Static safety directory
// Helpline numbers, nearby police stations and safe zones

pub mod helplines;
pub mod safe_zones;

pub use helplines::{directory, find_by_number, CategoryKind, Helpline, HelplineCategory};
pub use safe_zones::{
    directions_url, haversine_km, nearest_safe_zones, Coordinates, LocationError, PoliceStation,
    RankedZone, SafeZone, ZoneKind, NEARBY_POLICE_STATIONS, SAMPLE_SAFE_ZONES,
};
