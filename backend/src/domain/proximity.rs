//! Great-circle distance and nearest-neighbour ranking.
//!
//! The scan is linear in the number of candidates. Ranking uses a stable
//! sort keyed on distance, so records at equal distance keep the order in
//! which the store yielded them (ascending id).

use super::people::{Coordinate, Person};

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometres.
///
/// # Examples
/// ```
/// use nearby_users::domain::{haversine_km, Coordinate};
///
/// let origin = Coordinate::new(0.0, 0.0).expect("valid");
/// let east = Coordinate::new(0.0, 1.0).expect("valid");
/// let distance = haversine_km(origin, east);
/// assert!((distance - 111.19).abs() < 0.01);
/// ```
#[must_use]
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = to.longitude().to_radians() - from.longitude().to_radians();

    let half_chord = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push near-antipodal pairs fractionally above 1.
    let half_chord = half_chord.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * half_chord.sqrt().atan2((1.0 - half_chord).sqrt())
}

/// A ranked neighbour and its distance from the reference record.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyPerson {
    pub person: Person,
    pub distance_km: f64,
}

/// Rank `candidates` by distance from `reference` and keep the closest `limit`.
///
/// The reference record is never part of the result, even when the
/// candidate sequence contains it.
#[must_use]
pub fn rank_nearest<I>(reference: &Person, candidates: I, limit: usize) -> Vec<NearbyPerson>
where
    I: IntoIterator<Item = Person>,
{
    let origin = reference.coordinate;
    let mut ranked: Vec<NearbyPerson> = candidates
        .into_iter()
        .filter(|candidate| candidate.id != reference.id)
        .map(|person| NearbyPerson {
            distance_km: haversine_km(origin, person.coordinate),
            person,
        })
        .collect();

    ranked.sort_by(|left, right| left.distance_km.total_cmp(&right.distance_km));
    ranked.truncate(limit);
    ranked
}
