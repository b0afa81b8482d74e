//! Host reveal resolution
use rand::Rng;

use crate::door::Door;

/// Outcome of the host opening every door except the contestant's and one other.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Reveal {
    /// The contestant's original door
    pub picked: Door,
    /// The one door left closed beside the pick
    pub remaining: Door,
    /// The door hiding the car
    pub car: Door,
}

/// Resolve which door the host leaves closed next to the pick.
///
/// When the pick already sits on the car, the remaining door is drawn uniformly
/// from the whole lineup and can be the car door itself. Otherwise the host's
/// hand is forced and the car door stays closed. Returns `None` when `pick`
/// matches no door in the lineup.
pub fn resolve_reveal<R: Rng>(pick: usize, doors: &[Door], rng: &mut R) -> Option<Reveal> {
    let picked = doors.iter().copied().find(|door| door.id == pick)?;
    let car = doors.iter().copied().find(|door| door.has_car)?;

    let remaining = if picked.id == car.id {
        doors[rng.gen_range(0..doors.len())]
    } else {
        car
    };

    Some(Reveal {
        picked,
        remaining,
        car,
    })
}
