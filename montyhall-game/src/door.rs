//! Door lineup generation
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One door on the stage.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Door {
    /// Zero-based position of the door in the lineup
    pub id: usize,
    /// Whether the car sits behind this door
    pub has_car: bool,
}

impl Door {
    #[must_use]
    pub const fn new(id: usize, has_car: bool) -> Self {
        Self { id, has_car }
    }
}

/// Build a lineup of `count` doors with the car placed uniformly at random.
///
/// # Panics
///
/// Panics if `count` is zero; configs are validated before lineups are built.
#[must_use]
pub fn generate_doors<R: Rng>(count: usize, rng: &mut R) -> Vec<Door> {
    assert!(count > 0, "door lineup requires at least one door");
    let winner = rng.gen_range(0..count);
    (0..count).map(|id| Door::new(id, id == winner)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn lineup_places_exactly_one_car() {
        let mut rng = StepRng::new(0, 0);
        let doors = generate_doors(5, &mut rng);
        assert_eq!(doors.len(), 5);
        assert_eq!(doors.iter().filter(|door| door.has_car).count(), 1);
        for (idx, door) in doors.iter().enumerate() {
            assert_eq!(door.id, idx);
        }
    }

    #[test]
    fn zero_rolls_put_the_car_behind_the_first_door() {
        let mut rng = StepRng::new(0, 0);
        let doors = generate_doors(3, &mut rng);
        assert!(doors[0].has_car);
    }

    #[test]
    fn single_door_lineup_holds_the_car() {
        let mut rng = StepRng::new(0, 0);
        let doors = generate_doors(1, &mut rng);
        assert_eq!(doors, vec![Door::new(0, true)]);
    }

    #[test]
    #[should_panic(expected = "at least one door")]
    fn empty_lineup_is_rejected() {
        let mut rng = StepRng::new(0, 0);
        let _ = generate_doors(0, &mut rng);
    }
}
