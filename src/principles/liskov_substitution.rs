//! Liskov substitution
//!
//! A prisoner is a person, but a prisoner does not behave like one: it
//! cannot walk wherever it likes. Modelling it as a person that inherits the
//! walking operations lets code written for people walk a prisoner out of
//! prison. Types should be modelled on behavior, not on shared properties.

use serde::{Deserialize, Serialize};

use super::{banner, DemoConfig};
use crate::error::Result;
use crate::narrator::Narrator;

/// A grid position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

pub const PRISON_LOCATION: Position = Position::new(3, 3);

/// Prisoner modelled as a person
pub mod bad {
    use super::*;

    /// Anyone with a position, walking provided for free
    pub trait Person {
        fn position(&self) -> Position;
        fn position_mut(&mut self) -> &mut Position;

        fn walk_north(&mut self, dist: i64) {
            self.position_mut().y += dist;
        }

        fn walk_east(&mut self, dist: i64) {
            self.position_mut().x += dist;
        }
    }

    #[derive(Debug, Clone)]
    pub struct Citizen {
        position: Position,
    }

    impl Citizen {
        pub fn new(position: Position) -> Self {
            Self { position }
        }
    }

    impl Person for Citizen {
        fn position(&self) -> Position {
            self.position
        }

        fn position_mut(&mut self) -> &mut Position {
            &mut self.position
        }
    }

    /// "Is a" person, so it inherits `walk_north` and `walk_east`
    #[derive(Debug, Clone)]
    pub struct Prisoner {
        position: Position,
        pub is_free: bool,
    }

    impl Prisoner {
        pub fn new() -> Self {
            Self {
                position: PRISON_LOCATION,
                is_free: false,
            }
        }

        /// An unfree prisoner away from the prison has broken out
        pub fn has_escaped(&self) -> bool {
            !self.is_free && self.position != PRISON_LOCATION
        }
    }

    impl Default for Prisoner {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Person for Prisoner {
        fn position(&self) -> Position {
            self.position
        }

        fn position_mut(&mut self) -> &mut Position {
            &mut self.position
        }
    }

    /// Code written against `Person`, unaware who it is walking
    pub fn stroll(person: &mut dyn Person, north: i64, east: i64) {
        person.walk_north(north);
        person.walk_east(east);
    }
}

/// Prisoner with its own type and no walking surface
pub mod good {
    use super::*;

    pub trait Walker {
        fn walk_north(&mut self, dist: i64);
        fn walk_east(&mut self, dist: i64);
    }

    /// Anything that occupies a position; only some can walk
    pub trait Occupant {
        fn position(&self) -> Position;

        fn as_walker(&mut self) -> Option<&mut dyn Walker> {
            None
        }
    }

    #[derive(Debug, Clone)]
    pub struct FreeMan {
        position: Position,
    }

    impl FreeMan {
        pub fn new(position: Position) -> Self {
            Self { position }
        }
    }

    impl Walker for FreeMan {
        fn walk_north(&mut self, dist: i64) {
            self.position.y += dist;
        }

        fn walk_east(&mut self, dist: i64) {
            self.position.x += dist;
        }
    }

    impl Occupant for FreeMan {
        fn position(&self) -> Position {
            self.position
        }

        fn as_walker(&mut self) -> Option<&mut dyn Walker> {
            Some(self)
        }
    }

    /// Not a free man; stays in prison
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Prisoner;

    impl Occupant for Prisoner {
        fn position(&self) -> Position {
            PRISON_LOCATION
        }
    }

    /// Walk `occupant` if it can walk; returns whether it moved
    pub fn try_stroll(occupant: &mut dyn Occupant, north: i64, east: i64) -> bool {
        match occupant.as_walker() {
            Some(walker) => {
                walker.walk_north(north);
                walker.walk_east(east);
                true
            }
            None => false,
        }
    }
}

const NORTH: i64 = 10;
const EAST: i64 = -3;

fn narrate_attempt(out: &dyn Narrator) {
    out.say(&format!(
        "The prisoner trying to walk to north by {} and east by {}.",
        NORTH, EAST
    ));
}

fn narrate_outcome(out: &dyn Narrator, position: Position) {
    out.say(&format!("The location of the prison: {}", PRISON_LOCATION));
    out.say(&format!("The current position of the prisoner: {}", position));
}

pub fn bad_practice(_config: &DemoConfig, out: &dyn Narrator) -> Result<()> {
    banner(out, "BAD PRACTICE");

    let mut prisoner = bad::Prisoner::new();
    narrate_attempt(out);
    bad::stroll(&mut prisoner, NORTH, EAST);
    narrate_outcome(out, bad::Person::position(&prisoner));

    if prisoner.has_escaped() {
        out.say("The prisoner walked out of prison.");
    }

    Ok(())
}

pub fn good_practice(_config: &DemoConfig, out: &dyn Narrator) -> Result<()> {
    banner(out, "GOOD PRACTICE");

    let mut prisoner = good::Prisoner;
    narrate_attempt(out);
    if !good::try_stroll(&mut prisoner, NORTH, EAST) {
        out.say("The prisoner cannot walk.");
    }
    narrate_outcome(out, good::Occupant::position(&prisoner));

    let mut free_man = good::FreeMan::new(Position::new(0, 0));
    if good::try_stroll(&mut free_man, NORTH, EAST) {
        out.say(&format!(
            "A free man takes the same walk and ends up at {}",
            good::Occupant::position(&free_man)
        ));
    }

    Ok(())
}

pub fn walkthrough(config: &DemoConfig, out: &dyn Narrator) -> Result<()> {
    bad_practice(config, out)?;
    good_practice(config, out)
}

#[cfg(test)]
mod tests {
    use super::bad::Person;
    use super::good::Occupant;
    use super::*;
    use crate::narrator::Transcript;

    #[test]
    fn test_citizen_walks() {
        let mut citizen = bad::Citizen::new(Position::new(0, 0));
        bad::stroll(&mut citizen, 10, -3);
        assert_eq!(citizen.position(), Position::new(-3, 10));
    }

    #[test]
    fn test_inherited_walking_breaks_prisoner() {
        let mut prisoner = bad::Prisoner::new();
        assert!(!prisoner.has_escaped());

        bad::stroll(&mut prisoner, 10, -3);

        assert_eq!(prisoner.position(), Position::new(0, 13));
        assert!(prisoner.has_escaped());
        assert_eq!(PRISON_LOCATION, Position::new(3, 3));
    }

    #[test]
    fn test_freed_prisoner_is_not_escaped() {
        let mut prisoner = bad::Prisoner::new();
        prisoner.is_free = true;
        prisoner.walk_east(1);
        assert!(!prisoner.has_escaped());
    }

    #[test]
    fn test_good_prisoner_cannot_walk() {
        let mut prisoner = good::Prisoner;
        assert!(prisoner.as_walker().is_none());
        assert!(!good::try_stroll(&mut prisoner, 10, -3));
        assert_eq!(prisoner.position(), PRISON_LOCATION);
    }

    #[test]
    fn test_free_man_walks() {
        let mut free_man = good::FreeMan::new(Position::new(1, 1));
        assert!(good::try_stroll(&mut free_man, 2, 2));
        assert_eq!(free_man.position(), Position::new(3, 3));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(0, -13).to_string(), "(0, -13)");
    }

    #[test]
    fn test_walkthrough_narration() {
        let out = Transcript::new();
        walkthrough(&DemoConfig::default(), &out).unwrap();

        assert!(out.contains("The current position of the prisoner: (0, 13)"));
        assert!(out.contains("The prisoner walked out of prison."));
        assert!(out.contains("The prisoner cannot walk."));
        assert!(out.contains("The current position of the prisoner: (3, 3)"));
        assert!(out.contains("ends up at (-3, 10)"));
    }
}
