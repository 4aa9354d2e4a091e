//! Builder utilities for ergonomic troll construction.
//!
//! This module provides helper functions to reduce boilerplate when
//! building wrapping chains. Instead of writing verbose
//! `Box::new(ClubbedTroll::new(...))`, you can use shorter functions like
//! `clubbed(...)`.

use crate::{ClubbedTroll, PeacefulTroll, SimpleTroll, SuperTroll, Troll};

/// Creates a bare-handed troll.
///
/// Shorthand for `Box::new(SimpleTroll::new())`.
#[inline]
pub fn simple() -> Box<dyn Troll> {
    Box::new(SimpleTroll::new())
}

/// Creates a clubbed troll around the given combatant.
///
/// Shorthand for `Box::new(ClubbedTroll::new(decorated))`.
#[inline]
pub fn clubbed(decorated: Box<dyn Troll>) -> Box<dyn Troll> {
    Box::new(ClubbedTroll::new(decorated))
}

/// Creates a super troll around the given combatant.
///
/// Shorthand for `Box::new(SuperTroll::new(decorated))`.
#[inline]
pub fn super_troll(decorated: Box<dyn Troll>) -> Box<dyn Troll> {
    Box::new(SuperTroll::new(decorated))
}

/// Creates a peaceful troll around the given combatant.
///
/// Shorthand for `Box::new(PeacefulTroll::new(decorated))`.
#[inline]
pub fn peaceful(decorated: Box<dyn Troll>) -> Box<dyn Troll> {
    Box::new(PeacefulTroll::new(decorated))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthands_match_direct_construction() {
        assert_eq!(simple().attack_power(), 10);
        assert_eq!(clubbed(simple()).attack_power(), 20);
        assert_eq!(super_troll(simple()).attack_power(), 1000);
        assert_eq!(peaceful(simple()).attack_power(), 0);
    }
}
