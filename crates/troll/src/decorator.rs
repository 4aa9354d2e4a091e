//! Wrapping troll variants.
//!
//! Each wrapper owns a single inner [`Troll`] and changes how the trio of
//! operations behaves. The three variants cover the three useful wrapping
//! strategies: [`ClubbedTroll`] forwards and extends, [`SuperTroll`]
//! overrides a single operation, and [`PeacefulTroll`] replaces every
//! operation outright.

use crate::Troll;

/// Arms the wrapped troll with a club.
///
/// # Semantics
///
/// - `attack` forwards to the wrapped troll, then swings the club
/// - `flee_battle` forwards unchanged
/// - `attack_power` is the wrapped power plus [`CLUB_BONUS`](Self::CLUB_BONUS)
pub struct ClubbedTroll {
    decorated: Box<dyn Troll>,
}

impl ClubbedTroll {
    /// Extra attack strength granted by the club.
    pub const CLUB_BONUS: u32 = 10;

    /// Creates a clubbed troll wrapping the given combatant.
    pub fn new(decorated: Box<dyn Troll>) -> Self {
        Self { decorated }
    }
}

impl Troll for ClubbedTroll {
    fn attack(&self) {
        self.decorated.attack();
        tracing::info!("The troll swings at you with a club!");
    }

    fn flee_battle(&self) {
        self.decorated.flee_battle();
    }

    fn attack_power(&self) -> u32 {
        self.decorated.attack_power().saturating_add(Self::CLUB_BONUS)
    }
}

/// Turns the wrapped troll into a super troll with a super club.
///
/// # Semantics
///
/// - `attack` forwards to the wrapped troll, then swings the super club
/// - `flee_battle` does NOT forward: a super troll refuses to flee
/// - `attack_power` is the wrapped power cubed, saturating at `u32::MAX`
///
/// Unlike the club's additive bonus, the super club transforms the
/// wrapped power wholesale.
pub struct SuperTroll {
    decorated: Box<dyn Troll>,
}

impl SuperTroll {
    /// Creates a super troll wrapping the given combatant.
    pub fn new(decorated: Box<dyn Troll>) -> Self {
        Self { decorated }
    }
}

impl Troll for SuperTroll {
    fn attack(&self) {
        self.decorated.attack();
        tracing::info!("The super troll swings at you with a super club!");
    }

    fn flee_battle(&self) {
        tracing::info!(
            "The super troll won't flee from battle and swings again at you with a super club, but misses again!"
        );
    }

    fn attack_power(&self) -> u32 {
        self.decorated.attack_power().saturating_pow(3)
    }
}

/// Pacifies the wrapped troll entirely.
///
/// # Semantics
///
/// - `attack` does NOT forward: the troll makes a peaceful gesture instead
/// - `flee_battle` does NOT forward: the troll leaves immediately
/// - `attack_power` is zero, discarding the wrapped power
pub struct PeacefulTroll {
    // Held for the wrapper's lifetime, never forwarded to
    _decorated: Box<dyn Troll>,
}

impl PeacefulTroll {
    /// Creates a peaceful troll wrapping the given combatant.
    pub fn new(decorated: Box<dyn Troll>) -> Self {
        Self {
            _decorated: decorated,
        }
    }
}

impl Troll for PeacefulTroll {
    fn attack(&self) {
        tracing::info!("The troll waves at you with an awkward smile.");
    }

    fn flee_battle(&self) {
        tracing::info!("The troll wanders off without a fight!");
    }

    fn attack_power(&self) -> u32 {
        0
    }
}
