//! Composable troll combatants for turn-based encounters.
//!
//! This library models a troll's battle behavior as a small capability
//! trait and a set of wrappers that change that behavior at runtime
//! without touching the wrapped code.
//!
//! - **One trait**: every combatant exposes `attack`, `flee_battle`, and
//!   `attack_power`
//! - **Exclusive wrapping**: a wrapper owns its inner combatant, so chains
//!   are always linear (no cycles, no sharing)
//! - **Notifications over return values**: `attack` and `flee_battle`
//!   emit `tracing` events instead of returning data
//!
//! # Architecture
//!
//! - [`Troll`]: core trait for all combatants
//! - [`SimpleTroll`]: bare-handed baseline
//! - Wrapper variants: [`ClubbedTroll`], [`SuperTroll`], [`PeacefulTroll`]

pub mod builder;
pub mod decorator;
pub mod simple;
pub mod troll;

// Re-export core types for ergonomic API
pub use decorator::{ClubbedTroll, PeacefulTroll, SuperTroll};
pub use simple::SimpleTroll;
pub use troll::Troll;
