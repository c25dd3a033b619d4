//! Domain Port Interfaces
//!
//! Contracts the surrounding container implements so the engine can inspect
//! its state. Binding and autowiring live next to the argument resolver in
//! `argwire-engine`; this module only holds what conditions need.

/// Container state consulted by conditions
pub mod condition;

pub use condition::ConditionContext;
