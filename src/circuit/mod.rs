//! Reference circuit builder and simulator.
//!
//! Any circuit source works with the estimator as long as it yields
//! `Signal` descriptors and a `Simulator`; this module provides a minimal
//! combinational netlist for demos and tests.

pub mod builder;
pub mod simulator;

// Re-export main types
pub use builder::{eight_bit_adder, Assignment, Circuit, CircuitBuilder, Expr};
pub use simulator::NetlistSimulator;
