//! Toggle Power
//!
//! Estimates the dynamic switching power of a digital circuit from a
//! cycle-by-cycle record of its signal values.
//!
//! The pipeline has three stages:
//! - [`toggle`] counts per-bit transitions in each signal's trace
//! - [`power`] converts toggle counts into energy and average power
//! - [`estimator`] drives a [`Simulator`] with a lazy stimulus source and
//!   runs both stages over the captured trace
//!
//! ```ignore
//! use toggle_power::circuit::{eight_bit_adder, NetlistSimulator};
//! use toggle_power::{estimate_power, PowerParams, Stimulus};
//!
//! let circuit = eight_bit_adder()?;
//! let stimuli = [(0, 0), (149, 151)].map(|(a, b)| Stimulus::new().with("A", a).with("B", b));
//! let report = estimate_power(
//!     circuit.signals(),
//!     NetlistSimulator::new(&circuit),
//!     stimuli,
//!     &PowerParams::default(),
//! )?;
//! println!("{}", report.summary());
//! ```

pub mod circuit;
pub mod commands;
pub mod estimator;
pub mod model;
pub mod output;
pub mod parser;
pub mod power;
pub mod toggle;
pub mod utils;

pub use estimator::{analyze_trace, estimate_power, try_estimate_power, Simulator};
pub use model::{PowerReport, Signal, SignalRole, Stimulus, ToggleReport, Trace};
pub use power::PowerParams;
