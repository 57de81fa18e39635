//! Signal descriptors handed over by a circuit builder.
//!
//! A descriptor is the only thing the estimator knows about circuit
//! topology: a name, a bit width, a role and whether the signal is a
//! hard-wired constant.

use crate::utils::config::MAX_SIGNAL_WIDTH;
use crate::utils::error::SignalError;
use serde::{Deserialize, Serialize};

/// Role of a signal within its circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalRole {
    /// Driven by the stimulus each cycle
    Input,
    /// Observable circuit result
    Output,
    /// Intermediate wire
    Internal,
}

/// A named, fixed-width signal
///
/// **Public** - produced by circuit builders, consumed by the estimator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    /// Signal name (unnamed signals are never analyzed)
    #[serde(default)]
    pub name: Option<String>,

    /// Bit width, 1..=MAX_SIGNAL_WIDTH
    pub width: u32,

    /// Input, output or internal
    pub role: SignalRole,

    /// Hard-wired constant (never analyzed)
    #[serde(default)]
    pub constant: bool,
}

impl Signal {
    /// Create a signal descriptor, validating its width
    ///
    /// **Public** - general constructor
    pub fn new(
        name: Option<String>,
        width: u32,
        role: SignalRole,
        constant: bool,
    ) -> Result<Self, SignalError> {
        let signal = Self {
            name,
            width,
            role,
            constant,
        };
        signal.validate()?;
        Ok(signal)
    }

    pub fn input(name: &str, width: u32) -> Result<Self, SignalError> {
        Self::new(Some(name.to_string()), width, SignalRole::Input, false)
    }

    pub fn output(name: &str, width: u32) -> Result<Self, SignalError> {
        Self::new(Some(name.to_string()), width, SignalRole::Output, false)
    }

    pub fn internal(name: &str, width: u32) -> Result<Self, SignalError> {
        Self::new(Some(name.to_string()), width, SignalRole::Internal, false)
    }

    /// Create a constant signal; `name` may be omitted
    pub fn constant(name: Option<&str>, width: u32) -> Result<Self, SignalError> {
        Self::new(name.map(str::to_string), width, SignalRole::Internal, true)
    }

    /// Check the width bound
    ///
    /// Descriptors deserialized from files bypass the constructors, so
    /// loaders call this explicitly.
    pub fn validate(&self) -> Result<(), SignalError> {
        if self.width == 0 || self.width > MAX_SIGNAL_WIDTH {
            return Err(SignalError::InvalidWidth {
                name: self.display_name().to_string(),
                width: self.width,
                max: MAX_SIGNAL_WIDTH,
            });
        }
        Ok(())
    }

    /// Whether this signal takes part in toggle counting
    ///
    /// Constants never toggle and unnamed signals cannot be reported.
    pub fn is_eligible(&self) -> bool {
        !self.constant && self.name.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// Bit mask covering `width` bits
    pub fn mask(&self) -> u128 {
        width_mask(self.width)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

/// Bit mask with the low `width` bits set
pub fn width_mask(width: u32) -> u128 {
    if width >= u128::BITS {
        u128::MAX
    } else {
        (1u128 << width) - 1
    }
}
