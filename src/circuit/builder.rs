//! Declare small combinational circuits.
//!
//! A `CircuitBuilder` collects signal declarations and assignments and
//! hands back an immutable `Circuit`. Nothing is registered globally.

use crate::model::{width_mask, Signal, SignalRole};
use crate::utils::error::SignalError;
use std::collections::HashMap;

/// Combinational expression over previously declared signals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Current value of a signal
    Signal(String),
    /// Literal value
    Const(u128),
    /// Sum, wrapping at 128 bits
    Add(Box<Expr>, Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Xor(Box<Expr>, Box<Expr>),
    /// Bitwise complement, truncated to the target width on assignment
    Not(Box<Expr>),
    /// Bits `lo..hi` of the operand, shifted down to bit 0
    Slice { expr: Box<Expr>, lo: u32, hi: u32 },
}

impl Expr {
    pub fn signal(name: &str) -> Self {
        Expr::Signal(name.to_string())
    }

    pub fn add(a: Expr, b: Expr) -> Self {
        Expr::Add(Box::new(a), Box::new(b))
    }

    pub fn and(a: Expr, b: Expr) -> Self {
        Expr::And(Box::new(a), Box::new(b))
    }

    pub fn or(a: Expr, b: Expr) -> Self {
        Expr::Or(Box::new(a), Box::new(b))
    }

    pub fn xor(a: Expr, b: Expr) -> Self {
        Expr::Xor(Box::new(a), Box::new(b))
    }

    pub fn not(a: Expr) -> Self {
        Expr::Not(Box::new(a))
    }

    pub fn slice(expr: Expr, lo: u32, hi: u32) -> Self {
        Expr::Slice {
            expr: Box::new(expr),
            lo,
            hi,
        }
    }

    /// Evaluate against current signal values
    ///
    /// Unknown signals read as zero; `Circuit` construction rejects them.
    pub fn eval(&self, values: &HashMap<String, u128>) -> u128 {
        match self {
            Expr::Signal(name) => values.get(name).copied().unwrap_or(0),
            Expr::Const(value) => *value,
            Expr::Add(a, b) => a.eval(values).wrapping_add(b.eval(values)),
            Expr::And(a, b) => a.eval(values) & b.eval(values),
            Expr::Or(a, b) => a.eval(values) | b.eval(values),
            Expr::Xor(a, b) => a.eval(values) ^ b.eval(values),
            Expr::Not(a) => !a.eval(values),
            Expr::Slice { expr, lo, hi } => {
                let value = expr.eval(values);
                let shifted = value.checked_shr(*lo).unwrap_or(0);
                shifted & width_mask(hi.saturating_sub(*lo))
            }
        }
    }

    fn referenced_signals<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Expr::Signal(name) => out.push(name),
            Expr::Const(_) => {}
            Expr::Add(a, b) | Expr::And(a, b) | Expr::Or(a, b) | Expr::Xor(a, b) => {
                a.referenced_signals(out);
                b.referenced_signals(out);
            }
            Expr::Not(a) | Expr::Slice { expr: a, .. } => a.referenced_signals(out),
        }
    }
}

/// Assignment of an expression to a target signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub target: String,
    pub expr: Expr,
}

/// Immutable circuit description
///
/// **Public** - returned by `CircuitBuilder::build`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circuit {
    signals: Vec<Signal>,
    assignments: Vec<Assignment>,
    constants: Vec<(usize, u128)>,
}

impl Circuit {
    /// Every declared signal, in declaration order
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    /// Assignments in evaluation order
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Look up a signal by name
    pub fn signal(&self, name: &str) -> Option<&Signal> {
        self.signals
            .iter()
            .find(|s| s.name.as_deref() == Some(name))
    }

    /// Inputs that each stimulus record must drive
    pub fn inputs(&self) -> impl Iterator<Item = &Signal> {
        self.signals.iter().filter(|s| s.role == SignalRole::Input)
    }

    /// Values of constant signals, with their descriptors
    pub fn constants(&self) -> impl Iterator<Item = (&Signal, u128)> {
        self.constants
            .iter()
            .map(move |&(index, value)| (&self.signals[index], value))
    }
}

/// Incremental circuit construction
#[derive(Debug, Default)]
pub struct CircuitBuilder {
    signals: Vec<Signal>,
    assignments: Vec<Assignment>,
    constants: Vec<(usize, u128)>,
}

impl CircuitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&mut self, name: &str, width: u32) -> Result<Expr, SignalError> {
        self.declare(Signal::input(name, width)?)
    }

    pub fn internal(&mut self, name: &str, width: u32) -> Result<Expr, SignalError> {
        self.declare(Signal::internal(name, width)?)
    }

    pub fn output(&mut self, name: &str, width: u32) -> Result<Expr, SignalError> {
        self.declare(Signal::output(name, width)?)
    }

    /// Declare a constant signal holding `value`
    ///
    /// Unnamed constants are folded into a literal expression.
    pub fn constant(
        &mut self,
        name: Option<&str>,
        width: u32,
        value: u128,
    ) -> Result<Expr, SignalError> {
        let signal = Signal::constant(name, width)?;
        if value & !signal.mask() != 0 {
            return Err(SignalError::ConstantOutOfRange { value, width });
        }

        if let Some(n) = name {
            self.ensure_unique(n)?;
        }

        let index = self.signals.len();
        self.signals.push(signal);
        self.constants.push((index, value));
        Ok(match name {
            Some(n) => Expr::signal(n),
            None => Expr::Const(value),
        })
    }

    /// Drive `target` with `expr` (combinational, evaluated in order)
    pub fn assign(&mut self, target: &str, expr: Expr) -> Result<(), SignalError> {
        let signal = self
            .find(target)
            .ok_or_else(|| SignalError::UnknownSignal(target.to_string()))?;
        if signal.role == SignalRole::Input || signal.constant {
            return Err(SignalError::NotAssignable(target.to_string()));
        }

        let mut refs = Vec::new();
        expr.referenced_signals(&mut refs);
        if let Some(missing) = refs.into_iter().find(|r| self.find(r).is_none()) {
            return Err(SignalError::UnknownSignal(missing.to_string()));
        }

        self.assignments.push(Assignment {
            target: target.to_string(),
            expr,
        });
        Ok(())
    }

    pub fn build(self) -> Circuit {
        Circuit {
            signals: self.signals,
            assignments: self.assignments,
            constants: self.constants,
        }
    }

    fn declare(&mut self, signal: Signal) -> Result<Expr, SignalError> {
        let name = signal.display_name().to_string();
        self.ensure_unique(&name)?;
        self.signals.push(signal);
        Ok(Expr::Signal(name))
    }

    fn ensure_unique(&self, name: &str) -> Result<(), SignalError> {
        if self.find(name).is_some() {
            return Err(SignalError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    fn find(&self, name: &str) -> Option<&Signal> {
        self.signals
            .iter()
            .find(|s| s.name.as_deref() == Some(name))
    }
}

/// The 8-bit ripple adder used by the demo command
///
/// Inputs `A`, `B` (8 bits); internal 9-bit `result = A + B`;
/// outputs `SUM = result[0..8]` and `CARRY = result[8]`.
pub fn eight_bit_adder() -> Result<Circuit, SignalError> {
    let mut builder = CircuitBuilder::new();

    let a = builder.input("A", 8)?;
    let b = builder.input("B", 8)?;
    builder.internal("result", 9)?;
    builder.output("SUM", 8)?;
    builder.output("CARRY", 1)?;

    builder.assign("result", Expr::add(a, b))?;
    builder.assign("SUM", Expr::slice(Expr::signal("result"), 0, 8))?;
    builder.assign("CARRY", Expr::slice(Expr::signal("result"), 8, 9))?;

    Ok(builder.build())
}
