// ============================================================================
// Calculator State
// Accumulator, pending operation, repeat-equals memo and memory register
// ============================================================================

use super::{Operand, Operator};

/// Complete mutable state of one calculator instance.
///
/// Entry is routed to `second` while an operator is pending and to `first`
/// otherwise. `last_operand`/`last_operator` only feed repeat-equals and never
/// take part in a chained computation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    /// Left operand, absent until the first entry or commit
    pub first: Option<Operand>,

    /// Pending operation
    pub operator: Option<Operator>,

    /// Right operand text while an operation is pending
    pub second: Option<String>,

    /// Next digit replaces the current entry instead of extending it
    pub overwrite: bool,

    /// Right operand of the last evaluation (repeat-equals)
    pub last_operand: Option<f64>,

    /// Operator of the last evaluation (repeat-equals)
    pub last_operator: Option<Operator>,

    /// Memory register; survives `reset`
    pub memory: f64,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            first: None,
            operator: None,
            second: None,
            overwrite: true,
            last_operand: None,
            last_operator: None,
            memory: 0.0,
        }
    }

    /// Forget operands, pending operation and repeat-equals memo.
    /// The memory register is left untouched.
    pub fn reset(&mut self) {
        self.first = None;
        self.operator = None;
        self.second = None;
        self.overwrite = true;
        self.last_operand = None;
        self.last_operator = None;
    }

    /// Whether an operation is waiting for its right operand.
    #[inline]
    pub fn has_pending_operator(&self) -> bool {
        self.operator.is_some()
    }

    /// Whether repeat-equals has something to replay.
    #[inline]
    pub fn can_repeat(&self) -> bool {
        self.operator.is_none()
            && self.first.is_some()
            && self.last_operand.is_some()
            && self.last_operator.is_some()
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}
