// ============================================================================
// Calculator
// Input/operator state machine and numeric evaluation
// ============================================================================

use crate::domain::{CalculatorState, DisplaySize, HistoryEntry, Operand, Operator, Settings};
use crate::input::{action_for_key, Action, ActionResult};
use crate::interfaces::{CalculatorEvent, EventHandler};
use crate::numeric::{format_number, is_error_token, parse_entry};
use std::sync::Arc;

/// Longest entry text accepted from digit keys.
pub const MAX_ENTRY_LEN: usize = 24;

/// Keypad calculator.
///
/// Every operation runs to completion on `&mut self`; the only side channel is
/// the [`EventHandler`], which receives history records and memory/settings
/// changes.
pub struct Calculator {
    /// Operands, pending operator, repeat memo and memory register
    state: CalculatorState,

    /// Rounding applied to every computed value
    settings: Settings,

    /// Text currently shown on the display
    display: String,

    /// Collaborator receiving history and state-change events
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a calculator showing `0`
    pub fn new(settings: Settings, event_handler: Arc<dyn EventHandler>) -> Self {
        Self::from_state(CalculatorState::new(), settings, event_handler)
    }

    /// Resume from a previously captured state.
    ///
    /// The display shows whichever operand entry is currently targeted.
    pub fn from_state(
        state: CalculatorState,
        settings: Settings,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        let display = match (&state.operator, &state.second, &state.first) {
            (Some(_), Some(second), _) => second.clone(),
            (_, _, Some(first)) => first.text(),
            _ => "0".to_string(),
        };

        Self {
            state,
            settings,
            display,
            event_handler,
        }
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Run one user action
    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(%action, display = %self.display, "dispatch");

        match action {
            Action::Digit(digit) => self.append_digit(digit),
            Action::Dot => self.add_dot(),
            Action::Clear => self.clear_all(),
            Action::Delete => self.delete_last(),
            Action::Invert => self.invert_sign(),
            Action::Percent => self.percent(),
            Action::Operator(op) => self.choose_operator(op),
            Action::Equals => self.equals(),
            Action::MemoryClear => self.memory_clear(),
            Action::MemoryRecall => self.memory_recall(),
            Action::MemoryAdd => self.memory_add(),
            Action::MemorySubtract => self.memory_subtract(),
        }
    }

    /// Decode an operation name (and optional argument) and run it
    pub fn dispatch_named(&mut self, name: &str, arg: Option<&str>) -> ActionResult<()> {
        let action = Action::from_name(name, arg)?;
        self.dispatch(action);
        Ok(())
    }

    /// Run the action bound to a keyboard key; returns `false` for unmapped keys
    pub fn dispatch_key(&mut self, key: &str) -> bool {
        match action_for_key(key) {
            Some(action) => {
                self.dispatch(action);
                true
            },
            None => false,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Text to render
    pub fn display_text(&self) -> &str {
        &self.display
    }

    /// Font-size class for the current display text
    pub fn display_size(&self) -> DisplaySize {
        DisplaySize::for_text(&self.display)
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn memory(&self) -> f64 {
        self.state.memory
    }

    /// Replace the rounding settings.
    ///
    /// Takes effect on the next rounding; values already on the display are
    /// left as they are.
    pub fn set_settings(&mut self, settings: Settings) -> Result<(), String> {
        settings.validate()?;
        self.settings = settings;
        tracing::debug!(?settings, "settings changed");
        self.event_handler
            .on_event(CalculatorEvent::SettingsChanged { settings });
        Ok(())
    }

    /// Flip between standard and bankers' rounding
    pub fn toggle_rounding(&mut self) {
        let settings = self
            .settings
            .with_bankers_rounding(!self.settings.round_bankers);
        self.settings = settings;
        tracing::debug!(?settings, "rounding toggled");
        self.event_handler
            .on_event(CalculatorEvent::SettingsChanged { settings });
    }

    // ========================================================================
    // Entry editing
    // ========================================================================

    /// Append a digit (`0..=9`) to the current entry
    pub fn append_digit(&mut self, digit: u8) {
        if digit > 9 {
            tracing::warn!(digit, "ignoring invalid digit");
            return;
        }
        if self.shows_error() {
            self.clear_all();
        }

        let d = char::from(b'0' + digit);
        let mut entry = self.current_entry();

        if self.state.overwrite {
            entry = d.to_string();
            self.state.overwrite = false;
        } else if entry == "0" {
            entry = d.to_string();
        } else {
            entry.push(d);
        }

        if entry.len() > MAX_ENTRY_LEN {
            tracing::trace!(len = entry.len(), "entry too long, digit ignored");
            return;
        }

        self.set_entry(entry);
    }

    /// Add a decimal point unless the entry already has one
    pub fn add_dot(&mut self) {
        if self.shows_error() {
            self.clear_all();
        }

        let mut entry = self.current_entry();

        if self.state.overwrite {
            entry = "0.".to_string();
            self.state.overwrite = false;
        } else if !entry.contains('.') {
            entry.push('.');
        }

        self.set_entry(entry);
    }

    /// Toggle a leading minus sign
    pub fn invert_sign(&mut self) {
        let entry = self.current_entry();
        if entry == "0" || is_error_token(&entry) {
            return;
        }

        let toggled = match entry.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", entry),
        };
        self.set_entry(toggled);
    }

    /// Backspace
    pub fn delete_last(&mut self) {
        let mut entry = self.current_entry();

        if self.state.overwrite {
            self.set_entry("0".to_string());
            return;
        }
        if is_error_token(&entry) {
            self.clear_all();
            return;
        }

        let len = entry.chars().count();
        if len <= 1 || (len == 2 && entry.starts_with('-')) {
            entry = "0".to_string();
        } else {
            entry.pop();
        }
        self.set_entry(entry);
    }

    /// Percent.
    ///
    /// With a pending operation the right operand becomes that percentage of
    /// the left operand (`200 + 10%` adds 20). On its own the entry is divided
    /// by 100.
    pub fn percent(&mut self) {
        if self.shows_error() {
            return;
        }

        let pending_second = self.state.operator.and(self.state.second.clone());

        if let Some(second) = pending_second {
            let a = match &self.state.first {
                Some(first) => first.value(),
                None => parse_entry(&self.display),
            };
            let b = parse_entry(&second);
            let text = format_number(self.settings.round(a * b / 100.0));
            self.state.second = Some(text.clone());
            self.show(text);
        } else {
            let current = parse_entry(&self.current_entry());
            let text = format_number(self.settings.round(current / 100.0));
            self.set_entry(text);
        }
    }

    // ========================================================================
    // Operators and evaluation
    // ========================================================================

    /// Apply `op` to `a` and `b`, rounded with the current settings.
    ///
    /// Division by zero gives positive infinity.
    pub fn compute(&self, a: f64, op: Operator, b: f64) -> f64 {
        self.settings.round(op.apply(a, b))
    }

    /// Select the next operation, evaluating a pending one first
    pub fn choose_operator(&mut self, op: Operator) {
        if self.shows_error() {
            self.clear_all();
        }

        let pending = match self.state.operator {
            Some(pending_op) => self.state.second.take().map(|second| (pending_op, second)),
            None => None,
        };

        if let Some((pending_op, second)) = pending {
            let a = self.state.first.as_ref().map_or(0.0, Operand::value);
            let b = parse_entry(&second);
            let result = self.compute(a, pending_op, b);

            tracing::debug!(a, operator = %pending_op, b, result, "chained evaluation");

            self.state.first = Some(Operand::Value(result));
            self.state.last_operand = Some(b);
            self.show(format_number(result));
        } else if self.state.first.is_none() {
            self.state.first = Some(Operand::Value(parse_entry(&self.display)));
        }

        self.state.first = self.state.first.take().map(Operand::commit);
        self.state.operator = Some(op);
        self.state.overwrite = true;
    }

    /// Evaluate the pending operation, or replay the last one
    pub fn equals(&mut self) {
        let Some(op) = self.state.operator else {
            self.repeat_last();
            return;
        };

        let a = match &self.state.first {
            Some(first) => first.value(),
            None => parse_entry(&self.display),
        };
        let b = match &self.state.second {
            Some(second) => parse_entry(second),
            None => self.state.last_operand.unwrap_or(a),
        };

        let result = self.compute(a, op, b);
        let text = format_number(result);

        tracing::debug!(a, operator = %op, b, result, "equals");

        self.show(text.clone());
        self.state.first = Some(Operand::Value(result));
        self.state.operator = None;
        self.state.second = None;
        self.state.last_operator = Some(op);
        self.state.last_operand = Some(b);
        self.state.overwrite = true;

        self.record_history(a, op, b, text);
    }

    /// Repeat-equals: re-apply the last operator and operand to `first`
    fn repeat_last(&mut self) {
        let replay = match (
            &self.state.first,
            self.state.last_operator,
            self.state.last_operand,
        ) {
            (Some(first), Some(op), Some(b)) => Some((first.value(), op, b)),
            _ => None,
        };

        let Some((a, op, b)) = replay else {
            return;
        };

        let result = self.compute(a, op, b);
        let text = format_number(result);

        tracing::debug!(a, operator = %op, b, result, "repeat equals");

        self.state.first = Some(Operand::Value(result));
        self.show(text.clone());
        self.state.overwrite = true;

        self.record_history(a, op, b, text);
    }

    // ========================================================================
    // Memory register
    // ========================================================================

    pub fn memory_clear(&mut self) {
        self.state.memory = 0.0;
        self.memory_changed();
    }

    /// Write the memory value into the targeted operand
    pub fn memory_recall(&mut self) {
        let text = format_number(self.settings.round(self.state.memory));
        self.set_entry(text);
        self.state.overwrite = true;
    }

    pub fn memory_add(&mut self) {
        self.accumulate_memory(1.0);
    }

    pub fn memory_subtract(&mut self) {
        self.accumulate_memory(-1.0);
    }

    fn accumulate_memory(&mut self, sign: f64) {
        let value = parse_entry(&self.current_entry());
        if !value.is_finite() {
            tracing::warn!(entry = %self.display, "ignoring non-numeric entry for memory");
            return;
        }
        self.state.memory = self.settings.round(self.state.memory + sign * value);
        self.memory_changed();
    }

    fn memory_changed(&self) {
        tracing::debug!(memory = self.state.memory, "memory changed");
        self.event_handler.on_event(CalculatorEvent::MemoryChanged {
            value: self.state.memory,
        });
    }

    // ========================================================================
    // Reset and history reuse
    // ========================================================================

    /// Reset operands and operator; the memory register is kept
    pub fn clear_all(&mut self) {
        self.state.reset();
        self.show("0".to_string());
    }

    /// Load a previous result (e.g. picked from history) as the left operand
    pub fn reuse_result(&mut self, result: &str) {
        self.show(result.to_string());
        self.state.first = Some(Operand::Value(parse_entry(result)));
        self.state.operator = None;
        self.state.second = None;
        self.state.overwrite = true;
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    /// Text of the operand currently being edited.
    ///
    /// With an operator pending, an absent right operand is materialised as `"0"`.
    fn current_entry(&mut self) -> String {
        if self.state.operator.is_some() {
            return self
                .state
                .second
                .get_or_insert_with(|| "0".to_string())
                .clone();
        }

        match &self.state.first {
            Some(first) => first.text(),
            None if self.display.is_empty() => "0".to_string(),
            None => self.display.clone(),
        }
    }

    /// Store the edited text in the targeted operand and display it
    fn set_entry(&mut self, text: String) {
        if self.state.operator.is_some() {
            self.state.second = Some(text.clone());
        } else {
            self.state.first = Some(Operand::Entry(text.clone()));
        }
        self.show(text);
    }

    fn show(&mut self, text: String) {
        self.display = text;
    }

    fn shows_error(&self) -> bool {
        is_error_token(&self.display)
    }

    fn record_history(&self, a: f64, op: Operator, b: f64, result: String) {
        let entry = HistoryEntry::new(
            format!("{} {} {}", format_number(a), op, format_number(b)),
            result,
        );
        self.event_handler
            .on_event(CalculatorEvent::HistoryAppended { entry });
    }
}
