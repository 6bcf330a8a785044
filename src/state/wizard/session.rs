//! Keyboard focus over the wizard's fields and buttons

use super::{step_fields, RentalWizard, WizardField, WizardStep, WizardTransition, PAYMENT_METHODS};

/// Buttons below the step content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardButton {
    Back,
    #[default]
    Continue,
}

impl WizardButton {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Back => Self::Continue,
            Self::Continue => Self::Back,
        };
    }
}

/// A wizard plus the focus state of the view editing it
#[derive(Debug, Clone)]
pub struct WizardSession {
    pub wizard: RentalWizard,
    /// Index into the current step's fields; `fields.len()` is the buttons row
    pub active_field: usize,
    pub selected_button: WizardButton,
}

impl WizardSession {
    pub fn new(wizard: RentalWizard) -> Self {
        let mut session = Self {
            wizard,
            active_field: 0,
            selected_button: WizardButton::default(),
        };
        session.reset_focus();
        session
    }

    fn fields(&self) -> &'static [WizardField] {
        step_fields(self.wizard.step())
    }

    /// Fields plus the buttons row
    pub fn focus_count(&self) -> usize {
        self.fields().len() + 1
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field >= self.fields().len()
    }

    pub fn active_field(&self) -> Option<WizardField> {
        self.fields().get(self.active_field).copied()
    }

    pub fn next_field(&mut self) {
        self.active_field = (self.active_field + 1) % self.focus_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field == 0 {
            self.active_field = self.focus_count() - 1;
        } else {
            self.active_field -= 1;
        }
    }

    /// Focus the first field of the step, or the buttons on a step without fields
    fn reset_focus(&mut self) {
        self.active_field = 0;
        self.selected_button = WizardButton::Continue;
    }

    /// Append typed text to the focused text field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.active_field() else {
            return;
        };
        if field == WizardField::RentalPeriod {
            match c {
                'd' | 'D' => self.wizard.set_field(field, "daily"),
                'w' | 'W' => self.wizard.set_field(field, "weekly"),
                'm' | 'M' => self.wizard.set_field(field, "monthly"),
                _ => {}
            }
            return;
        }
        let mut value = self.wizard.form().text(field).to_string();
        value.push(c);
        self.wizard.set_field(field, value);
    }

    /// Newline in multi-line fields, ignored elsewhere
    pub fn input_newline(&mut self) {
        if let Some(field) = self.active_field().filter(|f| f.is_multiline()) {
            let mut value = self.wizard.form().text(field).to_string();
            value.push('\n');
            self.wizard.set_field(field, value);
        }
    }

    pub fn backspace(&mut self) {
        let Some(field) = self.active_field() else {
            return;
        };
        if field == WizardField::RentalPeriod {
            return;
        }
        let mut value = self.wizard.form().text(field).to_string();
        value.pop();
        self.wizard.set_field(field, value);
    }

    /// Cycle a choice field (period, payment method)
    pub fn cycle_choice(&mut self, forward: bool) {
        match self.active_field() {
            Some(WizardField::RentalPeriod) => {
                let current = self.wizard.form().rental_period;
                let next = if forward { current.next() } else { current.prev() };
                self.wizard.set_field(WizardField::RentalPeriod, next.as_str());
            }
            Some(WizardField::PaymentMethod) => {
                let current = PAYMENT_METHODS
                    .iter()
                    .position(|m| *m == self.wizard.form().payment_method);
                let len = PAYMENT_METHODS.len();
                let index = match (current, forward) {
                    (None, true) => 0,
                    (None, false) => len - 1,
                    (Some(i), true) => (i + 1) % len,
                    (Some(i), false) => (i + len - 1) % len,
                };
                self.wizard
                    .set_field(WizardField::PaymentMethod, PAYMENT_METHODS[index]);
            }
            _ => {
                if self.is_buttons_row_active() {
                    self.selected_button.toggle();
                }
            }
        }
    }

    /// Continue / Submit, refocusing on the new step
    pub fn advance(&mut self) -> WizardTransition {
        let transition = self.wizard.advance();
        if matches!(transition, WizardTransition::Advanced(_)) {
            self.reset_focus();
        }
        transition
    }

    /// Back, refocusing on the new step
    pub fn retreat(&mut self) -> bool {
        let moved = self.wizard.retreat();
        if moved {
            self.reset_focus();
        }
        moved
    }

    /// Press the selected button. `None` when Back was pressed on step 1.
    pub fn press_selected_button(&mut self) -> Option<WizardTransition> {
        match self.selected_button {
            WizardButton::Continue => Some(self.advance()),
            WizardButton::Back => {
                self.retreat();
                None
            }
        }
    }

    pub fn step(&self) -> WizardStep {
        self.wizard.step()
    }
}
