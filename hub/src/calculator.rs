//! Newton's second law calculator
//!
//! Stateless arithmetic plus the inline validation behavior: bad input is
//! surfaced as a message in the warning color, never an error.

use common::theme;

/// F = m·a
pub fn force(mass: f32, acceleration: f32) -> f32 {
    mass * acceleration
}

/// Result of evaluating the calculator's two input fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Force(f32),
    Invalid,
}

impl Outcome {
    /// Display text: the formatted force, or the validation message.
    pub fn text(&self) -> String {
        match self {
            Outcome::Force(f) => format!("Force F = {f:.2} N"),
            Outcome::Invalid => "Please enter valid numbers".to_string(),
        }
    }

    /// Success green, or warning orange for the validation message.
    pub fn color(&self) -> [f32; 4] {
        match self {
            Outcome::Force(_) => theme::GREEN,
            Outcome::Invalid => theme::ORANGE,
        }
    }
}

/// Parse both fields and compute the force. Either field failing to parse
/// yields the validation outcome.
pub fn evaluate(mass_text: &str, accel_text: &str) -> Outcome {
    match (
        mass_text.trim().parse::<f32>(),
        accel_text.trim().parse::<f32>(),
    ) {
        (Ok(mass), Ok(accel)) => Outcome::Force(force(mass, accel)),
        _ => Outcome::Invalid,
    }
}

/// Input fields and last outcome of one calculator card.
#[derive(Debug, Default)]
pub struct CalcState {
    pub mass_input: String,
    pub accel_input: String,
    pub outcome: Option<Outcome>,
}

impl CalcState {
    /// Evaluate the current inputs and return the force if one was computed.
    pub fn evaluate(&mut self) -> Option<f32> {
        let outcome = evaluate(&self.mass_input, &self.accel_input);
        self.outcome = Some(outcome);
        match outcome {
            Outcome::Force(f) => Some(f),
            Outcome::Invalid => None,
        }
    }

    /// Drop the rendered result (the calculator page clears on edit).
    pub fn clear_result(&mut self) {
        self.outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_product() {
        assert_eq!(force(10.0, 2.0), 20.0);
        assert_eq!(force(0.0, 9.81), 0.0);
        assert_eq!(force(-3.0, 2.0), -6.0);
    }

    #[test]
    fn valid_input_formats_two_decimals() {
        let outcome = evaluate("10", "2");
        assert_eq!(outcome, Outcome::Force(20.0));
        assert_eq!(outcome.text(), "Force F = 20.00 N");
        assert_eq!(outcome.color(), theme::GREEN);
    }

    #[test]
    fn whitespace_and_decimals_parse() {
        assert_eq!(evaluate(" 2.5 ", "4"), Outcome::Force(10.0));
    }

    #[test]
    fn non_numeric_input_is_invalid() {
        let outcome = evaluate("abc", "5");
        assert_eq!(outcome, Outcome::Invalid);
        assert_eq!(outcome.text(), "Please enter valid numbers");
        assert_eq!(outcome.color(), theme::ORANGE);
        assert_eq!(evaluate("10", ""), Outcome::Invalid);
        assert_eq!(evaluate("", ""), Outcome::Invalid);
    }

    #[test]
    fn state_tracks_outcome() {
        let mut calc = CalcState {
            mass_input: "10".into(),
            accel_input: "2".into(),
            outcome: None,
        };
        assert_eq!(calc.evaluate(), Some(20.0));
        assert_eq!(calc.outcome, Some(Outcome::Force(20.0)));

        calc.clear_result();
        assert_eq!(calc.outcome, None);

        calc.mass_input = "oops".into();
        assert_eq!(calc.evaluate(), None);
        assert_eq!(calc.outcome, Some(Outcome::Invalid));
    }
}
