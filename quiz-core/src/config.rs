//! Quiz configuration and setup-input clamping.
//!
//! The difficulty level is typed free-form, so `LevelField` tolerates
//! transient states (empty, or below the minimum) while editing. Values
//! above the maximum are never representable, not even mid-keystroke. The
//! question count comes from a bounded discrete control and needs no
//! clamping beyond its range.

use crate::subject::Subject;

/// Minimum difficulty level.
pub const LEVEL_MIN: u16 = 1;
/// Maximum difficulty level.
pub const LEVEL_MAX: u16 = 1000;
/// Step size of the level increment/decrement controls.
pub const LEVEL_STEP: u16 = 50;

/// Minimum question count.
pub const COUNT_MIN: u8 = 10;
/// Maximum question count.
pub const COUNT_MAX: u8 = 50;

/// Immutable configuration for one quiz run.
///
/// Construction clamps both numeric fields, so a `QuizConfig` always holds
/// in-range values regardless of what the setup screen was displaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    pub subject: Subject,
    pub level: u16,
    pub question_count: u8,
}

impl QuizConfig {
    /// Create a config, clamping `level` into [1,1000] and `question_count`
    /// into [10,50].
    pub fn new(subject: Subject, level: u16, question_count: u8) -> Self {
        Self {
            subject,
            level: level.clamp(LEVEL_MIN, LEVEL_MAX),
            question_count: question_count.clamp(COUNT_MIN, COUNT_MAX),
        }
    }
}

/// Free-form numeric input for the difficulty level.
///
/// `None` means the field is empty (the user deleted everything). Stored
/// values never exceed [`LEVEL_MAX`]; values below [`LEVEL_MIN`] are allowed
/// while typing and only clamped on [`LevelField::blur`] or
/// [`LevelField::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelField {
    value: Option<u16>,
}

impl Default for LevelField {
    fn default() -> Self {
        Self { value: Some(500) }
    }
}

impl LevelField {
    /// Create a field holding the given value, clamped high.
    pub fn new(value: u16) -> Self {
        Self {
            value: Some(value.min(LEVEL_MAX)),
        }
    }

    /// Current display value, or `None` when the field is empty.
    pub fn value(&self) -> Option<u16> {
        self.value
    }

    /// Append a typed digit. Non-digits are ignored. The result is clamped
    /// to [`LEVEL_MAX`] immediately so the field can never display more
    /// than 1000, even transiently.
    pub fn type_char(&mut self, c: char) {
        let Some(digit) = c.to_digit(10) else {
            return;
        };
        let current = u32::from(self.value.unwrap_or(0));
        let next = current * 10 + digit;
        self.value = Some(next.min(u32::from(LEVEL_MAX)) as u16);
    }

    /// Delete the last digit. Deleting the only digit empties the field.
    pub fn backspace(&mut self) {
        self.value = match self.value {
            Some(v) if v >= 10 => Some(v / 10),
            _ => None,
        };
    }

    /// Clamp low values when focus leaves the field.
    pub fn blur(&mut self) {
        self.value = Some(self.commit());
    }

    /// Adjust by one step of [`LEVEL_STEP`], clamped into range. An empty
    /// field steps from zero.
    pub fn step(&mut self, up: bool) {
        let current = self.value.unwrap_or(0);
        let next = if up {
            current.saturating_add(LEVEL_STEP).min(LEVEL_MAX)
        } else {
            current.saturating_sub(LEVEL_STEP).max(LEVEL_MIN)
        };
        self.value = Some(next.max(LEVEL_MIN));
    }

    /// Final clamp applied at quiz start, regardless of the field's
    /// transient display state.
    pub fn commit(&self) -> u16 {
        self.value.unwrap_or(0).clamp(LEVEL_MIN, LEVEL_MAX)
    }
}

/// Bounded discrete selector for the question count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountSelector {
    value: u8,
}

impl Default for CountSelector {
    fn default() -> Self {
        Self { value: COUNT_MIN }
    }
}

impl CountSelector {
    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1).min(COUNT_MAX);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1).max(COUNT_MIN);
    }

    /// Position within [10,50] as a fraction, for slider rendering.
    pub fn fraction(&self) -> f64 {
        f64::from(self.value - COUNT_MIN) / f64::from(COUNT_MAX - COUNT_MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_clamps_level() {
        let config = QuizConfig::new(Subject::Science, 0, 10);
        assert_eq!(config.level, LEVEL_MIN);
        let config = QuizConfig::new(Subject::Science, 5000, 10);
        assert_eq!(config.level, LEVEL_MAX);
    }

    #[test]
    fn test_config_clamps_count() {
        let config = QuizConfig::new(Subject::History, 500, 3);
        assert_eq!(config.question_count, COUNT_MIN);
        let config = QuizConfig::new(Subject::History, 500, 200);
        assert_eq!(config.question_count, COUNT_MAX);
    }

    #[test]
    fn test_typing_clamps_high_immediately() {
        let mut field = LevelField::new(500);
        field.type_char('0'); // 5000 -> clamped
        assert_eq!(field.value(), Some(1000));
    }

    #[test]
    fn test_typing_tolerates_low_values() {
        let mut field = LevelField::new(500);
        field.backspace();
        field.backspace();
        field.backspace();
        assert_eq!(field.value(), None);
        field.type_char('7');
        // 7 is below nothing; a single leading digit stays as typed
        assert_eq!(field.value(), Some(7));
    }

    #[test]
    fn test_non_digit_ignored() {
        let mut field = LevelField::new(42);
        field.type_char('x');
        assert_eq!(field.value(), Some(42));
    }

    #[test]
    fn test_blur_clamps_low() {
        let mut field = LevelField::new(500);
        for _ in 0..3 {
            field.backspace();
        }
        field.blur();
        assert_eq!(field.value(), Some(LEVEL_MIN));
    }

    #[test]
    fn test_commit_always_in_range() {
        let mut field = LevelField::new(500);
        for _ in 0..3 {
            field.backspace();
        }
        assert_eq!(field.commit(), LEVEL_MIN);

        let field = LevelField::new(1000);
        assert_eq!(field.commit(), LEVEL_MAX);
    }

    #[test]
    fn test_step_clamps_both_ends() {
        let mut field = LevelField::new(980);
        field.step(true);
        assert_eq!(field.value(), Some(LEVEL_MAX));

        let mut field = LevelField::new(30);
        field.step(false);
        assert_eq!(field.value(), Some(LEVEL_MIN));
    }

    #[test]
    fn test_step_from_empty() {
        let mut field = LevelField::new(5);
        field.backspace();
        assert_eq!(field.value(), None);
        field.step(true);
        assert_eq!(field.value(), Some(50));
    }

    #[test]
    fn test_count_selector_bounds() {
        let mut count = CountSelector::default();
        count.decrement();
        assert_eq!(count.value(), COUNT_MIN);
        for _ in 0..100 {
            count.increment();
        }
        assert_eq!(count.value(), COUNT_MAX);
    }

    #[test]
    fn test_count_fraction() {
        let mut count = CountSelector::default();
        assert_eq!(count.fraction(), 0.0);
        for _ in 0..40 {
            count.increment();
        }
        assert_eq!(count.fraction(), 1.0);
    }
}
