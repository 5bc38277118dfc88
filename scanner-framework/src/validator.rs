use crate::context::DefaultContext;
use crate::cursor::Cursor;
use crate::rejection::Rejection;
use crate::rules::date_time_rules;
use crate::traits::{BoxedRule, ScanRule};
use std::sync::OnceLock;

/// Applies grammar rules in order over a single line.
///
/// Each rule commits whatever it consumes. The first rule that fails rejects
/// the whole line and the remaining rules are not tried.
pub struct Validator {
    rules: Vec<BoxedRule>,
}

impl Validator {
    /// Creates a validator for the ISO 8601 date-time profile.
    pub fn new() -> Self {
        Self::with_rules(date_time_rules())
    }

    /// Creates a validator with a custom rule sequence.
    pub fn with_rules(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// Returns the number of rules applied per line.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Checks `line`, reporting which clause failed.
    pub fn check(&self, line: &[u8]) -> Result<(), Rejection> {
        self.check_context(&mut DefaultContext::new(line))
    }

    /// Checks the first `length` bytes of `line`.
    pub fn check_prefix(&self, line: &[u8], length: usize) -> Result<(), Rejection> {
        self.check_context(&mut DefaultContext::from(Cursor::with_length(line, length)))
    }

    /// Returns true if `line` is a valid date-time.
    pub fn is_valid(&self, line: &[u8]) -> bool {
        self.check(line).is_ok()
    }

    fn check_context(&self, ctx: &mut DefaultContext<'_>) -> Result<(), Rejection> {
        for rule in &self.rules {
            rule.apply(ctx)?;
        }
        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// Returns true if the first `length` bytes of `line` form a valid
/// `YYYY-MM-DDThh:mm:ss(Z|±hh:mm)` date-time, optionally followed by one `\n`.
///
/// Every failure is reported the same way; use [`Validator::check`] to learn
/// which clause failed.
pub fn is_valid_date_time(line: &[u8], length: usize) -> bool {
    static VALIDATOR: OnceLock<Validator> = OnceLock::new();
    VALIDATOR
        .get_or_init(Validator::new)
        .check_prefix(line, length)
        .is_ok()
}
