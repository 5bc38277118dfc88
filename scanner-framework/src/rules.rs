use crate::context::ScanContext;
use crate::rejection::{Clause, Rejection};
use crate::traits::{BoxedRule, ScanRule};

fn unexpected<Ctx: ScanContext>(clause: Clause, ctx: &Ctx) -> Rejection {
    Rejection::Unexpected {
        clause,
        position: ctx.position(),
        found: ctx.peek(),
    }
}

/// Matches a fixed number of decimal digits with any value.
#[derive(Debug, Clone, Copy)]
pub struct DigitsRule {
    clause: Clause,
    count: usize,
}

impl DigitsRule {
    pub fn new(clause: Clause, count: usize) -> Self {
        Self { clause, count }
    }

    /// `YYYY`: four digits, no range restriction.
    pub fn year() -> Self {
        Self::new(Clause::Year, 4)
    }
}

impl<Ctx> ScanRule<Ctx> for DigitsRule
where
    Ctx: ScanContext,
{
    fn apply(&self, ctx: &mut Ctx) -> Result<(), Rejection> {
        for _ in 0..self.count {
            if ctx.accept_digit().is_none() {
                return Err(unexpected(self.clause, &*ctx));
            }
        }
        Ok(())
    }

    fn clause(&self) -> Clause {
        self.clause
    }
}

/// Matches a single literal byte such as `-`, `T` or `:`.
#[derive(Debug, Clone, Copy)]
pub struct LiteralRule {
    clause: Clause,
    expected: u8,
}

impl LiteralRule {
    pub fn new(clause: Clause, expected: u8) -> Self {
        Self { clause, expected }
    }
}

impl<Ctx> ScanRule<Ctx> for LiteralRule
where
    Ctx: ScanContext,
{
    fn apply(&self, ctx: &mut Ctx) -> Result<(), Rejection> {
        if ctx.accept(self.expected) {
            Ok(())
        } else {
            Err(unexpected(self.clause, &*ctx))
        }
    }

    fn clause(&self) -> Clause {
        self.clause
    }
}

/// Matches two digits whose value `10 * tens + ones` lies in `min..=max`.
#[derive(Debug, Clone, Copy)]
pub struct RangedFieldRule {
    clause: Clause,
    min: u8,
    max: u8,
}

impl RangedFieldRule {
    pub fn new(clause: Clause, min: u8, max: u8) -> Self {
        debug_assert!(min <= max && max <= 99);
        Self { clause, min, max }
    }

    pub fn month() -> Self {
        Self::new(Clause::Month, 1, 12)
    }

    /// Any value up to 31, whatever the month.
    pub fn day() -> Self {
        Self::new(Clause::Day, 1, 31)
    }

    pub fn hour() -> Self {
        Self::new(Clause::Hour, 0, 23)
    }

    pub fn minute() -> Self {
        Self::new(Clause::Minute, 0, 59)
    }

    pub fn second() -> Self {
        Self::new(Clause::Second, 0, 59)
    }

    pub fn zone_hour() -> Self {
        Self::new(Clause::TimeZoneHour, 0, 23)
    }

    pub fn zone_minute() -> Self {
        Self::new(Clause::TimeZoneMinute, 0, 59)
    }
}

impl<Ctx> ScanRule<Ctx> for RangedFieldRule
where
    Ctx: ScanContext,
{
    fn apply(&self, ctx: &mut Ctx) -> Result<(), Rejection> {
        let position = ctx.position();
        let tens = ctx
            .accept_digit()
            .ok_or_else(|| unexpected(self.clause, &*ctx))?;
        let ones = ctx
            .accept_digit()
            .ok_or_else(|| unexpected(self.clause, &*ctx))?;

        let value = 10 * tens + ones;
        if (self.min..=self.max).contains(&value) {
            Ok(())
        } else {
            Err(Rejection::OutOfRange {
                clause: self.clause,
                position,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    fn clause(&self) -> Clause {
        self.clause
    }
}

/// Matches the time zone designator: `Z`, `+hh:mm` or `-hh:mm`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TzdRule;

impl<Ctx> ScanRule<Ctx> for TzdRule
where
    Ctx: ScanContext,
{
    fn apply(&self, ctx: &mut Ctx) -> Result<(), Rejection> {
        match ctx.peek() {
            Some(b'Z') => {
                ctx.advance();
                Ok(())
            }
            Some(b'+' | b'-') => {
                ctx.advance();
                RangedFieldRule::zone_hour().apply(ctx)?;
                LiteralRule::new(Clause::TimeZoneSeparator, b':').apply(ctx)?;
                RangedFieldRule::zone_minute().apply(ctx)
            }
            _ => Err(unexpected(Clause::TimeZone, &*ctx)),
        }
    }

    fn clause(&self) -> Clause {
        Clause::TimeZone
    }
}

/// Consumes a single `\n` if one is next. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalNewlineRule;

impl<Ctx> ScanRule<Ctx> for OptionalNewlineRule
where
    Ctx: ScanContext,
{
    fn apply(&self, ctx: &mut Ctx) -> Result<(), Rejection> {
        ctx.accept(b'\n');
        Ok(())
    }

    fn clause(&self) -> Clause {
        Clause::Newline
    }
}

/// Succeeds only when the cursor is at the end of the line.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndOfLineRule;

impl<Ctx> ScanRule<Ctx> for EndOfLineRule
where
    Ctx: ScanContext,
{
    fn apply(&self, ctx: &mut Ctx) -> Result<(), Rejection> {
        if ctx.is_eof() {
            Ok(())
        } else {
            Err(unexpected(Clause::EndOfLine, &*ctx))
        }
    }

    fn clause(&self) -> Clause {
        Clause::EndOfLine
    }
}

/// Returns the rule sequence for `YYYY-MM-DDThh:mm:ss(Z|±hh:mm)` with an
/// optional trailing newline and nothing after it.
pub fn date_time_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(DigitsRule::year()),
        Box::new(LiteralRule::new(Clause::DateSeparator, b'-')),
        Box::new(RangedFieldRule::month()),
        Box::new(LiteralRule::new(Clause::DateSeparator, b'-')),
        Box::new(RangedFieldRule::day()),
        Box::new(LiteralRule::new(Clause::TimeDesignator, b'T')),
        Box::new(RangedFieldRule::hour()),
        Box::new(LiteralRule::new(Clause::TimeSeparator, b':')),
        Box::new(RangedFieldRule::minute()),
        Box::new(LiteralRule::new(Clause::TimeSeparator, b':')),
        Box::new(RangedFieldRule::second()),
        Box::new(TzdRule),
        Box::new(OptionalNewlineRule),
        Box::new(EndOfLineRule),
    ]
}
