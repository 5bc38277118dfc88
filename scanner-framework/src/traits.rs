use crate::context::{DefaultContext, ScanContext};
use crate::rejection::{Clause, Rejection};

/// A grammar rule that operates on a context.
///
/// Rules are generic over the context so the same rule set can drive any
/// [`ScanContext`]. A rule consumes exactly the bytes it accepts. On failure
/// the cursor is left wherever the rule stopped; the caller abandons the line,
/// so nothing is ever re-scanned.
pub trait ScanRule<Ctx>
where
    Ctx: ScanContext,
{
    /// Attempts to match this clause at the cursor.
    fn apply(&self, ctx: &mut Ctx) -> Result<(), Rejection>;

    /// Returns the clause this rule reports on failure.
    fn clause(&self) -> Clause;
}

/// A rule boxed for use by [`Validator`](crate::Validator) with lines of any
/// lifetime.
pub type BoxedRule = Box<dyn for<'a> ScanRule<DefaultContext<'a>> + Send + Sync>;
