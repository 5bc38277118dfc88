pub mod context;
pub mod cursor;
pub mod rejection;
pub mod rules;
pub mod traits;
pub mod validator;

pub use common_framework::Position;
pub use context::{DefaultContext, ScanContext};
pub use cursor::Cursor;
pub use rejection::{Clause, Rejection};
pub use rules::{
    date_time_rules, DigitsRule, EndOfLineRule, LiteralRule, OptionalNewlineRule, RangedFieldRule,
    TzdRule,
};
pub use traits::{BoxedRule, ScanRule};
pub use validator::{is_valid_date_time, Validator};
