//! Individual mapping checks, run in a fixed order by `validate_mapping`.

pub(crate) mod identifiers;
pub(crate) mod overlap;
pub(crate) mod required;
pub(crate) mod source;
