pub(crate) mod arc;
pub(crate) mod symbol;
