//! CLI command implementations.

pub(crate) mod convert;
pub(crate) mod rates;
pub(crate) mod serve;
