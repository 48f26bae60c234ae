mod rfc4648;
pub(crate) mod substitution;

pub(crate) use rfc4648::*;
