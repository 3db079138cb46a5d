pub(crate) mod analysis;
pub(crate) mod errors;
pub(crate) mod handlers;
pub(crate) mod router;
