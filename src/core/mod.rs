pub(crate) mod config;
pub(crate) mod metrics;
pub(crate) mod registry;
pub(crate) mod shutdown;
pub(crate) mod state;
pub(crate) mod telemetry;
