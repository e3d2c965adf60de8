//! Network existence probes.

mod http_prober;

pub use http_prober::{HttpProber, ProbeError, ProbeMethod, classify_status};
