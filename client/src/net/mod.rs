//! Networking and external-capability modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `wallet` and `chain` define the seams the portal depends on, `rpc` holds
//! the JSON-RPC codec, `api` talks to the portal server, and `types` defines
//! the shared wire schema. `browser` and `http` bind those seams to the real
//! browser in the hydrate build.

pub mod api;
#[cfg(feature = "hydrate")]
pub mod browser;
pub mod chain;
#[cfg(feature = "hydrate")]
pub mod http;
pub mod rpc;
pub mod types;
pub mod wallet;
