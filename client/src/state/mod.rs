//! Client-side view state.
//!
//! DESIGN
//! ======
//! State is split by concern (`wallet`, `gifs`) and composed into
//! `PortalState`, which the page reads through a single signal.

pub mod gifs;
pub mod portal;
pub mod wallet;
