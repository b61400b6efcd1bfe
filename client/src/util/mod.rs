//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dispatch` is the only bridge from event handlers to the portal
//! controller, so components stay free of browser and async plumbing.

pub mod dispatch;
