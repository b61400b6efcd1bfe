//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read `RwSignal<PortalState>` from context and send user
//! actions through `util::dispatch`. None of them mutate portal state
//! directly.

pub mod connect_button;
pub mod gif_form;
pub mod gif_grid;
pub mod init_panel;
pub mod portal_footer;
pub mod portal_header;
pub mod unavailable_panel;
