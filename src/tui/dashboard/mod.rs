//! Interactive group dashboard
//!
//! Split into a pure model (`model`) holding all filter, pagination, and
//! fetch-ordering logic, and an iocraft view (`view`) that renders it and
//! owns the async side effects.

pub mod model;
pub mod view;

pub use model::{
    DashboardAction, DashboardState, DashboardViewModel, LoadPhase, compute_dashboard_view_model,
    current_view_link, key_to_action, reduce_dashboard_state,
};
pub use view::{Dashboard, DashboardProps};
