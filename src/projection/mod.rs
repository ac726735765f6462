//! Compounding projections for savings, investment and retirement balances

mod state;
mod engine;
mod series;
pub mod discount;

pub use state::ProjectionState;
pub use engine::{compute_compound_projection, ProjectionParameters};
pub use series::{ProjectionPoint, ProjectionResult, ProjectionSummary};
pub use discount::PurchasingPower;
