use pp_assign::AssignError;
use pp_core::PpError;
use pp_placement::PlacementError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid planning parameters: {0}")]
    Config(#[from] PpError),

    #[error("no historical orders supplied")]
    NoOrders,

    #[error("placement failed: {0}")]
    Placement(#[from] PlacementError),

    #[error("assignment failed: {0}")]
    Assign(#[from] AssignError),
}

pub type PlanResult<T> = Result<T, PlanError>;
