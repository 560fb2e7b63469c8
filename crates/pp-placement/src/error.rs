use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("cannot place facilities without any orders")]
    NoOrders,

    #[error("number of facilities to place must be at least 1")]
    ZeroFacilities,
}

pub type PlacementResult<T> = Result<T, PlacementError>;
