pub mod constants;
pub mod error;
pub mod props;

/// Generated model family and its base contract.
pub mod model;

pub mod registry;
