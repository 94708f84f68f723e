pub mod foraging;
pub mod lifecycle;
pub mod predation;
pub mod stats;
