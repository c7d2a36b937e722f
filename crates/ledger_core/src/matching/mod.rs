pub mod algorithm;
pub mod first_available;

pub use algorithm::MatchingAlgorithm;
pub use first_available::FirstAvailable;
