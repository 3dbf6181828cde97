pub mod candidate;
pub mod match_result;
