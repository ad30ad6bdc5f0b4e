// Salary recommendation engine.
// Leaves first: reference lookup → job matching → component calculation → aggregation.
// Everything except `repository`, `store` and `handlers` is pure and synchronous.

pub mod assembler;
pub mod error;
pub mod estimator;
pub mod handlers;
pub mod insights;
pub mod matching;
pub mod policy;
pub mod repository;
pub mod store;

#[cfg(test)]
pub mod test_support;
