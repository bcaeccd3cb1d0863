pub mod query;
pub mod simplify;
