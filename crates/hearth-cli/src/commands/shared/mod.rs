pub mod criteria;
pub mod limit;
pub mod summary;
