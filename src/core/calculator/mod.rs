pub mod actual;
pub mod breaks;
pub mod summary;
pub mod target;
