pub mod chart;
pub mod event;
pub mod shift;
