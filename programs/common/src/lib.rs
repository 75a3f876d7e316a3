// common/lib.rs - top-level file

pub mod calendar;
pub mod constants;
pub mod math;
