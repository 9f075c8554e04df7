pub mod holiday;
pub mod schedule;

mod month;
pub use month::*;
mod date;
pub use date::*;
mod week_day;
pub use week_day::*;
mod year;
pub use year::*;
