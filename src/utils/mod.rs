// Calendar, time and duration utilities

pub mod calendar;
pub mod duration;
pub mod format;
pub mod time;

pub use calendar::*;
pub use duration::*;
pub use format::*;
pub use time::*;
