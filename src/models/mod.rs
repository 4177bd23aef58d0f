// Core value types
// Built fresh by the caller for every computation and never mutated by the core

pub mod auto_remove;
pub mod month;
pub mod period;
pub mod recurrence;
pub mod time;

pub use auto_remove::*;
pub use month::*;
pub use period::*;
pub use recurrence::*;
pub use time::*;
