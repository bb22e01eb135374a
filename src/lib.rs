pub mod lookup;
pub mod schedule;
pub mod time;
