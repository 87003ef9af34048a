pub mod help;
pub mod messages;
pub mod units;
pub mod usage;
