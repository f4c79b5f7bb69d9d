pub mod trigger;
pub mod worker;
