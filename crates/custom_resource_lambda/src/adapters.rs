pub mod callback;
pub mod context;
pub mod invoke;
