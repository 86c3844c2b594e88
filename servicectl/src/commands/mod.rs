pub mod control;
pub mod detect;
