pub mod cloud;
pub mod mvd52;
pub mod run405;
