pub mod a001_component;
pub mod common;
