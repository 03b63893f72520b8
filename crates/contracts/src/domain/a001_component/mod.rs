pub mod aggregate;

pub use aggregate::{Component, ComponentId, Spec};
