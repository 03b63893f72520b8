pub mod a001_component;
