pub mod component_category;
