pub mod category_page;

pub use category_page::ComponentCategoryPage;
