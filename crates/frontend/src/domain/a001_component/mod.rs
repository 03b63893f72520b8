pub mod api;
pub mod mock_data;
pub mod ui;
