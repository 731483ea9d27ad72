pub mod monthly;
pub mod ui;
