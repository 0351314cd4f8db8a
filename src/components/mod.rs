pub mod bars;
pub mod toaster;
pub mod ui;
