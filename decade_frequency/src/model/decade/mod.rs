pub mod decade_range;
pub mod decade_window;
