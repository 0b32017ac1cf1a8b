pub mod interface;

pub use interface::{discover_interface_address, select_address};
