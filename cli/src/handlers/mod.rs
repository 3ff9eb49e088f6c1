mod configure;
mod device;
mod table;

pub use configure::handle_configure;
pub use device::DeviceArgs;
pub use table::handle_table;
