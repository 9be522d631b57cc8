pub mod dropdown;
pub mod input_buffer;

pub use dropdown::Dropdown;
pub use input_buffer::InputBuffer;
