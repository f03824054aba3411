pub mod edit_buffer;
pub mod term_size;

pub use edit_buffer::EditBuffer;
pub use term_size::TermSize;
