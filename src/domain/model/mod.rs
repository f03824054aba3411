pub mod autocomplete;
pub mod history;
pub mod status_line;

pub use autocomplete::Autocomplete;
pub use history::History;
pub use status_line::StatusLine;
