pub mod input_reader;
pub mod key_decoder;
pub mod key_map;
pub mod utf8;

pub use input_reader::{InputReader, KeyCallback};
pub use key_decoder::KeyDecoder;
pub use utf8::Utf8Decoder;
