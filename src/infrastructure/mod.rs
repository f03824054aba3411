pub mod input;
pub mod io;
pub mod loops;
pub mod term;
