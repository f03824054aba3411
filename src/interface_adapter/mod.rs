pub mod controller;
pub mod port;
