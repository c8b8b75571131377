pub mod fixture_params;
pub mod error;

pub mod py_random;
pub mod scramble_table;
pub mod fixtures;
pub mod fixture_io;

pub mod logging;
