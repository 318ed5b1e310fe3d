pub mod generate_use_case;
pub mod ports;
