pub mod records;

pub use records::{Payload, parse_file, parse_str};
