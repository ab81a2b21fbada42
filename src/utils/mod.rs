pub mod file_magic;
pub mod file_reader;
pub mod id;
pub mod parameter_error_handler;
pub mod validate;

pub use file_magic::validate_magic_bytes;
pub use id::{new_id, now_millis};
pub use parameter_error_handler::json_error_handler;
