pub mod json_file;
pub mod traits;
