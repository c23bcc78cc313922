pub mod settings;
pub mod vacancy;
