pub mod logo_file;
pub mod source_folder;
pub mod validation_error;
