pub mod input_source;
pub mod logo_overlay;
pub mod product_image;

// --- public re-exports ---
// pub use input_source::logo_file::LogoFile;
// pub use input_source::source_folder::SourceFolder;
// pub use logo_overlay::LogoOverlay;
// pub use product_image::product_spec::ProductSpec;
// pub use product_image::variant_set::create_variants;
