pub mod output_layout;
pub mod png_writer;
pub mod product_spec;
pub mod variant_set;
