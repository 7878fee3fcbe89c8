use crate::domain::input_source::validation_error::ValidationError;
use crate::domain::product_image::output_layout::OutputLayoutError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("入力の検証に失敗しました")]
    Validation(#[from] ValidationError),

    #[error("出力フォルダを準備できませんでした")]
    OutputUnwritable(#[from] OutputLayoutError),
}
