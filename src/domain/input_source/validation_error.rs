use std::fmt;
// 実行前の入力検証で返すエラー型を定義
// いずれも 1 件も処理しないまま実行を中断する
#[derive(Debug)]
pub enum ValidationError {
    /// デザインフォルダが未指定・存在しない・ディレクトリではない
    MissingFolder(String),
    /// 出力フォルダが指定されていない
    MissingOutput,
    /// デザインフォルダに処理対象の PNG ファイルが 1 件もない
    NoQualifyingFiles(String),
    /// ロゴファイルが指定されたが、ファイルとして存在しない
    InvalidLogo(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFolder(s) => write!(f, "デザインフォルダが無効です: {}", s),
            ValidationError::MissingOutput => write!(f, "出力フォルダが指定されていません。"),
            ValidationError::NoQualifyingFiles(s) => {
                write!(f, "処理対象の PNG ファイルが見つかりませんでした: {}", s)
            }
            ValidationError::InvalidLogo(s) => write!(f, "ロゴファイルが無効です: {}", s),
        }
    }
}

// AppError 側で #[from] により source として保持できるよう Error を実装しておく
impl std::error::Error for ValidationError {}
