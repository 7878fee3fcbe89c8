use super::validation_error::ValidationError;
use std::fmt;
use std::path::{Path, PathBuf};

// 構造体としてLogoFileを定義
// ロゴは任意入力のため、パスが指定された場合のみ構築される
#[derive(Debug)]
pub struct LogoFile(PathBuf);

impl LogoFile {
    // コンストラクタ: パスを受け取り、バリデーションを行う
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, ValidationError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ValidationError::InvalidLogo(format!(
                "パス '{}' は存在しません。",
                path.display()
            )));
        }
        if !path.is_file() {
            return Err(ValidationError::InvalidLogo(format!(
                "パス '{}' はファイルではありません。",
                path.display()
            )));
        }

        Ok(Self(path.to_path_buf()))
    }

    // 内部のPathBufへの参照を返す
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

// Displayトレイトの実装（表示用）
impl fmt::Display for LogoFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
