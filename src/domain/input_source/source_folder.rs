use super::validation_error::ValidationError;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// 構造体としてSourceFolderを定義
#[derive(Debug)]
pub struct SourceFolder {
    pub path: PathBuf,
}

impl SourceFolder {
    // コンストラクタ: パスを受け取り、バリデーションを行う
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, ValidationError> {
        let path = path.as_ref();

        // 未指定 (空文字)・存在しない・ディレクトリでない、のいずれも MissingFolder として扱う
        if path.as_os_str().is_empty() {
            return Err(ValidationError::MissingFolder(
                "パスが指定されていません。".to_string(),
            ));
        }
        if !path.exists() {
            return Err(ValidationError::MissingFolder(format!(
                "パス '{}' は存在しません。",
                path.display()
            )));
        }
        if !path.is_dir() {
            return Err(ValidationError::MissingFolder(format!(
                "パス '{}' はディレクトリではありません。",
                path.display()
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    // 内部のPathBufへの参照を返す
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// フォルダ直下にある処理対象 (PNG) ファイルのパスを列挙します。
    ///
    /// 対象はフォルダ直下のみで、サブフォルダは走査しません。
    /// 実行のたびに順序が変わらないよう、パスをソートして返します。
    pub fn qualifying_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file() && is_design_file(e.path()))
            .map(|e| e.into_path())
            .collect();
        // ファイル名の順序を安定させるため、パスをソートする。
        files.sort();
        files
    }
}

/// パスが処理対象の画像ファイル (PNG) であるか、ファイル名の末尾で簡易的に判定します。
fn is_design_file(path: &Path) -> bool {
    match path.file_name().and_then(|s| s.to_str()) {
        // `.png` のような拡張子を持たない隠しファイル名も対象に含めるため、
        // 拡張子ではなくファイル名の末尾で判定する
        Some(name) => name.to_ascii_lowercase().ends_with(".png"),
        None => false,
    }
}

// Displayトレイトの実装（表示用）
impl fmt::Display for SourceFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
