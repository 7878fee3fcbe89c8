//! 出力フォルダのレイアウト (商品別サブフォルダ) を管理するモジュール。

use crate::domain::product_image::product_spec::{ProductSpec, PRODUCT_SPECS};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// --- エラー定義 ---

/// 出力用サブフォルダを作成できなかったときのエラー型
#[derive(Error, Debug)]
#[error("出力フォルダ '{path}' を作成できませんでした: {source}")]
pub struct OutputLayoutError {
    pub path: String,
    #[source]
    pub source: std::io::Error,
}

// --- 構造体定義 ---

/// 出力先ルートと商品別サブフォルダ一式を表す構造体。
#[derive(Debug)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    /// 出力ルート直下に全バリアントのサブフォルダを作成します。
    ///
    /// 既に存在するフォルダはそのまま再利用します。
    pub fn create<P: AsRef<Path>>(root: P) -> Result<Self, OutputLayoutError> {
        let root = root.as_ref().to_path_buf();
        for spec in &PRODUCT_SPECS {
            let dir = root.join(spec.subdir);
            fs::create_dir_all(&dir).map_err(|source| OutputLayoutError {
                path: dir.display().to_string(),
                source,
            })?;
        }
        Ok(Self { root })
    }

    // 出力ルートへの参照を返す
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 指定バリアントのサブフォルダへのパスを返します。
    pub fn variant_dir(&self, spec: &ProductSpec) -> PathBuf {
        self.root.join(spec.subdir)
    }

    /// 指定バリアントの出力ファイルのフルパスを組み立てます。
    pub fn variant_path(&self, spec: &ProductSpec, base_name: &str) -> PathBuf {
        self.variant_dir(spec).join(spec.output_file_name(base_name))
    }
}
