//! ロゴ画像の読み込みと、商品キャンバスへのアルファ合成を定義するモジュール。

use crate::domain::input_source::logo_file::LogoFile;
use image::{imageops, RgbaImage};
use std::path::PathBuf;
use thiserror::Error;

// --- 定数定義 ---

/// 枕 (Pillow) キャンバス上にロゴを貼り付ける左上座標。
/// 印刷テンプレート側で位置が決まっているため、この座標は固定。
pub const PILLOW_LOGO_ANCHOR: (u32, u32) = (3600, 3626);

// --- エラー定義 ---

/// ロゴの読み込み・合成で発生するエラー型
#[derive(Error, Debug)]
pub enum LogoOverlayError {
    /// ロゴファイルを画像としてデコードできなかった
    #[error("ロゴ画像 '{}' を読み込めませんでした", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// 貼り付け座標がキャンバスの外にある
    #[error("貼り付け座標 ({x}, {y}) がキャンバス ({width}x{height}) の外にあります")]
    AnchorOutsideCanvas {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

// --- 構造体定義 ---

/// デコード済みのロゴ画像を保持し、キャンバスへの合成を行う構造体。
///
/// ロゴは一度だけデコードし、全ファイルの処理で使い回します。
#[derive(Debug, Clone)]
pub struct LogoOverlay {
    image: RgbaImage,
}

impl LogoOverlay {
    /// 検証済みのロゴファイルをデコードして `LogoOverlay` を作成します。
    // 合成時にロゴ自身のアルファをマスクとして使うため、RGBA に正規化して保持する
    pub fn load(logo: &LogoFile) -> Result<Self, LogoOverlayError> {
        let image = image::open(logo.as_path())
            .map_err(|source| LogoOverlayError::Load {
                path: logo.as_path().to_path_buf(),
                source,
            })?
            .to_rgba8();
        Ok(Self { image })
    }

    /// 枕用キャンバスの固定座標にロゴをアルファ合成します。
    pub fn composite_onto(&self, canvas: &mut RgbaImage) -> Result<(), LogoOverlayError> {
        let (x, y) = PILLOW_LOGO_ANCHOR;
        self.composite_at(canvas, x, y)
    }

    // 貼り付け座標がキャンバス内にあることを確認してから合成する。
    // 右端・下端からはみ出した部分は overlay 側で切り捨てられる。
    fn composite_at(&self, canvas: &mut RgbaImage, x: u32, y: u32) -> Result<(), LogoOverlayError> {
        let (width, height) = canvas.dimensions();
        if x >= width || y >= height {
            return Err(LogoOverlayError::AnchorOutsideCanvas {
                x,
                y,
                width,
                height,
            });
        }
        imageops::overlay(canvas, &self.image, i64::from(x), i64::from(y));
        Ok(())
    }

    /// ロゴ画像の寸法 (幅, 高さ) を返します。
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}
