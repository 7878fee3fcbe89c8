//! DPI メタデータ付きの PNG 書き出しを行うモジュール。
//!
//! `image` クレートの保存 API は pHYs チャンク (物理解像度) を書き込めないため、
//! ここだけバックエンドの `png` クレートを直接使ってエンコードします。

use image::RgbaImage;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

// pHYs チャンクの単位はメートルなので、DPI からの換算に使う
const METERS_PER_INCH: f64 = 0.0254;

// --- エラー定義 ---

/// PNG の書き出しで発生するエラー型
#[derive(Error, Debug)]
pub enum PngWriteError {
    /// 出力ファイルを作成できなかった
    #[error("出力ファイルを作成できませんでした: {0}")]
    Io(#[from] std::io::Error),
    /// PNG のエンコードに失敗した
    #[error("PNG のエンコードに失敗しました: {0}")]
    Encoding(#[from] png::EncodingError),
}

// --- 関数定義 ---

/// DPI を pHYs チャンクの単位 (pixels per meter) に換算します。
pub fn dpi_to_pixels_per_meter(dpi: u32) -> u32 {
    (f64::from(dpi) / METERS_PER_INCH).round() as u32
}

/// RGBA 画像を、指定した DPI を埋め込んだ PNG として保存します。
///
/// 出力 PNG は常に最高圧縮 (`Compression::Best`) で書き出します。
pub fn save_with_dpi(path: &Path, image: &RgbaImage, dpi: u32) -> Result<(), PngWriteError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let (width, height) = image.dimensions();

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Best);

    // 縦横とも同じ解像度を埋め込む
    let ppm = dpi_to_pixels_per_meter(dpi);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: png::Unit::Meter,
    }));

    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()?;
    Ok(())
}
