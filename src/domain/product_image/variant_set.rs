//! 1 つのデザイン画像から全商品バリアントを生成するモジュール。
//!
//! バリアントごとに「読み込み → リサイズ → (枕のみ) ロゴ合成 → DPI 付きで保存」の
//! パイプラインを実行します。

use crate::domain::logo_overlay::LogoOverlay;
use crate::domain::product_image::output_layout::OutputLayout;
use crate::domain::product_image::png_writer::{self, PngWriteError};
use crate::domain::product_image::product_spec::{ProductSpec, PRODUCT_SPECS};
use crate::progress::ProgressReporter;
use image::imageops::{self, FilterType};
use std::path::{Path, PathBuf};
use thiserror::Error;

// --- 定数定義 ---

/// 2 段階リサイズの中間サイズ (一辺)。
/// 既存ツールの出力とピクセル単位で一致させるため、リサイズするバリアントは
/// 必ずこのサイズを経由してから目的サイズへリサイズする。
/// 1 回のリサイズにまとめると結果のピクセルが変わってしまう。
const NORMALIZED_EDGE: u32 = 1015;

// --- エラー定義 ---

/// バリアント生成中に発生するエラー型。
/// いずれもファイル単位のエラーで、呼び出し元は該当ファイルをスキップして続行できる。
#[derive(Error, Debug)]
pub enum VariantError {
    /// 元画像を読み込めなかった
    #[error("画像 '{}' を読み込めませんでした: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// バリアントを書き出せなかった
    #[error("画像 '{}' を書き出せませんでした: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: PngWriteError,
    },
}

// --- 関数定義 ---

/// 1 つのデザイン画像から全バリアントを生成して保存します。
///
/// いずれかのバリアントで失敗した場合はその時点で中断してエラーを返します。
/// ロゴの合成失敗だけは警告にとどめ、合成なしで保存を続けます。
pub fn create_variants(
    source_path: &Path,
    base_name: &str,
    layout: &OutputLayout,
    logo: Option<&LogoOverlay>,
    reporter: &mut dyn ProgressReporter,
) -> Result<(), VariantError> {
    for spec in &PRODUCT_SPECS {
        render_variant(source_path, base_name, spec, layout, logo, reporter)?;
    }
    Ok(())
}

/// 1 つのバリアントを生成して保存します。
fn render_variant(
    source_path: &Path,
    base_name: &str,
    spec: &ProductSpec,
    layout: &OutputLayout,
    logo: Option<&LogoOverlay>,
    reporter: &mut dyn ProgressReporter,
) -> Result<(), VariantError> {
    // STEP 1: 元画像を読み込み、RGBA に正規化する
    // 前のバリアントのリサイズ結果を引きずらないよう、バリアントごとに読み込み直す
    let source = image::open(source_path)
        .map_err(|source| VariantError::Decode {
            path: source_path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    // STEP 2: 目的サイズへリサイズする (300dpi バリアントは元サイズのまま)
    let mut canvas = match spec.target_size {
        Some((width, height)) => {
            let normalized = imageops::resize(
                &source,
                NORMALIZED_EDGE,
                NORMALIZED_EDGE,
                FilterType::Lanczos3,
            );
            imageops::resize(&normalized, width, height, FilterType::Lanczos3)
        }
        None => source,
    };

    // STEP 3: 枕のみ、ロゴが指定されていれば合成する
    // 合成に失敗してもバリアント自体は保存し、警告として通知する
    if spec.with_logo {
        if let Some(logo) = logo {
            if let Err(e) = logo.composite_onto(&mut canvas) {
                reporter.on_composite_skipped(base_name, &e);
            }
        }
    }

    // STEP 4: バリアントの DPI を埋め込んで保存する
    let output_path = layout.variant_path(spec, base_name);
    png_writer::save_with_dpi(&output_path, &canvas, spec.dpi).map_err(|source| {
        VariantError::Write {
            path: output_path,
            source,
        }
    })?;

    Ok(())
}
