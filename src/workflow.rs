//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! バリアント生成の具体的な処理フローを実装します。

use crate::cli::Args;
use asset_placement_tool::domain::input_source::logo_file::LogoFile;
use asset_placement_tool::domain::input_source::source_folder::SourceFolder;
use asset_placement_tool::domain::input_source::validation_error::ValidationError;
use asset_placement_tool::domain::logo_overlay::LogoOverlay;
use asset_placement_tool::domain::product_image::output_layout::OutputLayout;
use asset_placement_tool::domain::product_image::variant_set;
use asset_placement_tool::error::AppError;
use asset_placement_tool::progress::ProgressReporter;

// --- public な main 関数 ---

/// アプリケーションのメインロジックを実行します。
///
/// # 引数
/// * `args`: コマンドラインからパースされた引数 (`cli::Args`)。
/// * `reporter`: 進捗と警告の通知先。
///
/// # 戻り値
/// * `Ok(())`: 処理が最後まで実行された場合。個別ファイルの失敗はスキップして続行する。
/// * `Err(AppError)`: 入力の検証または出力フォルダの準備に失敗した場合。
pub fn run(args: Args, reporter: &mut dyn ProgressReporter) -> Result<(), AppError> {
    // 1. デザインフォルダの検証
    // SourceFolder::new を使うことで、パスが存在し、かつディレクトリであることが保証される。
    let source_folder = SourceFolder::new(&args.source_dir)?;

    // 2. 出力フォルダの検証
    // 未指定または空のパスは検証エラーとする。
    let output_root = match args.output_dir.as_deref() {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => return Err(AppError::Validation(ValidationError::MissingOutput)),
    };

    // 3. 処理対象ファイルの検証
    let design_files = source_folder.qualifying_files();
    if design_files.is_empty() {
        return Err(AppError::Validation(ValidationError::NoQualifyingFiles(
            source_folder.to_string(),
        )));
    }

    // 4. ロゴファイルの検証
    // ロゴは任意入力のため、未指定または空のパスは「ロゴなし」として扱う。
    let logo_file = match args.logo_file.as_deref() {
        Some(path) if !path.as_os_str().is_empty() => Some(LogoFile::new(path)?),
        _ => None,
    };

    // 5. 出力フォルダ一式の作成
    let layout = OutputLayout::create(output_root)?;

    // 6. ロゴの読み込み
    // 読み込みに失敗しても処理は中断せず、警告を通知してロゴなしで続行する。
    let logo = match &logo_file {
        Some(file) => match LogoOverlay::load(file) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                reporter.on_logo_unavailable(&e);
                None
            }
        },
        None => None,
    };

    // 7. 各デザインファイルの処理
    let total = design_files.len();
    reporter.on_started(total);

    let mut processed_count = 0;
    for path in &design_files {
        let base_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "untitled".to_string());

        match variant_set::create_variants(path, &base_name, &layout, logo.as_ref(), reporter) {
            Ok(()) => {
                // 成功した場合はカウンターを増やして進捗を通知する。
                processed_count += 1;
                reporter.on_progress(processed_count, total);
            }
            Err(e) => {
                // 特定のファイルの処理に失敗しても、プログラム全体は止めずに
                // 警告を通知して次のファイルの処理を続ける。
                let file_name = path
                    .file_name()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                reporter.on_file_skipped(&file_name, &e);
            }
        }
    }

    // 8. 最終結果の通知
    reporter.on_completed(processed_count, total, layout.root());
    Ok(())
}

// --- テストモジュール ---
#[cfg(test)]
mod tests {
    use super::*;
    use asset_placement_tool::domain::logo_overlay::LogoOverlayError;
    use asset_placement_tool::domain::product_image::png_writer;
    use asset_placement_tool::domain::product_image::variant_set::VariantError;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    /// 通知の内容を記録するテスト用レポーター
    #[derive(Default)]
    struct RecordingReporter {
        started: Option<usize>,
        progress: Vec<(usize, usize)>,
        skipped: Vec<String>,
        logo_unavailable: usize,
        composite_skipped: Vec<String>,
        completed: Option<(usize, usize, PathBuf)>,
    }

    impl ProgressReporter for RecordingReporter {
        fn on_started(&mut self, total: usize) {
            self.started = Some(total);
        }

        fn on_progress(&mut self, current: usize, total: usize) {
            self.progress.push((current, total));
        }

        fn on_file_skipped(&mut self, file_name: &str, _error: &VariantError) {
            self.skipped.push(file_name.to_string());
        }

        fn on_logo_unavailable(&mut self, _error: &LogoOverlayError) {
            self.logo_unavailable += 1;
        }

        fn on_composite_skipped(&mut self, base_name: &str, _error: &LogoOverlayError) {
            self.composite_skipped.push(base_name.to_string());
        }

        fn on_completed(&mut self, processed: usize, total: usize, output_root: &Path) {
            self.completed = Some((processed, total, output_root.to_path_buf()));
        }
    }

    /// テスト用の Args を組み立てるヘルパー
    fn args_for(source: &Path, output: Option<&Path>, logo: Option<&Path>) -> Args {
        Args {
            source_dir: source.to_path_buf(),
            output_dir: output.map(Path::to_path_buf),
            logo_file: logo.map(Path::to_path_buf),
        }
    }

    /// 単色のデザイン画像 (PNG) を書き出すヘルパー
    fn write_design_png(path: &Path, width: u32, height: u32) {
        RgbImage::from_pixel(width, height, Rgb([120, 90, 60]))
            .save(path)
            .expect("Failed to save design png");
    }

    /// PNG の pHYs チャンクから DPI を読み戻すヘルパー
    fn read_dpi(path: &Path) -> u32 {
        let decoder = png::Decoder::new(fs::File::open(path).expect("Failed to open png"));
        let reader = decoder.read_info().expect("Failed to read png info");
        let dims = reader.info().pixel_dims.expect("pHYs チャンクがありません");
        (f64::from(dims.xppu) * 0.0254).round() as u32
    }

    /// 全ファイル・全バリアントが正しいサイズと DPI で出力されるかテスト
    #[test]
    fn test_run_creates_all_variants_for_each_source() {
        let input = tempdir().expect("Failed to create temp directory");
        let output = tempdir().expect("Failed to create temp directory");
        write_design_png(&input.path().join("cat_01.png"), 500, 500);
        // 2 枚目は非正方形、かつ 72 DPI 付きで保存し、元の DPI が無視されることを確認する
        png_writer::save_with_dpi(
            &input.path().join("cat_02.png"),
            &RgbaImage::from_pixel(320, 240, Rgba([10, 20, 30, 255])),
            72,
        )
        .expect("Failed to save cat_02.png");

        let mut reporter = RecordingReporter::default();
        let args = args_for(input.path(), Some(output.path()), None);

        run(args, &mut reporter).unwrap();

        assert_eq!(reporter.started, Some(2));
        assert_eq!(reporter.progress, vec![(1, 2), (2, 2)]);
        assert_eq!(
            reporter.completed,
            Some((2, 2, output.path().to_path_buf()))
        );

        // (相対パス, 期待サイズ, 期待 DPI) の一覧
        let expected = [
            ("300_DPI/cat_01_300dpi.png", (500, 500), 300),
            ("Stickers/cat_01_sticker.png", (1250, 1250), 300),
            ("Mugs/cat_01_mug.png", (1250, 1250), 300),
            ("Tshirts/cat_01_shirt.png", (3375, 3375), 300),
            ("Pillows/cat_01_pillow.png", (4000, 4000), 150),
            ("Posters/cat_01_poster.png", (2400, 3000), 300),
            // 300dpi バリアントだけは元画像のサイズを維持する
            ("300_DPI/cat_02_300dpi.png", (320, 240), 300),
            ("Pillows/cat_02_pillow.png", (4000, 4000), 150),
        ];
        for (rel, dims, dpi) in expected {
            let path = output.path().join(rel);
            let img = image::open(&path)
                .unwrap_or_else(|e| panic!("{} を読み込めません: {}", rel, e));
            assert_eq!(
                image::GenericImageView::dimensions(&img),
                dims,
                "{} のサイズが違います",
                rel
            );
            assert_eq!(read_dpi(&path), dpi, "{} の DPI が違います", rel);
        }
    }

    /// 存在しないデザインフォルダで検証エラーが返されるかテスト
    #[test]
    fn test_run_rejects_missing_source_folder() {
        let output = tempdir().expect("Failed to create temp directory");
        let mut reporter = RecordingReporter::default();
        let args = args_for(
            Path::new("this_directory_should_not_exist"),
            Some(output.path()),
            None,
        );

        let result = run(args, &mut reporter);

        assert!(matches!(
            result,
            Err(AppError::Validation(ValidationError::MissingFolder(_)))
        ));
        assert!(reporter.started.is_none());
    }

    /// 出力フォルダ未指定で検証エラーが返されるかテスト
    #[test]
    fn test_run_rejects_missing_output_dir() {
        let input = tempdir().expect("Failed to create temp directory");
        write_design_png(&input.path().join("cat_01.png"), 100, 100);
        let mut reporter = RecordingReporter::default();
        let args = args_for(input.path(), None, None);

        let result = run(args, &mut reporter);

        assert!(matches!(
            result,
            Err(AppError::Validation(ValidationError::MissingOutput))
        ));
    }

    /// 処理対象の PNG がないフォルダで検証エラーが返されるかテスト
    #[test]
    fn test_run_aborts_when_no_qualifying_files() {
        let input = tempdir().expect("Failed to create temp directory");
        let output = tempdir().expect("Failed to create temp directory");
        fs::write(input.path().join("readme.txt"), "no images here").expect("Failed to write");
        let mut reporter = RecordingReporter::default();
        let args = args_for(input.path(), Some(output.path()), None);

        let result = run(args, &mut reporter);

        assert!(matches!(
            result,
            Err(AppError::Validation(ValidationError::NoQualifyingFiles(_)))
        ));
        // 検証で中断した場合、出力サブフォルダは作られない
        assert!(!output.path().join("Stickers").exists());
    }

    /// 存在しないロゴパスで検証エラーが返されるかテスト
    #[test]
    fn test_run_rejects_invalid_logo() {
        let input = tempdir().expect("Failed to create temp directory");
        let output = tempdir().expect("Failed to create temp directory");
        write_design_png(&input.path().join("cat_01.png"), 100, 100);
        let mut reporter = RecordingReporter::default();
        let args = args_for(
            input.path(),
            Some(output.path()),
            Some(Path::new("no_such_logo.png")),
        );

        let result = run(args, &mut reporter);

        assert!(matches!(
            result,
            Err(AppError::Validation(ValidationError::InvalidLogo(_)))
        ));
        // ロゴの検証は出力フォルダの作成より先に行われる
        assert!(!output.path().join("Pillows").exists());
    }

    /// 壊れたファイルをスキップして残りを処理できるかテスト
    #[test]
    fn test_run_skips_broken_file_and_continues() {
        let input = tempdir().expect("Failed to create temp directory");
        let output = tempdir().expect("Failed to create temp directory");
        write_design_png(&input.path().join("a_good.png"), 100, 100);
        fs::write(input.path().join("b_broken.png"), "this is not a png")
            .expect("Failed to write");
        write_design_png(&input.path().join("c_good.png"), 100, 100);
        let mut reporter = RecordingReporter::default();
        let args = args_for(input.path(), Some(output.path()), None);

        run(args, &mut reporter).unwrap();

        assert_eq!(reporter.skipped, vec!["b_broken.png"]);
        assert_eq!(reporter.progress, vec![(1, 3), (2, 3)]);
        assert_eq!(
            reporter.completed,
            Some((2, 3, output.path().to_path_buf()))
        );
        // 正常なファイルのバリアントは出力され、壊れたファイルの分は出力されない
        assert!(output.path().join("300_DPI/a_good_300dpi.png").is_file());
        assert!(output.path().join("300_DPI/c_good_300dpi.png").is_file());
        assert!(!output.path().join("300_DPI/b_broken_300dpi.png").exists());
    }

    /// ロゴのデコードに失敗してもロゴなしで続行できるかテスト
    #[test]
    fn test_run_continues_without_logo_when_decode_fails() {
        let input = tempdir().expect("Failed to create temp directory");
        let output = tempdir().expect("Failed to create temp directory");
        write_design_png(&input.path().join("cat_01.png"), 100, 100);
        // 存在はするが画像としてデコードできないロゴファイル
        let logo_path = input.path().join("logo.png");
        fs::write(&logo_path, "this is not an image").expect("Failed to write");
        let mut reporter = RecordingReporter::default();
        let args = args_for(input.path(), Some(output.path()), Some(logo_path.as_path()));

        run(args, &mut reporter).unwrap();

        assert_eq!(reporter.logo_unavailable, 1);
        assert_eq!(
            reporter.completed,
            Some((1, 1, output.path().to_path_buf()))
        );
        assert!(output.path().join("Pillows/cat_01_pillow.png").is_file());
    }

    /// 空のロゴパスが「ロゴなし」として扱われるかテスト
    #[test]
    fn test_empty_logo_path_means_no_logo() {
        let input = tempdir().expect("Failed to create temp directory");
        let output = tempdir().expect("Failed to create temp directory");
        write_design_png(&input.path().join("cat_01.png"), 100, 100);
        let mut reporter = RecordingReporter::default();
        let args = args_for(input.path(), Some(output.path()), Some(Path::new("")));

        run(args, &mut reporter).unwrap();

        // 検証エラーにも警告にもならず、普通に処理される
        assert_eq!(reporter.logo_unavailable, 0);
        assert_eq!(
            reporter.completed,
            Some((1, 1, output.path().to_path_buf()))
        );
    }

    /// ロゴが枕バリアントの所定の位置だけに合成されるかテスト
    #[test]
    fn test_logo_changes_only_pillow_within_footprint() {
        let input = tempdir().expect("Failed to create temp directory");
        let out_plain = tempdir().expect("Failed to create temp directory");
        let out_logo = tempdir().expect("Failed to create temp directory");
        write_design_png(&input.path().join("cat_01.png"), 100, 100);
        // 12x10 の不透明な赤いロゴ
        let logo_path = input.path().join("logo.png");
        RgbaImage::from_pixel(12, 10, Rgba([255, 0, 0, 255]))
            .save(&logo_path)
            .expect("Failed to save logo");

        let mut reporter = RecordingReporter::default();
        run(
            args_for(input.path(), Some(out_plain.path()), None),
            &mut reporter,
        )
        .unwrap();
        run(
            args_for(input.path(), Some(out_logo.path()), Some(logo_path.as_path())),
            &mut reporter,
        )
        .unwrap();

        assert!(reporter.composite_skipped.is_empty());

        // 枕以外のバリアントはロゴの有無に関わらずバイト単位で一致する
        for rel in [
            "300_DPI/cat_01_300dpi.png",
            "Stickers/cat_01_sticker.png",
            "Mugs/cat_01_mug.png",
            "Tshirts/cat_01_shirt.png",
            "Posters/cat_01_poster.png",
        ] {
            let plain = fs::read(out_plain.path().join(rel)).expect("Failed to read");
            let with_logo = fs::read(out_logo.path().join(rel)).expect("Failed to read");
            assert_eq!(plain, with_logo, "{} がロゴの影響を受けています", rel);
        }

        // 枕はロゴの範囲 (3600,3626)-(3611,3635) だけが赤く塗り替わる
        let plain = image::open(out_plain.path().join("Pillows/cat_01_pillow.png"))
            .unwrap()
            .to_rgba8();
        let with_logo = image::open(out_logo.path().join("Pillows/cat_01_pillow.png"))
            .unwrap()
            .to_rgba8();
        let red = Rgba([255, 0, 0, 255]);
        for y in 3626..3636 {
            for x in 3600..3612 {
                assert_eq!(*with_logo.get_pixel(x, y), red, "({}, {}) が赤くない", x, y);
            }
        }
        // ロゴの範囲のすぐ外側と四隅は元のまま
        for (x, y) in [
            (3599, 3626),
            (3612, 3626),
            (3600, 3625),
            (3600, 3636),
            (0, 0),
            (3999, 0),
            (0, 3999),
            (3999, 3999),
        ] {
            assert_eq!(
                with_logo.get_pixel(x, y),
                plain.get_pixel(x, y),
                "({}, {}) が変化しています",
                x,
                y
            );
        }
    }
}
