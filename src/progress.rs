//! 処理の進捗と警告をユーザーへ通知するためのモジュール。
//!
//! ドメイン層は具体的な通知先 (コンソールなど) を知らず、
//! `ProgressReporter` トレイトを通じて進捗と警告を通知します。

use crate::domain::logo_overlay::LogoOverlayError;
use crate::domain::product_image::variant_set::VariantError;
use std::path::Path;

/// 進捗・警告の通知先を抽象化するトレイト。
///
/// すべてのメソッドは既定では何もしないため、実装側は必要な通知だけを
/// 上書きできます。
pub trait ProgressReporter {
    /// 処理対象のファイル数が確定したときに呼ばれます。
    fn on_started(&mut self, _total: usize) {}

    /// 1 ファイル分の全バリアント生成が完了するたびに呼ばれます。
    fn on_progress(&mut self, _current: usize, _total: usize) {}

    /// ファイルの処理に失敗し、そのファイルをスキップしたときに呼ばれます。
    fn on_file_skipped(&mut self, _file_name: &str, _error: &VariantError) {}

    /// ロゴの読み込みに失敗し、ロゴなしで続行するときに呼ばれます。
    fn on_logo_unavailable(&mut self, _error: &LogoOverlayError) {}

    /// ロゴの合成に失敗し、合成なしで保存したときに呼ばれます。
    fn on_composite_skipped(&mut self, _base_name: &str, _error: &LogoOverlayError) {}

    /// すべてのファイルの処理が終わったときに呼ばれます。
    fn on_completed(&mut self, _processed: usize, _total: usize, _output_root: &Path) {}
}

/// 進捗をコンソールへ出力する標準のレポーター。
pub struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn on_started(&mut self, total: usize) {
        println!("処理を開始します: 対象 {} 件", total);
    }

    fn on_progress(&mut self, current: usize, total: usize) {
        println!("  -> {}/{} 件を処理しました", current, total);
    }

    fn on_file_skipped(&mut self, file_name: &str, error: &VariantError) {
        eprintln!(
            "[警告] '{}' の処理中にエラーが発生しました: {}",
            file_name, error
        );
    }

    fn on_logo_unavailable(&mut self, error: &LogoOverlayError) {
        eprintln!(
            "[警告] ロゴを読み込めませんでした。ロゴなしで続行します: {}",
            error
        );
    }

    fn on_composite_skipped(&mut self, base_name: &str, error: &LogoOverlayError) {
        eprintln!("[警告] '{}' にロゴを合成できませんでした: {}", base_name, error);
    }

    fn on_completed(&mut self, processed: usize, total: usize, output_root: &Path) {
        println!(
            "-> 完了: {}/{} 件のファイルを処理しました。出力先: {}",
            processed,
            total,
            output_root.display()
        );
    }
}
