//! アプリケーションのエントリーポイント。
//!
//! コマンドライン引数の解析と、終了コード・エラー表示だけを担当し、
//! 処理の本体は `workflow` モジュールに委譲します。

mod cli;
mod workflow;

use asset_placement_tool::progress::ConsoleReporter;
use clap::Parser;
use std::error::Error;

fn main() {
    // コマンドライン引数を解析します
    let args = cli::Args::parse();

    let mut reporter = ConsoleReporter;
    if let Err(e) = workflow::run(args, &mut reporter) {
        eprintln!("[エラー] {}", e);
        // 根本のエラーまで遡って原因を表示する
        let mut source = e.source();
        while let Some(inner) = source {
            eprintln!("  原因: {}", inner);
            source = inner.source();
        }
        std::process::exit(1);
    }
}
