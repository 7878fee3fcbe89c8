use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 変換対象のデザイン画像 (PNG) が含まれるフォルダのパス
    #[arg(required = true)]
    pub source_dir: PathBuf,

    /// バリアントの出力先フォルダのパス (未指定の場合は検証エラーで中断)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// 枕に合成するロゴ画像のパス (オプション: 未指定ならロゴなし)
    #[arg(short, long)]
    pub logo_file: Option<PathBuf>,
}
