//! デザイン画像フォルダから商品入稿用の PNG バリアント一式を生成するライブラリ。
//!
//! フォルダ内の PNG を 1 枚ずつ読み込み、ステッカー・マグカップ・T シャツ・枕・
//! ポスター・300DPI 版の 6 バリアントを商品別サブフォルダへ書き出します。
//! 枕にはオプションでロゴをアルファ合成できます。

pub mod domain;
pub mod error;
pub mod progress;
