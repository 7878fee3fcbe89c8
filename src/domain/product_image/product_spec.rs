//! 各商品バリアントの出力仕様 (サイズ・DPI・出力先) を定義するモジュール。
//!
//! サイズと DPI は印刷サービス (Printful) の入稿要件に合わせた固定値です。

// --- 構造体定義 ---

/// 1 つの商品バリアントの出力仕様。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductSpec {
    /// バリアント名 (ログ・エラー表示用)
    pub name: &'static str,
    /// 出力フォルダ直下に作られるサブフォルダ名
    pub subdir: &'static str,
    /// 出力ファイル名の末尾に付く接尾辞
    pub suffix: &'static str,
    /// リサイズ後のサイズ (幅, 高さ)。`None` は元画像のサイズを維持する
    pub target_size: Option<(u32, u32)>,
    /// PNG に埋め込む解像度 (dots per inch)
    pub dpi: u32,
    /// 枕のみ true。ロゴが指定されていれば合成する
    pub with_logo: bool,
}

impl ProductSpec {
    /// 元ファイル名 (拡張子なし) からこのバリアントの出力ファイル名を組み立てます。
    pub fn output_file_name(&self, base_name: &str) -> String {
        format!("{}_{}.png", base_name, self.suffix)
    }
}

/// 全商品バリアントの仕様一覧。1 ファイルにつきこの順で出力される。
pub const PRODUCT_SPECS: [ProductSpec; 6] = [
    ProductSpec {
        name: "300dpi",
        subdir: "300_DPI",
        suffix: "300dpi",
        target_size: None,
        dpi: 300,
        with_logo: false,
    },
    ProductSpec {
        name: "sticker",
        subdir: "Stickers",
        suffix: "sticker",
        target_size: Some((1250, 1250)),
        dpi: 300,
        with_logo: false,
    },
    ProductSpec {
        name: "mug",
        subdir: "Mugs",
        suffix: "mug",
        target_size: Some((1250, 1250)),
        dpi: 300,
        with_logo: false,
    },
    ProductSpec {
        name: "tshirt",
        subdir: "Tshirts",
        suffix: "shirt", // 既存の出力と互換にするため tshirt ではなく shirt
        target_size: Some((3375, 3375)),
        dpi: 300,
        with_logo: false,
    },
    ProductSpec {
        name: "pillow",
        subdir: "Pillows",
        suffix: "pillow",
        target_size: Some((4000, 4000)),
        dpi: 150,
        with_logo: true,
    },
    ProductSpec {
        name: "poster",
        subdir: "Posters",
        suffix: "poster",
        target_size: Some((2400, 3000)),
        dpi: 300,
        with_logo: false,
    },
];
