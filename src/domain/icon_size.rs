// --- 構造体定義 ---

/// 出力するアイコン1種類分の定義。
///
/// `label` は Xcode のアセットカタログで使われる表記 (例: `"60x60@3x"`) で、
/// そのまま出力ファイル名のステムになります。
/// `pixels` は正方形の一辺のピクセル数です。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize {
    pub label: &'static str,
    pub pixels: u32,
}

impl IconSize {
    pub const fn new(label: &'static str, pixels: u32) -> Self {
        Self { label, pixels }
    }

    /// 出力ファイル名 (`<label>.png`) を返します。
    pub fn file_name(&self) -> String {
        format!("{}.png", self.label)
    }
}

// --- サイズ表 ---

/// iOS App Icon として必要なサイズの一覧。この順番で生成されます。
pub const IOS_APP_ICON_SIZES: [IconSize; 15] = [
    // iPhone
    IconSize::new("20x20@2x", 40),
    IconSize::new("20x20@3x", 60),
    IconSize::new("29x29@2x", 58),
    IconSize::new("29x29@3x", 87),
    IconSize::new("40x40@2x", 80),
    IconSize::new("40x40@3x", 120),
    IconSize::new("60x60@2x", 120),
    IconSize::new("60x60@3x", 180),
    // iPad
    IconSize::new("20x20@1x", 20),
    IconSize::new("29x29@1x", 29),
    IconSize::new("40x40@1x", 40),
    IconSize::new("76x76@1x", 76),
    IconSize::new("76x76@2x", 152),
    IconSize::new("83.5x83.5@2x", 167),
    // App Store
    IconSize::new("1024x1024@1x", 1024),
];

// --- テストモジュール ---
