//! アイコン生成のメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! ソース画像の読み込みから各サイズのPNG書き出しまでの処理フローを実装します。

use crate::domain::icon_size::{IconSize, IOS_APP_ICON_SIZES};
use crate::domain::output_dir::OutputDirectory;
use crate::domain::output_icon::OutputIcon;
use crate::domain::source_image::SourceImage;
use crate::error::AppError;
use std::path::{Path, PathBuf};

/// 書き出しに成功したアイコン1件分の記録。
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedIcon {
    pub size: IconSize,
    pub path: PathBuf,
}

/// 1回の実行結果。書き出したアイコンをサイズ表の順に保持します。
#[derive(Debug, Default, PartialEq)]
pub struct GenerationSummary {
    pub icons: Vec<GeneratedIcon>,
}

impl GenerationSummary {
    pub fn count(&self) -> usize {
        self.icons.len()
    }
}

// --- public な main 関数 ---

/// `IOS_APP_ICON_SIZES` のすべてのサイズでアイコンを生成します。
///
/// # 引数
/// * `source_path`: 元になる画像ファイルのパス。
/// * `output_dir`: PNGの出力先ディレクトリ。無ければ作成されます。
///
/// # 戻り値
/// * `Ok(GenerationSummary)`: すべてのサイズの書き出しに成功した場合。
/// * `Err(AppError)`: いずれかの段階で失敗した場合。途中で止まり、
///   それまでに書き出したファイルはそのまま残ります。
pub fn run(source_path: &Path, output_dir: &Path) -> Result<GenerationSummary, AppError> {
    run_with_sizes(source_path, output_dir, &IOS_APP_ICON_SIZES)
}

// --- private なヘルパー関数 ---

fn run_with_sizes(
    source_path: &Path,
    output_dir: &Path,
    sizes: &[IconSize],
) -> Result<GenerationSummary, AppError> {
    // 1. ソース画像の存在確認とデコード
    // 失敗した場合は出力ディレクトリを作る前に抜ける。
    let source = SourceImage::open(source_path)?;
    let (width, height) = source.dimensions();
    println!("✅ ソース画像を読み込みました: {}x{}", width, height);

    // 2. 出力ディレクトリの準備
    let output_dir = OutputDirectory::ensure(output_dir)?;
    log::debug!("出力先: {}", output_dir);

    // 3. サイズ表の順にリサイズ・エンコード・書き込み
    let mut summary = GenerationSummary::default();
    for &size in sizes {
        let icon = OutputIcon::render(&source, size)?;
        let path = icon.save_to_dir(&output_dir)?;
        log::debug!("{} バイト書き込みました: {}", icon.png_data.len(), path.display());

        println!(
            "✅ 生成しました: {} ({}x{})",
            size.file_name(),
            size.pixels,
            size.pixels
        );
        summary.icons.push(GeneratedIcon { size, path });
    }

    // 4. 集計結果の報告
    println!("\n🎉 {} 種類のアイコンを生成しました！", summary.count());
    Ok(summary)
}
