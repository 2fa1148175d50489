use clap::Parser;
use std::path::PathBuf;

/// Xcode プロジェクトのアイコン置き場 (既定値)
pub const DEFAULT_OUTPUT_DIR: &str = "Note Now/Assets.xcassets/AppIcon.appiconset";
/// 1024x1024 の元画像 (既定値)
pub const DEFAULT_SOURCE_PATH: &str = "Note Now/Assets.xcassets/AppIcon.appiconset/App Icon.png";

/// 1枚の元画像から iOS App Icon に必要な全サイズのPNGを生成するツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 元になる画像ファイルのパス
    #[arg(short, long, default_value = DEFAULT_SOURCE_PATH)]
    pub source: PathBuf,

    /// PNGの出力先フォルダのパス (存在しなければ作成されます)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_fixed_defaults() {
        let args = Args::try_parse_from(["ios_app_icon_generator"]).unwrap();
        assert_eq!(args.source, PathBuf::from(DEFAULT_SOURCE_PATH));
        assert_eq!(args.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn paths_can_be_overridden() {
        let args = Args::try_parse_from([
            "ios_app_icon_generator",
            "--source",
            "art/icon.png",
            "-o",
            "build/icons",
        ])
        .unwrap();
        assert_eq!(args.source, PathBuf::from("art/icon.png"));
        assert_eq!(args.output_dir, PathBuf::from("build/icons"));
    }
}
