mod cli;

use clap::Parser;
use ios_app_icon_generator::error::AppError;
use ios_app_icon_generator::workflow;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // コマンドライン引数を解析します
    let args = cli::Args::parse();

    println!("🚀 iOS App Icon Generator");
    println!("{}", "=".repeat(40));

    match workflow::run(&args.source, &args.output_dir) {
        Ok(_) => ExitCode::SUCCESS,
        Err(AppError::SourceNotFound(path)) => {
            log::debug!("ソース画像が存在しないため中断します: {}", path.display());
            eprintln!("❌ ソース画像が見つかりません: {}", path.display());
            ExitCode::FAILURE
        }
        Err(e) => {
            log::debug!("アイコン生成を中断しました: {:?}", e);
            eprintln!("❌ アイコンの生成中にエラーが発生しました: {}", e);
            ExitCode::FAILURE
        }
    }
}
