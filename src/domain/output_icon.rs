// --- 依存モジュール ---

use super::icon_size::IconSize;
use super::output_dir::OutputDirectory;
use super::source_image::SourceImage;

// リサイズ用のフィルタと、PNGエンコーダの圧縮設定を利用します。
// PNG側にも FilterType があるため、行フィルタの方は別名で取り込みます。
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, GenericImageView, ImageEncoder};

use std::fs;
use std::path::PathBuf;

/// アイコンのリサイズ・エンコード・保存時に発生する可能性のあるエラー。
#[derive(Debug, PartialEq)]
pub enum OutputIconError {
    /// PNGへのエンコード中にエラーが発生した場合。
    Encode { label: String, reason: String },
    /// エンコード済みのPNGをディスクに書き込む際にエラーが発生した場合。
    Write { path: PathBuf, reason: String },
}

/// 1サイズ分の、メモリ上にエンコード済みのアイコン。
/// 書き込みが終わったら破棄される一時的なデータです。
#[derive(Debug)]
pub struct OutputIcon {
    pub size: IconSize,
    pub png_data: Vec<u8>,
}

impl OutputIcon {
    /// ソース画像を `size` の正方形にリサイズし、PNGとしてエンコードします。
    ///
    /// 縦横比は保持しません。正方形でないソースも幅・高さともに
    /// `size.pixels` に引き伸ばされます。
    ///
    /// # 戻り値
    /// - `Ok(Self)`: エンコードに成功した場合。
    /// - `Err(OutputIconError::Encode)`: PNGエンコーダがエラーを返した場合。
    pub fn render(source: &SourceImage, size: IconSize) -> Result<Self, OutputIconError> {
        // STEP 1: Lanczos3 で指定サイズに縮小（または拡大）する
        let resized = source
            .image()
            .resize_exact(size.pixels, size.pixels, FilterType::Lanczos3);

        // PNG は浮動小数点のピクセルを扱えないため 16bit に落とす
        let resized = if matches!(resized.color(), ColorType::Rgb32F | ColorType::Rgba32F) {
            DynamicImage::ImageRgba16(resized.to_rgba16())
        } else {
            resized
        };

        // STEP 2: 最大圧縮 + 適応フィルタでロスレスにサイズを最適化してエンコードする
        let mut png_data: Vec<u8> = Vec::new();
        let encoder = PngEncoder::new_with_quality(
            &mut png_data,
            CompressionType::Best,
            PngFilterType::Adaptive,
        );
        encoder
            .write_image(
                resized.as_bytes(),
                resized.width(),
                resized.height(),
                resized.color().into(),
            )
            .map_err(|e| OutputIconError::Encode {
                label: size.label.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { size, png_data })
    }

    /// `<output_dir>/<label>.png` に書き込みます。既存ファイルは上書きされます。
    ///
    /// # 戻り値
    /// - `Ok(PathBuf)`: 書き込んだファイルのパス。
    /// - `Err(OutputIconError::Write)`: ファイルの書き込みに失敗した場合。
    pub fn save_to_dir(&self, output_dir: &OutputDirectory) -> Result<PathBuf, OutputIconError> {
        let path = output_dir.join(&self.size.file_name());
        fs::write(&path, &self.png_data).map_err(|e| OutputIconError::Write {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        Ok(path)
    }
}

impl std::fmt::Display for OutputIconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputIconError::Encode { label, reason } => {
                write!(f, "{} のPNGエンコードに失敗しました: {}", label, reason)
            }
            OutputIconError::Write { path, reason } => {
                write!(f, "{} への書き込みに失敗しました: {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for OutputIconError {}
