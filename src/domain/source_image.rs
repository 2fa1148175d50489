// use宣言：必要なクレートやモジュールをスコープに取り込む

use image::{DynamicImage, GenericImageView}; // デコード済み画像と寸法取得のために利用
use std::fmt;
use std::path::{Path, PathBuf};

// --- 構造体定義 ---

/// アイコン生成の元になる、デコード済みのソース画像。
///
/// `open` コンストラクタを通じてのみインスタンス化でき、その際に以下の点が保証されます。
/// - ファイルが存在すること
/// - `image` クレートでデコードできる画像であること
///
/// 画像サイズは検証しません。1024x1024 以外の画像もそのまま受け付けます。
#[derive(Debug)]
pub struct SourceImage {
    path: PathBuf,
    image: DynamicImage,
}

// --- エラー定義 ---

/// `SourceImage` の読み込み時に発生する可能性のあるエラー。
#[derive(Debug, PartialEq)]
pub enum SourceImageError {
    /// 指定されたパスにファイルが存在しない。
    NotFound(PathBuf),
    /// ファイルは存在するが、画像としてデコードできなかった。
    /// `reason` には `image` クレートが返したエラー内容が入ります。
    Decode { path: PathBuf, reason: String },
}

// --- 実装ブロック ---

impl SourceImage {
    /// ソース画像を読み込みます。
    ///
    /// # 引数
    /// * `path`: ソース画像ファイルのパス。
    ///
    /// # 戻り値
    /// * `Ok(SourceImage)`: ファイルが存在し、デコードに成功した場合。
    /// * `Err(SourceImageError)`: ファイルが存在しないか、デコードに失敗した場合。
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SourceImageError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SourceImageError::NotFound(path.to_path_buf()));
        }

        // 読み込み時のI/Oエラーもデコード失敗として扱う
        let image = image::open(path).map_err(|e| SourceImageError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        log::debug!(
            "ソース画像をデコードしました: {} ({:?})",
            path.display(),
            image.color()
        );

        Ok(Self {
            path: path.to_path_buf(),
            image,
        })
    }

    // --- ゲッターメソッド ---

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// (幅, 高さ) をまとめて取得。
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

// --- トレイト実装 ---

impl fmt::Display for SourceImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceImageError::NotFound(path) => {
                write!(f, "ソース画像が見つかりません: {}", path.display())
            }
            SourceImageError::Decode { path, reason } => {
                write!(
                    f,
                    "ソース画像 '{}' をデコードできません: {}",
                    path.display(),
                    reason
                )
            }
        }
    }
}

impl std::error::Error for SourceImageError {}

// --- テストモジュール ---

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn open_missing_file_returns_not_found() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("missing.png");

        let err = SourceImage::open(&path).unwrap_err();
        assert_eq!(err, SourceImageError::NotFound(path));
    }

    #[test]
    fn open_non_image_returns_decode_error() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("broken.png");
        fs::write(&path, b"this is not an image").expect("Failed to create file");

        let err = SourceImage::open(&path).unwrap_err();
        match err {
            SourceImageError::Decode { path: p, reason } => {
                assert_eq!(p, path);
                assert!(!reason.is_empty());
            }
            other => panic!("予期せぬエラーが返されました: {:?}", other),
        }
    }

    /// 正方形でない画像もそのまま読み込めることを確認します。
    #[test]
    fn open_valid_png_keeps_dimensions() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("source.png");
        RgbaImage::from_pixel(64, 32, Rgba([10, 20, 30, 255]))
            .save(&path)
            .expect("PNGの保存に失敗");

        let source = SourceImage::open(&path).unwrap();
        assert_eq!(source.dimensions(), (64, 32));
        assert_eq!(source.path(), path.as_path());
    }

    #[test]
    fn display_messages_are_distinct() {
        let not_found = SourceImageError::NotFound(PathBuf::from("a.png"));
        let decode = SourceImageError::Decode {
            path: PathBuf::from("a.png"),
            reason: "bad".to_string(),
        };
        assert!(not_found.to_string().contains("見つかりません"));
        assert!(decode.to_string().contains("デコードできません"));
    }
}
