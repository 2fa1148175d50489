use crate::domain::output_dir::OutputDirError;
use crate::domain::output_icon::OutputIconError;
use crate::domain::source_image::SourceImageError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("ソース画像が見つかりません: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("{0}")]
    ImageDecode(SourceImageError),

    #[error("{0}")]
    OutputDir(#[from] OutputDirError),

    #[error("{0}")]
    EncodeOrWrite(#[from] OutputIconError),
}

// NotFound とデコード失敗は呼び出し側で別のメッセージを出すため、別々の種類に振り分ける
impl From<SourceImageError> for AppError {
    fn from(error: SourceImageError) -> Self {
        match error {
            SourceImageError::NotFound(path) => AppError::SourceNotFound(path),
            decode @ SourceImageError::Decode { .. } => AppError::ImageDecode(decode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_errors_map_to_distinct_kinds() {
        let not_found: AppError = SourceImageError::NotFound(PathBuf::from("icon.png")).into();
        assert!(matches!(not_found, AppError::SourceNotFound(ref p) if p == &PathBuf::from("icon.png")));

        let decode: AppError = SourceImageError::Decode {
            path: PathBuf::from("icon.png"),
            reason: "unexpected EOF".to_string(),
        }
        .into();
        assert!(matches!(decode, AppError::ImageDecode(_)));
        assert!(decode.to_string().contains("unexpected EOF"));
    }
}
