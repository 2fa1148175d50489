use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

// 構造体としてOutputDirectoryを定義
#[derive(Debug)]
pub struct OutputDirectory {
    path: PathBuf,
}

// エラー型を定義
#[derive(Debug)]
pub enum OutputDirError {
    /// パスは存在するがディレクトリではない。
    NotADirectory(PathBuf),
    /// ディレクトリの作成に失敗した。
    IoError { path: PathBuf, error: io::Error },
}

impl OutputDirectory {
    // コンストラクタ: ディレクトリが無ければ親ディレクトリごと作成する
    pub fn ensure<P: AsRef<Path>>(path: P) -> Result<Self, OutputDirError> {
        let path = path.as_ref();

        // 既に存在するファイルをディレクトリとして扱わない
        if path.exists() && !path.is_dir() {
            return Err(OutputDirError::NotADirectory(path.to_path_buf()));
        }

        // create_dir_all は既存ディレクトリに対しては何もしない
        fs::create_dir_all(path).map_err(|error| OutputDirError::IoError {
            path: path.to_path_buf(),
            error,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    // 内部のPathBufへの参照を返す
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    // ディレクトリ直下のファイルパスを組み立てる
    pub fn join(&self, file_name: &str) -> PathBuf {
        self.path.join(file_name)
    }
}

// Displayトレイトの実装（表示用）
impl fmt::Display for OutputDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl fmt::Display for OutputDirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputDirError::NotADirectory(path) => {
                write!(f, "パス '{}' はディレクトリではありません。", path.display())
            }
            OutputDirError::IoError { path, error } => {
                write!(
                    f,
                    "出力ディレクトリ '{}' を作成できません: {}",
                    path.display(),
                    error
                )
            }
        }
    }
}

impl std::error::Error for OutputDirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputDirError::NotADirectory(_) => None,
            OutputDirError::IoError { error, .. } => Some(error),
        }
    }
}
