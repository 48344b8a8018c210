//! 分片临时目录：每次下载独占一个目录，分片文件以序号命名。

use std::io;
use std::path::{Path, PathBuf};

/// 单次下载的分片存放位置；同一目录下并发任务各写各的文件，互不争用。
#[derive(Debug, Clone)]
pub(crate) struct ScratchSpace {
    dir: PathBuf,
}

impl ScratchSpace {
    /// 创建唯一目录，形如 `.<目标文件名>.parts-XXXXXX`；`root` 为 `None` 时放在系统临时目录。
    ///
    /// 目录不会随对象释放而删除；合并成功后由调用方 [`remove`](Self::remove)，
    /// 合并失败时保留，方便排查剩余分片。
    pub(crate) fn create(root: Option<&Path>, output: &Path) -> io::Result<Self> {
        let name = output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "download".to_string());
        let prefix = format!(".{}.parts-", name);

        let mut builder = tempfile::Builder::new();
        builder.prefix(&prefix);
        let dir = match root {
            Some(root) => builder.tempdir_in(root)?,
            None => builder.tempdir()?,
        }
        .keep();

        Ok(Self { dir })
    }

    /// 使用已存在的目录。
    #[cfg(test)]
    pub(crate) fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub(crate) fn dir(&self) -> &Path {
        &self.dir
    }

    /// 序号为 `index` 的分片文件路径。
    pub(crate) fn piece_path(&self, index: usize) -> PathBuf {
        self.dir.join(index.to_string())
    }

    pub(crate) async fn remove(&self) -> io::Result<()> {
        tokio::fs::remove_dir_all(&self.dir).await
    }
}
