//! 转换过程中的致命错误类型

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 两类命名错误，均为致命错误：报告后整个运行以非零状态退出
#[derive(Debug, Error)]
pub enum ConvertError {
    /// 配置的基础目录（源或目标）不存在
    #[error("基础目录不存在: {0:?}")]
    MissingBaseDirectory(PathBuf),

    /// 已发现的源文件无法读取
    #[error("无法读取 VoxelMap 航点文件 {path:?}: {source}")]
    MissingSourceFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
