//! 转换流水线：解析 → 按维度分组 → 写入目标目录

use crate::error::ConvertError;
use crate::voxelmap::{is_server_name, parse_points_file};
use crate::waypoint::{group_by_dimension, Dimension};
use crate::xaero::{self, ColorPicker};
use anyhow::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 单个源文件的转换结果
#[derive(Debug)]
pub struct ConversionSummary {
    /// 源文件的基础名（去扩展名）
    pub world_name: String,
    /// 是否识别为多人服务器
    pub server: bool,
    /// 各维度写入的记录数，按维度首次出现顺序
    pub counts: Vec<(Dimension, usize)>,
}

/// 校验两个基础目录都存在，缺失则整个运行终止
pub fn check_dirs(voxelmap_dir: &Path, xaeromap_dir: &Path) -> Result<()> {
    if !voxelmap_dir.exists() {
        return Err(ConvertError::MissingBaseDirectory(voxelmap_dir.to_path_buf()).into());
    }
    if !xaeromap_dir.exists() {
        return Err(ConvertError::MissingBaseDirectory(xaeromap_dir.to_path_buf()).into());
    }
    Ok(())
}

/// 枚举目录下的 .points 文件，按路径排序保证处理顺序稳定
pub fn discover_points_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().map_or(false, |ext| ext == "points"))
        .collect();
    files.sort();
    Ok(files)
}

/// 转换一个 VoxelMap 文件到 Xaero 目录布局
///
/// 每个维度对应 <世界目录>/<dim%N>/<航点文件>；文件不存在时先写一次文件头，
/// 之后始终追加写入，重复运行会产生重复记录行
pub fn convert_file(
    source: &Path,
    xaeromap_dir: &Path,
    picker: &mut ColorPicker,
) -> Result<ConversionSummary> {
    let world_name = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();
    let server = is_server_name(&world_name);
    let world_dir = xaeromap_dir.join(xaero::world_dir_name(&world_name));

    let waypoints = parse_points_file(source)?;
    let groups = group_by_dimension(waypoints);

    fs::create_dir_all(&world_dir)?;

    let mut counts = Vec::new();
    for group in &groups {
        let dim_dir = world_dir.join(group.dimension.xaero_folder());
        fs::create_dir_all(&dim_dir)?;
        let file_path = dim_dir.join(xaero::waypoints_filename(server));

        // 先于打开判断，create(true) 会直接建出文件
        let existed = file_path.is_file();
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&file_path)?;
        if !existed {
            file.write_all(xaero::FILE_HEADER.as_bytes())?;
        }

        for wp in &group.waypoints {
            let (x, z) = wp.overworld_xz();
            let color = picker.pick(wp);
            writeln!(file, "{}", xaero::format_waypoint(wp, x, z, color))?;
        }

        counts.push((group.dimension.clone(), group.waypoints.len()));
    }

    Ok(ConversionSummary {
        world_name,
        server,
        counts,
    })
}
