//! VoxelMap 航点转换工具
//!
//! 将 VoxelMap 的 .points 航点文件转换为 Xaero's World Map 的航点目录结构

pub mod config;
pub mod convert;
pub mod error;
pub mod voxelmap;
pub mod waypoint;
pub mod xaero;

pub use config::{ColorMode, Config};
pub use convert::{check_dirs, convert_file, discover_points_files, ConversionSummary};
pub use error::ConvertError;
pub use voxelmap::{is_server_name, parse_points, parse_points_file, sanitize_server_name};
pub use waypoint::{group_by_dimension, Dimension, DimensionGroup, Waypoint};
pub use xaero::{format_waypoint, ColorPicker};
