//! 配置文件加载与管理

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 主配置结构
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 目录配置
    pub paths: PathsConfig,
    /// 颜色分配配置
    pub color: ColorConfig,
}

/// 目录配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// VoxelMap 航点目录
    pub voxelmap_dir: PathBuf,
    /// Xaero 航点输出目录
    pub xaeromap_dir: PathBuf,
}

/// 颜色分配配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// 颜色模式
    pub mode: ColorMode,
    /// 随机种子，省略时每次运行随机
    pub seed: Option<u64>,
}

/// 颜色模式
/// random 为每个航点随机选取 0..16 的颜色索引（原工具行为）；
/// rgb 按源文件的红绿蓝分量选取最接近的地图颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Random,
    Rgb,
}

// ============== 默认值 ==============

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            color: ColorConfig::default(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            voxelmap_dir: PathBuf::from("./voxelmap"),
            xaeromap_dir: PathBuf::from("./XaeroWaypoints"),
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            mode: ColorMode::Random,
            seed: None,
        }
    }
}

impl Default for ColorMode {
    fn default() -> Self {
        ColorMode::Random
    }
}

// ============== 配置加载 ==============

impl Config {
    /// 从文件加载配置
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// 获取默认配置文件路径
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vmx").join("config.toml"))
    }

    /// 按优先级加载配置：
    /// 1. 当前目录的 vmx.toml
    /// 2. 用户配置目录的 config.toml
    /// 3. 默认配置
    pub fn load() -> Self {
        // 当前目录
        let local_config = Path::new("vmx.toml");
        if local_config.exists() {
            if let Ok(config) = Self::load_from_file(local_config) {
                eprintln!("已加载配置: vmx.toml");
                return config;
            }
        }

        // 用户配置目录
        if let Some(user_config) = Self::default_config_path() {
            if user_config.exists() {
                if let Ok(config) = Self::load_from_file(&user_config) {
                    eprintln!("已加载配置: {}", user_config.display());
                    return config;
                }
            }
        }

        // 默认配置
        Self::default()
    }

    /// 生成默认配置文件内容
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roundtrips_through_toml() {
        let config: Config = toml::from_str(&Config::default_toml()).unwrap();
        assert_eq!(config.paths.voxelmap_dir, PathBuf::from("./voxelmap"));
        assert_eq!(config.paths.xaeromap_dir, PathBuf::from("./XaeroWaypoints"));
        assert_eq!(config.color.mode, ColorMode::Random);
        assert_eq!(config.color.seed, None);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: Config = toml::from_str("[color]\nmode = \"rgb\"\nseed = 42\n").unwrap();
        assert_eq!(config.color.mode, ColorMode::Rgb);
        assert_eq!(config.color.seed, Some(42));
        assert_eq!(config.paths.voxelmap_dir, PathBuf::from("./voxelmap"));
    }
}
