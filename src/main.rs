//! VoxelMap 航点转换为 Xaero's World Map 格式

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use vmx::{
    check_dirs, convert_file, discover_points_files, ColorMode, ColorPicker, Config,
};

/// VoxelMap 航点转换为 Xaero's World Map 格式
#[derive(Parser)]
#[command(name = "vmx", version, about)]
struct Cli {
    /// 配置文件路径
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 转换 VoxelMap 航点为 Xaero 格式
    Convert {
        /// VoxelMap 航点目录
        #[arg(long)]
        voxelmap_dir: Option<PathBuf>,
        /// Xaero 航点输出目录
        #[arg(long)]
        xaeromap_dir: Option<PathBuf>,
        /// 颜色随机种子（固定后输出可复现）
        #[arg(long)]
        seed: Option<u64>,
        /// 按源文件的 RGB 分量选取最接近的地图颜色
        #[arg(long)]
        rgb_color: bool,
    },
    /// 生成默认配置文件
    Config {
        /// 输出路径（默认: vmx.toml）
        #[arg(short, long, default_value = "vmx.toml")]
        output: PathBuf,
        /// 覆盖已存在的文件
        #[arg(long)]
        force: bool,
    },
}

fn load_config(config_path: Option<PathBuf>) -> Config {
    if let Some(path) = config_path {
        match Config::load_from_file(&path) {
            Ok(config) => {
                eprintln!("已加载配置: {}", path.display());
                return config;
            }
            Err(e) => {
                eprintln!("警告: 无法加载配置 {}: {}", path.display(), e);
            }
        }
    }
    Config::load()
}

/// 维度标识首字母大写，用于汇总输出
fn capitalize(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config);

    match cli.command {
        Commands::Convert {
            voxelmap_dir,
            xaeromap_dir,
            seed,
            rgb_color,
        } => {
            // 使用配置默认值，命令行参数优先
            let voxelmap_dir = voxelmap_dir.unwrap_or_else(|| config.paths.voxelmap_dir.clone());
            let xaeromap_dir = xaeromap_dir.unwrap_or_else(|| config.paths.xaeromap_dir.clone());
            let mode = if rgb_color {
                ColorMode::Rgb
            } else {
                config.color.mode
            };
            let seed = seed.or(config.color.seed);

            println!("==================================================");
            println!("VoxelMap → Xaero 航点转换");
            println!("==================================================");
            println!("VoxelMap 目录: {:?}", voxelmap_dir);
            println!("输出目录: {:?}", xaeromap_dir);
            println!(
                "颜色模式: {}",
                match mode {
                    ColorMode::Random => "随机",
                    ColorMode::Rgb => "RGB 就近",
                }
            );
            if let Some(seed) = seed {
                println!("随机种子: {}", seed);
            }

            let start = Instant::now();
            check_dirs(&voxelmap_dir, &xaeromap_dir)?;

            let files = discover_points_files(&voxelmap_dir)?;
            let mut picker = ColorPicker::new(mode, seed);

            // 维度 -> 世界 -> 记录数
            let mut totals: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();

            for file in &files {
                let summary = convert_file(file, &xaeromap_dir, &mut picker)?;
                let session = if summary.server { "多人服务器" } else { "单人存档" };

                println!();
                println!("处理{}文件: {}.points", session, summary.world_name);
                for (dim, count) in &summary.counts {
                    println!("  {} 新增 {} 个航点", capitalize(dim.id()), count);
                    *totals
                        .entry(dim.id().to_string())
                        .or_default()
                        .entry(summary.world_name.clone())
                        .or_default() += count;
                }
                println!("  {}.points 转换完成", summary.world_name);
            }

            println!();
            println!("==================================================");
            println!("转换汇总:");
            println!("  处理文件数: {}", files.len());
            for (dim, worlds) in &totals {
                let total: usize = worlds.values().sum();
                println!("  {} 共新增 {} 个航点", capitalize(dim), total);
                for (world, count) in worlds {
                    println!("    {}: {}", world, count);
                }
            }
            println!("\n耗时: {:.2}s", start.elapsed().as_secs_f64());
        }

        Commands::Config { output, force } => {
            if output.exists() && !force {
                anyhow::bail!("文件已存在: {:?}\n使用 --force 覆盖", output);
            }

            let default_config = Config::default();
            default_config.save_to_file(&output)?;
            println!("已生成配置文件: {:?}", output);
            println!("\n配置项说明:");
            println!("  [paths]");
            println!(
                "    voxelmap_dir = {:?}   # VoxelMap 航点目录",
                default_config.paths.voxelmap_dir
            );
            println!(
                "    xaeromap_dir = {:?}   # Xaero 输出目录",
                default_config.paths.xaeromap_dir
            );
            println!("  [color]");
            println!("    mode = \"random\"   # random 或 rgb");
            println!("    # seed = 42       # 省略时每次运行随机");
        }
    }

    Ok(())
}
