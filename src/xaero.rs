//! Xaero's World Map 目标格式：记录行、文件头、目录命名与颜色分配

use crate::config::ColorMode;
use crate::voxelmap::{is_server_name, sanitize_server_name};
use crate::waypoint::Waypoint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 新建航点文件时写入一次的三行文件头
pub const FILE_HEADER: &str = "#\n\
#waypoint:name:initials:x:y:z:color:disabled:type:set:rotate_on_tp:tp_yaw:visibility_type:destination\n\
#\n";

/// 多人服务器的航点文件名
pub const MULTIPLAYER_FILENAME: &str = "mw$default_1.txt";
/// 单人存档的航点文件名
pub const SINGLEPLAYER_FILENAME: &str = "waypoints.txt";

/// Minecraft 的 16 种格式化颜色，顺序与 Xaero 的颜色索引 0..16 一致
const MAP_COLORS: [(u8, u8, u8); 16] = [
    (0, 0, 0),       // black
    (0, 0, 170),     // dark_blue
    (0, 170, 0),     // dark_green
    (0, 170, 170),   // dark_aqua
    (170, 0, 0),     // dark_red
    (170, 0, 170),   // dark_purple
    (255, 170, 0),   // gold
    (170, 170, 170), // gray
    (85, 85, 85),    // dark_gray
    (85, 85, 255),   // blue
    (85, 255, 85),   // green
    (85, 255, 255),  // aqua
    (255, 85, 85),   // red
    (255, 85, 255),  // light_purple
    (255, 255, 85),  // yellow
    (255, 255, 255), // white
];

/// 按配置模式为航点选取颜色索引
/// 随机序列由种子决定，固定种子时输出可复现
pub struct ColorPicker {
    mode: ColorMode,
    rng: StdRng,
}

impl ColorPicker {
    pub fn new(mode: ColorMode, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { mode, rng }
    }

    /// 为一个航点选取 0..16 的颜色索引
    /// RGB 模式下分量缺失时回落到随机选取
    pub fn pick(&mut self, wp: &Waypoint) -> u8 {
        match self.mode {
            ColorMode::Random => self.rng.gen_range(0..16),
            ColorMode::Rgb => match (wp.r, wp.g, wp.b) {
                (Some(r), Some(g), Some(b)) => nearest_map_color(r, g, b),
                _ => self.rng.gen_range(0..16),
            },
        }
    }
}

/// 选取与给定 RGB 分量（0.0..1.0）距离最近的地图颜色索引
fn nearest_map_color(r: f32, g: f32, b: f32) -> u8 {
    let tr = (r.clamp(0.0, 1.0) * 255.0) as i32;
    let tg = (g.clamp(0.0, 1.0) * 255.0) as i32;
    let tb = (b.clamp(0.0, 1.0) * 255.0) as i32;
    let mut best = 0;
    let mut best_dist = i32::MAX;
    for (i, &(cr, cg, cb)) in MAP_COLORS.iter().enumerate() {
        let dr = tr - cr as i32;
        let dg = tg - cg as i32;
        let db = tb - cb as i32;
        let dist = dr * dr + dg * dg + db * db;
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best as u8
}

/// 目标世界目录名
/// 服务器为 "Multiplayer_<去端口名>"，单人存档为原始名
pub fn world_dir_name(world_name: &str) -> String {
    if is_server_name(world_name) {
        format!("Multiplayer_{}", sanitize_server_name(world_name))
    } else {
        world_name.to_string()
    }
}

/// 目标航点文件名
pub fn waypoints_filename(server: bool) -> &'static str {
    if server {
        MULTIPLAYER_FILENAME
    } else {
        SINGLEPLAYER_FILENAME
    }
}

/// 将航点格式化为一行 Xaero 记录
/// x/z 由调用方传入，下界坐标在写入路径上已换算为主世界坐标；
/// disabled 字段是源 enabled 标志的取反
pub fn format_waypoint(wp: &Waypoint, x: i32, z: i32, color: u8) -> String {
    let initial: String = wp
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let disabled = if wp.enabled { "false" } else { "true" };
    format!(
        "waypoint:{}:{}:{}:{}:{}:{}:{}:0:gui.xaero_default:false:0:0",
        wp.name, initial, x, wp.y, z, color, disabled
    )
}
