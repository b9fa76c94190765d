//! VoxelMap .points 源文件解析与世界名识别

use crate::error::ConvertError;
use crate::waypoint::{Dimension, Waypoint};
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

/// 服务器文件名匹配：常见顶级域名或端口编码标记
static SERVER_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\.com|\.net|\.org|\.io|\.co|\.us|\.biz|~colon~\d+)").unwrap()
});

/// 端口编码后缀，如 "~colon~25594"
static PORT_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"~[^~]+~\d+").unwrap());

/// 解析一个 VoxelMap 航点文件
/// 文件无法读取时返回 MissingSourceFile
pub fn parse_points_file(path: &Path) -> Result<Vec<Waypoint>> {
    let content = fs::read_to_string(path).map_err(|e| ConvertError::MissingSourceFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_points(&content).with_context(|| format!("解析失败: {:?}", path))
}

/// 解析 VoxelMap 航点文本
/// 跳过空行、# 注释行以及不含 name 字段的行；顺序与源文件一致。
/// 字段缺少冒号分隔符或名称为空是致命解析错误
pub fn parse_points(content: &str) -> Result<Vec<Waypoint>> {
    let mut waypoints = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || !line.starts_with("name:") {
            continue;
        }
        let mut wp = Waypoint::default();
        for part in line.split(',') {
            // 只按第一个冒号切分，值本身可以包含冒号（如 world 标识）
            let (key, value) = part
                .split_once(':')
                .with_context(|| format!("字段缺少冒号分隔符: {}", part))?;
            assign_kv(&mut wp, key, value)?;
        }
        if wp.name.is_empty() {
            anyhow::bail!("航点名称为空: {}", line);
        }
        waypoints.push(wp);
    }
    Ok(waypoints)
}

/// 将一个键值对赋给航点，未识别的键忽略
fn assign_kv(wp: &mut Waypoint, key: &str, value: &str) -> Result<()> {
    match key {
        "name" => wp.name = value.to_string(),
        "dimensions" => {
            // 值按 '#' 分段，只取第一段；为空时回落到主世界
            let id = value.split('#').next().unwrap_or("");
            wp.dim = if id.is_empty() {
                Dimension::Overworld
            } else {
                Dimension::from_id(id)
            };
        }
        "x" => wp.x = value.parse().with_context(|| format!("无效的 x 坐标: {}", value))?,
        "y" => wp.y = value.parse().with_context(|| format!("无效的 y 坐标: {}", value))?,
        "z" => wp.z = value.parse().with_context(|| format!("无效的 z 坐标: {}", value))?,
        "red" => wp.r = Some(value.parse().with_context(|| format!("无效的 red 分量: {}", value))?),
        "green" => {
            wp.g = Some(value.parse().with_context(|| format!("无效的 green 分量: {}", value))?)
        }
        "blue" => {
            wp.b = Some(value.parse().with_context(|| format!("无效的 blue 分量: {}", value))?)
        }
        "suffix" => wp.suffix = Some(value.to_string()),
        "world" => wp.world = Some(value.to_string()),
        "enabled" => wp.enabled = value == "true",
        _ => {}
    }
    Ok(())
}

/// 判断世界名是否为多人服务器
/// 文件名中不允许冒号，端口以 "~colon~端口号" 编码
pub fn is_server_name(name: &str) -> bool {
    SERVER_NAME_RE.is_match(name)
}

/// 去掉服务器名中的端口编码后缀
/// 如 "play.example.com~colon~25594" 变为 "play.example.com"
pub fn sanitize_server_name(name: &str) -> String {
    PORT_SUFFIX_RE.replace_all(name, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_record() {
        let content = "name:Home,x:100,y:64,z:-200,red:0.5,green:0.25,blue:1.0,\
                       enabled:true,suffix:pt,world:,dimensions:overworld#0#0";
        let wps = parse_points(content).unwrap();
        assert_eq!(wps.len(), 1);
        let w = &wps[0];
        assert_eq!(w.name, "Home");
        assert_eq!((w.x, w.y, w.z), (100, 64, -200));
        assert_eq!(w.dim, Dimension::Overworld);
        assert!(w.enabled);
        assert_eq!(w.r, Some(0.5));
        assert_eq!(w.suffix.as_deref(), Some("pt"));
    }

    #[test]
    fn skips_blank_comment_and_nameless_lines() {
        let content = "\n# 注释行\nsubworlds:\nname:A,x:1,y:2,z:3,enabled:true\n   \n";
        let wps = parse_points(content).unwrap();
        assert_eq!(wps.len(), 1);
        assert_eq!(wps[0].name, "A");
    }

    #[test]
    fn splits_on_first_colon_only() {
        // world 值本身含冒号的情形
        let content = "name:B,x:1,y:2,z:3,world:mw$default:1,enabled:true";
        let wps = parse_points(content).unwrap();
        assert_eq!(wps[0].world.as_deref(), Some("mw$default:1"));
    }

    #[test]
    fn dimension_defaults_to_overworld_when_empty() {
        let content = "name:C,x:1,y:2,z:3,dimensions:#0#0,enabled:true";
        let wps = parse_points(content).unwrap();
        assert_eq!(wps[0].dim, Dimension::Overworld);

        let content = "name:D,x:1,y:2,z:3,enabled:true";
        let wps = parse_points(content).unwrap();
        assert_eq!(wps[0].dim, Dimension::Overworld);
    }

    #[test]
    fn parses_nether_and_end_dimensions() {
        let content = "name:E,x:1,y:2,z:3,dimensions:the_nether#0#0,enabled:true\n\
                       name:F,x:1,y:2,z:3,dimensions:the_end,enabled:false";
        let wps = parse_points(content).unwrap();
        assert_eq!(wps[0].dim, Dimension::Nether);
        assert_eq!(wps[1].dim, Dimension::End);
        assert!(!wps[1].enabled);
    }

    #[test]
    fn enabled_is_true_only_for_literal_true() {
        let content = "name:G,x:1,y:2,z:3,enabled:TRUE";
        let wps = parse_points(content).unwrap();
        assert!(!wps[0].enabled);
    }

    #[test]
    fn non_integer_coordinate_is_an_error() {
        let content = "name:H,x:abc,y:2,z:3,enabled:true";
        assert!(parse_points(content).is_err());
    }

    #[test]
    fn segment_without_separator_is_an_error() {
        // 缺少冒号的字段不能被静默跳过，否则 x 会留在默认值 0
        let content = "name:A,x1,y:2,z:3,enabled:true";
        assert!(parse_points(content).is_err());
    }

    #[test]
    fn empty_name_is_an_error() {
        let content = "name:,x:1,y:2,z:3,enabled:true";
        assert!(parse_points(content).is_err());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let content = "name:I,x:1,y:2,z:3,waypointType:death,enabled:true";
        let wps = parse_points(content).unwrap();
        assert_eq!(wps[0].name, "I");
    }

    #[test]
    fn detects_server_names() {
        assert!(is_server_name("play.example.com"));
        assert!(is_server_name("MC.HYPIXEL.NET"));
        assert!(is_server_name("192.168.1.50~colon~25565"));
        assert!(!is_server_name("New World"));
        assert!(!is_server_name("Skyblock Save"));
    }

    #[test]
    fn sanitizes_encoded_port_suffix() {
        assert_eq!(
            sanitize_server_name("play.example.com~colon~25594"),
            "play.example.com"
        );
        assert_eq!(sanitize_server_name("play.example.com"), "play.example.com");
    }
}
