//! 航点数据模型与按维度分组

/// 游戏维度
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dimension {
    Overworld,
    Nether,
    End,
    /// 其他模组维度，按主世界处理
    Other(String),
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::Overworld
    }
}

impl Dimension {
    /// 从 VoxelMap 的维度标识解析
    pub fn from_id(id: &str) -> Self {
        match id {
            "overworld" => Dimension::Overworld,
            "the_nether" => Dimension::Nether,
            "the_end" => Dimension::End,
            other => Dimension::Other(other.to_string()),
        }
    }

    /// VoxelMap 侧的维度标识
    pub fn id(&self) -> &str {
        match self {
            Dimension::Overworld => "overworld",
            Dimension::Nether => "the_nether",
            Dimension::End => "the_end",
            Dimension::Other(id) => id,
        }
    }

    /// Xaero 侧的维度子目录名
    /// 下界 dim%-1，末地 dim%1，主世界及其他维度 dim%0
    pub fn xaero_folder(&self) -> &'static str {
        match self {
            Dimension::Nether => "dim%-1",
            Dimension::End => "dim%1",
            _ => "dim%0",
        }
    }
}

/// 单个 VoxelMap 航点记录
#[derive(Debug, Clone, Default)]
pub struct Waypoint {
    pub name: String,
    pub dim: Dimension,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    /// 源文件中的颜色分量，仅在 RGB 颜色模式下使用
    pub r: Option<f32>,
    pub g: Option<f32>,
    pub b: Option<f32>,
    pub suffix: Option<String>,
    pub world: Option<String>,
    pub enabled: bool,
}

impl Waypoint {
    /// 换算为主世界坐标：下界 x/z 乘 8，其余维度原样返回
    pub fn overworld_xz(&self) -> (i32, i32) {
        if self.dim == Dimension::Nether {
            (self.x * 8, self.z * 8)
        } else {
            (self.x, self.z)
        }
    }
}

/// 同一维度下的有序航点集合
#[derive(Debug)]
pub struct DimensionGroup {
    pub dimension: Dimension,
    pub waypoints: Vec<Waypoint>,
}

/// 按维度分组，保持源文件内的顺序；重复航点不去重
pub fn group_by_dimension(waypoints: Vec<Waypoint>) -> Vec<DimensionGroup> {
    let mut groups: Vec<DimensionGroup> = Vec::new();
    for wp in waypoints {
        match groups.iter_mut().find(|g| g.dimension == wp.dim) {
            Some(group) => group.waypoints.push(wp),
            None => groups.push(DimensionGroup {
                dimension: wp.dim.clone(),
                waypoints: vec![wp],
            }),
        }
    }
    groups
}
