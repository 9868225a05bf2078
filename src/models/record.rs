use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// 谱面难度级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Difficulty {
    EZ,
    HD,
    IN,
    AT,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::EZ => "EZ",
            Difficulty::HD => "HD",
            Difficulty::IN => "IN",
            Difficulty::AT => "AT",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("EZ") {
            return Ok(Difficulty::EZ);
        }
        if s.eq_ignore_ascii_case("HD") {
            return Ok(Difficulty::HD);
        }
        if s.eq_ignore_ascii_case("IN") {
            return Ok(Difficulty::IN);
        }
        if s.eq_ignore_ascii_case("AT") {
            return Ok(Difficulty::AT);
        }
        Err(())
    }
}

/// 单张谱面的成绩记录
/// 包含单首歌曲在特定难度下的 RKS 相关信息
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChartRecord {
    /// 歌曲ID
    pub song_id: String,
    /// 歌曲名称
    pub song_name: String,
    /// 难度级别 (EZ, HD, IN, AT)
    pub difficulty: Difficulty,
    /// 难度定数
    pub difficulty_value: f64,
    /// 准确度（百分比，例 98.5 表示 98.5%）
    pub acc: f64,
    /// 分数（可选，本引擎不参与计算）
    pub score: Option<f64>,
    /// 谱面RKS值，由 acc 与定数计算一次后即视为基准值
    pub rks: f64,
}

impl ChartRecord {
    /// 创建新的成绩记录，RKS 由公式计算得出
    pub fn new(
        song_id: String,
        song_name: String,
        difficulty: Difficulty,
        difficulty_value: f64,
        acc: f64,
        score: Option<f64>,
    ) -> Self {
        let rks = crate::utils::rks_utils::calculate_chart_rks(acc, difficulty_value);

        Self {
            song_id,
            song_name,
            difficulty,
            difficulty_value,
            acc,
            score,
            rks,
        }
    }
}

impl PartialEq for ChartRecord {
    fn eq(&self, other: &Self) -> bool {
        self.rks == other.rks
    }
}

impl Eq for ChartRecord {}

impl PartialOrd for ChartRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChartRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rks
            .partial_cmp(&other.rks)
            .unwrap_or(Ordering::Equal)
            .reverse()
    }
}

/// 带推分标注的成绩记录。
/// 由推分线求解器生成，原始记录不会被修改。
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnnotatedRecord {
    #[serde(flatten)]
    pub record: ChartRecord,
    /// 越过当前推分线所需的最低 ACC；无法计算时为 None
    pub push_acc: Option<f64>,
    /// 已经是（接近）满 ACC，无需推分
    pub already_phi: bool,
    /// 即使 100% ACC 也无法越线
    pub unreachable: bool,
    /// 只有恰好 100% ACC 才能越线
    pub phi_only: bool,
}

impl AnnotatedRecord {
    /// 仅包裹原始记录，不带任何推分标注
    pub fn plain(record: ChartRecord) -> Self {
        Self {
            record,
            push_acc: None,
            already_phi: false,
            unreachable: false,
            phi_only: false,
        }
    }
}

/// 按 RKS 降序排列记录副本，供 B-n 类展示使用。
/// 排序是稳定的：RKS 相同的记录保持输入顺序。
pub fn sorted_by_rks(records: &[ChartRecord]) -> Vec<ChartRecord> {
    let mut sorted = records.to_vec();
    sorted.sort();
    sorted
}
