use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::record::Difficulty;

/// 候选推分对所属的收益池
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PoolTag {
    /// 仅提升主池（Best N）总和
    #[serde(rename = "main_pool_only")]
    MainPoolOnly,
    /// 仅提升 AP 池（AP Top N）总和
    #[serde(rename = "ap_pool_only")]
    ApPoolOnly,
    /// 两个池同时受益
    #[serde(rename = "both")]
    Both,
}

/// 双池结构诊断结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StructureStatus {
    /// 两个池都没有可推分的候选
    Insufficient,
    /// AP 池是当前短板，应优先补 AP
    ApPoolLow,
    /// 主池是当前短板，应优先推主池
    MainPoolLow,
    /// 双池收益相当
    Balanced,
}

/// 单条推分推荐候选。
/// 每次调用临时生成，产出排名列表后即丢弃，不做持久化。
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecommendationCandidate {
    /// 对应输入记录的下标，用于去重
    pub source_index: usize,
    /// 歌曲ID
    pub song_id: String,
    /// 歌曲名称
    pub song_name: String,
    /// 难度级别
    pub difficulty: Difficulty,
    /// 难度定数
    pub difficulty_value: f64,
    /// 当前 ACC
    pub current_acc: f64,
    /// 当前谱面RKS
    pub current_rks: f64,
    /// 目标 ACC（越线所需）
    pub target_acc: f64,
    /// 目标谱面RKS
    pub target_rks: f64,
    /// 需要提升的 ACC 增量
    pub acc_delta: f64,
    /// 对主池总和的边际贡献
    pub delta_main_pool: f64,
    /// 对 AP 池总和的边际贡献
    pub delta_ap_pool: f64,
    /// 对玩家总 RKS 的边际收益（按槽位数归一化）
    pub overall_gain: f64,
    /// 单位 ACC 增量的总收益
    pub roi: f64,
    /// 收益池分类
    pub pool: PoolTag,
}

/// 推荐配额：两个池各保证多少条推荐
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationQuota {
    /// 推荐总条数上限
    pub total: usize,
    /// 主池保底条数
    pub main_pool_count: usize,
    /// AP 池保底条数
    pub ap_pool_count: usize,
}

/// 推荐引擎的完整输出，纯数据，无持久化语义
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecommendationResult {
    /// 按配额与 ROI 选出的最终推荐列表
    pub recommendations: Vec<RecommendationCandidate>,
    /// 全部候选（生成顺序，未排名），供调用方兜底使用
    pub candidates: Vec<RecommendationCandidate>,
    /// 双池结构诊断
    pub structure: StructureStatus,
    /// 实际使用的配额
    pub quota: RecommendationQuota,
    /// 主池最优 ROI（无候选时为 0）
    pub best_roi_main: f64,
    /// AP 池最优 ROI（无候选时为 0）
    pub best_roi_ap: f64,
    /// 主池与 AP 池最优 ROI 之比；任一池无候选时为 None
    pub roi_ratio: Option<f64>,
}
