//! Phigros 推分线与推分推荐计算引擎。
//!
//! 输入为已拉取到内存的单玩家成绩记录列表，输出为纯派生数据：
//! 每条记录的推分标注（展示用）与按 ROI 排名、双池配额约束的推荐
//! 列表。引擎本身同步、无 I/O、不持有跨调用状态。

pub mod config;
pub mod engine;
pub mod models;
pub mod utils;

pub use config::{EngineOptions, EPSILON, MIN_ACC_DELTA};
pub use engine::{
    compute_pool_totals, recommend, recommend_with_push_line, solve_push_line, PoolTotals,
};
pub use models::{
    sorted_by_rks, AnnotatedRecord, ChartRecord, Difficulty, PoolTag, PushLineResult,
    RecommendationCandidate, RecommendationQuota, RecommendationResult, StructureStatus,
};
pub use utils::error::{AppError, AppResult};
pub use utils::rks_utils::{
    acc_required_for_rks, calculate_chart_rks, calculate_player_rks_details,
};
