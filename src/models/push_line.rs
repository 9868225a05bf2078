use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::record::AnnotatedRecord;

/// 推分线计算结果
/// 每次调用重新计算，不做跨调用缓存（缓存属于调用方的职责）。
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PushLineResult {
    /// 推分线取的名次（第 N 名）
    pub threshold_rank: usize,
    /// 推分线 RKS 阈值；成绩数不足 N 时为 0
    pub threshold_rating: f64,
    /// 带推分标注的记录，保持输入顺序
    pub records: Vec<AnnotatedRecord>,
}
