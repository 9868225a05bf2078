use std::cmp::Ordering;

use crate::config::{EngineOptions, EPSILON};
use crate::models::record::ChartRecord;

/// 双池总和快照
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolTotals {
    /// 主池：全部记录中 RKS 最高的 K 项之和（仅计 RKS > 0 的记录）
    pub main_pool_sum: f64,
    /// AP 池：满 ACC 记录中 RKS 最高的 M 项之和
    pub ap_pool_sum: f64,
}

/// 池计算用的轻量表示：(谱面RKS, 是否满ACC)。
/// 候选模拟只关心这两个量，避免反复克隆完整记录。
pub(crate) type PoolEntry = (f64, bool);

pub(crate) fn pool_entry(record: &ChartRecord) -> PoolEntry {
    (record.rks, record.acc >= 100.0 - EPSILON)
}

/// 在轻量表示上计算双池总和。
/// 全量排序后截取，预期记录规模（几十到几百条）下无需增量结构。
pub(crate) fn totals_of(entries: &[PoolEntry], options: &EngineOptions) -> PoolTotals {
    let mut main: Vec<f64> = entries
        .iter()
        .map(|&(rks, _)| rks)
        .filter(|r| r.is_finite() && *r > 0.0)
        .collect();
    main.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    let main_pool_sum: f64 = main.iter().take(options.main_pool_size).sum();

    let mut ap: Vec<f64> = entries
        .iter()
        .filter(|&&(rks, is_phi)| is_phi && rks.is_finite())
        .map(|&(rks, _)| rks)
        .collect();
    ap.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    let ap_pool_sum: f64 = ap.iter().take(options.ap_pool_size).sum();

    PoolTotals {
        main_pool_sum,
        ap_pool_sum,
    }
}

/// 计算记录集的主池与 AP 池总和
pub fn compute_pool_totals(records: &[ChartRecord], options: &EngineOptions) -> PoolTotals {
    let entries: Vec<PoolEntry> = records.iter().map(pool_entry).collect();
    totals_of(&entries, options)
}
