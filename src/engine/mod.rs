pub mod candidates;
pub mod pools;
pub mod push_line;
pub mod selector;
pub mod structure;

pub use candidates::generate_candidates;
pub use pools::{compute_pool_totals, PoolTotals};
pub use push_line::solve_push_line;
pub use selector::{rank_candidates, select_with_quota};
pub use structure::{classify_structure, compute_quota};

use crate::config::{EngineOptions, EPSILON};
use crate::models::push_line::PushLineResult;
use crate::models::record::ChartRecord;
use crate::models::recommendation::RecommendationResult;

/// 完整推荐流水线：推分线 -> 候选 -> 结构诊断 -> 配额 -> 选取。
///
/// 同步纯计算，任何输入下都不报错；记录集为空或已饱和时返回空推荐。
pub fn recommend(records: &[ChartRecord], options: &EngineOptions) -> RecommendationResult {
    let push_line = solve_push_line(records, options);
    recommend_with_push_line(&push_line, options)
}

/// 在已求解的推分线上生成推荐。
/// 调用方若已经为展示计算过 [`PushLineResult`]，可用此入口避免重复求解。
pub fn recommend_with_push_line(
    push_line: &PushLineResult,
    options: &EngineOptions,
) -> RecommendationResult {
    let candidates = generate_candidates(push_line, options);

    let best_roi_main = candidates
        .iter()
        .filter(|c| c.delta_main_pool > EPSILON)
        .map(|c| c.roi)
        .fold(0.0, f64::max);
    let best_roi_ap = candidates
        .iter()
        .filter(|c| c.delta_ap_pool > EPSILON)
        .map(|c| c.roi)
        .fold(0.0, f64::max);

    let structure = classify_structure(best_roi_main, best_roi_ap, options.ratio_threshold);
    let roi_ratio = if best_roi_main > EPSILON && best_roi_ap > EPSILON {
        Some(best_roi_main / best_roi_ap)
    } else {
        None
    };
    let quota = compute_quota(structure, options.limit);

    let mut ranked = candidates.clone();
    rank_candidates(&mut ranked);
    let recommendations = select_with_quota(&ranked, &quota);

    log::debug!(
        "[推分推荐] 候选 {} 条，结构 {:?}，配额 {}/{}/{}，产出 {} 条",
        candidates.len(),
        structure,
        quota.total,
        quota.main_pool_count,
        quota.ap_pool_count,
        recommendations.len()
    );

    RecommendationResult {
        recommendations,
        candidates,
        structure,
        quota,
        best_roi_main,
        best_roi_ap,
        roi_ratio,
    }
}
