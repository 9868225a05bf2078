use std::collections::HashSet;

use crate::config::EPSILON;
use crate::models::recommendation::{RecommendationCandidate, RecommendationQuota};

/// 候选全局排名。
/// 排序键依次为：ROI 降序、总收益降序、ACC 增量升序（优先便宜的推分）、
/// 目标 ACC 升序、歌曲名字典序（确定性兜底）。
pub fn rank_candidates(candidates: &mut [RecommendationCandidate]) {
    candidates.sort_by(|a, b| {
        b.roi
            .total_cmp(&a.roi)
            .then_with(|| b.overall_gain.total_cmp(&a.overall_gain))
            .then_with(|| a.acc_delta.total_cmp(&b.acc_delta))
            .then_with(|| a.target_acc.total_cmp(&b.target_acc))
            .then_with(|| a.song_name.cmp(&b.song_name))
    });
}

/// 按配额从排名列表中贪心选取推荐。
///
/// 三轮遍历，均按全局排名顺序、按来源下标去重（一条物理记录最多
/// 推荐一次）：先补主池保底，再补 AP 池保底（累计上限），最后不分
/// 池补满到总量。结果不超过 `quota.total` 条。
pub fn select_with_quota(
    ranked: &[RecommendationCandidate],
    quota: &RecommendationQuota,
) -> Vec<RecommendationCandidate> {
    let mut selected: Vec<RecommendationCandidate> = Vec::with_capacity(quota.total);
    let mut taken: HashSet<usize> = HashSet::with_capacity(quota.total);

    // 第一轮：主池保底
    let main_cap = quota.main_pool_count.min(quota.total);
    for candidate in ranked {
        if selected.len() >= main_cap {
            break;
        }
        if taken.contains(&candidate.source_index) {
            continue;
        }
        if candidate.delta_main_pool > EPSILON {
            taken.insert(candidate.source_index);
            selected.push(candidate.clone());
        }
    }

    // 第二轮：AP 池保底，上限为两池保底之和（不超过总量）
    let ap_cap = (quota.main_pool_count + quota.ap_pool_count).min(quota.total);
    for candidate in ranked {
        if selected.len() >= ap_cap {
            break;
        }
        if taken.contains(&candidate.source_index) {
            continue;
        }
        if candidate.delta_ap_pool > EPSILON {
            taken.insert(candidate.source_index);
            selected.push(candidate.clone());
        }
    }

    // 第三轮：不分池补满
    for candidate in ranked {
        if selected.len() >= quota.total {
            break;
        }
        if taken.contains(&candidate.source_index) {
            continue;
        }
        taken.insert(candidate.source_index);
        selected.push(candidate.clone());
    }

    selected.truncate(quota.total);
    selected
}
