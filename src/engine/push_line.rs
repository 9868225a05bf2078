use crate::config::{EngineOptions, EPSILON};
use crate::models::push_line::PushLineResult;
use crate::models::record::{AnnotatedRecord, ChartRecord};
use crate::utils::rks_utils::acc_required_for_rks;

/// 求解当前推分线，并为每条记录标注越线所需的 ACC。
///
/// 纯函数：输入不被修改，输出是带标注的记录副本（保持输入顺序）。
/// 阈值取降序第 `push_line_rank` 名的 RKS；同 RKS 记录按输入顺序稳定排序。
pub fn solve_push_line(records: &[ChartRecord], options: &EngineOptions) -> PushLineResult {
    let threshold_rank = options.push_line_rank;
    let threshold_rating = threshold_rating(records, threshold_rank);

    log::debug!(
        "[推分线] 成绩数 {}，第 {} 名阈值 = {:.4}",
        records.len(),
        threshold_rank,
        threshold_rating
    );

    let annotated = records
        .iter()
        .map(|r| annotate(r.clone(), threshold_rating))
        .collect();

    PushLineResult {
        threshold_rank,
        threshold_rating,
        records: annotated,
    }
}

/// 第 `rank` 名的 RKS；成绩数不足时为 0
fn threshold_rating(records: &[ChartRecord], rank: usize) -> f64 {
    if rank == 0 || records.len() < rank {
        return 0.0;
    }
    let mut sorted = records.to_vec();
    sorted.sort(); // ChartRecord 的 Ord 按 RKS 降序，稳定排序保持同分输入顺序
    let rating = sorted[rank - 1].rks;
    if rating.is_finite() {
        rating
    } else {
        0.0
    }
}

fn annotate(record: ChartRecord, threshold_rating: f64) -> AnnotatedRecord {
    // 数值异常的记录不参与任何推分计算
    if !record.acc.is_finite() || !record.difficulty_value.is_finite() {
        return AnnotatedRecord::plain(record);
    }

    // 已经满 ACC：优先于其他一切判定
    if record.acc >= 100.0 - EPSILON {
        return AnnotatedRecord {
            record,
            push_acc: None,
            already_phi: true,
            unreachable: false,
            phi_only: false,
        };
    }

    // 成绩数不足，推分线不存在，无法给出目标
    if threshold_rating <= 0.0 {
        return AnnotatedRecord::plain(record);
    }

    let required = acc_required_for_rks(threshold_rating, record.difficulty_value);

    if !required.is_finite() || required > 100.0 + EPSILON {
        return AnnotatedRecord {
            record,
            push_acc: None,
            already_phi: false,
            unreachable: true,
            phi_only: false,
        };
    }

    if required >= 100.0 - EPSILON {
        return AnnotatedRecord {
            record,
            push_acc: Some(100.0),
            already_phi: false,
            unreachable: false,
            phi_only: true,
        };
    }

    AnnotatedRecord {
        record,
        push_acc: Some(required),
        already_phi: false,
        unreachable: false,
        phi_only: false,
    }
}
