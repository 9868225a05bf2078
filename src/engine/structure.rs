use crate::config::EPSILON;
use crate::models::recommendation::{RecommendationQuota, StructureStatus};

/// 根据双池各自的最优 ROI 判断当前短板。
///
/// 某一池没有可推分候选时，其最优 ROI 为 0。主池 ROI 显著高于
/// AP 池（比值达到阈值）说明 AP 池是相对欠开发的一侧，反之亦然。
pub fn classify_structure(
    best_roi_main: f64,
    best_roi_ap: f64,
    ratio_threshold: f64,
) -> StructureStatus {
    let main_available = best_roi_main > EPSILON;
    let ap_available = best_roi_ap > EPSILON;

    match (main_available, ap_available) {
        (false, false) => StructureStatus::Insufficient,
        (true, false) => StructureStatus::ApPoolLow,
        (false, true) => StructureStatus::MainPoolLow,
        (true, true) => {
            let ratio = best_roi_main / best_roi_ap;
            if ratio >= ratio_threshold {
                StructureStatus::ApPoolLow
            } else if ratio <= 1.0 / ratio_threshold {
                StructureStatus::MainPoolLow
            } else {
                StructureStatus::Balanced
            }
        }
    }
}

/// 按结构诊断结果把推荐总量拆成双池配额。
///
/// 权重表：AP 池短板 2:6、主池短板 6:2、均衡 4:4。
/// 候选不足（insufficient）时不做保底分配，由选择器兜底全排名填充。
pub fn compute_quota(status: StructureStatus, limit: usize) -> RecommendationQuota {
    let total = limit.max(1);

    let (main_weight, ap_weight) = match status {
        StructureStatus::Insufficient => {
            return RecommendationQuota {
                total,
                main_pool_count: 0,
                ap_pool_count: 0,
            };
        }
        StructureStatus::ApPoolLow => (2.0, 6.0),
        StructureStatus::MainPoolLow => (6.0, 2.0),
        StructureStatus::Balanced => (4.0, 4.0),
    };

    let main_pool_count =
        ((total as f64 * main_weight / (main_weight + ap_weight)).round() as usize).min(total);

    RecommendationQuota {
        total,
        main_pool_count,
        ap_pool_count: total - main_pool_count,
    }
}
