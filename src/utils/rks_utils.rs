use crate::config::EngineOptions;
use crate::engine::pools::compute_pool_totals;
use crate::models::record::ChartRecord;

// --- RKS 计算辅助函数 ---

/// 计算指定谱面的 RKS 值（acc 以百分比传入，如 98.5 表示 98.5%）。
/// acc < 70 或定数非正时谱面不产生 RKS，返回 0。
pub fn calculate_chart_rks(acc_percent: f64, constant: f64) -> f64 {
    if !acc_percent.is_finite() || !constant.is_finite() {
        return 0.0;
    }
    if acc_percent < 70.0 || constant <= 0.0 {
        return 0.0;
    }
    let acc_factor = ((acc_percent - 55.0) / 45.0).powi(2); // 使用 .powi(2) 更高效
    acc_factor * constant
}

/// 计算达到目标 RKS 所需的最低 ACC（`calculate_chart_rks` 的反函数）。
///
/// - 目标 RKS 非正时返回 70.0（有效域下界）；
/// - 定数非正时返回 +∞，表示无论 ACC 多高都不可能达到；
/// - 其余情况返回 `55 + 45 * sqrt(target / constant)`，下钳到 70。
pub fn acc_required_for_rks(target_rks: f64, constant: f64) -> f64 {
    if !(target_rks > 0.0) {
        return 70.0;
    }
    if !(constant > 0.0) {
        return f64::INFINITY;
    }
    let acc = 55.0 + 45.0 * (target_rks / constant).sqrt();
    acc.max(70.0)
}

/// 计算玩家当前的精确 RKS 与四舍五入（两位小数）后的 RKS
pub fn calculate_player_rks_details(
    records: &[ChartRecord],
    options: &EngineOptions,
) -> (f64, f64) {
    log::debug!("[B30 RKS] 开始计算玩家RKS详情，总成绩数: {}", records.len());

    if records.is_empty() {
        log::debug!("[B30 RKS] 无成绩记录，RKS = 0");
        return (0.0, 0.0);
    }

    let totals = compute_pool_totals(records, options);
    let final_exact_rks =
        (totals.main_pool_sum + totals.ap_pool_sum) / options.total_slots() as f64;
    let final_rounded_rks = (final_exact_rks * 100.0).round() / 100.0;

    log::debug!(
        "[B30 RKS] 最终 RKS 计算: 主池 {:.4} + AP池 {:.4} -> Exact {:.6} / Rounded {:.2}",
        totals.main_pool_sum,
        totals.ap_pool_sum,
        final_exact_rks,
        final_rounded_rks
    );

    (final_exact_rks, final_rounded_rks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::Difficulty;
    use approx::assert_abs_diff_eq;
    use rand::{Rng, SeedableRng};

    #[test]
    fn rks_is_zero_below_70_acc() {
        for acc in [0.0, 54.9, 69.0, 69.999] {
            for constant in [-1.0, 0.0, 7.5, 16.9] {
                assert_eq!(calculate_chart_rks(acc, constant), 0.0, "acc={acc}");
            }
        }
    }

    #[test]
    fn rks_is_zero_for_non_positive_constant() {
        assert_eq!(calculate_chart_rks(98.5, 0.0), 0.0);
        assert_eq!(calculate_chart_rks(98.5, -3.0), 0.0);
    }

    #[test]
    fn rks_handles_non_finite_input() {
        assert_eq!(calculate_chart_rks(f64::NAN, 12.0), 0.0);
        assert_eq!(calculate_chart_rks(95.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn full_acc_rks_equals_constant() {
        assert_abs_diff_eq!(calculate_chart_rks(100.0, 13.7), 13.7, epsilon = 1e-9);
    }

    #[test]
    fn inversion_floors_and_signals() {
        assert_eq!(acc_required_for_rks(0.0, 12.0), 70.0);
        assert_eq!(acc_required_for_rks(-1.0, 12.0), 70.0);
        assert_eq!(acc_required_for_rks(10.0, 0.0), f64::INFINITY);
        assert_eq!(acc_required_for_rks(10.0, -2.0), f64::INFINITY);
        // 定数恰好等于目标 RKS 时需要恰好 100%
        assert_abs_diff_eq!(acc_required_for_rks(12.0, 12.0), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn inversion_round_trips_formula() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(20260829);
        for _ in 0..500 {
            let acc = rng.random_range(70.0..=100.0);
            let constant = rng.random_range(1.0..=17.0);
            let rks = calculate_chart_rks(acc, constant);
            let back = acc_required_for_rks(rks, constant);
            assert_abs_diff_eq!(back, acc, epsilon = 1e-9);
        }
    }

    #[test]
    fn player_rks_details_empty_is_zero() {
        let opts = EngineOptions::default();
        assert_eq!(calculate_player_rks_details(&[], &opts), (0.0, 0.0));
    }

    #[test]
    fn player_rks_details_counts_both_pools() {
        // 小规模参数：主池 2 + AP 池 1，共 3 个槽位
        let opts = EngineOptions {
            main_pool_size: 2,
            ap_pool_size: 1,
            ..EngineOptions::default()
        };
        let mk = |acc: f64, rks: f64| ChartRecord {
            song_id: "s".into(),
            song_name: "S".into(),
            difficulty: Difficulty::IN,
            difficulty_value: 15.0,
            acc,
            score: None,
            rks,
        };
        // 主池取 12 + 9，AP 池取满 ACC 的 9
        let records = vec![mk(95.0, 12.0), mk(100.0, 9.0), mk(90.0, 6.0)];
        let (exact, rounded) = calculate_player_rks_details(&records, &opts);
        assert_abs_diff_eq!(exact, (12.0 + 9.0 + 9.0) / 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rounded, 10.0, epsilon = 1e-9);
    }
}
