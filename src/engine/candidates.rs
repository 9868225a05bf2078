use crate::config::{EngineOptions, EPSILON, MIN_ACC_DELTA};
use crate::engine::pools::{pool_entry, totals_of, PoolEntry};
use crate::models::push_line::PushLineResult;
use crate::models::recommendation::{PoolTag, RecommendationCandidate};
use crate::utils::rks_utils::calculate_chart_rks;

/// 为每条有数值推分目标的记录生成推荐候选。
///
/// 对每个候选，把该记录替换为推分后的假想值，重算双池总和并与基准
/// 作差，得到边际收益与 ROI。边际收益不为正的候选直接丢弃（谱面
/// 自身 RKS 提升但仍在池外时就会发生）。
pub fn generate_candidates(
    push_line: &PushLineResult,
    options: &EngineOptions,
) -> Vec<RecommendationCandidate> {
    let baseline_entries: Vec<PoolEntry> =
        push_line.records.iter().map(|r| pool_entry(&r.record)).collect();
    let baseline = totals_of(&baseline_entries, options);
    let total_slots = options.total_slots() as f64;

    let mut candidates = Vec::new();

    for (index, annotated) in push_line.records.iter().enumerate() {
        let Some(target_acc) = annotated.push_acc else {
            continue;
        };
        let record = &annotated.record;

        let acc_delta = target_acc - record.acc;
        if !(acc_delta > EPSILON) {
            continue;
        }

        let target_rks = calculate_chart_rks(target_acc, record.difficulty_value);
        if !(target_rks > record.rks + EPSILON) {
            continue;
        }

        // 假想记录集：仅替换当前记录的 RKS 与满 ACC 状态
        let mut simulated = baseline_entries.clone();
        simulated[index] = (target_rks, target_acc >= 100.0 - EPSILON);
        let totals = totals_of(&simulated, options);

        let delta_main_pool = totals.main_pool_sum - baseline.main_pool_sum;
        let delta_ap_pool = totals.ap_pool_sum - baseline.ap_pool_sum;
        let overall_gain = (delta_main_pool + delta_ap_pool) / total_slots;
        if !(overall_gain > EPSILON) {
            continue;
        }

        let pool = match (delta_main_pool > EPSILON, delta_ap_pool > EPSILON) {
            (true, true) => PoolTag::Both,
            (true, false) => PoolTag::MainPoolOnly,
            (false, true) => PoolTag::ApPoolOnly,
            // 总收益为正但两池增量都不显著，按无效候选丢弃
            (false, false) => continue,
        };

        let roi = overall_gain / acc_delta.max(MIN_ACC_DELTA);
        if !(roi > EPSILON) {
            continue;
        }

        candidates.push(RecommendationCandidate {
            source_index: index,
            song_id: record.song_id.clone(),
            song_name: record.song_name.clone(),
            difficulty: record.difficulty,
            difficulty_value: record.difficulty_value,
            current_acc: record.acc,
            current_rks: record.rks,
            target_acc,
            target_rks,
            acc_delta,
            delta_main_pool,
            delta_ap_pool,
            overall_gain,
            roi,
            pool,
        });
    }

    log::debug!(
        "[推分候选] 记录 {} 条 -> 候选 {} 条",
        push_line.records.len(),
        candidates.len()
    );

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::push_line::solve_push_line;
    use crate::models::record::{ChartRecord, Difficulty};
    use approx::assert_abs_diff_eq;

    fn record(name: &str, constant: f64, acc: f64) -> ChartRecord {
        ChartRecord::new(
            name.to_lowercase(),
            name.to_string(),
            Difficulty::IN,
            constant,
            acc,
            None,
        )
    }

    /// 小规模参数：推分线取第 2 名，主池 3 + AP 池 1。
    /// 推分线名次低于主池大小，推到线上的候选才会产生主池增量。
    fn small_options() -> EngineOptions {
        EngineOptions {
            push_line_rank: 2,
            main_pool_size: 3,
            ap_pool_size: 1,
            ..EngineOptions::default()
        }
    }

    #[test]
    fn eligible_record_yields_candidate_with_positive_gain() {
        let records = vec![
            record("top", 15.0, 98.0),
            record("mid", 14.0, 95.0),
            record("low", 14.0, 90.0),
        ];
        let options = small_options();
        let push_line = solve_push_line(&records, &options);
        let candidates = generate_candidates(&push_line, &options);

        assert!(!candidates.is_empty());
        for c in &candidates {
            assert!(c.overall_gain > 0.0);
            assert!(c.roi > 0.0);
            assert!(c.acc_delta > 0.0);
            assert!(c.target_rks > c.current_rks);
        }
    }

    #[test]
    fn records_without_numeric_target_are_skipped() {
        let records = vec![
            record("top", 15.0, 98.0),
            record("phi", 14.0, 100.0),  // already_phi
            record("weak", 2.0, 99.0),   // unreachable：定数远低于阈值
        ];
        let options = small_options();
        let push_line = solve_push_line(&records, &options);
        let candidates = generate_candidates(&push_line, &options);
        assert!(candidates
            .iter()
            .all(|c| c.song_name != "phi" && c.song_name != "weak"));
    }

    #[test]
    fn phi_only_records_are_eligible() {
        // 阈值由前两条决定，第三条定数恰等于阈值 -> phi_only，目标 100
        let records = vec![
            record("a", 16.0, 98.0),
            record("b", 15.0, 98.0),
            record("c", 13.696296296296297, 95.0), // 定数 = b 的 RKS（阈值）
        ];
        let options = small_options();
        let push_line = solve_push_line(&records, &options);
        let c = push_line
            .records
            .iter()
            .find(|r| r.record.song_name == "c")
            .unwrap();
        assert!(c.phi_only, "前提：c 应为 phi_only");

        let candidates = generate_candidates(&push_line, &options);
        let cand = candidates
            .iter()
            .find(|c| c.song_name == "c")
            .expect("phi_only 记录应进入候选");
        assert_abs_diff_eq!(cand.target_acc, 100.0, epsilon = 1e-12);
        // 推到 100% 后同时进 AP 池
        assert!(cand.delta_ap_pool > 0.0);
    }

    #[test]
    fn gain_below_pool_cutoff_is_discarded() {
        // small 推到阈值后只是与池内唯一名额打平，主池总和不变，
        // 也到不了 AP 池，总收益为 0，应被丢弃
        let options = EngineOptions {
            push_line_rank: 1,
            main_pool_size: 1,
            ap_pool_size: 1,
            ..EngineOptions::default()
        };
        let records = vec![record("big", 16.0, 99.0), record("small", 15.9, 71.0)];
        let push_line = solve_push_line(&records, &options);
        let small = push_line
            .records
            .iter()
            .find(|r| r.record.song_name == "small")
            .unwrap();
        // 前提：small 有数值目标（定数高于阈值）
        assert!(small.push_acc.is_some());

        let candidates = generate_candidates(&push_line, &options);
        assert!(candidates.iter().all(|c| c.song_name != "small"));
    }

    #[test]
    fn deltas_match_recomputed_pool_totals() {
        let records = vec![
            record("top", 15.0, 98.0),
            record("mid", 14.0, 95.0),
            record("low", 14.0, 90.0),
        ];
        let options = small_options();
        let push_line = solve_push_line(&records, &options);
        let baseline = crate::engine::pools::compute_pool_totals(&records, &options);
        let candidates = generate_candidates(&push_line, &options);

        for c in &candidates {
            let mut simulated = records.clone();
            simulated[c.source_index].acc = c.target_acc;
            simulated[c.source_index].rks = c.target_rks;
            let totals = crate::engine::pools::compute_pool_totals(&simulated, &options);
            assert_abs_diff_eq!(
                c.delta_main_pool,
                totals.main_pool_sum - baseline.main_pool_sum,
                epsilon = 1e-9
            );
            assert_abs_diff_eq!(
                c.delta_ap_pool,
                totals.ap_pool_sum - baseline.ap_pool_sum,
                epsilon = 1e-9
            );
            assert_abs_diff_eq!(
                c.overall_gain,
                (c.delta_main_pool + c.delta_ap_pool) / options.total_slots() as f64,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn roi_denominator_is_floored() {
        // ACC 增量极小的候选，ROI 用下限分母而非真实增量
        let records = vec![
            record("a", 15.0, 98.0),
            record("b", 14.0, 95.0),
            record("tiny", 14.0, 94.999),
        ];
        let options = small_options();
        let push_line = solve_push_line(&records, &options);
        let candidates = generate_candidates(&push_line, &options);
        for c in &candidates {
            if c.acc_delta < MIN_ACC_DELTA {
                assert_abs_diff_eq!(
                    c.roi,
                    c.overall_gain / MIN_ACC_DELTA,
                    epsilon = 1e-12
                );
            }
        }
    }
}
