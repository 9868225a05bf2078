use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::models::record::{ChartRecord, Difficulty};
use crate::utils::error::AppResult;

/// 成绩导出文件中的单条原始记录
#[derive(Debug, Deserialize)]
struct RawRecord {
    song_id: String,
    song_name: String,
    difficulty: String,
    difficulty_value: f64,
    acc: Option<f64>,
    score: Option<f64>,
}

/// 从 JSON 字符串装载成绩记录。
///
/// 整体不是合法 JSON 时返回错误；单条记录无效（难度未知、歌名为空、
/// 数值非有限）时静默跳过，只记录日志，不中断装载。
pub fn load_records_from_str(data: &str) -> AppResult<Vec<ChartRecord>> {
    let raw: Vec<RawRecord> = serde_json::from_str(data)?;
    let total = raw.len();

    let mut records = Vec::with_capacity(total);
    for entry in raw {
        let Ok(difficulty) = Difficulty::from_str(&entry.difficulty) else {
            log::warn!(
                "跳过无效记录: 未知难度 {} ({})",
                entry.difficulty,
                entry.song_id
            );
            continue;
        };
        if entry.song_name.is_empty() {
            log::warn!("跳过无效记录: 歌曲名为空 ({})", entry.song_id);
            continue;
        }
        let acc = entry.acc.unwrap_or(0.0);
        if !entry.difficulty_value.is_finite() || !acc.is_finite() {
            log::warn!("跳过无效记录: 数值非有限 ({})", entry.song_id);
            continue;
        }

        records.push(ChartRecord::new(
            entry.song_id,
            entry.song_name,
            difficulty,
            entry.difficulty_value,
            acc,
            entry.score,
        ));
    }

    log::info!(
        "已加载 {} 条成绩记录，跳过 {} 条无效记录",
        records.len(),
        total - records.len()
    );
    Ok(records)
}

/// 从文件装载成绩记录
pub fn load_records_from_file<P: AsRef<Path>>(path: P) -> AppResult<Vec<ChartRecord>> {
    let contents = fs::read_to_string(path)?;
    load_records_from_str(&contents)
}
