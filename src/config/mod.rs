use serde::{Deserialize, Serialize};

/// 全引擎统一的浮点比较精度。
/// 推分线求解与候选生成必须使用同一个精度，否则处于边界上的成绩
/// 会在两个阶段被判成不同类别。
pub const EPSILON: f64 = 1e-6;

/// ROI 分母下限（ACC 百分点）。
/// 推分增量趋近于零时，ROI 会无界放大，这里统一钳到该下限。
pub const MIN_ACC_DELTA: f64 = 0.01;

/// 推分引擎的可调参数。
///
/// 所有字段均有默认值，对应游戏当前的 RKS 组成（Best 27 + AP Top 3）。
/// 测试时可以传入小规模参数单独验证各个组件。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// 推荐列表的最大条数
    pub limit: usize,
    /// 双池 ROI 失衡判定阈值
    pub ratio_threshold: f64,
    /// 推分线取第几名的 RKS 作为阈值
    pub push_line_rank: usize,
    /// 主池大小（Best N）
    pub main_pool_size: usize,
    /// AP 池大小（AP Top N）
    pub ap_pool_size: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            limit: 8,
            ratio_threshold: 1.8,
            push_line_rank: 27,
            main_pool_size: 27,
            ap_pool_size: 3,
        }
    }
}

impl EngineOptions {
    /// 参与总 RKS 的槽位数（主池 + AP 池），作为边际收益的归一化分母
    pub fn total_slots(&self) -> usize {
        self.main_pool_size + self.ap_pool_size
    }
}
