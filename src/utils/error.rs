use thiserror::Error;

/// 记录装载层的错误类型。
/// 计算引擎本身从不报错：无效输入一律降级为“不可参与计算”，
/// 这里只覆盖读取与解析成绩数据时可能出现的失败。
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serde JSON错误: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("验证错误: {0}")]
    ValidationError(String),
}

pub type AppResult<T> = Result<T, AppError>;
