//! 游戏错误处理模块
//!
//! 规则本身不会失败（拒绝拾取是正常结果），这里只处理配置与场景脚本加载时的错误。

use thiserror::Error;

/// 加载配置或场景时可能出现的错误类型
#[derive(Debug, Error)]
pub enum GameError {
    /// IO操作错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON 解析错误
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// 规则配置无效
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// 场景脚本无效
    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),
}

/// 处理游戏错误并转换为用户友好的消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::IoError(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "场景文件不存在".to_string(),
            std::io::ErrorKind::PermissionDenied => "没有权限访问场景文件".to_string(),
            _ => format!("IO错误: {}", e),
        },
        GameError::JsonError(e) => format!("场景文件格式错误 (第{}行): {}", e.line(), e),
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = GameError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(handle_error(&err), "场景文件不存在");
    }

    #[test]
    fn test_json_error_reports_line() {
        let err: GameError = serde_json::from_str::<u32>("\n\nnope").unwrap_err().into();
        assert!(handle_error(&err).contains("第3行"));
    }

    #[test]
    fn test_config_error_passthrough() {
        let err = GameError::InvalidConfig("max_health must not be negative".into());
        assert_eq!(
            handle_error(&err),
            "Invalid config: max_health must not be negative"
        );
    }
}
