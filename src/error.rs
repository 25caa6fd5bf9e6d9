//! 全局错误类型定义

use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

use crate::rule::RuleKind;

#[derive(Error, Debug)]
pub enum GrammarError {
    // 规则构建相关错误
    /// 规则不变量被破坏（双分组/全锚定/拼接还原任一不成立），属于致命错误
    #[error("Rule invariant violated [{rule}]: {detail}")]
    InvariantViolation { rule: RuleKind, detail: String },
    #[error("Regex compilation failed: {0}")]
    RegexCompileError(#[from] RegexError),

    // 查询相关错误
    #[error("Unknown rule name: {0}")]
    UnknownRule(String),

    // 序列化错误
    #[error("JSON serialization failed: {0}")]
    JsonError(#[from] SerdeJsonError),
}

impl GrammarError {
    pub(crate) fn invariant(rule: RuleKind, detail: impl Into<String>) -> Self {
        GrammarError::InvariantViolation {
            rule,
            detail: detail.into(),
        }
    }
}

// 全局Result类型
pub type GrammarResult<T> = Result<T, GrammarError>;
