//! 规则模块：规则种类、只读规则表、自检样例
pub mod kind;
pub mod sample;
pub mod table;

// 导出核心接口
pub use self::kind::RuleKind;
pub use self::sample::{split_samples, SplitSample};
pub use self::table::{CompiledRule, RuleTable, Split};
