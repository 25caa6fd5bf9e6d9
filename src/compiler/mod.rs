//! 编译模块：字符片段 -> 分组 -> 双分组规则 -> 全锚定正则
pub mod fragment;
pub mod pattern;
pub mod compiler;

pub use self::fragment::{Fragment, Piece, Quantifier};
pub use self::pattern::{anchor, build_group, AnchoredPattern, Group, RuleDefinition};
pub use self::compiler::{build_rule_table, RuleCompiler};
