//! tokensplit - 英文分词拆分规则表
//!
//! 每条规则都是全锚定、恰好两个捕获分组的正则：整串匹配，分组1 + 分组2 还原原串。
//! 规则表只负责定义与单串拆分，扫描整段文本、规则优先级裁决由外部分词器完成。
//!
//! ```
//! use tokensplit::{build_rule_table, ConfigManager, RuleKind};
//!
//! let table = build_rule_table(&ConfigManager::get_default()).unwrap();
//! let split = table.split(RuleKind::CurrencyAmount, "$12.50").unwrap();
//! assert_eq!((split.head, split.tail), ("$", "12.50"));
//! ```

// 导出全局错误类型
pub use self::error::{GrammarError, GrammarResult};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, GrammarConfig, LetterCase};

// 导出编译模块核心接口
pub use self::compiler::{
    anchor, build_group, build_rule_table, AnchoredPattern, Fragment, Group, Piece, Quantifier,
    RuleCompiler, RuleDefinition,
};

// 导出规则模块核心接口
pub use self::rule::{CompiledRule, RuleKind, RuleTable, Split, SplitSample};

// 声明所有子模块
pub mod compiler;
pub mod config;
pub mod error;
pub mod rule;
pub mod utils;
