//! 全局配置管理,存储规则表构建时的所有可配置项

use serde::{Deserialize, Serialize};

/// 字母片段的大小写范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterCase {
    /// 仅大写拉丁字母 `[A-Z]`
    #[default]
    Upper,
    /// 大小写拉丁字母 `[A-Za-z]`
    Mixed,
}

/// 规则表构建配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarConfig {
    // 字母规则使用的大小写范围
    pub letter_case: LetterCase,
    // 是否输出每条规则的详细日志
    pub verbose: bool,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            letter_case: LetterCase::Upper,
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GrammarConfig {
        GrammarConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GrammarConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GrammarConfig::default(),
        }
    }

    pub fn letter_case(mut self, letter_case: LetterCase) -> Self {
        self.config.letter_case = letter_case;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GrammarConfig {
        self.config
    }
}
