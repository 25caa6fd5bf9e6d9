//! 规则种类枚举

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GrammarError;

/// 四类双分组拆分规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuleKind {
    /// 前置引号 + 单词：`"I` -> `"` `I`
    #[serde(rename = "leading-quote-attached-word")]
    LeadingQuote,
    /// 单词 + 后置标点：`SAID,` -> `SAID` `,`
    #[serde(rename = "trailing-punctuation-attached-word")]
    TrailingPunctuation,
    /// 连续标点：`.,"` -> `.` `,"`
    #[serde(rename = "punctuation-run-split")]
    PunctuationRun,
    /// 货币符号 + 金额：`$12.50` -> `$` `12.50`
    #[serde(rename = "currency-amount")]
    CurrencyAmount,
}

impl RuleKind {
    pub const ALL: [RuleKind; 4] = [
        RuleKind::LeadingQuote,
        RuleKind::TrailingPunctuation,
        RuleKind::PunctuationRun,
        RuleKind::CurrencyAmount,
    ];

    /// 规则名（规则表的键）
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::LeadingQuote => "leading-quote-attached-word",
            RuleKind::TrailingPunctuation => "trailing-punctuation-attached-word",
            RuleKind::PunctuationRun => "punctuation-run-split",
            RuleKind::CurrencyAmount => "currency-amount",
        }
    }

    /// 导出键名（常量风格）
    pub fn export_key(&self) -> &'static str {
        match self {
            RuleKind::LeadingQuote => "INITIAL_PUNCTUATION_TOKEN",
            RuleKind::TrailingPunctuation => "FINAL_PUNCTUATION_TOKEN",
            RuleKind::PunctuationRun => "ALL_PUNCTUATION_TOKEN",
            RuleKind::CurrencyAmount => "CURRENCY_AMOUNT_TOKEN",
        }
    }
}

impl Display for RuleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = GrammarError;

    /// 同时接受规则名与导出键名
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        RuleKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name || kind.export_key() == name)
            .ok_or_else(|| GrammarError::UnknownRule(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_names() {
        assert_eq!("currency-amount".parse::<RuleKind>().unwrap(), RuleKind::CurrencyAmount);
        assert_eq!(
            "INITIAL_PUNCTUATION_TOKEN".parse::<RuleKind>().unwrap(),
            RuleKind::LeadingQuote
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "hyphenated-word".parse::<RuleKind>().unwrap_err();
        assert!(matches!(err, GrammarError::UnknownRule(name) if name == "hyphenated-word"));
    }

    #[test]
    fn test_serde_name_matches_display() {
        for kind in RuleKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }
}
