//! 规则表：规则名 -> 全锚定双分组模式
//! 构建后只读，可在任意线程间共享

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::OnceCell;
use regex::{Regex, RegexSet};

use super::kind::RuleKind;
use crate::compiler::pattern::{AnchoredPattern, RuleDefinition};
use crate::config::GrammarConfig;
use crate::error::GrammarResult;
use crate::utils::logging::grammar_debug;

/// 拆分结果：两段均借用自输入，`head + tail == input`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    pub head: &'a str,
    pub tail: &'a str,
}

/// 编译后的单条规则
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub kind: RuleKind,
    pub definition: RuleDefinition,
    pub pattern: AnchoredPattern,
    regex: Regex,
}

impl CompiledRule {
    pub(crate) fn compile(definition: RuleDefinition) -> GrammarResult<Self> {
        let pattern = definition.anchored();
        let regex = Regex::new(pattern.as_str())?;
        Ok(Self {
            kind: definition.kind,
            definition,
            pattern,
            regex,
        })
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    #[inline]
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// 在分组1/分组2的边界处拆分；不匹配返回 None
    pub fn split<'a>(&self, input: &'a str) -> Option<Split<'a>> {
        let caps = self.regex.captures(input)?;
        let head = caps.get(1)?.as_str();
        let tail = caps.get(2)?.as_str();
        Some(Split { head, tail })
    }
}

/// 只读规则表
#[derive(Debug)]
pub struct RuleTable {
    config: GrammarConfig,
    rules: HashMap<RuleKind, CompiledRule>,
    // 懒加载的多规则匹配集合，顺序与 RuleKind::ALL 一致
    rule_set: OnceCell<RegexSet>,
}

impl RuleTable {
    pub(crate) fn from_rules(config: GrammarConfig, rules: Vec<CompiledRule>) -> Self {
        Self {
            config,
            rules: rules.into_iter().map(|rule| (rule.kind, rule)).collect(),
            rule_set: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &GrammarConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, kind: RuleKind) -> Option<&CompiledRule> {
        self.rules.get(&kind)
    }

    /// 按 RuleKind::ALL 的固定顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> + '_ {
        RuleKind::ALL.iter().filter_map(|kind| self.rules.get(kind))
    }

    /// 对外导出的规则表：规则名 -> 全锚定模式
    pub fn patterns(&self) -> BTreeMap<&'static str, &str> {
        self.iter()
            .map(|rule| (rule.kind.as_str(), rule.pattern.as_str()))
            .collect()
    }

    /// 未锚定的分组对定义：规则名 -> (分组1, 分组2)
    pub fn definitions(&self) -> BTreeMap<&'static str, (String, String)> {
        self.iter()
            .map(|rule| {
                let def = &rule.definition;
                (rule.kind.as_str(), (def.first.to_string(), def.second.to_string()))
            })
            .collect()
    }

    /// 用指定规则拆分单个候选串
    pub fn split<'a>(&self, kind: RuleKind, input: &'a str) -> Option<Split<'a>> {
        let rule = self.rules.get(&kind)?;
        let split = rule.split(input);
        grammar_debug!(
            "Rule split | Rule: {} | Input: {:?} | Hit: {}",
            kind,
            input,
            split.is_some()
        );
        split
    }

    /// 列出所有命中该候选串的规则（不做优先级裁决）
    pub fn matching(&self, input: &str) -> GrammarResult<Vec<RuleKind>> {
        let set = self
            .rule_set
            .get_or_try_init(|| RegexSet::new(self.iter().map(|rule| rule.pattern.as_str())))?;
        let kinds: Vec<RuleKind> = self.iter().map(|rule| rule.kind).collect();
        Ok(set.matches(input).into_iter().map(|idx| kinds[idx]).collect())
    }

    pub fn to_json(&self) -> GrammarResult<String> {
        Ok(serde_json::to_string(&self.patterns())?)
    }

    pub fn to_json_pretty(&self) -> GrammarResult<String> {
        Ok(serde_json::to_string_pretty(&self.patterns())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::build_rule_table;
    use crate::config::{ConfigManager, LetterCase};

    fn default_table() -> RuleTable {
        build_rule_table(&ConfigManager::get_default()).unwrap()
    }

    fn mixed_table() -> RuleTable {
        let config = ConfigManager::custom().letter_case(LetterCase::Mixed).build();
        build_rule_table(&config).unwrap()
    }

    fn assert_split(table: &RuleTable, kind: RuleKind, input: &str, head: &str, tail: &str) {
        let split = table
            .split(kind, input)
            .unwrap_or_else(|| panic!("{} should split {:?}", kind, input));
        assert_eq!(split, Split { head, tail });
    }

    #[test]
    fn test_concrete_splits() {
        let table = default_table();
        assert_split(&table, RuleKind::LeadingQuote, "\"I", "\"", "I");
        assert_split(&table, RuleKind::TrailingPunctuation, "SAID,", "SAID", ",");
        assert_split(&table, RuleKind::CurrencyAmount, "$4", "$", "4");
        assert_split(&table, RuleKind::CurrencyAmount, "$12.50", "$", "12.50");
        assert_split(&table, RuleKind::PunctuationRun, ".,\"", ".", ",\"");
    }

    #[test]
    fn test_lowercase_word_with_mixed_case() {
        let table = mixed_table();
        assert_split(&table, RuleKind::TrailingPunctuation, "said,", "said", ",");
    }

    #[test]
    fn test_uppercase_rules_reject_lowercase() {
        let table = default_table();
        assert!(table.split(RuleKind::TrailingPunctuation, "said,").is_none());
        assert!(table.split(RuleKind::LeadingQuote, "\"i").is_none());
    }

    #[test]
    fn test_plain_word_matches_nothing() {
        for table in [default_table(), mixed_table()] {
            assert!(table.iter().all(|rule| rule.split("hello").is_none()));
            assert!(table.matching("hello").unwrap().is_empty());
        }
    }

    #[test]
    fn test_groups_rebuild_input() {
        let table = mixed_table();
        let inputs = [
            "\"I", "'Tis", "said,", "WHAT?!\"", "end.", ".,\"", "!!!", "$4", "$4.", "£0.5",
            "¥12345", "$12.50",
        ];
        for input in inputs {
            for rule in table.iter() {
                if let Some(split) = rule.split(input) {
                    assert_eq!(format!("{}{}", split.head, split.tail), input);
                    assert!(!split.head.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_patterns_are_anchored() {
        let table = default_table();
        // 合法子串嵌入更长的串中后均不能命中
        let cases = [
            (RuleKind::LeadingQuote, "x\"I"),
            (RuleKind::LeadingQuote, "\"I,"),
            (RuleKind::TrailingPunctuation, "SAID,X"),
            (RuleKind::PunctuationRun, "A.,"),
            (RuleKind::CurrencyAmount, "$4$"),
            (RuleKind::CurrencyAmount, "US$4"),
            (RuleKind::CurrencyAmount, "$12.505"),
        ];
        for (kind, input) in cases {
            assert!(!table.get(kind).unwrap().is_match(input), "{} matched {:?}", kind, input);
        }
    }

    #[test]
    fn test_currency_edge_cases() {
        let table = default_table();
        // 末尾孤立小数点被文法接受
        assert_split(&table, RuleKind::CurrencyAmount, "$4.", "$", "4.");
        assert_split(&table, RuleKind::CurrencyAmount, "£7.5", "£", "7.5");
        assert!(table.split(RuleKind::CurrencyAmount, "$.50").is_none());
        assert!(table.split(RuleKind::CurrencyAmount, "€4").is_none());
    }

    #[test]
    fn test_matching_reports_every_hit() {
        let table = default_table();
        assert_eq!(table.matching("$12.50").unwrap(), vec![RuleKind::CurrencyAmount]);
        // 纯引号串只命中连续标点规则
        assert_eq!(table.matching("'\"").unwrap(), vec![RuleKind::PunctuationRun]);
        assert_eq!(
            table.matching("\"I").unwrap(),
            vec![RuleKind::LeadingQuote]
        );
    }

    #[test]
    fn test_exported_mapping() {
        let table = default_table();
        let patterns = table.patterns();
        assert_eq!(patterns.len(), 4);
        assert_eq!(patterns["currency-amount"], r"^([$£¥])([0-9]+\.?[0-9]{0,2})$");

        let json: BTreeMap<String, String> = serde_json::from_str(&table.to_json().unwrap()).unwrap();
        assert_eq!(json.len(), 4);
        assert_eq!(json["leading-quote-attached-word"], r#"^(['"])([A-Z]+)$"#);

        let defs = table.definitions();
        assert_eq!(
            defs["punctuation-run-split"],
            (r#"([',!?":.])"#.to_string(), r#"([',!?":.]+)"#.to_string())
        );
    }

    #[test]
    fn test_table_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RuleTable>();
    }
}
