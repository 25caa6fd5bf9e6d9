//! 规则编译器核心
//! 负责将字符片段组装为双分组规则、编译正则，并在交付前完成自检

use std::time::Instant;

use super::fragment::{
    Fragment, CURRENCY_SYMBOL, DIGIT, FINAL_PUNCTUATION, INITIAL_PUNCTUATION, PERIOD,
};
use super::pattern::{build_group, RuleDefinition};
use crate::config::GrammarConfig;
use crate::error::{GrammarError, GrammarResult};
use crate::rule::sample::{split_samples, UNMATCHED_SAMPLES};
use crate::rule::table::{CompiledRule, RuleTable};
use crate::rule::RuleKind;
use crate::utils::logging::{grammar_debug, grammar_warn};

/// 货币金额小数部分的最大位数
const MAX_FRACTION_DIGITS: u8 = 2;

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 单条规则的未锚定定义
    pub fn definition(kind: RuleKind, config: &GrammarConfig) -> RuleDefinition {
        let letters = Fragment::letters(config.letter_case);
        let (first, second) = match kind {
            RuleKind::LeadingQuote => (
                build_group([INITIAL_PUNCTUATION.once()]),
                build_group([letters.one_or_more()]),
            ),
            RuleKind::TrailingPunctuation => (
                build_group([letters.one_or_more()]),
                build_group([FINAL_PUNCTUATION.one_or_more()]),
            ),
            RuleKind::PunctuationRun => (
                build_group([FINAL_PUNCTUATION.once()]),
                build_group([FINAL_PUNCTUATION.one_or_more()]),
            ),
            RuleKind::CurrencyAmount => (
                build_group([CURRENCY_SYMBOL.once()]),
                build_group([
                    DIGIT.one_or_more(),
                    PERIOD.optional(),
                    DIGIT.up_to(MAX_FRACTION_DIGITS),
                ]),
            ),
        };
        RuleDefinition::new(kind, first, second)
    }

    /// 全部规则的未锚定定义（按 RuleKind::ALL 顺序）
    pub fn definitions(config: &GrammarConfig) -> Vec<RuleDefinition> {
        RuleKind::ALL
            .into_iter()
            .map(|kind| Self::definition(kind, config))
            .collect()
    }

    /// 编译规则表
    pub fn compile(config: &GrammarConfig) -> GrammarResult<RuleTable> {
        Self::assemble(config, Self::definitions(config))
    }

    /// 编译给定定义并自检；自检失败则整张表作废，不交付给调用方
    pub(crate) fn assemble(
        config: &GrammarConfig,
        definitions: Vec<RuleDefinition>,
    ) -> GrammarResult<RuleTable> {
        let start = Instant::now();

        // 1. 编译每条规则
        let mut rules = Vec::with_capacity(definitions.len());
        for definition in definitions {
            let rule = CompiledRule::compile(definition)?;
            if config.verbose {
                grammar_debug!(
                    "规则编译完成：{} -> {} | 片段: {}",
                    rule.kind,
                    rule.pattern,
                    rule.definition.fragment_names().join(" + ")
                );
            }
            rules.push(rule);
        }
        let table = RuleTable::from_rules(config.clone(), rules);

        // 2. 交付前自检
        Self::verify(&table).inspect_err(|e| {
            grammar_warn!("规则表自检失败：{}", e);
        })?;

        grammar_debug!(
            "✅ 规则表构建完成，共{}条规则，字母范围{:?}，总耗时{:?}",
            table.len(),
            config.letter_case,
            start.elapsed()
        );
        Ok(table)
    }

    /// 自检：规则齐全、恰好两个捕获分组、全锚定、样例拆分可还原
    pub fn verify(table: &RuleTable) -> GrammarResult<()> {
        for kind in RuleKind::ALL {
            let rule = table
                .get(kind)
                .ok_or_else(|| GrammarError::invariant(kind, "rule missing from table"))?;
            Self::verify_shape(rule)?;
        }

        for sample in split_samples(table.config().letter_case) {
            let Some(rule) = table.get(sample.kind) else {
                return Err(GrammarError::invariant(sample.kind, "rule missing from table"));
            };
            let split = rule.split(sample.input).ok_or_else(|| {
                GrammarError::invariant(
                    sample.kind,
                    format!("sample {:?} did not match {}", sample.input, rule.pattern),
                )
            })?;

            if split.head.len() + split.tail.len() != sample.input.len()
                || format!("{}{}", split.head, split.tail) != sample.input
            {
                return Err(GrammarError::invariant(
                    sample.kind,
                    format!(
                        "groups {:?} + {:?} do not rebuild {:?}",
                        split.head, split.tail, sample.input
                    ),
                ));
            }
            if split.head != sample.head || split.tail != sample.tail {
                return Err(GrammarError::invariant(
                    sample.kind,
                    format!(
                        "sample {:?} split as {:?} + {:?}, expected {:?} + {:?}",
                        sample.input, split.head, split.tail, sample.head, sample.tail
                    ),
                ));
            }

            // 嵌入更长的串后必须失配
            for wrapped in [format!(" {}", sample.input), format!("{} ", sample.input)] {
                if rule.is_match(&wrapped) {
                    return Err(GrammarError::invariant(
                        sample.kind,
                        format!("pattern matched inside larger string {:?}", wrapped),
                    ));
                }
            }
        }

        for input in UNMATCHED_SAMPLES {
            if let Some(rule) = table.iter().find(|rule| rule.is_match(input)) {
                return Err(GrammarError::invariant(
                    rule.kind,
                    format!("plain word {:?} must not match", input),
                ));
            }
        }

        Ok(())
    }

    fn verify_shape(rule: &CompiledRule) -> GrammarResult<()> {
        // 整体匹配 + 两个分组
        let captures = rule.regex().captures_len();
        if captures != 3 {
            return Err(GrammarError::invariant(
                rule.kind,
                format!("expected 2 capture groups, found {}", captures - 1),
            ));
        }
        let pattern = rule.pattern.as_str();
        if !pattern.starts_with('^') || !pattern.ends_with('$') {
            return Err(GrammarError::invariant(
                rule.kind,
                format!("pattern {} is not fully anchored", pattern),
            ));
        }
        Ok(())
    }
}

/// 构建规则表（四条规则，均为全锚定双分组模式）
pub fn build_rule_table(config: &GrammarConfig) -> GrammarResult<RuleTable> {
    RuleCompiler::compile(config)
}
