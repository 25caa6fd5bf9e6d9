//! 规则自检样例
//! 构建规则表时逐条校验：样例必须被对应规则拆成恰好两段，且两段拼接还原原串

use crate::config::LetterCase;

use super::kind::RuleKind;

/// 已知拆分结果的样例
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSample {
    pub kind: RuleKind,
    pub input: &'static str,
    pub head: &'static str,
    pub tail: &'static str,
}

const fn sample(kind: RuleKind, input: &'static str, head: &'static str, tail: &'static str) -> SplitSample {
    SplitSample { kind, input, head, tail }
}

const COMMON_SAMPLES: &[SplitSample] = &[
    sample(RuleKind::LeadingQuote, "\"I", "\"", "I"),
    sample(RuleKind::LeadingQuote, "'TWAS", "'", "TWAS"),
    sample(RuleKind::TrailingPunctuation, "SAID,", "SAID", ","),
    sample(RuleKind::TrailingPunctuation, "WHAT?!\"", "WHAT", "?!\""),
    sample(RuleKind::PunctuationRun, ".,\"", ".", ",\""),
    sample(RuleKind::PunctuationRun, "!?", "!", "?"),
    sample(RuleKind::CurrencyAmount, "$4", "$", "4"),
    sample(RuleKind::CurrencyAmount, "$12.50", "$", "12.50"),
    sample(RuleKind::CurrencyAmount, "£7.5", "£", "7.5"),
    sample(RuleKind::CurrencyAmount, "¥1000", "¥", "1000"),
];

const MIXED_CASE_SAMPLES: &[SplitSample] = &[
    sample(RuleKind::TrailingPunctuation, "said,", "said", ","),
    sample(RuleKind::LeadingQuote, "\"Well", "\"", "Well"),
];

/// 任何规则都不应命中的输入（普通单词，无附着标点/货币）
pub const UNMATCHED_SAMPLES: &[&str] = &["hello"];

/// 指定大小写配置下的全部正向样例
pub fn split_samples(case: LetterCase) -> Vec<SplitSample> {
    let mut samples = COMMON_SAMPLES.to_vec();
    if case == LetterCase::Mixed {
        samples.extend_from_slice(MIXED_CASE_SAMPLES);
    }
    samples
}
