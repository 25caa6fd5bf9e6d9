//! 基础字符片段
//! 所有规则由这里的具名字符类常量组合而成，加载期创建，之后只读

use std::fmt::{self, Display, Formatter};

use crate::config::LetterCase;

/// 具名字符类片段（正则字符类或字面量）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fragment {
    name: &'static str,
    source: &'static str,
}

impl Fragment {
    const fn new(name: &'static str, source: &'static str) -> Self {
        Self { name, source }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 片段的正则原文
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// 按配置选取字母片段
    pub fn letters(case: LetterCase) -> Fragment {
        match case {
            LetterCase::Upper => UPPER_LETTER,
            LetterCase::Mixed => ANY_LETTER,
        }
    }

    pub fn once(self) -> Piece {
        Piece::new(self, Quantifier::One)
    }

    pub fn one_or_more(self) -> Piece {
        Piece::new(self, Quantifier::OneOrMore)
    }

    pub fn optional(self) -> Piece {
        Piece::new(self, Quantifier::ZeroOrOne)
    }

    pub fn up_to(self, max: u8) -> Piece {
        Piece::new(self, Quantifier::UpTo(max))
    }
}

pub const UPPER_LETTER: Fragment = Fragment::new("upper_letter", "[A-Z]");
pub const ANY_LETTER: Fragment = Fragment::new("any_letter", "[A-Za-z]");
pub const DIGIT: Fragment = Fragment::new("digit", "[0-9]");
pub const PERIOD: Fragment = Fragment::new("period", r"\.");
pub const INITIAL_PUNCTUATION: Fragment = Fragment::new("initial_punctuation", r#"['"]"#);
pub const FINAL_PUNCTUATION: Fragment = Fragment::new("final_punctuation", r#"[',!?":.]"#);
pub const CURRENCY_SYMBOL: Fragment = Fragment::new("currency_symbol", "[$£¥]");

/// 片段重复次数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifier {
    One,
    OneOrMore,
    ZeroOrOne,
    /// `{0,n}`
    UpTo(u8),
}

impl Display for Quantifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Quantifier::One => Ok(()),
            Quantifier::OneOrMore => f.write_str("+"),
            Quantifier::ZeroOrOne => f.write_str("?"),
            Quantifier::UpTo(max) => write!(f, "{{0,{}}}", max),
        }
    }
}

/// 片段 + 重复次数，分组的最小组成单元
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub fragment: Fragment,
    pub quantifier: Quantifier,
}

impl Piece {
    pub fn new(fragment: Fragment, quantifier: Quantifier) -> Self {
        Self { fragment, quantifier }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.fragment.source, self.quantifier)
    }
}
