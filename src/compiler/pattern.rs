//! 分组与规则定义模型
//! 片段 -> 分组 -> 双分组规则 -> 全锚定模式，结构上保证「恰好两个分组」与「全锚定」

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use super::fragment::Piece;
use crate::rule::RuleKind;

const BOS: &str = "^";
const EOS: &str = "$";
const OPEN_GROUP: char = '(';
const CLOSE_GROUP: char = ')';

/// 捕获分组
/// 只能由片段组成，不能嵌套分组，因此每个分组恰好贡献一个捕获
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Group {
    pieces: Vec<Piece>,
}

impl Group {
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// 分组内部正则（不含括号）
    pub fn inner(&self) -> String {
        self.pieces.iter().map(Piece::to_string).collect()
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", OPEN_GROUP, self.inner(), CLOSE_GROUP)
    }
}

/// 将子模式包装为一个捕获单元
pub fn build_group<I>(pieces: I) -> Group
where
    I: IntoIterator<Item = Piece>,
{
    Group {
        pieces: pieces.into_iter().collect(),
    }
}

/// 全锚定模式，仅能通过 [`anchor`] 构造
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AnchoredPattern(String);

impl AnchoredPattern {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AnchoredPattern {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for AnchoredPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 首尾加锚点，强制匹配整个输入
pub fn anchor(pattern: &str) -> AnchoredPattern {
    let mut anchored = String::with_capacity(pattern.len() + BOS.len() + EOS.len());
    anchored.push_str(BOS);
    anchored.push_str(pattern);
    anchored.push_str(EOS);
    AnchoredPattern(anchored)
}

/// 未锚定的双分组规则定义
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleDefinition {
    pub kind: RuleKind,
    pub first: Group,
    pub second: Group,
}

impl RuleDefinition {
    pub fn new(kind: RuleKind, first: Group, second: Group) -> Self {
        Self { kind, first, second }
    }

    /// 两个分组直接拼接（未锚定）
    pub fn source(&self) -> String {
        format!("{}{}", self.first, self.second)
    }

    pub fn anchored(&self) -> AnchoredPattern {
        anchor(&self.source())
    }

    /// 两个分组依次使用的片段名
    pub fn fragment_names(&self) -> Vec<&'static str> {
        self.first
            .pieces()
            .iter()
            .chain(self.second.pieces())
            .map(|piece| piece.fragment.name())
            .collect()
    }
}
