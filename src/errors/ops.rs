use std::fmt::{self, Display};

/// 比较运算符（用于超参数校验的错误信息）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    GreaterOrEqual,
    GreaterThan,
    Finite,
}
impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator_name = match self {
            ComparisonOperator::GreaterOrEqual => "≥",
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::Finite => "为有限值且>",
        };
        write!(f, "{}", operator_name)
    }
}

/// 维度不一致时出错的对象
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// 样本行数 vs 目标值个数
    RowsVsTargets,
    /// 某一行的特征数 vs 第一行的特征数
    RowLength,
    /// 参数向量长度 vs 特征列数
    ParamsVsFeatures,
    /// 误差函数输出长度 vs 批次行数
    ErrorsVsTargets,
}
impl Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::RowsVsTargets => "样本行数与目标值个数",
            Dimension::RowLength => "各行特征数",
            Dimension::ParamsVsFeatures => "参数向量长度与特征列数",
            Dimension::ErrorsVsTargets => "误差个数与批次行数",
        };
        write!(f, "{}", name)
    }
}
