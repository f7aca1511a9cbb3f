use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug)]
pub enum DescentError {
    // 行数、列数、参数个数之间的不一致
    #[error("{what}不一致：期望{expected}，实际为{got}")]
    DimensionMismatch {
        what: Dimension,
        expected: usize,
        got: usize,
    },
    // 超参数校验
    #[error("超参数{name}须{operator}{threshold}，实际为{value}")]
    InvalidHyperparameter {
        name: &'static str,
        operator: ComparisonOperator,
        threshold: f64,
        value: f64,
    },

    #[error("训练集为空（至少需要1行1列）")]
    EmptyTrainingSet,
    #[error("训练集（{rows}行）复制{times}次后样本数溢出")]
    SizeOverflow { rows: usize, times: u32 },

    #[error("读取配置文件失败：{0}")]
    Io(#[from] std::io::Error),
    #[error("配置解析失败：{0}")]
    Config(#[from] serde_json::Error),
}

impl DescentError {
    pub(crate) const fn dimension(what: Dimension, expected: usize, got: usize) -> Self {
        Self::DimensionMismatch {
            what,
            expected,
            got,
        }
    }
}
