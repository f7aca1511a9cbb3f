//! 批次窗口：在 `0..rows` 上按固定批大小前进的游标

use crate::errors::{ComparisonOperator, DescentError};
use std::ops::Range;

/// 批次窗口
///
/// 每次 [`advance`](Self::advance) 后，窗口起点移到上一批次的终点；
/// 起点到达末尾时回绕到 0，因此 [`current`](Self::current) 永远不会是空区间。
/// 批大小不整除行数时，末尾批次较短。
///
/// # 示例
/// ```ignore
/// let mut window = BatchWindow::new(10, Some(4))?;
/// assert_eq!(window.current(), 0..4);
/// window.advance();
/// window.advance();
/// assert_eq!(window.current(), 8..10);
/// window.advance();
/// assert_eq!(window.current(), 0..4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchWindow {
    rows: usize,
    batch_size: usize,
    start: usize,
}

impl BatchWindow {
    /// 创建批次窗口
    ///
    /// `batch_size` 为 `None` 或超过 `rows` 时取 `rows`（全批量）。
    ///
    /// # 错误
    /// - `rows == 0`：[`DescentError::EmptyTrainingSet`]
    /// - `batch_size == Some(0)`：[`DescentError::InvalidHyperparameter`]
    pub fn new(rows: usize, batch_size: Option<usize>) -> Result<Self, DescentError> {
        if rows == 0 {
            return Err(DescentError::EmptyTrainingSet);
        }
        let batch_size = batch_size.unwrap_or(rows).min(rows);
        if batch_size == 0 {
            return Err(DescentError::InvalidHyperparameter {
                name: "batch_size",
                operator: ComparisonOperator::GreaterOrEqual,
                threshold: 1.0,
                value: 0.0,
            });
        }
        Ok(Self {
            rows,
            batch_size,
            start: 0,
        })
    }

    /// 当前批次对应的行区间
    pub fn current(&self) -> Range<usize> {
        self.start..(self.start + self.batch_size).min(self.rows)
    }

    /// 前进到下一批次，越过末尾时回绕到 0
    pub fn advance(&mut self) {
        self.start = self.current().end;
        if self.start >= self.rows {
            self.start = 0;
        }
    }

    /// 每轮内层循环的批次数（向下取整）
    pub const fn batches_per_epoch(&self) -> usize {
        self.rows / self.batch_size
    }

    /// 实际批大小（已截断到行数）
    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub const fn offset(&self) -> usize {
        self.start
    }
}
