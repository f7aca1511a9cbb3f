//! 数据模块
//!
//! 提供训练集容器、配对打乱和批次切分。
//!
//! # 主要组件
//!
//! - [`TrainingSet`]: 持有特征矩阵和目标值的训练集
//! - [`permutation`]: 可复现的随机排列
//! - [`BatchWindow`]: 按批大小前进（末尾回绕）的批次游标
//!
//! # 使用示例
//!
//! ```ignore
//! use batch_descent::data::{BatchWindow, TrainingSet};
//!
//! let set = TrainingSet::from_rows(&rows, &targets)?.shuffled(0);
//! let mut window = BatchWindow::new(set.len(), Some(32))?;
//! for _ in 0..window.batches_per_epoch() {
//!     let (x_batch, y_batch) = set.batch(window.current());
//!     // ...
//!     window.advance();
//! }
//! ```

mod batch;
mod training_set;

#[cfg(test)]
mod tests;

pub use batch::BatchWindow;
pub use training_set::{TrainingSet, permutation};
