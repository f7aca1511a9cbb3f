//! 代价函数模块
//!
//! - [`CostExpression`]/[`ClosedFormCost`]: 逐样本求值 + 对单个参数求偏导，供逐参数更新使用
//! - [`NumericCost`]: 整批数组上的误差函数 + 代价函数，供整体更新使用

mod expression;
mod numeric;

#[cfg(test)]
mod tests;

pub use expression::{ClosedFormCost, CostExpression};
pub use numeric::{
    NumericCost, linear_error, log_loss, mean_squared_error, sigmoid, sigmoid_error,
    sigmoid_log_loss,
};
