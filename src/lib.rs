//! # Batch Descent
//!
//! `batch_descent`是一个小批量梯度下降求解器：
//! 在打乱后的训练集上按批次反复计算代价及其梯度，更新参数向量，
//! 直到代价变化低于阈值或达到步数上限。
//!
//! 提供两种变体，共用同一套批次/收敛控制流程：
//! - 代价由[`cost::CostExpression`]给出（可求值、可对单个参数求偏导），参数逐个更新；
//! - 代价由[`cost::NumericCost`]给出（作用于整批数组的误差函数与代价函数），参数整体更新。
//!
//! ```ignore
//! use batch_descent::cost::NumericCost;
//! use batch_descent::data::TrainingSet;
//! use batch_descent::optimizer::{BatchGradientDescent, DescentConfig};
//!
//! let set = TrainingSet::from_rows(&[[0.0, 10.0], [1.0, 12.0], [10.0, 5.0], [12.0, 3.0]], &[1.0, 1.0, 0.0, 0.0])?;
//! let solver = BatchGradientDescent::new(DescentConfig::new().step(0.005).loop_limit(100))?;
//! let outcome = solver.minimize_numeric(&NumericCost::logistic_regression(), &set)?;
//! ```

pub mod cost;
pub mod data;
pub mod errors;
pub mod optimizer;
pub mod utils;

pub use errors::DescentError;
