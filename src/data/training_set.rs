/*
 * @Date         : 2026-10-12
 * @Description  : TrainingSet - 特征矩阵与目标值的配对容器
 *
 * 提供：
 * - 构造时的维度校验（行数 == 目标值个数，各行等长）
 * - 按种子打乱（特征行与目标值使用同一个排列，配对关系不会断开）
 * - 数据复制（放大样本规模，配合 `utils::timed` 比较不同批大小的耗时）
 */

use crate::errors::{DescentError, Dimension};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis, s};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::ops::Range;

/// 训练集：`features` 每行一个样本，`targets` 与之按位置一一对应
///
/// # 示例
/// ```ignore
/// let set = TrainingSet::from_rows(&[vec![0.0, 10.0], vec![1.0, 12.0]], &[1.0, 1.0])?;
/// assert_eq!(set.n_features(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet {
    features: Array2<f64>,
    targets: Array1<f64>,
}

impl TrainingSet {
    /// 由特征矩阵和目标向量创建训练集
    ///
    /// # 错误
    /// - 矩阵无行或无列：[`DescentError::EmptyTrainingSet`]
    /// - 行数与目标值个数不同：[`DescentError::DimensionMismatch`]
    pub fn new(features: Array2<f64>, targets: Array1<f64>) -> Result<Self, DescentError> {
        let (rows, cols) = features.dim();
        if rows == 0 || cols == 0 {
            return Err(DescentError::EmptyTrainingSet);
        }
        if rows != targets.len() {
            return Err(DescentError::dimension(
                Dimension::RowsVsTargets,
                rows,
                targets.len(),
            ));
        }
        Ok(Self { features, targets })
    }

    /// 由逐行数据创建训练集（各行长度须一致）
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R], targets: &[f64]) -> Result<Self, DescentError> {
        let n_features = match rows.first() {
            Some(row) if !row.as_ref().is_empty() => row.as_ref().len(),
            _ => return Err(DescentError::EmptyTrainingSet),
        };
        if rows.len() != targets.len() {
            return Err(DescentError::dimension(
                Dimension::RowsVsTargets,
                rows.len(),
                targets.len(),
            ));
        }
        if let Some(bad) = rows.iter().find(|row| row.as_ref().len() != n_features) {
            return Err(DescentError::dimension(
                Dimension::RowLength,
                n_features,
                bad.as_ref().len(),
            ));
        }

        let features = Array2::from_shape_fn((rows.len(), n_features), |(i, j)| rows[i].as_ref()[j]);
        Ok(Self {
            features,
            targets: Array1::from_vec(targets.to_vec()),
        })
    }

    /// 样本数
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// 构造时已保证非空，恒为 `false`
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// 特征列数
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn features(&self) -> &Array2<f64> {
        &self.features
    }

    pub fn targets(&self) -> &Array1<f64> {
        &self.targets
    }

    /// 取出 `range` 对应的连续若干行及其目标值
    ///
    /// # Panics
    /// `range` 越界时
    pub fn batch(&self, range: Range<usize>) -> (ArrayView2<'_, f64>, ArrayView1<'_, f64>) {
        (
            self.features.slice(s![range.clone(), ..]),
            self.targets.slice(s![range]),
        )
    }

    /// 按种子打乱，返回新的训练集
    ///
    /// 特征行与目标值使用同一个排列 [`permutation`]，
    /// 因此打乱后第 i 行与第 i 个目标值仍来自同一个原始样本。
    pub fn shuffled(&self, seed: u64) -> Self {
        let order = permutation(self.len(), seed);
        Self {
            features: self.features.select(Axis(0), &order),
            targets: self.targets.select(Axis(0), &order),
        }
    }

    /// 将数据自身拼接 `times` 次，样本数变为原来的 `2^times` 倍
    ///
    /// # 错误
    /// 样本数溢出 `usize` 时返回 [`DescentError::SizeOverflow`]
    pub fn replicate(&self, times: u32) -> Result<Self, DescentError> {
        let n = self.len();
        let total = 1usize
            .checked_shl(times)
            .and_then(|copies| copies.checked_mul(n))
            .ok_or(DescentError::SizeOverflow { rows: n, times })?;
        let order: Vec<usize> = (0..total).map(|i| i % n).collect();
        Ok(Self {
            features: self.features.select(Axis(0), &order),
            targets: self.targets.select(Axis(0), &order),
        })
    }
}

/// 生成 `0..len` 的可复现随机排列（相同 `len` 与 `seed` 总得到相同结果）
pub fn permutation(len: usize, seed: u64) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);
    indices
}
