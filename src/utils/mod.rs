//! # 常用接口模块
//!
//! 本模块提供参数格式化、耗时测量和单元测试用的断言宏



use std::time::{Duration, Instant};

/// 将参数向量格式化为保留4位小数的字符串，如 `[0.0100, -1.2346]`
pub fn format_params<'a, I>(params: I) -> String
where
    I: IntoIterator<Item = &'a f64>,
{
    let items: Vec<String> = params.into_iter().map(|p| format!("{p:.4}")).collect();
    format!("[{}]", items.join(", "))
}

/// 执行 `f` 并返回其结果与耗时
///
/// # 示例
/// ```ignore
/// let (outcome, elapsed) = timed(|| solver.minimize_numeric(&cost, &set));
/// log::info!("耗时 {elapsed:?}");
/// ```
pub fn timed<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}
