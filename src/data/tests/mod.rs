/*
 * @Date         : 2026-10-16
 * @Description  : 数据模块单元测试
 *
 * - training_set: 构造校验、打乱配对、复制
 * - batch: 批次窗口的前进与回绕
 */
