/**
 * 公共工具库（common）
 *
 * 目标
 * - 提供各个可执行文件共用的日志初始化
 * - 日志统一输出到 stderr，stdout 留给协议回复与棋盘输出
 *
 * 使用注意
 * - RUST_LOG 优先；未设置时使用调用方给出的默认过滤级别
 */
use tracing_subscriber::EnvFilter;

/// Build the filter used by [`init_tracing`].
///
/// An explicit `filter` wins, then `RUST_LOG`, then `default`.
pub fn env_filter(filter: Option<&str>, default: &str) -> EnvFilter {
    match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
    }
}

/// Install the global tracing subscriber. Calling it twice is harmless.
pub fn init_tracing(filter: Option<&str>, default: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter, default))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
