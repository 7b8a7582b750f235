//! tracing 구독자 초기화.

use tracing_subscriber::EnvFilter;

/// stderr로 출력하는 fmt 구독자를 설치한다.
///
/// `RUST_LOG`가 설정되어 있으면 그것을, 아니면 `fallback` 필터를 사용한다.
/// 이미 전역 구독자가 있으면 아무것도 하지 않는다.
pub fn init(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
