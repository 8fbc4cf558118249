use once_cell::sync::OnceCell;
use tokio_util::sync::CancellationToken;

static SHUTDOWN: OnceCell<CancellationToken> = OnceCell::new();

/// Installs the process-wide shutdown token. Later calls are ignored.
pub fn set_token(token: CancellationToken) {
    if SHUTDOWN.set(token).is_err() {
        tracing::warn!("shutdown token installed twice");
    }
}

/// Falls back to a fresh token when none was installed, so callers never
/// panic; the fallback is only reachable before `set_token` runs.
pub fn get_token() -> CancellationToken {
    SHUTDOWN.get_or_init(CancellationToken::new).clone()
}
