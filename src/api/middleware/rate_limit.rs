//! Rate limiting middleware using token bucket algorithm.

use axum::Router;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Token bucket parameters for one group of routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Seconds to replenish one request.
    pub per_second: u64,
    pub burst_size: u32,
}

/// Public pages and static assets.
///
/// - **Rate**: one request every 2 seconds replenished
/// - **Burst**: 100 requests
pub const PUBLIC: Limits = Limits {
    per_second: 2,
    burst_size: 100,
};

/// Dashboard page and editor actions.
///
/// Editing fires one request per form submit, so the burst is generous but
/// uploads and saves still can't be hammered.
pub const EDITOR: Limits = Limits {
    per_second: 1,
    burst_size: 60,
};

fn governor<K: KeyExtractor>(
    key_extractor: K,
    limits: Limits,
) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(key_extractor)
            .per_second(limits.per_second)
            .burst_size(limits.burst_size)
            .finish()
            .expect("rate limit periods and burst sizes are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Wraps `router` in a per-client-IP rate limiter.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// - `behind_proxy = false`: the socket peer address (requires
///   `into_make_service_with_connect_info`)
/// - `behind_proxy = true`: `X-Forwarded-For` / `X-Real-IP` / `Forwarded`
///   headers, falling back to the peer address
///
/// # Example
///
/// ```rust,ignore
/// let editor = rate_limit::apply(web::routes::editor_routes(), rate_limit::EDITOR, false);
/// ```
pub fn apply<S>(router: Router<S>, limits: Limits, behind_proxy: bool) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if behind_proxy {
        router.layer(governor(SmartIpKeyExtractor, limits))
    } else {
        router.layer(governor(PeerIpKeyExtractor, limits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_are_valid() {
        for limits in [PUBLIC, EDITOR] {
            assert!(limits.per_second > 0);
            assert!(limits.burst_size > 0);
        }
    }

    #[test]
    fn test_layers_build() {
        let _ = governor(PeerIpKeyExtractor, PUBLIC);
        let _ = governor(SmartIpKeyExtractor, EDITOR);
    }
}
