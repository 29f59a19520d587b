//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Token bucket parameters, validated by [`crate::config::Config::validate`].
#[derive(Debug, Clone, Copy)]
pub struct RateLimitSettings {
    /// Requests replenished per second.
    pub per_second: u64,
    /// Maximum burst size.
    pub burst_size: u32,
}

impl RateLimitSettings {
    /// Interval between two replenished requests.
    ///
    /// The governor builder takes a period, not a rate, so `per_second`
    /// requests a second become one request every `1000 / per_second` ms.
    /// Rates above 1000/s clamp to the 1 ms floor.
    pub fn replenish_interval_ms(&self) -> u64 {
        (1000 / self.per_second.max(1)).max(1)
    }
}

/// Creates a per-IP rate limiter keyed by the socket peer address.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
/// The server must be started with `into_make_service_with_connect_info`.
///
/// # Example
///
/// ```rust,ignore
/// let api = Router::new()
///     .nest("/api", api_routes)
///     .layer(rate_limit::layer(settings));
/// ```
pub fn layer(
    settings: RateLimitSettings,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(settings.replenish_interval_ms())
            .burst_size(settings.burst_size)
            .finish()
            .expect("rate limit settings are validated at startup"),
    );

    GovernorLayer::new(governor_conf)
}

/// Creates a per-IP rate limiter for deployments behind a trusted reverse proxy.
///
/// The client IP is read from `X-Forwarded-For`, `X-Real-IP` or `Forwarded`,
/// falling back to the peer address.
pub fn proxied_layer(
    settings: RateLimitSettings,
) -> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_millisecond(settings.replenish_interval_ms())
            .burst_size(settings.burst_size)
            .finish()
            .expect("rate limit settings are validated at startup"),
    );

    GovernorLayer::new(governor_conf)
}
