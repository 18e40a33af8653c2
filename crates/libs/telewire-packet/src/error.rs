use crate::{HEADER_SIZE, MAX_PAYLOAD_SIZE, MAX_ROUTING_SIZE};

/// Errors from packet and routing-path operations.
///
/// Nothing here is fatal: capacity conditions (`RoutingFull`,
/// `BufferTooSmall`) and the empty-stack signal (`EmptyRouting`) are normal
/// control-flow branches the caller handles, and malformed input is reported
/// without any partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    #[error("packet too short: {0} bytes (minimum {HEADER_SIZE})")]
    TooShort(usize),

    #[error("payload size {0} exceeds maximum {MAX_PAYLOAD_SIZE}")]
    PayloadTooLarge(usize),

    #[error("routing size {0} exceeds maximum {MAX_ROUTING_SIZE}")]
    RoutingTooLarge(usize),

    #[error("header declares {expected} bytes, buffer has {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("routing trailer already holds {MAX_ROUTING_SIZE} hops")]
    RoutingFull,

    #[error("no hops left in routing trailer")]
    EmptyRouting,

    #[error("empty segment in routing path")]
    EmptySegment,

    #[error("invalid hop '{0}' in routing path (expected 0-255)")]
    InvalidHop(String),

    #[error("routing path has {0} hops (maximum {MAX_ROUTING_SIZE})")]
    TooManyHops(usize),

    #[error("format buffer too small: need {needed} bytes, have {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },
}
