//! Routing path codec: lossless conversion between hop bytes and the
//! slash-delimited textual form, e.g. `/3/1/`.

use core::fmt;
use core::str::FromStr;

use crate::error::WireError;
use crate::MAX_ROUTING_SIZE;

/// A parsed routing path: up to eight hop bytes in textual order.
///
/// Hop index 0 corresponds to the leftmost path segment and to byte 0 of a
/// packet's routing trailer. Since [`Packet::pop_hop`](crate::Packet::pop_hop)
/// removes the *last* trailer byte, relays consume a path written this way
/// right-to-left; originators wanting in-order traversal push hops in
/// reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoutingPath {
    hops: [u8; MAX_ROUTING_SIZE],
    len: usize,
}

impl RoutingPath {
    pub const fn empty() -> Self {
        Self { hops: [0; MAX_ROUTING_SIZE], len: 0 }
    }

    /// Build a path from raw trailer bytes.
    pub fn from_hops(hops: &[u8]) -> Result<Self, WireError> {
        if hops.len() > MAX_ROUTING_SIZE {
            return Err(WireError::TooManyHops(hops.len()));
        }

        let mut path = Self::empty();
        path.hops[..hops.len()].copy_from_slice(hops);
        path.len = hops.len();
        Ok(path)
    }

    /// Parse a path string of the form `/3/1/`.
    ///
    /// Leading and trailing `/` are optional; every segment in between must
    /// be a decimal value 0-255. The parse is atomic: any malformed segment
    /// (empty, non-numeric, out of range) or a hop count over capacity
    /// yields an error and no partial result.
    pub fn parse(s: &str) -> Result<Self, WireError> {
        let inner = s.strip_prefix('/').unwrap_or(s);
        let inner = inner.strip_suffix('/').unwrap_or(inner);

        let mut path = Self::empty();
        if inner.is_empty() {
            return Ok(path);
        }

        let count = inner.split('/').count();
        if count > MAX_ROUTING_SIZE {
            return Err(WireError::TooManyHops(count));
        }

        for segment in inner.split('/') {
            if segment.is_empty() {
                return Err(WireError::EmptySegment);
            }
            let hop = segment
                .parse::<u8>()
                .map_err(|_| WireError::InvalidHop(segment.to_string()))?;
            path.hops[path.len] = hop;
            path.len += 1;
        }
        Ok(path)
    }

    /// The hop bytes in textual order, ready to be written to a packet's
    /// routing trailer.
    pub fn hops(&self) -> &[u8] {
        &self.hops[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Render the canonical form (boundary slashes always present; the empty
    /// path renders as `/`) into `buf`, returning the length written.
    ///
    /// Fails with `BufferTooSmall` without touching `buf` when the rendered
    /// form does not fit. A buffer of
    /// [`ROUTING_FMT_BUF_SIZE`](crate::ROUTING_FMT_BUF_SIZE) bytes always
    /// suffices.
    pub fn format_into(&self, buf: &mut [u8]) -> Result<usize, WireError> {
        let needed = self.rendered_len();
        if buf.len() < needed {
            return Err(WireError::BufferTooSmall { needed, capacity: buf.len() });
        }

        let mut offset = 0;
        buf[offset] = b'/';
        offset += 1;
        for &hop in self.hops() {
            let digits = [b'0' + hop / 100, b'0' + (hop / 10) % 10, b'0' + hop % 10];
            let skip = 3 - decimal_width(hop);
            for &d in &digits[skip..] {
                buf[offset] = d;
                offset += 1;
            }
            buf[offset] = b'/';
            offset += 1;
        }
        Ok(offset)
    }

    fn rendered_len(&self) -> usize {
        1 + self.hops().iter().map(|&hop| decimal_width(hop) + 1).sum::<usize>()
    }
}

fn decimal_width(hop: u8) -> usize {
    if hop >= 100 {
        3
    } else if hop >= 10 {
        2
    } else {
        1
    }
}

impl FromStr for RoutingPath {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RoutingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/")?;
        for &hop in self.hops() {
            write!(f, "{hop}/")?;
        }
        Ok(())
    }
}
