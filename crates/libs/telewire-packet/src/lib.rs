//! # telewire-packet
//!
//! Binary wire format for native packets exchanged with a network of
//! telemetry sensors.
//!
//! A packet is a header, followed by a payload, followed by optional routing
//! information used to dispatch messages to and from nodes in the sensor
//! tree. The header conveys the packet type and the sizes of the two
//! following sections.
//!
//! ## Wire Format
//!
//! ```text
//! [type:1][routing_size:1][payload_size:2 LE][payload:0-500][routing:0-8]
//!  tag      hop count      byte count         opaque bytes   hop stack
//! ```
//!
//! The routing trailer sits immediately after the payload, not at a fixed
//! offset — its position floats with `payload_size`. It behaves as a stack:
//! [`Packet::push_hop`] appends a hop and [`Packet::pop_hop`] removes the
//! most recently appended one.
//!
//! ## Example
//!
//! ```rust
//! use telewire_packet::{Packet, PacketType, RoutingPath};
//!
//! let mut packet = Packet::new(PacketType::Log);
//! packet.set_payload(b"boot ok").unwrap();
//! packet.push_hop(3).unwrap();
//! packet.push_hop(1).unwrap();
//! assert_eq!(packet.total_size(), 4 + 7 + 2);
//! assert_eq!(packet.pop_hop().unwrap(), 1);
//!
//! let path = RoutingPath::parse("/3/1/").unwrap();
//! assert_eq!(path.hops(), &[3, 1]);
//! assert_eq!(path.to_string(), "/3/1/");
//! ```

pub mod error;
pub mod packet;
pub mod routing;

pub use error::WireError;
pub use packet::{Packet, PacketType};
pub use routing::RoutingPath;

/// Maximum size of a complete packet.
pub const MAX_PACKET_SIZE: usize = 512;

/// Packed header size: type (1) + routing_size (1) + payload_size (2).
pub const HEADER_SIZE: usize = 4;

/// Space reserved at the end of a packet for routing information.
pub const MAX_ROUTING_SIZE: usize = 8;

/// Maximum payload length.
pub const MAX_PAYLOAD_SIZE: usize = MAX_PACKET_SIZE - HEADER_SIZE - MAX_ROUTING_SIZE;

/// A buffer of this size always fits a rendered routing path.
pub const ROUTING_FMT_BUF_SIZE: usize = MAX_ROUTING_SIZE * 4 + 2;
