//! Packet layout engine: header accessors, derived offsets, and the
//! routing-trailer hop stack.

use core::fmt;

use crate::error::WireError;
use crate::{HEADER_SIZE, MAX_PACKET_SIZE, MAX_PAYLOAD_SIZE, MAX_ROUTING_SIZE};

/// First type tag used for stream data packets (tag 128 + N carries stream N).
pub const STREAM_TYPE_BASE: u8 = 128;

/// Packet type tag (byte 0 of the header).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PacketType {
    /// Unset or invalid packet.
    Invalid,
    /// Log message.
    Log,
    /// RPC request.
    RpcRequest,
    /// RPC reply.
    RpcReply,
    /// RPC error.
    RpcError,
    /// Description of the data carried by a stream.
    StreamDesc,
    /// Application-defined.
    User,
    /// Tag values 7-127, unassigned.
    Reserved(u8),
    /// Data for stream N (tag 128 + N, N in 0-127).
    StreamData(u8),
}

impl PacketType {
    /// Convert from the raw tag byte. Total: every byte value maps to a type.
    pub fn from_byte(b: u8) -> Self {
        match b {
            0 => Self::Invalid,
            1 => Self::Log,
            2 => Self::RpcRequest,
            3 => Self::RpcReply,
            4 => Self::RpcError,
            5 => Self::StreamDesc,
            6 => Self::User,
            7..=127 => Self::Reserved(b),
            _ => Self::StreamData(b - STREAM_TYPE_BASE),
        }
    }

    /// The raw tag byte for this type.
    pub fn to_byte(self) -> u8 {
        match self {
            Self::Invalid => 0,
            Self::Log => 1,
            Self::RpcRequest => 2,
            Self::RpcReply => 3,
            Self::RpcError => 4,
            Self::StreamDesc => 5,
            Self::User => 6,
            Self::Reserved(b) => b,
            Self::StreamData(n) => STREAM_TYPE_BASE | (n & 0x7f),
        }
    }

    /// The stream index for a stream data packet, `None` for every other tag.
    pub fn stream_id(self) -> Option<u8> {
        match self {
            Self::StreamData(n) => Some(n),
            _ => None,
        }
    }
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => write!(f, "invalid"),
            Self::Log => write!(f, "log"),
            Self::RpcRequest => write!(f, "rpc-request"),
            Self::RpcReply => write!(f, "rpc-reply"),
            Self::RpcError => write!(f, "rpc-error"),
            Self::StreamDesc => write!(f, "stream-desc"),
            Self::User => write!(f, "user"),
            Self::Reserved(b) => write!(f, "reserved({b})"),
            Self::StreamData(n) => write!(f, "stream{n}"),
        }
    }
}

/// A native telewire packet: header, payload, and routing trailer in one
/// fixed-capacity buffer.
///
/// The buffer *is* the wire image — encoding is [`Packet::as_bytes`] and
/// costs nothing. All offsets are derived from the header bytes on every
/// call; in particular the routing trailer starts at
/// `HEADER_SIZE + payload_size` and moves whenever the payload is resized.
///
/// A packet owns no heap memory and carries no identity beyond its bytes.
/// Mutation (`push_hop`, `pop_hop`, `set_payload`) requires exclusive access;
/// there is no interior synchronization.
#[derive(Clone)]
pub struct Packet {
    buf: [u8; MAX_PACKET_SIZE],
}

impl Packet {
    /// An empty packet of the given type: no payload, no routing.
    pub fn new(packet_type: PacketType) -> Self {
        let mut buf = [0u8; MAX_PACKET_SIZE];
        buf[0] = packet_type.to_byte();
        Self { buf }
    }

    /// Decode a packet from its wire image.
    ///
    /// Header fields are validated on ingress: the declared sizes must be
    /// within capacity and must account for exactly `data.len()` bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, WireError> {
        if data.len() < HEADER_SIZE {
            return Err(WireError::TooShort(data.len()));
        }

        let routing_size = data[1] as usize;
        if routing_size > MAX_ROUTING_SIZE {
            return Err(WireError::RoutingTooLarge(routing_size));
        }

        let payload_size = u16::from_le_bytes([data[2], data[3]]) as usize;
        if payload_size > MAX_PAYLOAD_SIZE {
            return Err(WireError::PayloadTooLarge(payload_size));
        }

        let expected = HEADER_SIZE + payload_size + routing_size;
        if data.len() != expected {
            return Err(WireError::LengthMismatch { expected, actual: data.len() });
        }

        let mut buf = [0u8; MAX_PACKET_SIZE];
        buf[..data.len()].copy_from_slice(data);
        Ok(Self { buf })
    }

    /// The encoded wire image: header, payload, and routing trailer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.total_size()]
    }

    /// Typed view of the tag byte.
    pub fn packet_type(&self) -> PacketType {
        PacketType::from_byte(self.buf[0])
    }

    pub fn set_packet_type(&mut self, packet_type: PacketType) {
        self.buf[0] = packet_type.to_byte();
    }

    /// Number of hop bytes in the routing trailer.
    pub fn routing_size(&self) -> usize {
        self.buf[1] as usize
    }

    /// Payload length in bytes.
    pub fn payload_size(&self) -> usize {
        u16::from_le_bytes([self.buf[2], self.buf[3]]) as usize
    }

    /// Total packet size: header plus payload plus routing trailer.
    ///
    /// Always derived from the header, never stored. At most
    /// [`MAX_PACKET_SIZE`](crate::MAX_PACKET_SIZE) for any validated packet.
    pub fn total_size(&self) -> usize {
        HEADER_SIZE + self.payload_size() + self.routing_size()
    }

    pub fn payload(&self) -> &[u8] {
        &self.buf[HEADER_SIZE..HEADER_SIZE + self.payload_size()]
    }

    pub fn payload_mut(&mut self) -> &mut [u8] {
        let size = self.payload_size();
        &mut self.buf[HEADER_SIZE..HEADER_SIZE + size]
    }

    /// Replace the payload, moving the routing trailer so it stays
    /// immediately after the new payload end.
    pub fn set_payload(&mut self, payload: &[u8]) -> Result<(), WireError> {
        if payload.len() > MAX_PAYLOAD_SIZE {
            return Err(WireError::PayloadTooLarge(payload.len()));
        }

        let old_start = self.routing_offset();
        let new_start = HEADER_SIZE + payload.len();
        let routing_size = self.routing_size();

        // Trailer first: the regions may overlap, the payload write below
        // only touches bytes before the relocated trailer.
        self.buf.copy_within(old_start..old_start + routing_size, new_start);
        self.buf[HEADER_SIZE..new_start].copy_from_slice(payload);
        self.set_payload_size(payload.len());
        Ok(())
    }

    /// The routing trailer: one hop byte per relay step, most recently
    /// pushed last. Starts at `HEADER_SIZE + payload_size`, recomputed on
    /// every call.
    pub fn routing(&self) -> &[u8] {
        let start = self.routing_offset();
        &self.buf[start..start + self.routing_size()]
    }

    /// Replace the whole routing trailer, e.g. with the hops of a parsed
    /// [`RoutingPath`](crate::RoutingPath).
    pub fn set_routing(&mut self, hops: &[u8]) -> Result<(), WireError> {
        if hops.len() > MAX_ROUTING_SIZE {
            return Err(WireError::RoutingTooLarge(hops.len()));
        }

        let start = self.routing_offset();
        self.buf[start..start + hops.len()].copy_from_slice(hops);
        self.buf[1] = hops.len() as u8;
        Ok(())
    }

    /// Append a hop to the routing trailer.
    ///
    /// Hops pop in reverse push order (LIFO): an originator that wants
    /// relays to traverse hops in a given order pushes them in reverse.
    /// Fails with `RoutingFull` at capacity, leaving the packet unchanged.
    pub fn push_hop(&mut self, hop: u8) -> Result<(), WireError> {
        let routing_size = self.routing_size();
        if routing_size == MAX_ROUTING_SIZE {
            return Err(WireError::RoutingFull);
        }

        self.buf[self.routing_offset() + routing_size] = hop;
        self.buf[1] = (routing_size + 1) as u8;
        Ok(())
    }

    /// Remove and return the next hop to traverse (the most recently
    /// pushed).
    ///
    /// `EmptyRouting` is the normal terminal condition — the packet has
    /// reached its destination — and leaves the packet unchanged, so
    /// repeated pops keep signaling it.
    pub fn pop_hop(&mut self) -> Result<u8, WireError> {
        let routing_size = self.routing_size();
        if routing_size == 0 {
            return Err(WireError::EmptyRouting);
        }

        self.buf[1] = (routing_size - 1) as u8;
        Ok(self.buf[self.routing_offset() + routing_size - 1])
    }

    /// The stream index if this is a stream data packet.
    pub fn stream_id(&self) -> Option<u8> {
        self.packet_type().stream_id()
    }

    fn routing_offset(&self) -> usize {
        HEADER_SIZE + self.payload_size()
    }

    fn set_payload_size(&mut self, size: usize) {
        let bytes = (size as u16).to_le_bytes();
        self.buf[2] = bytes[0];
        self.buf[3] = bytes[1];
    }
}

impl PartialEq for Packet {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Packet {}

impl fmt::Debug for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Packet")
            .field("type", &self.packet_type())
            .field("payload_size", &self.payload_size())
            .field("routing_size", &self.routing_size())
            .finish()
    }
}
