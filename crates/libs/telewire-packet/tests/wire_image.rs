//! Byte-exact wire image checks. These pin the on-wire layout: packed
//! 4-byte header, little-endian payload length, and the routing trailer
//! floating after the payload.

use telewire_packet::{Packet, PacketType, RoutingPath, WireError};

#[test]
fn log_packet_wire_image_is_byte_exact() {
    let mut packet = Packet::new(PacketType::Log);
    packet.set_payload(b"hi").expect("payload");
    packet.push_hop(3).expect("push");
    packet.push_hop(1).expect("push");

    assert_eq!(packet.as_bytes(), &[1, 2, 2, 0, b'h', b'i', 3, 1]);
}

#[test]
fn payload_length_is_little_endian() {
    let mut packet = Packet::new(PacketType::StreamData(0));
    packet.set_payload(&[0xEE; 300]).expect("payload");

    let bytes = packet.as_bytes();
    assert_eq!(bytes[0], 128);
    assert_eq!(bytes[1], 0);
    // 300 = 0x012C
    assert_eq!(bytes[2], 0x2C);
    assert_eq!(bytes[3], 0x01);
    assert_eq!(bytes.len(), 4 + 300);
}

#[test]
fn routing_trailer_floats_with_payload_size() {
    let mut packet = Packet::new(PacketType::User);
    packet.set_routing(&[9]).expect("routing");

    packet.set_payload(&[0; 10]).expect("payload");
    assert_eq!(packet.as_bytes()[4 + 10], 9);

    packet.set_payload(&[0; 200]).expect("payload");
    assert_eq!(packet.as_bytes()[4 + 200], 9);
}

#[test]
fn decodes_hand_written_rpc_request() {
    // type=2 (rpc-request), 1 hop, 3-byte payload "abc", hop 5.
    let wire = [2u8, 1, 3, 0, b'a', b'b', b'c', 5];
    let packet = Packet::from_bytes(&wire).expect("decode");

    assert_eq!(packet.packet_type(), PacketType::RpcRequest);
    assert_eq!(packet.payload(), b"abc");
    assert_eq!(packet.routing(), &[5]);
    assert_eq!(packet.total_size(), wire.len());
    assert_eq!(packet.as_bytes(), wire);
}

#[test]
fn decode_rejects_trailing_garbage() {
    // Header accounts for 4 bytes, buffer carries one extra.
    let wire = [1u8, 0, 0, 0, 0xFF];
    assert_eq!(
        Packet::from_bytes(&wire),
        Err(WireError::LengthMismatch { expected: 4, actual: 5 })
    );
}

#[test]
fn parsed_path_routes_a_packet_end_to_end() {
    let path = RoutingPath::parse("/3/1/").expect("parse");
    let mut packet = Packet::new(PacketType::RpcRequest);
    packet.set_payload(b"get dev.name").expect("payload");
    packet.set_routing(path.hops()).expect("routing");

    let mut relayed = Packet::from_bytes(packet.as_bytes()).expect("decode");
    // Relays consume the trailer from the end.
    assert_eq!(relayed.pop_hop().expect("first relay"), 1);
    assert_eq!(relayed.pop_hop().expect("second relay"), 3);
    assert_eq!(relayed.pop_hop(), Err(WireError::EmptyRouting));
    assert_eq!(relayed.payload(), b"get dev.name");
}

#[test]
fn received_trailer_formats_back_to_path() {
    let wire = [1u8, 2, 0, 0, 3, 1];
    let packet = Packet::from_bytes(&wire).expect("decode");
    let path = RoutingPath::from_hops(packet.routing()).expect("from_hops");
    assert_eq!(path.to_string(), "/3/1/");
}
