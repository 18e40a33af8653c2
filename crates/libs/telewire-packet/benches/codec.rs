use criterion::{black_box, criterion_group, criterion_main, Criterion};
use telewire_packet::{Packet, PacketType, RoutingPath, ROUTING_FMT_BUF_SIZE};

fn sample_wire() -> Vec<u8> {
    let mut packet = Packet::new(PacketType::StreamData(3));
    packet.set_payload(&[0x5A; 400]).expect("sample payload must fit");
    packet.set_routing(&[4, 2, 7]).expect("sample routing must fit");
    packet.as_bytes().to_vec()
}

fn bench_packet_decode(c: &mut Criterion) {
    let wire = sample_wire();
    c.bench_function("telewire_packet/packet_decode", |b| {
        b.iter(|| {
            let packet = Packet::from_bytes(black_box(&wire)).expect("decode should succeed");
            black_box(packet);
        });
    });
}

fn bench_path_parse(c: &mut Criterion) {
    c.bench_function("telewire_packet/path_parse", |b| {
        b.iter(|| {
            let path = RoutingPath::parse(black_box("/100/200/3/44/255/0/17/8/"))
                .expect("parse should succeed");
            black_box(path);
        });
    });
}

fn bench_path_format(c: &mut Criterion) {
    let path = RoutingPath::from_hops(&[100, 200, 3, 44, 255, 0, 17, 8])
        .expect("sample path must fit");
    c.bench_function("telewire_packet/path_format", |b| {
        b.iter(|| {
            let mut buf = [0u8; ROUTING_FMT_BUF_SIZE];
            let len = path.format_into(black_box(&mut buf)).expect("format should succeed");
            black_box(&buf[..len]);
        });
    });
}

criterion_group!(benches, bench_packet_decode, bench_path_parse, bench_path_format);
criterion_main!(benches);
