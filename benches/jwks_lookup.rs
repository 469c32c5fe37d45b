//! JWKS parsing, lookup and conversion benchmarks
//!
//! Measures:
//! - Parsing a provider-sized document (a handful of 2048-bit keys)
//! - Lookup of the first and last key in a full set
//! - Conversion of a 2048-bit RSA JWK into key material and SPKI DER

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use jwks_convert::JwkSet;
use serde_json::json;
use std::hint::black_box;

/// Deterministic 2048-bit odd modulus; conversion never checks primality
fn modulus(seed: u8) -> String {
    let mut n: Vec<u8> = (0..256u16).map(|i| (i as u8).wrapping_mul(31) ^ seed).collect();
    n[0] |= 0x80;
    n[255] |= 0x01;
    URL_SAFE_NO_PAD.encode(n)
}

fn document(key_count: usize) -> Vec<u8> {
    let keys: Vec<_> = (0..key_count)
        .map(|i| {
            json!({
                "kty": "RSA",
                "kid": format!("key-{i}"),
                "use": "sig",
                "alg": "RS256",
                "n": modulus(i as u8),
                "e": "AQAB",
            })
        })
        .collect();
    serde_json::to_vec(&json!({ "keys": keys })).expect("serialize jwks")
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("jwks_parse");

    for key_count in [1, 3, 100] {
        let bytes = document(key_count);
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(key_count), &bytes, |b, bytes| {
            b.iter(|| JwkSet::parse(black_box(bytes)).expect("parse"))
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let set = JwkSet::parse(&document(100)).expect("parse");
    let mut group = c.benchmark_group("jwks_find_by_kid");
    group.throughput(Throughput::Elements(1));

    for kid in ["key-0", "key-99", "missing"] {
        group.bench_with_input(BenchmarkId::from_parameter(kid), kid, |b, kid| {
            b.iter(|| set.find_by_kid(black_box(kid)).is_ok())
        });
    }

    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let set = JwkSet::parse(&document(3)).expect("parse");
    let jwk = set.find_by_kid("key-1").expect("lookup");
    let mut group = c.benchmark_group("jwk_convert");
    group.throughput(Throughput::Elements(1));

    group.bench_function("rsa_2048", |b| {
        b.iter(|| black_box(jwk).to_key().expect("convert"))
    });

    group.bench_function("rsa_2048_der", |b| {
        b.iter(|| {
            black_box(jwk)
                .to_key()
                .and_then(|key| key.to_der())
                .expect("der")
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_lookup, bench_convert);
criterion_main!(benches);
