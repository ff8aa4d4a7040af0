//! Encode/decode throughput for the Reed-Solomon codec.

use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::Throughput;
use std::iter;

use rscodec::RsContext;

const DATA_SIZE: usize = 223;
const ECC_SIZE: usize = 32;
const BLOCK_SIZE: usize = DATA_SIZE + ECC_SIZE;

fn bench_rs(c: &mut Criterion) {
    let mut group = c.benchmark_group("rs");

    // xorshift64 for deterministic random numbers
    fn xorshift64(seed: u64) -> impl Iterator<Item = u64> {
        let mut x = seed;
        iter::repeat_with(move || {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            x
        })
    }

    // size to bench
    const SIZE: usize = 1024 * 1024;
    group.throughput(Throughput::Bytes(SIZE as u64));

    // note we're using Reed-Solomon (255, 223), the classic CCSDS geometry,
    // purely because it's a nice round number, not because it's the most
    // efficient choice for this message size

    // encode
    let mut xs = xorshift64(42);
    let mut context = RsContext::new(ECC_SIZE);
    group.bench_function("rs_encode", |b| {
        b.iter_batched_ref(
            || {
                (&mut xs)
                    .take(SIZE)
                    .map(|x| x as u8)
                    .collect::<Vec<u8>>()
                    .chunks(DATA_SIZE)
                    .map(Vec::from)
                    .collect::<Vec<_>>()
            },
            |messages| {
                messages
                    .iter()
                    .map(|message| {
                        let mut parity = [0u8; ECC_SIZE];
                        context.encode(message, &mut parity);
                        parity
                    })
                    .collect::<Vec<_>>()
            },
            BatchSize::SmallInput,
        )
    });

    // decode with no errors
    let mut xs = xorshift64(42);
    let mut context = RsContext::new(ECC_SIZE);
    group.bench_function("rs_decode_none", |b| {
        b.iter_batched_ref(
            || {
                (&mut xs)
                    .take(SIZE)
                    .map(|x| x as u8)
                    .collect::<Vec<u8>>()
                    .chunks(DATA_SIZE)
                    .map(|message| {
                        let mut codeword = vec![0u8; BLOCK_SIZE];
                        codeword[..DATA_SIZE].copy_from_slice(message);
                        let mut parity = [0u8; ECC_SIZE];
                        context.encode(message, &mut parity);
                        codeword[DATA_SIZE..].copy_from_slice(&parity);
                        codeword
                    })
                    .collect::<Vec<_>>()
            },
            |codewords| {
                for codeword in codewords.iter_mut() {
                    context.decode(codeword).unwrap();
                }
            },
            BatchSize::SmallInput,
        )
    });

    // decode with ECC_SIZE/2 errors, the maximum this geometry can correct
    let mut xs = xorshift64(42);
    let mut context = RsContext::new(ECC_SIZE);
    group.bench_function("rs_decode_at_capacity", |b| {
        b.iter_batched_ref(
            || {
                (&mut xs)
                    .take(SIZE)
                    .map(|x| x as u8)
                    .collect::<Vec<u8>>()
                    .chunks(DATA_SIZE)
                    .map(|message| {
                        let mut codeword = vec![0u8; BLOCK_SIZE];
                        codeword[..DATA_SIZE].copy_from_slice(message);
                        let mut parity = [0u8; ECC_SIZE];
                        context.encode(message, &mut parity);
                        codeword[DATA_SIZE..].copy_from_slice(&parity);

                        for error in (&mut xs).take(ECC_SIZE / 2).map(|e| (e as usize) % BLOCK_SIZE) {
                            codeword[error] ^= 0xff;
                        }
                        codeword
                    })
                    .collect::<Vec<_>>()
            },
            |codewords| {
                for codeword in codewords.iter_mut() {
                    context.decode(codeword).unwrap();
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_rs);
criterion_main!(benches);
