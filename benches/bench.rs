use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use intlog::{ewma_div, pul16, slog32, Radix};

type Packed = pul16<10>;
type Log = slog32<25>;

// Establish a baseline by comparing with a single fpu multiply

fn baseline_fpu_mul_f64(c: &mut Criterion) {
  c.bench_function("baseline_fpu_mul_f64", |b| {
    b.iter(|| black_box(3.14) * black_box(69.420));
  });
}

// Time the codecs on a spread of magnitudes

const NUMS: [u64; 4] = [
  1_000,
  50_000,
  1_000_000,
  0x1234_5678_9ABC_DEF0,
];

fn encode_slog32(c: &mut Criterion) {
  let mut g = c.benchmark_group("encode_slog32");
  for num in NUMS {
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(num), &num, |b, &num| {
      b.iter(|| Log::encode(black_box(num)));
    });
  }
  g.finish();
}

fn encode_slog32_corrected(c: &mut Criterion) {
  let mut g = c.benchmark_group("encode_slog32_corrected");
  for num in NUMS {
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(num), &num, |b, &num| {
      b.iter(|| Log::encode_corrected(black_box(num)));
    });
  }
  g.finish();
}

fn decode_slog32(c: &mut Criterion) {
  let mut g = c.benchmark_group("decode_slog32");
  for num in NUMS {
    let code = Log::encode(num);
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(num), &code, |b, &code| {
      b.iter(|| black_box(code).decode::<u64>());
    });
  }
  g.finish();
}

fn decode_slog32_corrected(c: &mut Criterion) {
  let mut g = c.benchmark_group("decode_slog32_corrected");
  for num in NUMS {
    let code = Log::encode_corrected(num);
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(num), &code, |b, &code| {
      b.iter(|| black_box(code).decode_corrected::<u64>());
    });
  }
  g.finish();
}

fn encode_pul16(c: &mut Criterion) {
  let mut g = c.benchmark_group("encode_pul16");
  for num in NUMS {
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(num), &num, |b, &num| {
      b.iter(|| Packed::encode(black_box(num)));
    });
  }
  g.finish();
}

fn decode_pul16(c: &mut Criterion) {
  let mut g = c.benchmark_group("decode_pul16");
  for num in NUMS {
    let code = Packed::encode(num);
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(num), &code, |b, &code| {
      b.iter(|| black_box(code).decode::<u64>());
    });
  }
  g.finish();
}

fn log_multiply(c: &mut Criterion) {
  let a = Log::encode(1000u64);
  let b_ = Log::encode(2000u64);
  c.bench_function("log_multiply_and_decode", |b| {
    b.iter(|| (black_box(a) + black_box(b_)).decode::<u64>());
  });
}

fn rescale_db(c: &mut Criterion) {
  let code = Log::encode(12345u64);
  c.bench_function("rescale_db_roundtrip", |b| {
    b.iter(|| black_box(code).rescale_to(Radix::DbPower).rescale_from(Radix::DbPower));
  });
}

fn ewma(c: &mut Criterion) {
  c.bench_function("ewma_div_q8", |b| {
    b.iter(|| ewma_div(black_box(200 << 8), black_box(100 << 8), 0, black_box(4u32)));
  });
}

criterion_group!(
  benches,
  baseline_fpu_mul_f64,
  encode_slog32,
  encode_slog32_corrected,
  decode_slog32,
  decode_slog32_corrected,
  encode_pul16,
  decode_pul16,
  log_multiply,
  rescale_db,
  ewma,
);
criterion_main!(benches);
