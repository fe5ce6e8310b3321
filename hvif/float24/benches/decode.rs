use bencher::{benchmark_group, benchmark_main, Bencher};

use hvif_float24::{f24_to_f32, f24_to_f64, read_affine, AFFINE_SIZE};

fn run_f24_to_float<T: Default + Clone>(b: &mut Bencher, cvt: impl Fn(u32) -> T) {
    // Make sure the array is smaller than L1D$ so that the loop does not
    // get satured by the memory system
    let t1: Vec<u32> = (0..2048u32).map(|x| x.wrapping_mul(0x9e37_79b9) >> 8).collect();
    let mut t2: Vec<T> = vec![T::default(); t1.len()];

    b.iter(|| {
        for _ in 0..1000 {
            for (x, y) in t1.iter().zip(t2.iter_mut()) {
                *y = cvt(*x);
            }
        }
    });
}

fn bench_f24_to_f64(b: &mut Bencher) {
    run_f24_to_float(b, f24_to_f64);
}

fn bench_f24_to_f32(b: &mut Bencher) {
    run_f24_to_float(b, f24_to_f32);
}

fn bench_f24_to_f64_closed_form(b: &mut Bencher) {
    run_f24_to_float(b, |x| {
        let sign = if x & 0x800000 != 0 { -1.0 } else { 1.0 };
        let exponent = ((x & 0x7e0000) >> 17) as i32 - 32;
        let mantissa = (x & 0x01ffff) as f64 / 131072.0;
        sign * 2.0f64.powi(exponent) * (1.0 + mantissa)
    });
}

fn bench_read_affine(b: &mut Bencher) {
    let data: Vec<u8> = (0..AFFINE_SIZE * 64).map(|i| (i * 37) as u8).collect();

    b.iter(|| {
        let mut sum = 0.0;
        for chunk in data.chunks_exact(AFFINE_SIZE) {
            if let Ok((m, _)) = read_affine(chunk) {
                sum += m.z.x;
            }
        }
        sum
    });
}

benchmark_group!(
    benches,
    bench_f24_to_f64,
    bench_f24_to_f32,
    bench_f24_to_f64_closed_form,
    bench_read_affine
);
benchmark_main!(benches);
