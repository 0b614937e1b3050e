use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quantring::{CircularBuffer, MinMaxQueue};

fn buffer_push(c: &mut Criterion) {
    let mut buf = CircularBuffer::<f64>::new(1024).unwrap();
    let mut x = 0.0f64;
    c.bench_function("circular_buffer_push_cap_1024", |b| {
        b.iter(|| {
            x += 1.0;
            black_box(buf.push(x));
        })
    });
}

fn buffer_random_access(c: &mut Criterion) {
    let mut buf = CircularBuffer::<f64>::new(1024).unwrap();
    for v in 0..2048 {
        buf.push(v as f64);
    }
    let mut i = 0usize;
    c.bench_function("circular_buffer_get_wrapped", |b| {
        b.iter(|| {
            i = (i + 389) % 1024;
            black_box(buf.get(i).unwrap());
        })
    });
}

fn minmax_stream(c: &mut Criterion) {
    let width = 64i64;
    let mut mm = MinMaxQueue::<f64>::new(width as usize).unwrap();
    let mut i = 0i64;
    c.bench_function("minmax_update_evict_width_64", |b| {
        b.iter(|| {
            i += 1;
            mm.evict_before(i - width);
            let v = ((i as u64).wrapping_mul(2_654_435_761) % 1024) as f64;
            mm.update(v + 1.0, v, i).unwrap();
            black_box(mm.max().unwrap());
        })
    });
}

criterion_group!(benches, buffer_push, buffer_random_access, minmax_stream);
criterion_main!(benches);
