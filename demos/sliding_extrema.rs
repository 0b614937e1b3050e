use quantring::{CircularBuffer, MinMaxQueue};

// Rolling high/low channel over a synthetic price walk, alongside the raw
// window contents. Run with `cargo run --example sliding_extrema`.

fn main() {
    let width = 5i64;
    let mut window = CircularBuffer::<f64>::new(width as usize).unwrap();
    let mut channel = MinMaxQueue::<f64>::new(width as usize).unwrap();

    for i in 1..=40i64 {
        let close = 100.0 + 3.0 * ((i as f64) * 0.45).sin() + (i as f64) * 0.05;

        channel.evict_before(i - width);
        channel.update(close, close, i).unwrap();
        window.push(close);

        println!(
            "t={i:>2} close={close:>7.2} high={:>7.2} low={:>7.2} window={:?}",
            channel.max().unwrap(),
            channel.min().unwrap(),
            window
                .iter()
                .map(|v| (v * 100.0).round() / 100.0)
                .collect::<Vec<_>>(),
        );
    }
}
