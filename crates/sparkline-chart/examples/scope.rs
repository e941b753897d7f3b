//! Minimal host loop: feed a noisy sine wave into a sparkline and dump the
//! emitted segment batch after each "frame".
//!
//! Run with: cargo run -p sparkline-chart --example scope

use sparkline_chart::{MemoryCanvas, Sparkline};

fn main() {
    let mut spark = Sparkline::builder(64, 16, 24)
        .lower_bound(-1.0)
        .upper_bound(1.0)
        .build()
        .expect("static configuration is valid");
    let mut canvas = MemoryCanvas::new();

    for frame in 0..5 {
        // A real host would read a sensor here; amplitude 1.3 pushes the
        // peaks past the fixed bounds so some segments get clipped.
        for step in 0..8 {
            let t = f64::from(frame * 8 + step) * 0.35;
            spark.push(1.3 * t.sin());
        }

        spark.redraw(&mut canvas);

        println!(
            "frame {frame}: {} samples -> {} segments",
            spark.len(),
            canvas.segments().len()
        );
        for seg in canvas.segments() {
            println!(
                "  ({:>3},{:>3}) -> ({:>3},{:>3})",
                seg.start.x, seg.start.y, seg.end.x, seg.end.y
            );
        }
    }
}
