//! Property-based invariant tests for the sample window and redraw.
//!
//! These tests verify the contract that must hold for any sequence of
//! pushes:
//!
//! 1. Window length is min(pushes, capacity) and holds the newest values.
//! 2. `None` pushes never change the window.
//! 3. Fully in-range data emits exactly one segment per consecutive pair.
//! 4. Every emitted endpoint stays inside the viewport's pixel grid.
//! 5. Out-of-range data never produces an endpoint outside the resolved
//!    range's pixel rows, and never more segments than pairs.
//! 6. A redraw always replaces the previous batch.

use proptest::prelude::*;
use sparkline_chart::{Canvas, MemoryCanvas, Segment, Sparkline};
use sparkline_core::color::PackedRgb;
use sparkline_core::geometry::Point;

// ── Helpers ─────────────────────────────────────────────────────────────

const WIDTH: u16 = 64;
const HEIGHT: u16 = 32;

fn in_range_samples() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..=100.0, 3..=50)
}

fn wild_samples() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-500.0f64..=500.0, 0..=50)
}

fn optional_pushes() -> impl Strategy<Value = Vec<Option<f64>>> {
    prop::collection::vec(prop::option::of(-100.0f64..=100.0), 0..=80)
}

fn redraw_into(spark: &Sparkline) -> MemoryCanvas {
    let mut canvas = MemoryCanvas::new();
    spark.redraw(&mut canvas);
    canvas
}

proptest! {
    #[test]
    fn window_is_bounded_and_newest_last(
        capacity in 1usize..=16,
        pushes in prop::collection::vec(-100.0f64..=100.0, 0..=60),
    ) {
        let mut spark = Sparkline::builder(WIDTH, HEIGHT, capacity).build().unwrap();
        for &v in &pushes {
            spark.push(v);
        }

        let expected: Vec<f64> = pushes
            .iter()
            .copied()
            .skip(pushes.len().saturating_sub(capacity))
            .collect();
        prop_assert_eq!(spark.len(), pushes.len().min(capacity));
        prop_assert_eq!(spark.values(), expected);
    }

    #[test]
    fn none_pushes_are_invisible(capacity in 1usize..=16, pushes in optional_pushes()) {
        let mut spark = Sparkline::builder(WIDTH, HEIGHT, capacity).build().unwrap();
        let mut mirror = Sparkline::builder(WIDTH, HEIGHT, capacity).build().unwrap();

        for &p in &pushes {
            spark.push(p);
            if let Some(v) = p {
                mirror.push(v);
            }
        }
        prop_assert_eq!(spark.values(), mirror.values());
    }

    #[test]
    fn in_range_data_emits_one_segment_per_pair(samples in in_range_samples()) {
        let mut spark = Sparkline::builder(WIDTH, HEIGHT, 64)
            .lower_bound(0.0)
            .upper_bound(100.0)
            .build()
            .unwrap();
        for &v in &samples {
            spark.push(v);
        }

        let canvas = redraw_into(&spark);
        prop_assert_eq!(canvas.segments().len(), samples.len() - 1);
    }

    #[test]
    fn endpoints_stay_on_the_pixel_grid(samples in in_range_samples()) {
        let mut spark = Sparkline::builder(WIDTH, HEIGHT, 64)
            .lower_bound(0.0)
            .upper_bound(100.0)
            .build()
            .unwrap();
        for &v in &samples {
            spark.push(v);
        }

        for seg in redraw_into(&spark).segments() {
            for p in [seg.start, seg.end] {
                prop_assert!((0..i32::from(WIDTH)).contains(&p.x), "col {} off grid", p.x);
                prop_assert!((0..=i32::from(HEIGHT)).contains(&p.y), "row {} off grid", p.y);
            }
            prop_assert!(seg.start.x <= seg.end.x);
        }
    }

    #[test]
    fn clipping_never_escapes_the_range(samples in wild_samples()) {
        let mut spark = Sparkline::builder(WIDTH, HEIGHT, 64)
            .lower_bound(-50.0)
            .upper_bound(50.0)
            .build()
            .unwrap();
        for &v in &samples {
            spark.push(v);
        }

        let canvas = redraw_into(&spark);
        prop_assert!(canvas.segments().len() <= samples.len().saturating_sub(1));
        for seg in canvas.segments() {
            for p in [seg.start, seg.end] {
                prop_assert!(
                    (0..=i32::from(HEIGHT)).contains(&p.y),
                    "clipped row {} escaped the range",
                    p.y
                );
            }
        }
    }

    #[test]
    fn redraw_always_replaces_the_batch(samples in wild_samples()) {
        let mut spark = Sparkline::builder(WIDTH, HEIGHT, 64).build().unwrap();
        for &v in &samples {
            spark.push(v);
        }

        let mut canvas = MemoryCanvas::new();
        canvas.append_segment(Segment::new(
            Point::new(-1, -1),
            Point::new(-2, -2),
            PackedRgb::RED,
        ));
        spark.redraw(&mut canvas);
        prop_assert!(
            canvas
                .segments()
                .iter()
                .all(|seg| seg.start != Point::new(-1, -1))
        );
    }
}
