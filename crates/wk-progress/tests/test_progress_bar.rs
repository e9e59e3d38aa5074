//! Progress-bar shape invariants.

use proptest::prelude::*;
use wk_core::Error;
use wk_progress::{make_progressbar, BarSegments, ProgressBar};

#[test]
fn test_reference_bars() {
    assert_eq!(make_progressbar(0.1, 10).unwrap(), "[#---------]");
    assert_eq!(make_progressbar(0.5, 5).unwrap(), "[##=--]");
    assert_eq!(
        ProgressBar::with_chars('@', '/', '.').render(0.75, 5).unwrap(),
        "[@@@/.]"
    );
}

#[test]
fn test_rejections_name_the_offending_input() {
    let err = make_progressbar(1.2, 10).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(ref m) if m.contains("1.2")));
    let err = make_progressbar(0.5, -2).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(ref m) if m.contains("-2")));
}

proptest! {
    #[test]
    fn segments_always_sum_to_bar_count(value in 0.0f64..=1.0, bars in 1i32..200) {
        let s = BarSegments::split(value, bars).unwrap();
        prop_assert_eq!(s.len(), bars as usize);
        prop_assert!(s.half <= 1);
    }

    #[test]
    fn rendered_bar_has_bar_count_glyphs(value in 0.0f64..=1.0, bars in 1i32..200) {
        let bar = make_progressbar(value, bars).unwrap();
        prop_assert_eq!(bar.chars().count(), bars as usize + 2);
        prop_assert!(bar.starts_with('[') && bar.ends_with(']'));
        let inner = &bar[1..bar.len() - 1];
        prop_assert!(inner.chars().all(|c| matches!(c, '#' | '=' | '-')));
        // glyphs appear in full, half, empty order
        let mut sorted: Vec<char> = inner.chars().collect();
        sorted.sort_by_key(|c| match c { '#' => 0, '=' => 1, _ => 2 });
        prop_assert_eq!(sorted.into_iter().collect::<String>(), inner);
    }

    #[test]
    fn more_progress_never_fills_fewer_bars(a in 0.0f64..=1.0, b in 0.0f64..=1.0, bars in 1i32..50) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo = BarSegments::split(lo, bars).unwrap();
        let hi = BarSegments::split(hi, bars).unwrap();
        prop_assert!(2 * lo.full + lo.half <= 2 * hi.full + hi.half);
    }

    #[test]
    fn out_of_range_values_are_rejected(value in prop_oneof![-10.0f64..-1e-9, 1.0000001f64..10.0]) {
        prop_assert!(make_progressbar(value, 10).is_err());
    }
}
