#![allow(clippy::float_cmp)]

use super::*;
use crate::fakes::MemoryPage;

fn run(page: &mut MemoryPage) -> AnimateReport {
    animate(page, &SiteConfig::default()).expect("animate")
}

// =============================================================
// is_in_viewport
// =============================================================

#[test]
fn fully_inside_is_visible() {
    assert!(is_in_viewport(Rect::new(100.0, 120.0), 800.0));
}

#[test]
fn partial_overlap_is_visible() {
    assert!(is_in_viewport(Rect::new(-10.0, 10.0), 800.0));
    assert!(is_in_viewport(Rect::new(790.0, 810.0), 800.0));
}

#[test]
fn entirely_above_is_hidden() {
    assert!(!is_in_viewport(Rect::new(-50.0, -1.0), 800.0));
}

#[test]
fn entirely_below_is_hidden() {
    assert!(!is_in_viewport(Rect::new(801.0, 850.0), 800.0));
}

#[test]
fn boundary_edges_use_strict_top_inclusive_bottom() {
    // Top flush with the bottom edge: excluded.
    assert!(!is_in_viewport(Rect::new(800.0, 820.0), 800.0));
    // Bottom flush with the top edge: included.
    assert!(is_in_viewport(Rect::new(-20.0, 0.0), 800.0));
}

#[test]
fn taller_than_viewport_is_visible() {
    assert!(is_in_viewport(Rect::new(-100.0, 1200.0), 800.0));
}

// =============================================================
// animate
// =============================================================

#[test]
fn visible_bar_receives_width_and_transition() {
    let mut page = MemoryPage::default().with_bar(100.0, 120.0, Some("75%"));
    let report = run(&mut page);

    assert_eq!(report, AnimateReport { scanned: 1, applied: 1, missing_width: 0 });
    assert_eq!(page.bar_style(0, "width"), Some("75%"));
    assert_eq!(page.bar_style(0, "transition"), Some("width 1.5s ease-in-out"));
}

#[test]
fn offscreen_bars_are_untouched() {
    let mut page = MemoryPage::default()
        .with_bar(-200.0, -180.0, Some("50%"))
        .with_bar(900.0, 920.0, Some("60%"));
    let report = run(&mut page);

    assert_eq!(report.scanned, 2);
    assert_eq!(report.applied, 0);
    assert!(page.bars.iter().all(|bar| bar.style.is_empty() && bar.style_writes == 0));
}

#[test]
fn only_visible_bars_in_mixed_page_are_written() {
    let mut page = MemoryPage::default()
        .with_bar(-200.0, -180.0, Some("50%"))
        .with_bar(400.0, 420.0, Some("70%"))
        .with_bar(1000.0, 1020.0, Some("90%"));
    let report = run(&mut page);

    assert_eq!(report.applied, 1);
    assert_eq!(page.bar_style(0, "width"), None);
    assert_eq!(page.bar_style(1, "width"), Some("70%"));
    assert_eq!(page.bar_style(2, "width"), None);
}

#[test]
fn repeated_passes_rewrite_but_end_state_is_stable() {
    let mut page = MemoryPage::default().with_bar(100.0, 120.0, Some("75%"));
    run(&mut page);
    run(&mut page);
    run(&mut page);

    assert_eq!(page.bar_style(0, "width"), Some("75%"));
    assert_eq!(page.bars[0].style_writes, 6);
}

#[test]
fn bar_scrolled_into_view_is_applied_later() {
    let mut page = MemoryPage::default().with_bar(1000.0, 1020.0, Some("80%"));
    run(&mut page);
    assert_eq!(page.bar_style(0, "width"), None);

    page.bars[0].rect = Rect::new(500.0, 520.0);
    run(&mut page);
    assert_eq!(page.bar_style(0, "width"), Some("80%"));
}

#[test]
fn missing_width_clears_inline_width_without_error() {
    let mut page = MemoryPage::default().with_bar(100.0, 120.0, None);
    page.bars[0].style.insert("width".to_owned(), "10%".to_owned());
    let report = run(&mut page);

    assert_eq!(report.missing_width, 1);
    assert_eq!(report.applied, 1);
    assert_eq!(page.bar_style(0, "width"), None);
    assert_eq!(page.bar_style(0, "transition"), Some("width 1.5s ease-in-out"));
}

#[test]
fn empty_page_is_a_noop() {
    let mut page = MemoryPage::default();
    assert_eq!(run(&mut page), AnimateReport::default());
}

#[test]
fn custom_transition_from_config_is_used() {
    let config = SiteConfig { transition: "width 0.3s linear".to_owned(), ..SiteConfig::default() };
    let mut page = MemoryPage::default().with_bar(0.0, 10.0, Some("40%"));
    animate(&mut page, &config).expect("animate");
    assert_eq!(page.bar_style(0, "transition"), Some("width 0.3s linear"));
}
