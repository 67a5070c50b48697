// Display list, wrap bounds, scroll clamping and nearest-item selection.

use showcase_core::*;

const BASE: usize = 18;
const CLONES: usize = 5;
const SEGMENT: f64 = 18.0 * 134.0;

fn reference_rects(viewport: f64) -> (Vec<Rect>, UniformLayout) {
    let layout = UniformLayout::new(BASE * CLONES, 110.0, 24.0, viewport);
    (layout.item_rects(), layout)
}

#[test]
fn default_catalog_has_eighteen_distinct_effects() {
    let catalog = default_catalog();
    assert_eq!(catalog.len(), BASE);
    assert_eq!(catalog[0].name, "Bass Boost");
    assert_eq!(catalog[17].name, "Resampling");
    let mut names: Vec<&str> = catalog.iter().map(|e| e.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), BASE, "effect names must be unique");
    assert!(catalog.iter().all(|e| !e.description.is_empty()));
}

#[test]
fn display_list_repeats_base_in_order() {
    let list = DisplayList::new(default_catalog(), CLONES);
    assert_eq!(list.len(), BASE * CLONES);
    for i in 0..list.len() {
        assert_eq!(list.get(i), Some(&list.base()[i % BASE]), "mismatch at {i}");
        assert_eq!(list.base_index(i), i % BASE);
    }
    assert_eq!(list.get(list.len()), None);
    assert_eq!(list.iter().count(), list.len());
    assert!(list.iter().zip(0..).all(|(item, i)| *item == list.base()[i % BASE]));
}

#[test]
fn display_list_middle_start_is_first_item_of_middle_repetition() {
    let list = DisplayList::new(default_catalog(), CLONES);
    assert_eq!(list.middle_start(), 36);
    let three = DisplayList::new(default_catalog(), 3);
    assert_eq!(three.middle_start(), 18);
}

#[test]
fn scroll_state_clamps_writes() {
    let mut scroll = ScrollState::new(1000.0, 12_060.0);
    assert_eq!(scroll.max_offset(), 11_060.0);
    assert_eq!(scroll.set_offset(-50.0), 0.0);
    assert_eq!(scroll.set_offset(20_000.0), 11_060.0);
    assert_eq!(scroll.set_offset(f64::NAN), 11_060.0);
    assert_eq!(scroll.set_offset(4379.0), 4379.0);
    assert_eq!(scroll.viewport_center(), 4879.0);

    scroll.resize(20_000.0, 12_060.0);
    assert_eq!(scroll.max_offset(), 0.0);
    assert_eq!(scroll.offset(), 0.0);
}

#[test]
fn wrap_bounds_for_reference_layout() {
    let bounds = WrapBounds::new(SEGMENT, CLONES);
    assert_eq!(bounds.segment_width(), 2412.0);
    assert_eq!(bounds.lower(), 2412.0);
    assert_eq!(bounds.upper(), 9648.0);
    assert_eq!(bounds.jump(), 4824.0);
    assert_eq!(bounds.correction(2000.0), 4824.0);
    assert_eq!(bounds.correction(9700.0), -4824.0);
    assert_eq!(bounds.correction(2412.0), 0.0);
    assert_eq!(bounds.correction(9648.0), 0.0);
}

#[test]
fn single_correction_lands_inside_bounds_for_any_odd_clone_count() {
    for clones in [3usize, 5, 7, 9] {
        let bounds = WrapBounds::new(SEGMENT, clones);
        let total = SEGMENT * clones as f64;
        let mut offset = 0.0;
        while offset <= total {
            let corrected = offset + bounds.correction(offset);
            assert!(
                bounds.contains(corrected),
                "clones={clones} offset={offset} corrected={corrected}"
            );
            offset += 13.7;
        }
    }
}

#[test]
fn uniform_layout_reports_evenly_spaced_rects() {
    let (rects, layout) = reference_rects(1000.0);
    assert_eq!(rects.len(), 90);
    assert_eq!(layout.viewport_width(), 1000.0);
    assert_eq!(rects[0], Rect::new(0.0, 110.0));
    assert_eq!(rects[1].left, 134.0);
    assert_eq!(rects[36].center(), 4879.0);

    let padded = UniformLayout::new(3, 110.0, 24.0, 500.0).with_origin(24.0);
    assert_eq!(padded.item_rects()[0].left, 24.0);
    assert_eq!(padded.item_rects()[2].right(), 24.0 + 268.0 + 110.0);
}

#[test]
fn nearest_index_prefers_lower_index_on_ties() {
    let (rects, _) = reference_rects(1000.0);
    // Midpoint between the centers of items 36 and 37.
    let midpoint = 4879.0 + 67.0;
    assert_eq!(nearest_index(&rects, midpoint), Some(36));
    assert_eq!(nearest_index(&rects, midpoint + 0.001), Some(37));
    assert_eq!(nearest_index(&rects, midpoint - 0.001), Some(36));
    assert_eq!(nearest_index(&rects, -1_000.0), Some(0));
    assert_eq!(nearest_index(&rects, 1.0e9), Some(89));
    assert_eq!(nearest_index(&[], 10.0), None);
}

#[test]
fn nearest_index_is_stable_under_small_moves() {
    let (rects, _) = reference_rects(1000.0);
    let center = rects[40].center();
    // Anything under half the pitch from a center stays on that item.
    for delta in [-66.9, -30.0, -0.4, 0.0, 0.4, 30.0, 66.9] {
        assert_eq!(nearest_index(&rects, center + delta), Some(40), "delta={delta}");
    }
}
