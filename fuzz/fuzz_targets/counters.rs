#![no_main]

use arbitrary::Unstructured;

use libfuzzer_sys::fuzz_target;
use rectsweep::{
    coverage::{CompressedCounter, DenseCounter, TreeCounter},
    AreaSweeper,
};

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(rects) = rectsweep::arbitrary::rectangles(1000, 100, &mut u) else {
        return;
    };
    if rects.is_empty() {
        return;
    }

    let dense = AreaSweeper::<DenseCounter>::with_counter(&rects)
        .unwrap()
        .area();
    let compressed = AreaSweeper::<CompressedCounter>::with_counter(&rects)
        .unwrap()
        .area();
    let tree = AreaSweeper::<TreeCounter>::with_counter(&rects)
        .unwrap()
        .area();
    assert_eq!(dense, compressed);
    assert_eq!(dense, tree);
});
