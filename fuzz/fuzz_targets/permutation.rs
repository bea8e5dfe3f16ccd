#![no_main]

use arbitrary::Unstructured;

use libfuzzer_sys::fuzz_target;
use rectsweep::{union_area, Rectangle, Rectangles};

fn arbitrary_permutation(
    rects: &Rectangles,
    u: &mut Unstructured,
) -> Result<Rectangles, arbitrary::Error> {
    let mut shuffled: Vec<Rectangle> = rects.rectangles().copied().collect();
    for i in (1..shuffled.len()).rev() {
        let j = u.int_in_range(0..=i)?;
        shuffled.swap(i, j);
    }
    Ok(shuffled.into())
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(rects) = rectsweep::arbitrary::rectangles(i32::MAX, 100, &mut u) else {
        return;
    };
    let Ok(shuffled) = arbitrary_permutation(&rects, &mut u) else {
        return;
    };

    assert_eq!(union_area(&rects), union_area(&shuffled));
});
