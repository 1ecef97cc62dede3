#![feature(test)]
extern crate test;

use stopwatch::{decompose, DurationComponents, Nanoseconds, Stopwatch};

#[bench]
fn lap(b: &mut test::Bencher) {
    let mut sw = Stopwatch::steady();
    sw.start();
    b.iter(|| sw.start())
}

#[bench]
fn elapsed(b: &mut test::Bencher) {
    let mut sw = Stopwatch::steady();
    sw.start();
    b.iter(|| sw.elapsed())
}

#[bench]
fn round_trip(b: &mut test::Bencher) {
    let t = Nanoseconds::new(-612_345_678_901_234);
    b.iter(|| {
        let c: DurationComponents = decompose(test::black_box(t));
        c.recompose::<Nanoseconds>()
    })
}
