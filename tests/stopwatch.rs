use std::thread::sleep;
use std::time::Duration;

use stopwatch::{
    DurationComponents, FSeconds, ManualClock, Milliseconds, Nanoseconds, State, Stopwatch,
};
use suppositions::generators::*;
use suppositions::*;

// Generous, so that a loaded machine doesn't fail the real-clock tests.
const SLACK: Duration = Duration::from_millis(400);
const WAIT: Duration = Duration::from_millis(100);

fn std_of(t: Nanoseconds) -> Duration {
    t.convert()
}

fn about(actual: Nanoseconds, expected: Duration) -> bool {
    let actual = std_of(actual);
    actual >= expected && actual < expected + SLACK
}

#[test]
fn start_when_idle_and_running() {
    let mut timer = Stopwatch::steady();

    assert_eq!(timer.start(), Nanoseconds::ZERO);

    sleep(WAIT);

    let t1 = timer.start();
    let t2 = timer.start();

    assert!(about(t1, WAIT), "t1: {:?}", t1);
    assert!(std_of(t2) < SLACK, "t2: {:?}", t2);
}

#[test]
fn pause_then_start_when_paused() {
    let mut timer = Stopwatch::steady();

    timer.start();
    sleep(WAIT);
    timer.pause();
    sleep(WAIT);

    let t1 = timer.start();
    sleep(WAIT);
    let t2 = timer.start();

    assert!(about(t1, WAIT), "t1: {:?}", t1);
    assert!(about(t2, WAIT * 2), "t2: {:?}", t2);
}

#[test]
fn is_paused() {
    let mut timer = Stopwatch::steady();

    assert!(timer.is_paused());
    timer.start();
    assert!(!timer.is_paused());
    timer.pause();
    assert!(timer.is_paused());
}

#[test]
fn reset() {
    let mut timer = Stopwatch::steady();

    let t1 = timer.start();
    sleep(WAIT);
    timer.reset();
    let t2 = timer.start();
    sleep(WAIT);
    timer.pause();
    timer.reset();
    let t3 = timer.start();
    sleep(WAIT);
    let t4 = timer.start();

    assert_eq!(t1, Nanoseconds::ZERO);
    assert_eq!(t2, Nanoseconds::ZERO);
    assert_eq!(t3, Nanoseconds::ZERO);
    assert!(about(t4, WAIT), "t4: {:?}", t4);
}

#[test]
fn elapsed_keeps_running() {
    let mut timer = Stopwatch::steady();

    timer.start();
    sleep(WAIT);

    let t1 = timer.elapsed();
    let t2 = timer.elapsed();

    assert!(about(t1, WAIT), "t1: {:?}", t1);
    assert!(t2 >= t1);
    assert!(std_of(t2 - t1) < SLACK);
}

#[test]
fn multiple_pause_calls() {
    let mut timer = Stopwatch::steady();

    timer.start();
    sleep(WAIT);
    let t1 = timer.elapsed();
    timer.pause();
    sleep(WAIT);
    let t2 = timer.elapsed();
    timer.pause();
    sleep(WAIT);
    let t3 = timer.elapsed();
    timer.start();
    sleep(WAIT);
    let t4 = timer.elapsed();

    assert!(about(t1, WAIT), "t1: {:?}", t1);
    assert!(about(t2, WAIT), "t2: {:?}", t2);
    assert_eq!(t3, t2);
    assert!(t4 > t3);
}

#[test]
fn elapsed_in_other_units() {
    let mut timer = Stopwatch::steady();
    timer.start();
    sleep(WAIT);
    timer.pause();

    let secs: FSeconds = timer.elapsed_as();
    let parts: DurationComponents = timer.elapsed_as();
    let ms: Milliseconds = timer.elapsed_as();

    assert!(secs.count() >= 0.1, "secs: {:?}", secs);
    assert_eq!(parts.days, 0);
    assert_eq!(ms.count(), parts.seconds * 1_000 + parts.milliseconds);
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Wait(i64),
    Start,
    Pause,
    Reset,
}

fn ops() -> Box<dyn GeneratorObject<Item = Vec<Op>>> {
    vecs((u32s(), u32s()))
        .map(|steps| {
            steps
                .into_iter()
                .map(|(arg, kind)| match kind % 4 {
                    0 => Op::Wait(i64::from(arg)),
                    1 => Op::Start,
                    2 => Op::Pause,
                    _ => Op::Reset,
                })
                .collect()
        })
        .boxed()
}

/// Replays `ops` against a stopwatch and against a plain running total.
#[test]
fn supposedly_counts_only_running_time() {
    property(ops()).check(|ops| {
        let clock = ManualClock::new(0);
        let mut sw = Stopwatch::new(&clock);
        let mut running = false;
        let mut started = false;
        let mut total = 0i64;

        for op in ops {
            match op {
                Op::Wait(n) => {
                    clock.advance(Nanoseconds::new(n));
                    if running {
                        total += n;
                    }
                }
                Op::Start => {
                    let snapshot = sw.start();
                    assert_eq!(snapshot, Nanoseconds::new(total), "{:?}", sw);
                    if running {
                        total = 0;
                    }
                    running = true;
                    started = true;
                }
                Op::Pause => {
                    sw.pause();
                    running = false;
                }
                Op::Reset => {
                    sw.reset();
                    running = false;
                    started = false;
                    total = 0;
                }
            }
            assert_eq!(sw.elapsed(), Nanoseconds::new(total), "{:?}", sw);
            assert_eq!(sw.is_running(), running);
            assert_eq!(sw.is_idle(), !started);
            if !started {
                assert_eq!(sw.state(), State::Idle);
            }
        }
    });
}
