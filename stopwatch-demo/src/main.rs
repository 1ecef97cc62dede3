extern crate env_logger;
extern crate failure;
extern crate stopwatch;
extern crate structopt;
#[macro_use]
extern crate log;

use std::convert::TryFrom;
use std::thread::sleep;
use std::time::Duration;

use failure::Error;
use stopwatch::{DurationComponents, FMilliseconds, Stopwatch};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "stopwatch-demo", about = "Stopwatch laps and pauses demo")]
struct Opt {
    #[structopt(short = "n", long = "laps", default_value = "3", help = "number of laps")]
    laps: u32,
    #[structopt(
        short = "l",
        long = "lap-ms",
        default_value = "250",
        help = "running time per lap, in milliseconds"
    )]
    lap_ms: u64,
    #[structopt(
        short = "p",
        long = "pause-ms",
        default_value = "0",
        help = "time spent paused in the middle of each lap, in milliseconds"
    )]
    pause_ms: u64,
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_default_env()
        .default_format_timestamp_nanos(true)
        .init();

    let opt = Opt::from_args();
    debug!("{:?}", opt);

    let half_lap = Duration::from_millis(opt.lap_ms / 2);
    let mut total = Stopwatch::steady();
    let mut lap = Stopwatch::steady();
    total.start();
    lap.start();

    for n in 1..=opt.laps {
        sleep(half_lap);
        if opt.pause_ms > 0 {
            lap.pause();
            total.pause();
            debug!("Lap {} paused at {:?}", n, lap.elapsed());
            sleep(Duration::from_millis(opt.pause_ms));
            let before = lap.start();
            total.start();
            debug!("Lap {} resumed; {:?} measured before the pause", n, before);
        }
        sleep(half_lap);

        let parts: DurationComponents = lap.start_as();
        info!(
            "Lap {}: {}s {}ms {}us; {:?}",
            n,
            parts.seconds,
            parts.milliseconds,
            parts.microseconds,
            Duration::try_from(parts)?
        );
    }

    let ms: FMilliseconds = total.elapsed_as();
    info!("Total running time: {:.3}ms over {} laps", ms.count(), opt.laps);
    Ok(())
}
