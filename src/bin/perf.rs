use log::{info, LevelFilter};
use rand::{prelude::random, rngs::SmallRng, Rng, SeedableRng};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use structopt::StructOpt;

use std::time;

use rbset::RbSet;

/// Command line options.
#[derive(Clone, StructOpt)]
pub struct Opt {
    #[structopt(long = "seed")]
    seed: Option<u64>,

    #[structopt(long = "loads", default_value = "1000000")] // default 1M
    loads: usize,

    #[structopt(long = "adds", default_value = "0")]
    adds: usize,

    #[structopt(long = "removes", default_value = "0")]
    removes: usize,

    #[structopt(long = "contains", default_value = "0")]
    contains: usize,

    #[structopt(long = "iters", default_value = "1")]
    iters: usize,

    #[structopt(long = "validate")]
    validate: bool,

    #[structopt(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
}

fn main() {
    let opts = Opt::from_args();
    if let Err(err) = TermLogger::init(
        opts.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("logger: {}", err);
    }

    let seed = opts.seed.unwrap_or_else(random);
    info!("perf seed {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut index: RbSet<u64> = RbSet::new();

    // initial load
    let start = time::Instant::now();
    for _i in 0..opts.loads {
        index.add(rng.gen::<u64>()).ok();
    }
    info!(
        "loaded {} items in {:?}, height {}",
        index.len(),
        start.elapsed(),
        index.height()
    );

    do_incremental(&mut rng, &opts, &mut index);

    let start = time::Instant::now();
    let mut n = 0;
    for _i in 0..opts.iters {
        n += index.iter().count();
    }
    info!("iterated {} items, took {:?}", n, start.elapsed());

    if opts.validate {
        match index.validate() {
            Ok(()) => info!("validated {} items", index.len()),
            Err(err) => panic!("{}", err),
        }
    }
}

fn do_incremental(rng: &mut SmallRng, opts: &Opt, index: &mut RbSet<u64>) {
    let total = opts.adds + opts.removes + opts.contains;
    if total == 0 {
        return;
    }

    let start = time::Instant::now();
    let (mut n_adds, mut n_removes, mut n_hits) = (0, 0, 0);
    for _i in 0..total {
        let op = rng.gen::<usize>() % total;
        // small key space, so removes and contains find something.
        let key = rng.gen::<u64>() % ((opts.loads as u64) + 1);
        if op < opts.adds {
            n_adds += index.add(key).unwrap_or(false) as usize;
        } else if op < (opts.adds + opts.removes) {
            n_removes += index.remove(&key).unwrap_or(false) as usize;
        } else {
            n_hits += index.contains(&key).unwrap_or(false) as usize;
        }
    }
    info!(
        "incremental ops {} (added {} removed {} hits {}), took {:?}",
        total,
        n_adds,
        n_removes,
        n_hits,
        start.elapsed()
    );
}
