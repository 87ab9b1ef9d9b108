use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::hand::{HandEvaluator, ReadyHandGenerator};
use crate::util::log::{set_log_level, LEVEL_DEBUG};
use crate::util::misc::*;
use crate::util::parse::*;

use crate::{error, info};

// 清一色の聴牌形をランダムに出題
#[derive(Debug)]
pub struct GeneratorApp {
    args: Vec<String>,
    count: usize,
    seed: Option<u64>,
    dump: String,
}

impl GeneratorApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            count: 1,
            seed: None,
            dump: "".to_string(),
        }
    }

    pub fn run(&mut self) {
        let args = self.args.clone();
        let mut it = args.iter();
        while let Some(s) = it.next() {
            let res = match s.as_str() {
                "-n" => next_value(&mut it, s).map(|v| self.count = v),
                "-s" => next_value(&mut it, s).map(|v| self.seed = Some(v)),
                "-o" => next_value(&mut it, s).map(|v| self.dump = v),
                "-v" => {
                    set_log_level(LEVEL_DEBUG);
                    Ok(())
                }
                _ => Err(format!("unknown option: {}", s).into()),
            };
            if let Err(e) = res {
                error!("{}", e);
                print_usage();
                return;
            }
        }

        if let Err(e) = self.generate() {
            error!("{}", e);
        }
    }

    fn generate(&self) -> Res {
        let ev = HandEvaluator::new();
        let generator = ReadyHandGenerator::build(ev.calculator());
        if !self.dump.is_empty() {
            write_to_file(&self.dump, &generator.dump())?;
        }

        let seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen());
        info!("seed: {}", seed);
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..self.count {
            let hand = generator
                .random_one(&mut rng)
                .ok_or("no ready hand pattern")?;
            let waits = ev.winning_tiles(&hand);
            println!("{} -> {}", tiles_to_string(&hand), vec_to_string(&waits));
        }
        Ok(())
    }
}

fn print_usage() {
    error!(
        r"invalid input
Usage
    $ cargo run G [-n COUNT] [-s SEED] [-o FILE] [-v]
Options
    -n: number of hands (default: 1)
    -s: random seed
    -o: dump all ready hand patterns to file
    -v: print debug log
"
    );
}
