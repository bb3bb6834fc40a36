use saavy_bank::DEFAULT_SAMPLE_RATE;

pub struct Args {
    pub sample_rate: f32,
    pub seed: Option<u64>,
    pub sound: Option<String>,
    pub list: bool,
}

impl Args {
    fn parser() -> impl meap::Parser<Item = Self> {
        meap::let_map! {
            let {
                sample_rate = opt_opt::<f32, _>("HZ", "sample-rate")
                    .name('r')
                    .with_default(DEFAULT_SAMPLE_RATE);
                seed = opt_opt::<u64, _>("INT", "seed")
                    .name('s');
                sound = opt_opt::<String, _>("NAME", "sound")
                    .name('n');
                list = flag("list")
                    .name('l');
            } in {
                Self {
                    sample_rate,
                    seed,
                    sound,
                    list,
                }
            }
        }
    }
}

pub fn parse() -> Args {
    use meap::Parser;
    Args::parser().with_help_default().parse_env_or_exit()
}
