use clap::Parser;
use dirpurge::purge::FailurePolicy;
use dirpurge::purge_dirs;
use env_logger::Env;

#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
#[clap(disable_help_flag(true), disable_version_flag(true))]
struct Args {
    /// What to do when a removal command fails.
    #[clap(long, value_enum, default_value = "ignore")]
    on_failure: FailurePolicy,
    /// Prefixes of the application files and of the git files that should be removed
    /// (e.g. `/srv/app/ /srv/app.git/`). Additional arguments are ignored.
    #[clap(trailing_var_arg(true), allow_hyphen_values(true))]
    dirs: Vec<String>,
}

impl Args {
    /// Returns the `index`-th directory prefix; missing directories behave like empty prefixes.
    fn dir(&self, index: usize) -> &str {
        self.dirs.get(index).map(String::as_str).unwrap_or_default()
    }

    fn extra(&self) -> &[String] {
        self.dirs.get(2..).unwrap_or_default()
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    if !args.extra().is_empty() {
        log::debug!("Ignoring additional arguments: {:?}", args.extra());
    }
    purge_dirs(args.dir(0), args.dir(1), args.on_failure)
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(error) = run() {
        eprintln!("{:?}", error);
        std::process::exit(1);
    }
}
