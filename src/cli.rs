//! Drives the command-line program.

use crate::conf;
use crate::reddit::Subreddit;
use crate::view::{ViewOptions, Viewable};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use log::LevelFilter;
use pager::Pager;
use std::process;

// TODO: Have Runner::run() return a Result and let main() do the exiting,
//       but we can work on that later.
pub fn die(error_code: i32, message: &str) {
    eprintln!("{}", message);
    process::exit(error_code);
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Answers the age-old question, \"So what's hot on Reddit right now?\"", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    #[command(subcommand)]
    command: Command,
}

impl Config {
    pub fn log_level_filter(&self) -> LevelFilter {
        self.verbosity.log_level_filter()
    }

    pub fn subreddit(&self) -> String {
        String::from(self.command.subreddit())
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the number of subscribers to a subreddit
    #[clap(alias = "subs")]
    Subscribers {
        /// Subreddit name, without the "r/" prefix
        subreddit: String,
    },

    /// List the titles of every post in a subreddit's hot listing
    #[clap(alias = "h")]
    Hot {
        /// Subreddit name, without the "r/" prefix
        subreddit: String,

        /// Only show 'n' titles
        #[arg(short = 'n', long)]
        limit: Option<u32>,

        /// Print titles exactly as Reddit returned them, without
        /// decoding HTML entities
        #[arg(long, default_value_t = false)]
        raw: bool,
    },

    /// Tally keyword occurrences in a subreddit's hot post titles
    #[clap(alias = "t")]
    Tally {
        /// Subreddit name, without the "r/" prefix
        subreddit: String,

        /// Keywords to count
        #[arg(required = true)]
        keywords: Vec<String>,
    },
}

impl Command {
    pub fn subreddit(&self) -> &str {
        match &self {
            Command::Subscribers { subreddit } => subreddit,
            Command::Hot { subreddit, .. } => subreddit,
            Command::Tally { subreddit, .. } => subreddit,
        }
    }
}

/// Runs the command-line program with the given configuration.
pub fn run(config: Config) {
    env_logger::Builder::new()
        .filter_level(config.log_level_filter())
        .init();
    Runner::new(config).run()
}

/// Runs the command-line program.
#[derive(Debug)]
pub struct Runner {
    config: Config,
}

impl Runner {
    /// Create a new program runner using the given `config`.
    pub fn new(config: Config) -> Runner {
        Self { config }
    }

    /// Run the command-line program using its stored configuration options.
    pub fn run(&self) {
        match &self.config.command {
            Command::Subscribers { subreddit } => self.run_subscribers(subreddit),
            Command::Hot { subreddit, limit, raw } => self.run_hot(subreddit, limit, raw),
            Command::Tally { subreddit, keywords } => self.run_tally(subreddit, keywords),
        }
    }

    fn run_subscribers(&self, subreddit: &str) {
        let subreddit = Subreddit::new(subreddit);
        println!("{}", subreddit.subscribers());
    }

    fn run_hot(&self, subreddit: &str, limit: &Option<u32>, raw: &bool) {
        let client = Subreddit::new(subreddit);
        match client.hot_titles() {
            Some(titles) => {
                let n = limit.map(|n| n as usize).unwrap_or(titles.len());
                let titles: Vec<String> = titles.into_iter().take(n).collect();
                let opts = ViewOptions::build().raw(*raw).build();

                Pager::new().pager_envs(conf::pager_env()).setup();
                println!("{}", titles.view(&opts));
            }
            None => die(
                1,
                &format!("r/{subreddit} has no hot posts (or is not a subreddit)."),
            ),
        }
    }

    fn run_tally(&self, subreddit: &str, keywords: &[String]) {
        let client = Subreddit::new(subreddit);
        if let Some(tally) = client.tally(keywords) {
            // An empty tally prints nothing, not a blank line.
            if !tally.is_empty() {
                let report = tally
                    .sorted()
                    .collect::<Vec<_>>()
                    .view(&ViewOptions::default());
                println!("{report}");
            }
        }
    }
}
