use clap::Parser;
use whatshot::cli::Config;

fn main() {
    let config = Config::parse();
    whatshot::cli::run(config)
}
