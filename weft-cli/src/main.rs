use anyhow::Result;
use clap::Parser;
use enum_dispatch::enum_dispatch;
use log::error;
use std::process::exit;

mod commands;

use commands::{align::Align, command::Command};

#[derive(Parser, Debug)]
#[clap(name = "weft", version, about = "Pairwise sequence alignment", term_width = 0)]
struct Args {
    #[clap(subcommand)]
    subcommand: Subcommand,
}

#[enum_dispatch(Command)]
#[derive(clap::Subcommand, Debug)]
enum Subcommand {
    Align(Align),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(err) = args.subcommand.execute() {
        error!("{:#}", err);
        exit(1);
    }
}
