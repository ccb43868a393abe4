extern crate argparse;
extern crate env_logger;
extern crate quire;
extern crate regex;
extern crate serde;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;
#[macro_use] extern crate quick_error;
#[macro_use] extern crate serde_derive;

mod config;
mod re;
mod stamp;

use std::io::{stderr, Write};
use std::path::PathBuf;
use std::process::exit;

use argparse::{ArgumentParser, Parse, Print, StoreTrue};

use config::Config;


fn main() {
    env_logger::init();
    let mut version = String::new();
    let mut config = PathBuf::from(config::DEFAULT_CONFIG);
    let mut dir = PathBuf::from(".");
    let mut dry_run = false;
    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Stamps a release version into the project's \
            metadata file and rewrites the README version badge.");
        ap.add_option(&["-V", "--version"],
            Print(env!("CARGO_PKG_VERSION").to_string()),
            "Show version of stamp and exit");
        ap.refer(&mut config)
            .add_option(&["-c", "--config"], Parse,
                "Stamper configuration file");
        ap.refer(&mut dir)
            .add_option(&["--base-dir"], Parse, "
                Base directory for all paths in config. \
                Current working directory by default.");
        ap.refer(&mut dry_run)
            .add_option(&["--dry-run"], StoreTrue, "
                Don't write files, just show changes");
        ap.refer(&mut version)
            .add_argument("version", Parse, "Target version");
        ap.parse_args_or_exit();
    }

    if version.is_empty() {
        writeln!(&mut stderr(), "Error: version argument is required").ok();
        exit(1);
    }

    let cfg = match Config::load(&config) {
        Ok(cfg) => cfg,
        Err(text) => {
            writeln!(&mut stderr(), "Error: {}", text).ok();
            exit(2);
        }
    };
    debug!("config: {:?}", cfg);

    match stamp::stamp(&cfg, &dir, &version, dry_run) {
        Ok(()) => {}
        Err(text) => {
            writeln!(&mut stderr(), "Error: {}", text).ok();
            exit(2);
        }
    }
}
