use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use log::{error, info};
use text_stemming::fs_helpers::{self, StemReport};
use text_stemming::word_stemming::{PorterStemmer, SnowballStemmer, Stemmer};

fn main() -> ExitCode {
    env_logger::init();

    let matches = Command::new("Text Stemming")
        .arg(Arg::new("path").required(true).action(ArgAction::Append))
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .value_parser(["english", "porter"])
                .default_value("english"),
        )
        .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
        .get_matches();

    let paths = matches.get_many::<String>("path").unwrap();
    let files = fs_helpers::collect_file_paths(paths);
    info!("{} files found", files.len());
    if files.is_empty() {
        error!("nothing to stem");
        return ExitCode::FAILURE;
    }

    let as_json = matches.get_flag("json");
    match matches.get_one::<String>("algorithm").unwrap().as_str() {
        "porter" => run(&files, &PorterStemmer, as_json),
        _ => run(&files, &SnowballStemmer::english(), as_json),
    }
}

fn run(files: &[PathBuf], stemmer: &impl Stemmer, as_json: bool) -> ExitCode {
    let reports = fs_helpers::stem_files(files, stemmer);
    for report in &reports {
        print_report(report, as_json);
    }
    info!("stemmed {} of {} files", reports.len(), files.len());

    if reports.len() == files.len() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_report(report: &StemReport, as_json: bool) {
    if as_json {
        println!("{}", serde_json::json!(report));
    } else {
        println!("{}", serde_yaml::to_string(report).unwrap());
    }
}
