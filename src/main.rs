//! `stemmy` command line: stem words or check a vocabulary fixture.

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::{
    io::{self, BufRead, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};
use stemmy::{Stemmy, fixture};

#[derive(Debug, Parser)]
#[command(name = "stemmy", version, about = "Snowball-style word stemmer")]
struct Cli {
    /// ISO 639-3 language code
    #[arg(short, long, global = true, default_value = "eng")]
    lang: String,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Stem the given words, or every line of stdin when none are given
    Stem { words: Vec<String> },

    /// Stem a vocabulary file and compare against an expected-output file
    Check {
        #[arg(long, value_name = "FILE")]
        voc: PathBuf,

        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },

    /// List supported languages
    Languages,
}

impl Cli {
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }

    fn stemmer(&self) -> Result<Stemmy> {
        Stemmy::builder()
            .lang_code(&self.lang)?
            .build()
            .with_context(|| format!("building stemmer for `{}`", self.lang))
    }

    fn execute(&self) -> Result<ExitCode> {
        match &self.command {
            Commands::Stem { words } => {
                let stemmer = self.stemmer()?;
                let stdout = io::stdout();
                let mut out = BufWriter::new(stdout.lock());
                if words.is_empty() {
                    for line in io::stdin().lock().lines() {
                        let line = line.context("reading stdin")?;
                        let word = line.trim();
                        if word.is_empty() {
                            continue;
                        }
                        writeln!(out, "{}", stemmer.stem(word))?;
                    }
                } else {
                    for word in words {
                        writeln!(out, "{}", stemmer.stem(word))?;
                    }
                }
                out.flush()?;
                Ok(ExitCode::SUCCESS)
            }
            Commands::Check { voc, output } => {
                let stemmer = self.stemmer()?;
                let report = fixture::check_files(voc, output, &stemmer).with_context(|| {
                    format!("checking {} against {}", voc.display(), output.display())
                })?;
                for m in &report.mismatches {
                    println!(
                        "line {}: {} -> {} (expected {})",
                        m.line, m.word, m.actual, m.expected
                    );
                }
                println!(
                    "{} words, {} mismatches",
                    report.checked,
                    report.mismatches.len()
                );
                Ok(if report.passed() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                })
            }
            Commands::Languages => {
                for lang in stemmy::all_langs() {
                    println!("{}\t{}", lang.code().to_ascii_lowercase(), lang.name());
                }
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    cli.init_logging();
    log::debug!("arguments: {cli:?}");
    cli.execute()
}
