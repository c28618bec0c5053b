//! nps-format CLI
//!
//! Usage:
//!   nps-format [OPTIONS] [WORDS]...
//!
//! The template comes from `--template`, else from the argument file, else
//! from the first word, else from stdin. Remaining words are arguments.
//!
//! Options:
//!   -t, --template <TEXT>   Template text
//!   -f, --args-file <FILE>  TOML file with a template and/or arguments
//!   -r, --raw               Treat every positional argument as text
//!   -n, --no-newline        Do not print a trailing newline
//!   -h, --help              Print help

use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nps_format::{format, ArgumentFile, Value};

#[derive(Parser)]
#[command(name = "nps-format")]
#[command(about = "Fill positional {index[,alignment][:spec]} templates")]
struct Cli {
    /// Template, unless given by --template or the argument file, then
    /// arguments typed by inference: true/false, integers, decimals, text
    #[arg(allow_negative_numbers = true)]
    words: Vec<String>,

    /// Template text (overrides the argument file's template)
    #[arg(short, long)]
    template: Option<String>,

    /// TOML file with a `template` and/or an `args` array
    #[arg(short = 'f', long)]
    args_file: Option<PathBuf>,

    /// Treat every positional argument as text
    #[arg(short, long)]
    raw: bool,

    /// Do not print a trailing newline
    #[arg(short, long)]
    no_newline: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nps_format=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    // Load argument file
    let file = match &cli.args_file {
        Some(path) => match ArgumentFile::from_file(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Error loading argument file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ArgumentFile::default(),
    };

    let (template, words) = split_template(cli.template, file.template.clone(), cli.words);
    let template = match template {
        Some(t) => t,
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let extra: Vec<Value> = words
        .iter()
        .map(|word| {
            if cli.raw {
                Value::Text(word.clone())
            } else {
                Value::infer(word)
            }
        })
        .collect();

    let mut store = file.store();
    store.extend(extra.iter());

    match format(&template, store) {
        Ok(text) => {
            if cli.no_newline {
                print!("{}", text);
            } else {
                println!("{}", text);
            }
        }
        Err(e) => {
            eprint!("{}", e.report(&template, "<template>"));
            std::process::exit(1);
        }
    }
}

/// Pick the template source and leave the remaining words as arguments
///
/// An explicit flag wins, then the argument file. Only when neither gives a
/// template is the first word taken as one; `None` means read stdin.
fn split_template(
    flag: Option<String>,
    file_template: Option<String>,
    mut words: Vec<String>,
) -> (Option<String>, Vec<String>) {
    if let Some(template) = flag.or(file_template) {
        return (Some(template), words);
    }
    if words.is_empty() {
        return (None, words);
    }
    let template = words.remove(0);
    (Some(template), words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_first_word_is_template_without_other_source() {
        let (template, args) = split_template(None, None, words(&["{0}+{1}", "5", "6"]));
        assert_eq!(template.as_deref(), Some("{0}+{1}"));
        assert_eq!(args, words(&["5", "6"]));
    }

    #[test]
    fn test_file_template_keeps_every_word_as_argument() {
        let (template, args) =
            split_template(None, Some("{0}-{1}".to_string()), words(&["5", "6"]));
        assert_eq!(template.as_deref(), Some("{0}-{1}"));
        assert_eq!(args, words(&["5", "6"]));
    }

    #[test]
    fn test_flag_overrides_file_template() {
        let (template, args) = split_template(
            Some("{1}".to_string()),
            Some("{0}".to_string()),
            words(&["a", "b"]),
        );
        assert_eq!(template.as_deref(), Some("{1}"));
        assert_eq!(args, words(&["a", "b"]));
    }

    #[test]
    fn test_no_template_reads_stdin() {
        let (template, args) = split_template(None, None, Vec::new());
        assert!(template.is_none());
        assert!(args.is_empty());
    }

    #[test]
    fn test_cli_parses_template_flag() {
        let cli = Cli::parse_from(["nps-format", "-t", "{0:x}", "255", "-3"]);
        assert_eq!(cli.template.as_deref(), Some("{0:x}"));
        assert_eq!(cli.words, words(&["255", "-3"]));
    }
}
