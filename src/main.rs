use std::io::BufRead;

use anyhow::Context as _;
use clap::{CommandFactory as _, Parser as _};
use compound_word::output::{self, Format};

#[derive(clap::Parser)]
#[command(about = "Find the longest word made up of other words in the list")]
struct Args {
    /// Read the word list from standard input.
    #[arg(long)]
    stdin: bool,

    /// Read the word list from a file.
    #[arg(long)]
    infile: Option<std::path::PathBuf>,

    #[arg(long, value_enum, default_value_t)]
    format: Format,

    /// Shorthand for `--format verbose`.
    #[arg(long)]
    verbose: bool,

    /// Decompose the words on all cores.
    #[arg(long)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let reader: Box<dyn BufRead> = match (args.stdin, &args.infile) {
        (true, None) => Box::new(std::io::stdin().lock()),
        (false, Some(path)) => Box::new(std::io::BufReader::new(
            std::fs::File::open(path)
                .with_context(|| format!("could not open {}", path.display()))?,
        )),
        _ => {
            eprintln!("{}", Args::command().render_usage());
            eprintln!("Please choose either --stdin or --infile <PATH>");
            return Ok(());
        }
    };
    let source = args
        .infile
        .as_ref()
        .map_or_else(|| "stdin".to_string(), |path| path.display().to_string());

    let words = compound_word::read_words(reader).with_context(|| format!("reading {source}"))?;

    log::info!(source = source.as_str(), words = words.len(), parallel = args.parallel; "longest compound word");

    let compound = if args.parallel {
        compound_word::par_longest_compound_word(&words)?
    } else {
        compound_word::longest_compound_word(&words)?
    };

    match &compound {
        Some(c) => log::info!(word = c.word.as_str(), subwords = c.subwords.len(); "found compound"),
        None => log::warn!("no compound word found"),
    }

    let format = if args.verbose {
        Format::Verbose
    } else {
        args.format
    };
    println!("{}", output::render(compound.as_ref(), format)?);

    Ok(())
}
