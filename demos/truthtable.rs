use clap::Parser;

use prop_rs::parser::parse;
use prop_rs::table::TruthTable;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Expression to tabulate.
    #[arg(value_name = "EXPR", default_value = "!a | b = a -> b")]
    expression: String,

    /// Maximum number of variables accepted before bailing out.
    #[clap(long, value_name = "INT", default_value = "16")]
    max_vars: usize,

    /// Log the parse pipeline stages.
    #[clap(long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("args = {:?}", args);

    let time_total = std::time::Instant::now();

    let expr = parse(&args.expression)?;
    let num_vars = expr.variables().len();
    if num_vars > args.max_vars {
        color_eyre::eyre::bail!(
            "Expression has {} variables, more than the allowed {} (raise with --max-vars)",
            num_vars,
            args.max_vars
        );
    }

    let table = TruthTable::new(&args.expression)?;
    println!("{}", table);

    let time_total = time_total.elapsed();
    println!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
