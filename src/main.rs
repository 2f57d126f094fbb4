use clap::Parser;
use seriesmath::{Options, TimeSeries, Value, evaluate_with, util::num::SNAP_EPSILON};
use tracing_subscriber::EnvFilter;

/// seriesmath evaluates an arithmetic expression over numbers and timestamped
/// series.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Binds a name to a number, e.g. `--var k=2.5`.
    #[arg(short, long = "var", value_name = "NAME=NUMBER", value_parser = parse_scalar)]
    vars: Vec<(String, f64)>,

    /// Binds a name to a series of `time:value` pairs, e.g.
    /// `--series flow=0:10,60:12.5`.
    #[arg(short, long = "series", value_name = "NAME=T:V,...", value_parser = parse_series)]
    series: Vec<(String, TimeSeries)>,

    /// Tolerance within which results are snapped onto integers.
    #[arg(long, default_value_t = SNAP_EPSILON)]
    epsilon: f64,

    expression: String,
}

fn split_binding(arg: &str) -> Result<(&str, &str), String> {
    arg.split_once('=')
       .filter(|(name, _)| !name.is_empty())
       .ok_or_else(|| format!("expected NAME=VALUE, found '{arg}'"))
}

fn parse_scalar(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = split_binding(arg)?;
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid number '{value}': {e}"))?;
    Ok((name.to_string(), value))
}

fn parse_series(arg: &str) -> Result<(String, TimeSeries), String> {
    let (name, body) = split_binding(arg)?;

    let pairs = body.split(',')
                    .map(|pair| -> Result<(i64, f64), String> {
                        let (time, value) = pair.split_once(':')
                                                .ok_or_else(|| format!("expected T:V, found '{pair}'"))?;
                        let time = time.trim()
                                       .parse::<i64>()
                                       .map_err(|e| format!("invalid timestamp '{time}': {e}"))?;
                        let value = value.trim()
                                         .parse::<f64>()
                                         .map_err(|e| format!("invalid value '{value}': {e}"))?;
                        Ok((time, value))
                    })
                    .collect::<Result<Vec<_>, String>>()?;

    let series = TimeSeries::from_pairs(pairs).map_err(|e| e.to_string())?;
    Ok((name.to_string(), series))
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();
    let options = Options::default().with_epsilon(args.epsilon);

    let bindings =
        args.vars
            .into_iter()
            .map(|(name, v)| (name, Value::Scalar(v)))
            .chain(args.series.into_iter().map(|(name, s)| (name, Value::Composite(s))));

    match evaluate_with(&args.expression, bindings, &options) {
        Ok(outcome) => println!("{outcome}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
