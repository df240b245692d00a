use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{ArgAction, Parser, ValueEnum};
use cplx::{Complex, DecimalComma, FormatProvider, Invariant, NumberFormat};
use tracing::{info, Level};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Function {
    Sqrt,
    Exp,
    Log,
    Cos,
    Acos,
    Pow,
    #[value(alias = "conj")]
    Conjugate,
    #[value(alias = "neg")]
    Negate,
}

#[derive(Debug, Parser)]
#[command(name = "cplx", about = "Evaluate complex functions on <R;I> values", version)]
struct Cli {
    /// Operand in `<R;I>` form
    #[arg(value_name = "VALUE", required_unless_present = "read", allow_hyphen_values = true)]
    value: Option<String>,

    /// Read the operand from a binary file instead
    #[arg(long, value_name = "FILE", conflicts_with = "value")]
    read: Option<PathBuf>,

    /// Function to apply to the operand
    #[arg(short, long, value_enum)]
    function: Option<Function>,

    /// Exponent for `--function pow`, in `<R;I>` form
    #[arg(long, value_name = "POWER", allow_hyphen_values = true)]
    power: Option<String>,

    /// Digits after the decimal point
    #[arg(short, long)]
    precision: Option<u16>,

    /// Print components in scientific notation
    #[arg(short, long, action = ArgAction::SetTrue)]
    exponent: bool,

    /// Use `,` as the decimal point for input and output
    #[arg(long = "decimal-comma", action = ArgAction::SetTrue)]
    decimal_comma: bool,

    /// Write the result to a binary file
    #[arg(short, long, value_name = "FILE")]
    write: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn number_format(&self) -> NumberFormat {
        match (self.exponent, self.precision) {
            (true, precision) => NumberFormat::Exponent(precision),
            (false, Some(precision)) => NumberFormat::Fixed(precision),
            (false, None) => NumberFormat::Shortest,
        }
    }

    fn provider(&self) -> &'static dyn FormatProvider {
        if self.decimal_comma {
            &DecimalComma
        } else {
            &Invariant
        }
    }
}

fn parse_operand(text: &str, provider: &dyn FormatProvider) -> anyhow::Result<Complex> {
    cplx::parse_with(text, provider).with_context(|| format!("invalid complex number `{text}`"))
}

fn evaluate(cli: &Cli, value: Complex) -> anyhow::Result<Complex> {
    let Some(function) = cli.function else {
        return Ok(value);
    };
    let result = match function {
        Function::Sqrt => cplx::sqrt(value),
        Function::Exp => cplx::exp(value),
        Function::Log => cplx::log(value),
        Function::Cos => cplx::cos(value),
        Function::Acos => cplx::acos(value),
        Function::Conjugate => cplx::conjugate(value),
        Function::Negate => cplx::negate(value),
        Function::Pow => {
            let Some(power) = cli.power.as_deref() else {
                bail!("`--function pow` requires `--power`");
            };
            cplx::pow(value, parse_operand(power, cli.provider())?)
        }
    };
    info!(?function, operand = %value, result = %result, "evaluated");
    Ok(result)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let value = match (&cli.value, &cli.read) {
        (_, Some(path)) => cplx::read_from_file(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (Some(text), None) => parse_operand(text, cli.provider())?,
        (None, None) => bail!("no operand given"),
    };

    let result = evaluate(&cli, value)?;
    let (magnitude, phase) = result.to_polar();

    println!("{}", cplx::format(result, Some(cli.number_format()), Some(cli.provider())));
    println!("magnitude: {magnitude}");
    println!("phase: {phase}");

    if let Some(path) = &cli.write {
        cplx::write_to_file(result, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}
