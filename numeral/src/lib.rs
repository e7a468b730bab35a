//! The numeral app. For an overview of the arithmetic it drives, see
//! [libnumeral's documentation](libnumeral).

#![deny(warnings)]
#![deny(missing_docs)]

use libnumeral::{ArithmeticError, DispatchError, Module, ModuleGroup, OperationId};

use std::io::Write;
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Options to run numeral with.
pub struct Opts {
    /// Identifier of the operation to run, either its code (`N-4`) or its mnemonic (`ADD_NN_N`).
    pub function: String,
    /// Textual arguments of the operation, in order.
    pub args: Vec<String>,
    /// When true, error emit will be colored.
    pub color: bool,
}

/// Parses [Opts](self::Opts) from the command line or given a parser that acts on the clap
/// [App](clap::App).
pub fn get_opts<P>(parser: P, color: bool) -> Result<Opts, clap::Error>
where
    P: for<'a> FnOnce(clap::App<'a, '_>) -> Result<clap::ArgMatches<'a>, clap::Error>,
{
    let matches = clap::App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .author(clap::crate_authors!())
        .arg(
            clap::Arg::with_name("function")
                .short("-f")
                .long("--function")
                .value_name("ID")
                .next_line_help(true)
                .help(
                    "Operation to run, by code or mnemonic. For example:\n\
                    \tN-4 or ADD_NN_N:   add two natural numbers.\n\
                    \tQ-8 or DIV_QQ_Q:   divide two rational numbers.\n\
                    \tP-11 or GCF_PP_P:  greatest common divisor of two polynomials.\n\
                    ",
                )
                .required(true)
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("args")
                .long("--args")
                .value_name("ARG")
                .help("Arguments of the operation")
                .takes_value(true)
                .multiple(true)
                .allow_hyphen_values(true),
        );
    let matches = parser(matches)?;

    Ok(Opts {
        function: matches.value_of("function").unwrap_or_default().to_owned(),
        args: matches
            .values_of("args")
            .map(|args| args.map(str::to_owned).collect())
            .unwrap_or_default(),
        color,
    })
}

/// Output of a numeral execution.
#[derive(Default, Debug)]
pub struct NumeralResult {
    /// Exit code
    pub code: i32,
    /// Emit for stdout
    pub stdout: String,
    /// Emit for stderr
    pub stderr: String,
}

impl NumeralResult {
    fn ok(stdout: String) -> Self {
        Self {
            code: 0,
            stdout,
            stderr: String::new(),
        }
    }

    fn failed(code: i32, message: &str, color: bool) -> Self {
        Self {
            code,
            stdout: String::new(),
            stderr: emit_error(message, color),
        }
    }
}

/// Renders `error: <message>`, with the prefix in bold red when `color` is set.
fn emit_error(message: &str, color: bool) -> String {
    let mut buf = if color {
        Buffer::ansi()
    } else {
        Buffer::no_color()
    };
    match write_error(&mut buf, message) {
        Ok(()) => String::from_utf8_lossy(buf.as_slice()).into_owned(),
        Err(_) => format!("error: {}", message),
    }
}

fn write_error(buf: &mut Buffer, message: &str) -> std::io::Result<()> {
    buf.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(buf, "error")?;
    buf.reset()?;
    write!(buf, ": {}", message)
}

/// Exit code and message reported for a failed invocation.
fn describe_failure(err: &DispatchError) -> (i32, String) {
    match err {
        DispatchError::UnknownOperation(id) => (2, format!("{} is not implemented", id)),
        DispatchError::InvalidArgumentCount {
            operation,
            expected,
            actual,
        } => {
            let amount = if actual > expected {
                "too many"
            } else {
                "not enough"
            };
            (
                3,
                format!(
                    "{} arguments for {}: expected {}, got {}",
                    amount, operation, expected, actual
                ),
            )
        }
        DispatchError::Arithmetic(err) => {
            let code = match err {
                ArithmeticError::MalformedValue { .. } => 4,
                ArithmeticError::NegativeValue => 5,
                ArithmeticError::DivisionByZero => 6,
                ArithmeticError::NonIntegralResult(_) => 7,
                ArithmeticError::NegativeConversion(_) => 8,
            };
            (code, err.to_string())
        }
    }
}

/// Runs numeral end-to-end.
pub fn run_numeral(opts: Opts) -> NumeralResult {
    let id: OperationId = match opts.function.parse() {
        Ok(id) => id,
        Err(_) => {
            return NumeralResult::failed(
                1,
                &format!("\"{}\" is not an operation identifier", opts.function),
                opts.color,
            )
        }
    };

    let args: Vec<&str> = opts.args.iter().map(String::as_str).collect();
    match ModuleGroup::default().invoke(id, &args) {
        Ok(value) => NumeralResult::ok(value.to_string()),
        Err(err) => {
            let (code, message) = describe_failure(&err);
            NumeralResult::failed(code, &message, opts.color)
        }
    }
}
