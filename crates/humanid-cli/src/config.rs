use anyhow::bail;
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use humanid::{Case, Codec};

/// Command line arguments for the `humanid` binary.
///
/// Options are global so they can be given before or after the subcommand,
/// and each one falls back to an environment variable (a `.env` file in the
/// working directory is loaded first).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "humanid",
    version,
    about = "Convert between raw ids and display identifiers"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// How lower case display identifiers are treated.
    ///
    /// Environment variable: `HUMANID_CASE`
    #[arg(long, global = true, env = "HUMANID_CASE", value_enum, default_value_t = CaseArg::Strict)]
    pub case: CaseArg,

    /// Reject display identifiers that are not exactly what encoding would
    /// produce (leading zero bytes, padding, literal O/I).
    ///
    /// Environment variable: `HUMANID_CANONICAL`
    #[arg(
        long,
        global = true,
        env = "HUMANID_CANONICAL",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub canonical: bool,

    /// Width of raw ids in bits: 16, 32 or 64.
    ///
    /// Environment variable: `HUMANID_WIDTH`
    #[arg(long, global = true, env = "HUMANID_WIDTH", default_value_t = 32)]
    pub width: u32,

    /// Emit logs as JSON instead of human readable lines.
    ///
    /// Environment variable: `HUMANID_LOG_JSON`
    #[arg(
        long,
        global = true,
        env = "HUMANID_LOG_JSON",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub log_json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Encode decimal raw ids into display identifiers.
    Encode {
        /// Raw ids; read from stdin when omitted.
        values: Vec<String>,
    },
    /// Decode display identifiers into decimal raw ids.
    Decode {
        /// Display identifiers; read from stdin when omitted.
        values: Vec<String>,
    },
    /// Accept either a decimal raw id or a display identifier.
    Parse {
        /// Ids in either form; read from stdin when omitted.
        values: Vec<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseArg {
    Strict,
    Insensitive,
}

impl From<CaseArg> for Case {
    fn from(arg: CaseArg) -> Self {
        match arg {
            CaseArg::Strict => Self::Strict,
            CaseArg::Insensitive => Self::Insensitive,
        }
    }
}

/// What to do with each value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
    Parse,
}

/// Raw id integer width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    U16,
    U32,
    U64,
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub mode: Mode,
    pub codec: Codec,
    pub width: Width,
    pub log_json: bool,
    /// Values given on the command line. Empty means read stdin.
    pub values: Vec<String>,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let width = match args.width {
            16 => Width::U16,
            32 => Width::U32,
            64 => Width::U64,
            other => bail!("HUMANID_WIDTH must be 16, 32 or 64 (got {other})"),
        };

        let (mode, values) = match args.command {
            Command::Encode { values } => (Mode::Encode, values),
            Command::Decode { values } => (Mode::Decode, values),
            Command::Parse { values } => (Mode::Parse, values),
        };

        Ok(Self {
            mode,
            codec: Codec::new()
                .with_case(args.case.into())
                .with_canonical(args.canonical),
            width,
            log_json: args.log_json,
            values,
        })
    }
}
