use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use passcode_tools::{format_report_pretty, inspect_password};
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};
use record::{ParseStyle, Password};

#[derive(Parser)]
#[command(
    name = "passcode-tools",
    version,
    about = "passcode inspection and encoding tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect a password's segments, spellings, and checksum state.
    Inspect {
        /// Password text: a symbol string or an integer literal.
        text: String,
        /// Which interpretations of the text to permit.
        #[arg(long, value_enum, default_value_t = StyleArg::Any)]
        style: StyleArg,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Build a password from segment values.
    Encode {
        /// Scene identifier, 0..=31.
        scene: u64,
        /// Flag data, 0..=33554431.
        flags: u64,
        /// Reroll spellings before printing.
        #[arg(long)]
        randomize: bool,
        /// Seed for deterministic rerolling.
        #[arg(long, requires = "randomize")]
        seed: Option<u64>,
    },
    /// Rederive the checksum with the single correction step.
    Correct {
        /// Password text: a symbol string or an integer literal.
        text: String,
    },
    /// Respell every symbol canonically.
    Normalize {
        /// Password text: a symbol string or an integer literal.
        text: String,
        /// Alternate spelling for zero-valued symbols.
        #[arg(long)]
        blank: Option<char>,
    },
    /// Reroll every spelling without changing the decoded value.
    Randomize {
        /// Password text: a symbol string or an integer literal.
        text: String,
        /// Seed for deterministic rerolling.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Render a password with a format specifier.
    Render {
        /// Password text: a symbol string or an integer literal.
        text: String,
        /// Format specifier, e.g. `P`, `PN-`, `PB`, `V`, `VX`.
        spec: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleArg {
    Any,
    Symbols,
    Integer,
}

impl From<StyleArg> for ParseStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Any => Self::any(),
            StyleArg::Symbols => Self::symbols_only(),
            StyleArg::Integer => Self::integer_only(),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Pretty,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Inspect {
            text,
            style,
            format,
        } => {
            let password = parse_password(&text, style.into())?;
            let report = inspect_password(&password);
            match format {
                OutputFormat::Pretty => print!("{}", format_report_pretty(&report)),
                OutputFormat::Json => {
                    let json =
                        serde_json::to_string_pretty(&report).context("serialize report")?;
                    println!("{json}");
                }
            }
        }
        Command::Encode {
            scene,
            flags,
            randomize,
            seed,
        } => {
            let mut password = Password::zero();
            password
                .set_scene_value(scene)
                .with_context(|| format!("scene {scene}"))?;
            password
                .set_flag_value(flags)
                .with_context(|| format!("flags {flags}"))?;
            if randomize {
                reroll(&mut password, seed);
            }
            password.correct();
            println!("{password}");
        }
        Command::Correct { text } => {
            let mut password = parse_password(&text, ParseStyle::any())?;
            password.correct();
            println!("{password}");
        }
        Command::Normalize { text, blank } => {
            let mut password = parse_password(&text, ParseStyle::any())?;
            match blank {
                Some(blank) => password
                    .normalize_with_blank(blank)
                    .with_context(|| format!("blank spelling {blank:?}"))?,
                None => password.normalize(),
            }
            println!("{password}");
        }
        Command::Randomize { text, seed } => {
            let mut password = parse_password(&text, ParseStyle::any())?;
            reroll(&mut password, seed);
            println!("{password}");
        }
        Command::Render { text, spec } => {
            let password = parse_password(&text, ParseStyle::any())?;
            let rendered = password
                .format(&spec)
                .with_context(|| format!("format specifier {spec:?}"))?;
            println!("{rendered}");
        }
    }
    Ok(())
}

fn parse_password(text: &str, style: ParseStyle) -> Result<Password> {
    Password::parse(text, style).with_context(|| format!("parse password {text:?}"))
}

fn reroll(password: &mut Password, seed: Option<u64>) {
    match seed {
        Some(seed) => password.randomize(&mut StdRng::seed_from_u64(seed)),
        None => password.randomize(&mut thread_rng()),
    }
}
