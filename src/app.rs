use std::io::{self, BufRead, Write};

use clap::Subcommand;
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::conversion::{parse_value, ConversionError, ConversionRequest};
use crate::quantity::UnitKind;
use crate::ui_cli::{self, Console};
use crate::units::list_units;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// 설정 로드 오류
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

/// 실행할 작업.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Convert a single value and exit
    Convert {
        /// Conversion kind: length or mass
        #[arg(long, short)]
        kind: Option<UnitKind>,
        /// Value to convert (must be greater than 0)
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Source unit name or alias (defaults to the configured source)
        #[arg(long)]
        from: Option<String>,
        /// Target unit name or alias (defaults to the configured target)
        #[arg(long)]
        to: Option<String>,
    },
    /// List the registered units of a kind
    List {
        #[arg(long, short)]
        kind: Option<UnitKind>,
    },
    /// Prompt for conversions until exit (default)
    Interactive,
}

/// 명령을 실행한다. 결과는 `out`에 쓴다.
pub fn run<R: BufRead, W: Write>(
    command: Command,
    config: &Config,
    input: R,
    out: &mut W,
) -> Result<(), AppError> {
    match command {
        Command::Convert {
            kind,
            value,
            from,
            to,
        } => {
            let kind = kind.unwrap_or(config.default_kind);
            let defaults = config.defaults_for(kind);
            let request = ConversionRequest::new(kind, parse_value(&value)?)
                .from_unit(from.as_deref().unwrap_or(&defaults.source))
                .to_unit(to.as_deref().unwrap_or(&defaults.target));
            let conversion = request.evaluate()?;
            for line in conversion.report_lines() {
                writeln!(out, "{line}")?;
            }
        }
        Command::List { kind } => {
            print_units(kind.unwrap_or(config.default_kind), out)?;
        }
        Command::Interactive => {
            let mut console = Console::new(input, out);
            ui_cli::run(&mut console, config)?;
        }
    }
    Ok(())
}

/// 등록된 단위를 factor와 함께 출력한다.
pub fn print_units<W: Write>(kind: UnitKind, out: &mut W) -> Result<(), AppError> {
    writeln!(out, "{kind} units (base: {})", kind.base_unit_name())?;
    for unit in list_units(kind) {
        if unit.aliases.is_empty() {
            writeln!(out, "  {:<16} {}", unit.name, unit.factor)?;
        } else {
            writeln!(
                out,
                "  {:<16} {} ({})",
                unit.name,
                unit.factor,
                unit.aliases.join(", ")
            )?;
        }
    }
    Ok(())
}
