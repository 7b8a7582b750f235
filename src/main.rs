use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use unit_converter_toolbox::app::{self, AppError, Command};
use unit_converter_toolbox::{config, logging};

#[derive(Parser)]
#[command(
    name = "unit_converter_toolbox",
    version,
    about = "Length and mass unit converter"
)]
struct Cli {
    /// Path to a TOML configuration file (default: ./converter.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    /// 서브커맨드가 없으면 대화형 모드로 실행한다.
    fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Interactive)
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let cfg = config::load(cli.config.as_deref())?;
    let level = if cli.verbose { "debug" } else { cfg.log_level.as_str() };
    logging::init(level);

    let command = cli.command();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    app::run(command, &cfg, stdin.lock(), &mut stdout)
}
