use std::io::{BufRead, Write};

use crate::app::{print_units, AppError};
use crate::config::Config;
use crate::conversion::{parse_value, ConversionError, ConversionRequest};
use crate::quantity::UnitKind;
use crate::units::list_units;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    LengthConversion,
    MassConversion,
    ListUnits,
    Exit,
}

/// 프롬프트 입출력. 테스트에서 stdin/stdout 대신 버퍼를 넣을 수 있게 분리한다.
pub struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// 한 줄을 읽는다. 입력이 끝났으면 `None`.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn say(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 끝나면 종료로 본다.
pub fn main_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<MenuChoice, AppError> {
    console.say("\n=== Unit Converter ===")?;
    console.say("1) Length")?;
    console.say("2) Mass")?;
    console.say("3) List units")?;
    console.say("0) Exit")?;
    loop {
        let Some(sel) = console.read_line("Select: ")? else {
            return Ok(MenuChoice::Exit);
        };
        match sel.as_str() {
            "1" => return Ok(MenuChoice::LengthConversion),
            "2" => return Ok(MenuChoice::MassConversion),
            "3" => return Ok(MenuChoice::ListUnits),
            "0" | "q" => return Ok(MenuChoice::Exit),
            _ => console.say("Invalid selection, try again.")?,
        }
    }
}

/// 대화형 루프를 실행한다.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
) -> Result<(), AppError> {
    loop {
        match main_menu(console)? {
            MenuChoice::LengthConversion => handle_conversion(console, config, UnitKind::Length)?,
            MenuChoice::MassConversion => handle_conversion(console, config, UnitKind::Mass)?,
            MenuChoice::ListUnits => {
                for kind in UnitKind::ALL {
                    print_units(kind, &mut console.out)?;
                }
            }
            MenuChoice::Exit => break,
        }
    }
    Ok(())
}

/// 값과 단위를 입력받아 변환한다. 검증 실패는 안내 문구만 출력하고 메뉴로 돌아간다.
pub fn handle_conversion<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
    kind: UnitKind,
) -> Result<(), AppError> {
    let defaults = config.defaults_for(kind).clone();
    let names: Vec<&str> = list_units(kind).iter().map(|u| u.name).collect();
    console.say(&format!("\n-- {kind} conversion --"))?;
    console.say(&format!("Units: {}", names.join(", ")))?;

    let Some(value_text) = console.read_line("Enter value: ")? else {
        return Ok(());
    };
    let Some(from) = console.read_line(&format!("Input unit [{}]: ", defaults.source))? else {
        return Ok(());
    };
    let Some(to) = console.read_line(&format!("Output unit [{}]: ", defaults.target))? else {
        return Ok(());
    };

    let from = if from.is_empty() { defaults.source } else { from };
    let to = if to.is_empty() { defaults.target } else { to };
    let outcome = parse_value(&value_text).and_then(|value| {
        ConversionRequest::new(kind, value)
            .from_unit(&from)
            .to_unit(&to)
            .evaluate()
    });
    match outcome {
        Ok(conversion) => {
            for line in conversion.report_lines() {
                console.say(&line)?;
            }
        }
        Err(err) => report_invalid(console, kind, &err)?,
    }
    Ok(())
}

fn report_invalid<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    kind: UnitKind,
    err: &ConversionError,
) -> Result<(), AppError> {
    tracing::debug!(%err, "conversion rejected");
    console.say(&err.user_message(kind))
}
