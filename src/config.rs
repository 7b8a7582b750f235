use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::conversion::ConversionError;
use crate::quantity::UnitKind;
use crate::units::find_unit;

/// 설정 파일 기본 경로(작업 디렉터리 기준).
pub const DEFAULT_CONFIG_PATH: &str = "converter.toml";

/// kind별 기본 입력/출력 단위 선택.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPair {
    pub source: String,
    pub target: String,
}

impl UnitPair {
    fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `RUST_LOG`가 없을 때 사용할 로그 필터
    pub log_level: String,
    pub default_kind: UnitKind,
    pub length: UnitPair,
    pub mass: UnitPair,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            default_kind: UnitKind::Length,
            length: UnitPair::new("Inch", "Foot"),
            mass: UnitPair::new("Pounds", "Kilograms"),
        }
    }
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML 역직렬화 오류
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// 기본 단위가 레지스트리에 없음
    #[error("invalid default selection: {0}")]
    InvalidDefault(#[from] ConversionError),
}

impl Config {
    /// kind에 해당하는 기본 단위 선택을 반환한다.
    pub fn defaults_for(&self, kind: UnitKind) -> &UnitPair {
        match kind {
            UnitKind::Length => &self.length,
            UnitKind::Mass => &self.mass,
        }
    }

    /// 기본 단위가 모두 등록된 단위인지 확인한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in UnitKind::ALL {
            let pair = self.defaults_for(kind);
            find_unit(kind, &pair.source)?;
            find_unit(kind, &pair.target)?;
        }
        Ok(())
    }

    /// TOML 문자열에서 설정을 읽는다. 빠진 항목은 기본값으로 채운다.
    pub fn from_toml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// 작업 디렉터리 기준으로 설정을 로드한다. [`load_from_dir`] 참고.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    load_from_dir(Path::new("."), path)
}

/// `dir` 기준으로 설정을 로드한다.
///
/// 경로를 지정하면 그 파일이 반드시 있어야 한다. 지정하지 않으면 `dir/converter.toml`을
/// 찾고, 없으면 기본 설정을 사용한다. 설정 파일은 읽기만 한다.
pub fn load_from_dir(dir: &Path, path: Option<&Path>) -> Result<Config, ConfigError> {
    let (path, required) = match path {
        Some(p) => (dir.join(p), true),
        None => (dir.join(DEFAULT_CONFIG_PATH), false),
    };
    if !required && !path.exists() {
        return Ok(Config::default());
    }
    let path = path.as_path();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = Config::from_toml(path, &content)?;
    info!(path = %path.display(), "configuration loaded");
    Ok(cfg)
}
