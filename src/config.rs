use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::cooling::Assumptions;
use crate::report::ReportSettings;
use crate::units::InputUnits;

/// 기본 설정 파일 경로.
pub const CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/en/tr)
    pub language: String,
    /// TOML 언어팩 디렉터리(선택)
    pub language_pack_dir: Option<String>,
    /// GUI 창 투명도(0.3~1.0)
    pub window_alpha: f32,
    pub units: InputUnits,
    pub assumptions: Assumptions,
    pub report: ReportSettings,
    /// 로드한 파일 경로. 저장 시 같은 파일에 쓴다.
    #[serde(skip)]
    path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            window_alpha: 1.0,
            units: InputUnits::default(),
            assumptions: Assumptions::default(),
            report: ReportSettings::default(),
            path: PathBuf::from(CONFIG_PATH),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new(CONFIG_PATH);
    if path.exists() {
        load_from(path)
    } else {
        info!(path = CONFIG_PATH, "config not found, writing defaults");
        let cfg = Config::default();
        save_to(&cfg, path)?;
        Ok(cfg)
    }
}

/// 지정한 경로의 설정을 읽는다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut cfg: Config = toml::from_str(&content)?;
    cfg.path = path.to_path_buf();
    if !(0.3..=1.0).contains(&cfg.window_alpha) {
        warn!(alpha = cfg.window_alpha, "window_alpha out of range, it will be clamped");
    }
    Ok(cfg)
}

fn save_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 로드했던 파일(기본값은 config.toml)에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_to(self, &self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CoolerKey;

    #[test]
    fn partial_file_keeps_defaults() {
        let src = r#"
language = "tr"

[assumptions]
electricity_rate = 2.0
preferred_cooler = "fes25"
"#;
        let cfg: Config = toml::from_str(src).expect("parse");
        assert_eq!(cfg.language, "tr");
        assert_eq!(cfg.assumptions.electricity_rate, 2.0);
        assert_eq!(cfg.assumptions.preferred_cooler, CoolerKey::Fes25);
        assert_eq!(cfg.assumptions.operating_hours(), 900.0);
        assert_eq!(cfg.units, InputUnits::default());
    }

    #[test]
    fn default_round_trips_through_toml() {
        let cfg = Config::default();
        let text = toml::to_string_pretty(&cfg).expect("serialize");
        let back: Config = toml::from_str(&text).expect("parse");
        assert_eq!(back, cfg);
    }

    #[test]
    fn save_writes_back_to_loaded_file() {
        let path = std::env::temp_dir().join(format!("fes_cfg_{}.toml", std::process::id()));
        fs::write(&path, "language = \"en\"\n").expect("seed");

        let mut cfg = load_from(&path).expect("load");
        assert_eq!(cfg.path(), path.as_path());
        cfg.language = "tr".into();
        cfg.assumptions.season_months = 4;
        cfg.save().expect("save");

        let back = load_from(&path).expect("reload");
        assert_eq!(back.language, "tr");
        assert_eq!(back.assumptions.season_months, 4);
        assert_eq!(back.assumptions.operating_hours(), 720.0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn defaults_point_at_working_dir_config() {
        assert_eq!(Config::default().path(), Path::new(CONFIG_PATH));
    }
}
