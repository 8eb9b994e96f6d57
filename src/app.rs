use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::{Config, ConfigError};
use crate::cooling::{calculate_cooling_with, CalculationInput, CalculationRequest, CalculationResult};
use crate::i18n::{self, Translator};
use crate::report::ReportError;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("report error: {0}")]
    Report(#[from] ReportError),
    #[error("invalid request JSON: {0}")]
    Request(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    Input(String),
}

/// 로그 구독자를 설치한다. RUST_LOG가 있으면 그 값을, 없으면 verbose 단계를 따른다.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("tracing init failed: {e}");
    }
}

/// 설정의 입력 단위를 SI로 환산한 뒤 계산한다. CLI/GUI 공용 진입점.
pub fn run_calculation(
    request: CalculationRequest,
    config: &Config,
) -> (CalculationInput, CalculationResult) {
    let input = config.units.to_si(request).into_input();
    if input.area <= 0.0 {
        warn!(area = input.area, "non-positive area, results will be degenerate");
    }
    let result = calculate_cooling_with(&input, &config.assumptions);
    info!(
        airflow = result.required_airflow,
        recommended = result.recommended_option.key.code(),
        units = result.recommended_option.required_units,
        "calculation complete"
    );
    (input, result)
}

/// CLI 대화형 모드의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &mut Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Calculate => ui_cli::handle_calculate(tr, config)?,
            MenuChoice::Areas => ui_cli::print_areas(tr),
            MenuChoice::Coolers => ui_cli::print_coolers(tr),
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, config)? {
                    config.save()?;
                    let code = i18n::resolve_language("auto", Some(config.language.as_str()));
                    *tr = Translator::new_with_pack(&code, config.language_pack_dir.as_deref());
                    println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
                }
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
