use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use fes_cooling_calculator::{
    app::{self, AppError},
    config::{self, Config},
    cooling::CalculationRequest,
    i18n::{self, Translator},
    report::{save_report, ProjectInfo, Report, ReportFormat},
    ui_cli,
    units::{AreaUnit, LengthUnit, TemperatureUnit},
};

#[derive(Parser, Debug)]
#[command(author, version, about = "FES evaporative cooling sizing calculator")]
struct Cli {
    /// Language (auto/en/tr)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    lang: String,
    /// Config file path (default: ./config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one calculation and print the result
    Calc(CalcArgs),
    /// List application areas by category
    Areas,
    /// List FES cooler models
    Coolers,
    /// Interactive menu (default)
    Interactive,
}

#[derive(Args, Debug)]
struct CalcArgs {
    /// Request JSON file; input flags are ignored when given
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long)]
    area: Option<f64>,
    #[arg(long, default_value_t = 3.0)]
    height: f64,
    #[arg(long, default_value_t = 0)]
    people: u32,
    /// Application area code (e.g. warehouses)
    #[arg(long)]
    application_area: Option<String>,
    #[arg(long, default_value_t = 35.0)]
    outdoor_temp: f64,
    #[arg(long, default_value_t = 40.0)]
    humidity: f64,
    /// Manual air changes per hour; overrides the application area
    #[arg(long)]
    air_changes: Option<f64>,
    /// Temperature unit (C/F/K), overrides config
    #[arg(long)]
    temp_unit: Option<String>,
    /// Length unit (m/ft)
    #[arg(long)]
    length_unit: Option<String>,
    /// Area unit (m2/ft2)
    #[arg(long)]
    area_unit: Option<String>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
    /// Write a report to this path
    #[arg(long)]
    report: Option<PathBuf>,
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    #[command(flatten)]
    project: ProjectArgs,
}

#[derive(Args, Debug)]
struct ProjectArgs {
    #[arg(long)]
    project_name: Option<String>,
    #[arg(long)]
    company_name: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    email: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    app::init_tracing(cli.verbose);
    let mut cfg = match load_config(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let mut tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    let outcome = match cli.command.unwrap_or(Command::Interactive) {
        Command::Calc(args) => run_calc(args, &mut cfg, &tr),
        Command::Areas => {
            ui_cli::print_areas(&tr);
            Ok(())
        }
        Command::Coolers => {
            ui_cli::print_coolers(&tr);
            Ok(())
        }
        Command::Interactive => app::run(&mut cfg, &mut tr),
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, AppError> {
    Ok(match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_default()?,
    })
}

fn run_calc(args: CalcArgs, cfg: &mut Config, tr: &Translator) -> Result<(), AppError> {
    apply_unit_overrides(&args, cfg)?;
    let request = match &args.input {
        Some(path) => serde_json::from_str::<CalculationRequest>(&fs::read_to_string(path)?)?,
        None => CalculationRequest {
            area: args
                .area
                .ok_or_else(|| AppError::Input("--area or --input is required".into()))?,
            height: args.height,
            people: args.people,
            application_area: args.application_area.clone(),
            outdoor_temp: args.outdoor_temp,
            humidity: args.humidity,
            manual_air_changes: args.air_changes.is_some(),
            custom_air_changes: args.air_changes.unwrap_or(15.0),
        },
    };

    let (input, result) = app::run_calculation(request, cfg);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        ui_cli::print_result(tr, &result, &cfg.report.currency_symbol);
    }

    if let Some(path) = &args.report {
        let project = ProjectInfo {
            project_name: args.project.project_name.clone(),
            company_name: args.project.company_name.clone(),
            city: args.project.city.clone(),
            phone: args.project.phone.clone(),
            email: args.project.email.clone(),
        };
        let format = args.format.map(ReportFormat::from).unwrap_or(cfg.report.format);
        let report = Report::new(&project, &input, &result, &cfg.assumptions, &cfg.report);
        let saved = save_report(&report, path, format)?;
        eprintln!("{} {}", tr.t(i18n::keys::REPORT_SAVED), saved.display());
    }
    Ok(())
}

fn apply_unit_overrides(args: &CalcArgs, cfg: &mut Config) -> Result<(), AppError> {
    if let Some(s) = &args.temp_unit {
        cfg.units.temperature = TemperatureUnit::from_symbol(s)
            .ok_or_else(|| AppError::Input(format!("unknown temperature unit: {s}")))?;
    }
    if let Some(s) = &args.length_unit {
        cfg.units.length = LengthUnit::from_symbol(s)
            .ok_or_else(|| AppError::Input(format!("unknown length unit: {s}")))?;
    }
    if let Some(s) = &args.area_unit {
        cfg.units.area = AreaUnit::from_symbol(s)
            .ok_or_else(|| AppError::Input(format!("unknown area unit: {s}")))?;
    }
    Ok(())
}
