//! 계산 결과 보고서 렌더링.
//! 프로젝트 정보는 일부가 비어 있거나 이상한 문자가 섞여 있어도 실패하지 않는다.
//! 본문 렌더링에 실패하면 핵심 수치만 담은 최소 보고서를 대신 쓴다.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

use crate::cooling::assumptions::DAYS_PER_MONTH;
use crate::cooling::{Assumptions, CalculationInput, CalculationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }
}

/// 보고서 관련 설정(config.toml `[report]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub format: ReportFormat,
    pub currency_symbol: String,
    /// 보고서 끝에 붙는 판매사 연락처
    pub contact_lines: Vec<String>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            currency_symbol: "₺".into(),
            contact_lines: vec![
                "Erdinç Klima - FES Evaporative Cooling Solutions".into(),
                "Phone: 0532 424 62 19".into(),
                "Email: info@erdincklima.com".into(),
                "Web: www.erdincklima.com".into(),
            ],
        }
    }
}

/// 보고서 머리말에 들어가는 프로젝트 정보. 모든 항목은 선택이다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub project_name: Option<String>,
    pub company_name: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("report JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 제어 문자를 걸러내고 비어 있으면 "-"로 표시한다.
pub fn safe_text(value: Option<&str>) -> String {
    let cleaned: String = value
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_control())
        .collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        "-".to_string()
    } else {
        trimmed.to_string()
    }
}

/// 정수를 천 단위 콤마로 구분한다.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 시간당 물 소비량을 일/주/월 단위로 환산한 값 [L].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaterProjection {
    pub hourly: f64,
    pub daily: f64,
    pub weekly: f64,
    pub monthly: f64,
}

impl WaterProjection {
    pub fn new(hourly: f64, hours_per_day: f64) -> Self {
        let daily = hourly * hours_per_day;
        Self {
            hourly,
            daily,
            weekly: daily * 7.0,
            monthly: daily * DAYS_PER_MONTH,
        }
    }
}

/// 보고서 한 건을 렌더링하는 데 필요한 데이터.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub project: &'a ProjectInfo,
    pub input: &'a CalculationInput,
    pub result: &'a CalculationResult,
    pub assumptions: &'a Assumptions,
    pub settings: &'a ReportSettings,
    pub date: NaiveDate,
}

#[derive(Serialize)]
struct ReportJson<'a> {
    generated_on: String,
    project: &'a ProjectInfo,
    input: &'a CalculationInput,
    result: &'a CalculationResult,
    water: WaterProjection,
    season_months: u32,
    currency: &'a str,
    contact: &'a [String],
}

impl<'a> Report<'a> {
    pub fn new(
        project: &'a ProjectInfo,
        input: &'a CalculationInput,
        result: &'a CalculationResult,
        assumptions: &'a Assumptions,
        settings: &'a ReportSettings,
    ) -> Self {
        Self {
            project,
            input,
            result,
            assumptions,
            settings,
            date: Local::now().date_naive(),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    fn water(&self) -> WaterProjection {
        WaterProjection::new(self.result.water_consumption, self.assumptions.hours_per_day)
    }

    /// 텍스트 보고서를 만든다. 실패 시 최소 보고서를 반환한다.
    pub fn render_text(&self) -> String {
        match self.try_render_text() {
            Ok(text) => text,
            Err(e) => {
                error!("report rendering failed: {e}");
                self.render_minimal(&e.to_string())
            }
        }
    }

    /// JSON 보고서를 만든다. 실패 시 최소 보고서(텍스트)를 반환한다.
    pub fn render_json(&self) -> String {
        let doc = ReportJson {
            generated_on: self.date.format("%Y-%m-%d").to_string(),
            project: self.project,
            input: self.input,
            result: self.result,
            water: self.water(),
            season_months: self.assumptions.season_months,
            currency: &self.settings.currency_symbol,
            contact: &self.settings.contact_lines,
        };
        match serde_json::to_string_pretty(&doc) {
            Ok(json) => json,
            Err(e) => {
                error!("report JSON serialization failed: {e}");
                self.render_minimal(&e.to_string())
            }
        }
    }

    pub fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => self.render_text(),
            ReportFormat::Json => self.render_json(),
        }
    }

    fn try_render_text(&self) -> Result<String, std::fmt::Error> {
        let r = self.result;
        let p = self.project;
        let cur = &self.settings.currency_symbol;
        let months = self.assumptions.season_months;
        let mut out = String::new();

        writeln!(out, "FES Evaporative Cooling Calculation Report")?;
        writeln!(out, "==========================================")?;
        writeln!(out)?;

        writeln!(out, "Project Information")?;
        writeln!(out, "-------------------")?;
        writeln!(out, "Project Name: {}", safe_text(p.project_name.as_deref()))?;
        writeln!(out, "Company Name: {}", safe_text(p.company_name.as_deref()))?;
        writeln!(out, "City: {}", safe_text(p.city.as_deref()))?;
        writeln!(out, "Phone: {}", safe_text(p.phone.as_deref()))?;
        writeln!(out, "Email: {}", safe_text(p.email.as_deref()))?;
        writeln!(out, "Date: {}", self.date.format("%Y-%m-%d"))?;
        writeln!(out)?;

        let i = self.input;
        writeln!(out, "Input Data")?;
        writeln!(out, "----------")?;
        writeln!(out, "Area: {} m²", i.area)?;
        writeln!(out, "Height: {} m", i.height)?;
        writeln!(out, "People: {}", i.people)?;
        writeln!(out, "Outdoor Temperature: {}°C", i.outdoor_temp)?;
        writeln!(out, "Relative Humidity: {}%", i.humidity)?;
        writeln!(out, "Air Changes: {} ACH", r.air_changes)?;
        writeln!(out)?;

        writeln!(out, "Calculation Results")?;
        writeln!(out, "-------------------")?;
        writeln!(out, "Total Airflow: {} m³/h", group_thousands(r.required_airflow))?;
        writeln!(out, "Cooling Load: {:.1} kW", r.total_load)?;
        writeln!(out)?;

        writeln!(out, "Unit Selection")?;
        writeln!(out, "--------------")?;
        for opt in &r.cooler_options {
            let status = if opt.key == r.recommended_option.key {
                " (RECOMMENDED)"
            } else {
                ""
            };
            writeln!(out, "{}{status}", opt.model)?;
            writeln!(out, "  Units Required: {}", opt.required_units)?;
            writeln!(
                out,
                "  Unit Capacity: {} m³/h",
                group_thousands(opt.capacity as i64)
            )?;
            writeln!(out, "  Total Power: {:.1} kW", opt.total_power)?;
            writeln!(out, "  Efficiency: {}%", opt.efficiency)?;
        }
        writeln!(out)?;

        writeln!(out, "Power Comparison")?;
        writeln!(out, "----------------")?;
        writeln!(out, "Conventional AC: {:.1} kW", r.conventional_power_kw)?;
        writeln!(out, "FES Evaporative: {:.1} kW", r.recommended_option.total_power)?;
        writeln!(out, "Power Savings: {}%", r.power_savings)?;
        writeln!(out)?;

        let w = self.water();
        writeln!(out, "Water Consumption")?;
        writeln!(out, "-----------------")?;
        writeln!(out, "Hourly: {:.1} L/h", w.hourly)?;
        writeln!(
            out,
            "Daily ({} hours): {:.0} L/day",
            self.assumptions.hours_per_day, w.daily
        )?;
        writeln!(out, "Weekly: {:.0} L/week", w.weekly)?;
        writeln!(out, "Monthly: {:.0} L/month", w.monthly)?;
        writeln!(out)?;

        writeln!(out, "CO2 Emissions Comparison")?;
        writeln!(out, "------------------------")?;
        writeln!(out, "Conventional AC: {:.1} tons CO2/{months} months", r.conventional_co2)?;
        writeln!(out, "FES Evaporative: {:.1} tons CO2/{months} months", r.evaporative_co2)?;
        writeln!(out, "CO2 Savings: {:.1} tons CO2", r.co2_savings)?;
        writeln!(out)?;

        writeln!(out, "Cost Analysis ({months} months)")?;
        writeln!(out, "-------------------------")?;
        writeln!(
            out,
            "Conventional AC (Electricity): {} {cur}",
            group_thousands(r.annual_electricity_cost)
        )?;
        writeln!(
            out,
            "FES Evaporative (Electricity): {} {cur}",
            group_thousands(r.evaporative_electricity_cost)
        )?;
        writeln!(
            out,
            "FES Evaporative (Water): {} {cur}",
            group_thousands(r.annual_water_cost)
        )?;
        writeln!(out, "Total Savings: {} {cur}", group_thousands(r.annual_savings))?;

        if !self.settings.contact_lines.is_empty() {
            writeln!(out)?;
            writeln!(out, "Contact Information")?;
            writeln!(out, "-------------------")?;
            for line in &self.settings.contact_lines {
                writeln!(out, "{}", safe_text(Some(line.as_str())))?;
            }
        }
        Ok(out)
    }

    /// 렌더링 실패 시의 최소 보고서. 계산 결과의 핵심 수치는 잃지 않는다.
    pub fn render_minimal(&self, reason: &str) -> String {
        let r = self.result;
        format!(
            "FES Evaporative Cooling Calculation Report\n\
             Report could not be fully generated: {reason}\n\
             Total Airflow: {} m3/h\n\
             Cooling Load: {} kW\n\
             Recommended: {} x {}\n\
             Power Savings: {}%\n\
             Total Savings: {} {}\n",
            r.required_airflow,
            r.total_load,
            r.recommended_option.required_units,
            r.recommended_option.model,
            r.power_savings,
            r.annual_savings,
            self.settings.currency_symbol,
        )
    }
}

/// 보고서를 파일로 저장한다. 확장자가 없으면 형식에 맞는 확장자를 붙인다.
pub fn save_report(
    report: &Report<'_>,
    path: &Path,
    format: ReportFormat,
) -> Result<PathBuf, ReportError> {
    let path = if path.extension().is_none() {
        path.with_extension(format.extension())
    } else {
        path.to_path_buf()
    };
    let body = report.render(format);
    fs::write(&path, body)?;
    info!(path = %path.display(), "report saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AreaKey;
    use crate::cooling::calculate_cooling;

    fn sample_input() -> CalculationInput {
        CalculationInput {
            area: 1000.0,
            height: 6.0,
            people: 20,
            application_area: Some(AreaKey::Factories),
            ..CalculationInput::default()
        }
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(181_000), "181,000");
        assert_eq!(group_thousands(-1_234_567), "-1,234,567");
    }

    #[test]
    fn blank_and_control_metadata_is_tolerated() {
        assert_eq!(safe_text(None), "-");
        assert_eq!(safe_text(Some("   ")), "-");
        assert_eq!(safe_text(Some("Acme\u{0007} Ltd\n")), "Acme Ltd");
        assert_eq!(safe_text(Some("İzmir")), "İzmir");
    }

    #[test]
    fn text_report_marks_recommended_unit_once() {
        let input = sample_input();
        let result = calculate_cooling(&input);
        let project = ProjectInfo {
            project_name: Some("Hall B".into()),
            ..ProjectInfo::default()
        };
        let assumptions = Assumptions::default();
        let settings = ReportSettings::default();
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).expect("date");
        let text = Report::new(&project, &input, &result, &assumptions, &settings)
            .with_date(date)
            .render_text();

        assert_eq!(text.matches("(RECOMMENDED)").count(), 1);
        assert!(text.contains("FES30-APB/APT (RECOMMENDED)"));
        assert!(text.contains("Project Name: Hall B"));
        assert!(text.contains("Company Name: -"));
        assert!(text.contains("Date: 2024-06-01"));
        assert!(text.contains("Total Airflow: 181,000 m³/h"));
        assert!(text.contains("Erdinç Klima"));
    }

    #[test]
    fn json_report_carries_water_projection() {
        let input = sample_input();
        let result = calculate_cooling(&input);
        let project = ProjectInfo::default();
        let assumptions = Assumptions::default();
        let settings = ReportSettings::default();
        let json = Report::new(&project, &input, &result, &assumptions, &settings)
            .render_json();
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let hourly = value["water"]["hourly"].as_f64().expect("hourly");
        let daily = value["water"]["daily"].as_f64().expect("daily");
        assert!((daily - hourly * 6.0).abs() < 1e-9);
        assert_eq!(value["result"]["recommended_option"]["key"], "fes30");
    }

    #[test]
    fn minimal_report_keeps_headline_figures() {
        let input = sample_input();
        let result = calculate_cooling(&input);
        let project = ProjectInfo::default();
        let assumptions = Assumptions::default();
        let settings = ReportSettings::default();
        let text = Report::new(&project, &input, &result, &assumptions, &settings)
            .render_minimal("font missing");
        assert!(text.contains("font missing"));
        assert!(text.contains("Total Airflow: 181000 m3/h"));
    }
}
