#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use tracing::{error, info};

use fes_cooling_calculator::{
    app,
    catalog::{find_area, grouped_areas, AreaKey},
    config,
    cooling::{CalculationInput, CalculationRequest, CalculationResult},
    i18n,
    report::{save_report, ProjectInfo, Report, ReportFormat},
    units::{AreaUnit, LengthUnit, TemperatureUnit},
};

fn main() -> Result<(), eframe::Error> {
    // CLI 옵션: --lang xx 또는 --lang=xx (auto/en/tr), -v 반복으로 로그 상세도
    let mut cli_lang: Option<String> = None;
    let mut verbose = 0u8;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        } else if a.starts_with("-v") && a[1..].chars().all(|c| c == 'v') {
            verbose = verbose.saturating_add((a.len() - 1) as u8);
        }
        i += 1;
    }
    app::init_tracing(verbose);

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        error!("config load failed, using defaults: {e}");
        config::Config::default()
    });
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "FES Evaporative Cooling Calculator",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["fes_icon.png", "icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Calculator,
    Areas,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    tab: Tab,
    show_settings_modal: bool,
    // 입력 폼 (설정 단위 기준)
    area: f64,
    height: f64,
    people: u32,
    area_key: Option<AreaKey>,
    outdoor_temp: f64,
    humidity: f64,
    manual_air_changes: bool,
    custom_air_changes: f64,
    dirty: bool,
    calc: Option<(CalculationInput, CalculationResult)>,
    // 보고서
    project_name: String,
    company_name: String,
    city: String,
    phone: String,
    email: String,
    report_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        info!(lang = tr.language().as_code(), "GUI language resolved");
        let defaults = CalculationRequest::default();
        Self {
            config,
            tr,
            tab: Tab::Calculator,
            show_settings_modal: false,
            area: 500.0,
            height: defaults.height,
            people: defaults.people,
            area_key: None,
            outdoor_temp: defaults.outdoor_temp,
            humidity: defaults.humidity,
            manual_air_changes: defaults.manual_air_changes,
            custom_air_changes: defaults.custom_air_changes,
            dirty: true,
            calc: None,
            project_name: String::new(),
            company_name: String::new(),
            city: String::new(),
            phone: String::new(),
            email: String::new(),
            report_status: None,
        }
    }

    fn txt(&self, key: &str, default: &str) -> String {
        self.tr.lookup(key).unwrap_or_else(|| default.to_string())
    }

    fn reload_translator(&mut self) {
        let code = i18n::resolve_language("auto", Some(self.config.language.as_str()));
        self.tr = i18n::Translator::new_with_pack(&code, self.config.language_pack_dir.as_deref());
    }

    fn recalculate(&mut self) {
        let request = CalculationRequest {
            area: self.area,
            height: self.height,
            people: self.people,
            application_area: self.area_key.map(|k| k.code().to_string()),
            outdoor_temp: self.outdoor_temp,
            humidity: self.humidity,
            manual_air_changes: self.manual_air_changes,
            custom_air_changes: self.custom_air_changes,
        };
        self.calc = Some(app::run_calculation(request, &self.config));
        self.dirty = false;
    }

    fn project_info(&self) -> ProjectInfo {
        let opt = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        ProjectInfo {
            project_name: opt(&self.project_name),
            company_name: opt(&self.company_name),
            city: opt(&self.city),
            phone: opt(&self.phone),
            email: opt(&self.email),
        }
    }

    fn save_report_dialog(&mut self) {
        let Some((input, result)) = &self.calc else {
            return;
        };
        let Some(path) = FileDialog::new()
            .add_filter("Text", &["txt"])
            .add_filter("JSON", &["json"])
            .set_file_name("fes_report.txt")
            .save_file()
        else {
            return;
        };
        let format = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ReportFormat::Json,
            Some(_) => ReportFormat::Text,
            None => self.config.report.format,
        };
        let project = self.project_info();
        let report = Report::new(
            &project,
            input,
            result,
            &self.config.assumptions,
            &self.config.report,
        );
        self.report_status = Some(match save_report(&report, &path, format) {
            Ok(saved) => format!(
                "{} {}",
                self.tr.t(i18n::keys::REPORT_SAVED),
                saved.display()
            ),
            Err(e) => {
                error!("report save failed: {e}");
                format!("{}: {e}", self.tr.t(i18n::keys::ERROR_PREFIX))
            }
        });
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(self.txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Calculator, self.txt("gui.tab.calculator", "Calculator")),
            (Tab::Areas, self.txt("gui.tab.areas", "Application Areas")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_form(&mut self, ui: &mut egui::Ui) {
        let u = self.config.units;
        let l_area = self.txt("gui.form.area", "Floor area");
        let l_height = self.txt("gui.form.height", "Ceiling height");
        let l_people = self.txt("gui.form.people", "People");
        let l_app_area = self.txt("gui.form.application_area", "Application area");
        let l_temp = self.txt("gui.form.outdoor_temp", "Outdoor temperature");
        let l_humidity = self.txt("gui.form.humidity", "Relative humidity");
        let l_manual = self.txt("gui.form.manual_ach", "Manual air changes");
        let none_label = self.txt("gui.form.area_none", "(none, default 12 ACH)");
        let selected = self
            .area_key
            .map(|k| find_area(k).name.to_string())
            .unwrap_or_else(|| none_label.clone());
        let mut changed = false;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            heading_with_tip(
                ui,
                &self.txt("gui.form.heading", "Space & Climate"),
                &self.txt(
                    "gui.form.tip",
                    "Results update as soon as any input changes.",
                ),
            );
            egui::Grid::new("input_grid")
                .num_columns(3)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label(l_area);
                    changed |= ui
                        .add(egui::DragValue::new(&mut self.area).speed(5.0).clamp_range(0.0..=1.0e7))
                        .changed();
                    ui.label(u.area.symbol());
                    ui.end_row();

                    ui.label(l_height);
                    changed |= ui
                        .add(egui::DragValue::new(&mut self.height).speed(0.1).clamp_range(0.0..=1000.0))
                        .changed();
                    ui.label(u.length.symbol());
                    ui.end_row();

                    ui.label(l_people);
                    changed |= ui.add(egui::DragValue::new(&mut self.people)).changed();
                    ui.label("");
                    ui.end_row();

                    ui.label(l_app_area);
                    egui::ComboBox::from_id_source("application_area")
                        .selected_text(selected)
                        .width(260.0)
                        .show_ui(ui, |ui| {
                            changed |= ui
                                .selectable_value(&mut self.area_key, None, none_label)
                                .changed();
                            for (category, areas) in grouped_areas() {
                                ui.separator();
                                ui.label(egui::RichText::new(category.label()).strong());
                                for a in areas {
                                    changed |= ui
                                        .selectable_value(
                                            &mut self.area_key,
                                            Some(a.key),
                                            format!("{} ({} ACH)", a.name, a.air_changes),
                                        )
                                        .changed();
                                }
                            }
                        });
                    ui.label("");
                    ui.end_row();

                    ui.label(l_temp);
                    changed |= ui
                        .add(egui::DragValue::new(&mut self.outdoor_temp).speed(0.5))
                        .changed();
                    ui.label(u.temperature.symbol());
                    ui.end_row();

                    ui.label(l_humidity);
                    changed |= ui
                        .add(egui::DragValue::new(&mut self.humidity).speed(1.0).clamp_range(0.0..=100.0))
                        .changed();
                    ui.label("%");
                    ui.end_row();

                    changed |= ui.checkbox(&mut self.manual_air_changes, l_manual).changed();
                    let manual = self.manual_air_changes;
                    ui.add_enabled_ui(manual, |ui| {
                        changed |= ui
                            .add(egui::DragValue::new(&mut self.custom_air_changes).speed(0.5))
                            .changed();
                    });
                    ui.label("ACH");
                    ui.end_row();
                });
        });
        if changed {
            self.dirty = true;
            self.report_status = None;
        }
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        let Some((_, r)) = &self.calc else {
            return;
        };
        let cur = self.config.report.currency_symbol.clone();
        let months = self.config.assumptions.season_months;
        let recommended_color = ui.visuals().selection.bg_fill;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading(self.txt("gui.result.heading", "Results"));
            egui::Grid::new("result_grid")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    let mut row = |label: String, value: String| {
                        ui.label(label);
                        ui.strong(value);
                        ui.end_row();
                    };
                    row(self.tr.t(i18n::keys::RESULT_AIRFLOW), format!("{} m³/h", r.required_airflow));
                    row(self.tr.t(i18n::keys::RESULT_LOAD), format!("{:.1} kW", r.total_load));
                    row(self.tr.t(i18n::keys::RESULT_AIR_CHANGES), format!("{} ACH", r.air_changes));
                    row(
                        self.tr.t(i18n::keys::RESULT_POWER),
                        format!(
                            "{:.1} kW / {:.1} kW",
                            r.conventional_power_kw, r.recommended_option.total_power
                        ),
                    );
                    row(self.tr.t(i18n::keys::RESULT_POWER_SAVINGS), format!("{}%", r.power_savings));
                    row(self.tr.t(i18n::keys::RESULT_WATER), format!("{:.1} L/h", r.water_consumption));
                    row(
                        self.tr.t(i18n::keys::RESULT_CO2),
                        format!(
                            "{:.1} / {:.1} / {:.1} t ({months} mo)",
                            r.conventional_co2, r.evaporative_co2, r.co2_savings
                        ),
                    );
                    row(
                        self.tr.t(i18n::keys::RESULT_COSTS),
                        format!(
                            "{} / {} / {} {cur}",
                            r.annual_electricity_cost,
                            r.evaporative_electricity_cost,
                            r.annual_water_cost
                        ),
                    );
                    row(self.tr.t(i18n::keys::RESULT_SAVINGS), format!("{} {cur}", r.annual_savings));
                });
        });
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading(self.tr.t(i18n::keys::RESULT_OPTIONS));
            egui::Grid::new("option_grid")
                .num_columns(5)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.strong(self.txt("gui.option.model", "Model"));
                    ui.strong(self.txt("gui.option.units", "Units"));
                    ui.strong(self.txt("gui.option.capacity", "Total capacity"));
                    ui.strong(self.txt("gui.option.power", "Total power"));
                    ui.strong(self.txt("gui.option.efficiency", "Efficiency"));
                    ui.end_row();
                    for opt in &r.cooler_options {
                        let is_rec = opt.key == r.recommended_option.key;
                        let model = if is_rec {
                            egui::RichText::new(format!(
                                "{} ★ {}",
                                opt.model,
                                self.tr.t(i18n::keys::RESULT_RECOMMENDED)
                            ))
                            .background_color(recommended_color)
                            .strong()
                        } else {
                            egui::RichText::new(opt.model.as_str())
                        };
                        ui.label(model);
                        ui.label(opt.required_units.to_string());
                        ui.label(format!("{:.0} m³/h", opt.total_capacity));
                        ui.label(format!("{:.1} kW", opt.total_power));
                        ui.label(format!("{}%", opt.efficiency));
                        ui.end_row();
                    }
                });
        });
    }

    fn ui_report(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading(self.txt("gui.report.heading", "Report"));
            egui::Grid::new("project_grid")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    let fields = [
                        (self.tr.t(i18n::keys::PROMPT_PROJECT_NAME), &mut self.project_name),
                        (self.tr.t(i18n::keys::PROMPT_COMPANY_NAME), &mut self.company_name),
                        (self.tr.t(i18n::keys::PROMPT_CITY), &mut self.city),
                        (self.tr.t(i18n::keys::PROMPT_PHONE), &mut self.phone),
                        (self.tr.t(i18n::keys::PROMPT_EMAIL), &mut self.email),
                    ];
                    for (label, value) in fields {
                        ui.label(label.trim_end_matches([' ', ':']));
                        ui.text_edit_singleline(value);
                        ui.end_row();
                    }
                });
            ui.horizontal(|ui| {
                let save = ui
                    .add_enabled(
                        self.calc.is_some(),
                        egui::Button::new(self.txt("gui.report.save", "Save report…")),
                    )
                    .on_hover_text(self.txt(
                        "gui.report.save_tip",
                        "Choose .txt for a text report or .json for structured output.",
                    ));
                if save.clicked() {
                    self.save_report_dialog();
                }
                if let Some(status) = &self.report_status {
                    ui.label(status);
                }
            });
        });
    }

    fn ui_calculator(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            self.ui_form(ui);
            if self.dirty {
                self.recalculate();
            }
            ui.add_space(8.0);
            self.ui_results(ui);
            ui.add_space(8.0);
            self.ui_report(ui);
        });
    }

    fn ui_areas(&mut self, ui: &mut egui::Ui) {
        label_with_tip(
            ui,
            &self.txt("gui.areas.heading", "Recommended air changes by application"),
            &self.txt("gui.areas.tip", "Click an entry to use it in the calculator."),
        );
        egui::ScrollArea::vertical().show(ui, |ui| {
            for (category, areas) in grouped_areas() {
                egui::CollapsingHeader::new(category.label())
                    .default_open(true)
                    .show(ui, |ui| {
                        for a in areas {
                            let text = format!("{} · {} ACH", a.name, a.air_changes);
                            if ui.selectable_label(self.area_key == Some(a.key), text).clicked() {
                                self.area_key = Some(a.key);
                                self.manual_air_changes = false;
                                self.dirty = true;
                                self.tab = Tab::Calculator;
                            }
                        }
                    });
            }
        });
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings_modal;
        let mut save_clicked = false;
        let title = self.txt("gui.settings.title", "Settings");
        let l_lang = self.txt("gui.settings.language", "Language");
        let l_temp = self.txt("gui.settings.temp_unit", "Temperature unit");
        let l_length = self.txt("gui.settings.length_unit", "Length unit");
        let l_area = self.txt("gui.settings.area_unit", "Area unit");
        let l_alpha = self.txt("gui.settings.alpha", "Window opacity");
        let l_save = self.txt("gui.settings.save", "Save");
        let cfg = &mut self.config;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([8.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(l_lang);
                        egui::ComboBox::from_id_source("lang")
                            .selected_text(cfg.language.clone())
                            .show_ui(ui, |ui| {
                                for code in ["auto", "en", "tr"] {
                                    ui.selectable_value(&mut cfg.language, code.to_string(), code);
                                }
                            });
                        ui.end_row();

                        ui.label(l_temp);
                        egui::ComboBox::from_id_source("temp_unit")
                            .selected_text(cfg.units.temperature.symbol())
                            .show_ui(ui, |ui| {
                                for unit in [
                                    TemperatureUnit::Celsius,
                                    TemperatureUnit::Fahrenheit,
                                    TemperatureUnit::Kelvin,
                                ] {
                                    ui.selectable_value(&mut cfg.units.temperature, unit, unit.symbol());
                                }
                            });
                        ui.end_row();

                        ui.label(l_length);
                        egui::ComboBox::from_id_source("length_unit")
                            .selected_text(cfg.units.length.symbol())
                            .show_ui(ui, |ui| {
                                for unit in [LengthUnit::Meter, LengthUnit::Foot] {
                                    ui.selectable_value(&mut cfg.units.length, unit, unit.symbol());
                                }
                            });
                        ui.end_row();

                        ui.label(l_area);
                        egui::ComboBox::from_id_source("area_unit")
                            .selected_text(cfg.units.area.symbol())
                            .show_ui(ui, |ui| {
                                for unit in [AreaUnit::SquareMeter, AreaUnit::SquareFoot] {
                                    ui.selectable_value(&mut cfg.units.area, unit, unit.symbol());
                                }
                            });
                        ui.end_row();

                        ui.label(l_alpha);
                        ui.add(egui::Slider::new(&mut cfg.window_alpha, 0.3..=1.0));
                        ui.end_row();
                    });
                ui.separator();
                if ui.button(l_save).clicked() {
                    save_clicked = true;
                }
            });
        self.show_settings_modal = open;
        if save_clicked {
            match self.config.save() {
                Ok(()) => info!("settings saved"),
                Err(e) => error!("settings save failed: {e}"),
            }
            self.reload_translator();
            self.dirty = true;
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let alpha = self.config.window_alpha.clamp(0.3, 1.0);
        let mut style = (*ctx.style()).clone();
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(alpha);
        ctx.set_style(style);

        let app_title = self.txt("gui.nav.app_title", "FES Evaporative Cooling Calculator");
        let settings_label = self.txt("gui.settings.title", "Settings");
        let mut open_settings = false;
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(app_title);
                ui.separator();
                open_settings = ui.button(settings_label).clicked();
            });
        });
        if open_settings {
            self.show_settings_modal = true;
        }

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }

        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(170.0)
            .show(ctx, |ui| self.ui_nav(ui));

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Calculator => self.ui_calculator(ui),
            Tab::Areas => self.ui_areas(ui),
        });
    }
}
