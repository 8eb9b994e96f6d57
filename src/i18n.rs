use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;
use tracing::debug;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_AREAS: &str = "main_menu.areas";
    pub const MAIN_MENU_COOLERS: &str = "main_menu.coolers";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const CALC_HEADING: &str = "calc.heading";
    pub const PROMPT_AREA: &str = "prompt.area";
    pub const PROMPT_HEIGHT: &str = "prompt.height";
    pub const PROMPT_PEOPLE: &str = "prompt.people";
    pub const PROMPT_APPLICATION_AREA: &str = "prompt.application_area";
    pub const PROMPT_OUTDOOR_TEMP: &str = "prompt.outdoor_temp";
    pub const PROMPT_HUMIDITY: &str = "prompt.humidity";
    pub const PROMPT_MANUAL_ACH: &str = "prompt.manual_ach";
    pub const PROMPT_CUSTOM_ACH: &str = "prompt.custom_ach";
    pub const PROMPT_SAVE_REPORT: &str = "prompt.save_report";
    pub const PROMPT_PROJECT_NAME: &str = "prompt.project_name";
    pub const PROMPT_COMPANY_NAME: &str = "prompt.company_name";
    pub const PROMPT_CITY: &str = "prompt.city";
    pub const PROMPT_PHONE: &str = "prompt.phone";
    pub const PROMPT_EMAIL: &str = "prompt.email";
    pub const UNKNOWN_AREA: &str = "calc.unknown_area";
    pub const REPORT_SAVED: &str = "calc.report_saved";
    pub const HINT_DEFAULT: &str = "prompt.hint_default";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_AIRFLOW: &str = "result.airflow";
    pub const RESULT_LOAD: &str = "result.load";
    pub const RESULT_AIR_CHANGES: &str = "result.air_changes";
    pub const RESULT_OPTIONS: &str = "result.options";
    pub const RESULT_RECOMMENDED: &str = "result.recommended";
    pub const RESULT_POWER: &str = "result.power";
    pub const RESULT_POWER_SAVINGS: &str = "result.power_savings";
    pub const RESULT_WATER: &str = "result.water";
    pub const RESULT_CO2: &str = "result.co2";
    pub const RESULT_COSTS: &str = "result.costs";
    pub const RESULT_SAVINGS: &str = "result.savings";

    pub const AREAS_HEADING: &str = "areas.heading";
    pub const COOLERS_HEADING: &str = "coolers.heading";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const TEMPERATURE_UNIT_OPTIONS: &str = "unit.temperature_options";
    pub const LENGTH_UNIT_OPTIONS: &str = "unit.length_options";
    pub const AREA_UNIT_OPTIONS: &str = "unit.area_options";
    pub const LANGUAGE_OPTIONS: &str = "settings.language_options";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Tr,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("tr") {
            Language::Tr
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(en/tr)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        debug!(
            lang = lang_code,
            overrides = overrides.as_ref().map_or(0, HashMap::len),
            "translator ready"
        );
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 언어팩 → 내장 번역 순으로 조회한다. 둘 다 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key).cloned())
            .or_else(|| built_in(self.lang, key).map(str::to_string))
    }

    /// 번역을 가져온다. 터키어 번역이 없으면 영어, 그것도 없으면 키를 그대로 돌려준다.
    pub fn t(&self, key: &str) -> String {
        self.lookup(key)
            .or_else(|| en(key).map(str::to_string))
            .unwrap_or_else(|| key.to_string())
    }
}

fn built_in(lang: Language, key: &str) -> Option<&'static str> {
    match lang {
        Language::En => en(key),
        Language::Tr => tr(key),
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("tr") => Some("tr".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "tr" => Some("tr".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

pub(crate) fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== FES Evaporative Cooling Calculator ===",
        MAIN_MENU_CALCULATE => "1) New calculation",
        MAIN_MENU_AREAS => "2) Application areas",
        MAIN_MENU_COOLERS => "3) FES models",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        CALC_HEADING => "\n-- New Calculation --",
        PROMPT_AREA => "Floor area",
        PROMPT_HEIGHT => "Ceiling height",
        PROMPT_PEOPLE => "Number of people",
        PROMPT_APPLICATION_AREA => "Application area code (enter = none, ? = list): ",
        PROMPT_OUTDOOR_TEMP => "Outdoor temperature",
        PROMPT_HUMIDITY => "Relative humidity [%]",
        PROMPT_MANUAL_ACH => "Enter air changes manually? (y/N): ",
        PROMPT_CUSTOM_ACH => "Air changes per hour",
        PROMPT_SAVE_REPORT => "Save report to file (enter to skip): ",
        PROMPT_PROJECT_NAME => "Project name: ",
        PROMPT_COMPANY_NAME => "Company name: ",
        PROMPT_CITY => "City: ",
        PROMPT_PHONE => "Phone: ",
        PROMPT_EMAIL => "Email: ",
        UNKNOWN_AREA => "Unknown application area; the default air changes will be used.",
        REPORT_SAVED => "Report saved:",
        HINT_DEFAULT => "default",
        RESULT_HEADING => "\n-- Results --",
        RESULT_AIRFLOW => "Total airflow:",
        RESULT_LOAD => "Cooling load:",
        RESULT_AIR_CHANGES => "Air changes:",
        RESULT_OPTIONS => "Unit options:",
        RESULT_RECOMMENDED => "RECOMMENDED",
        RESULT_POWER => "Power (conventional AC / FES):",
        RESULT_POWER_SAVINGS => "Power savings:",
        RESULT_WATER => "Water consumption:",
        RESULT_CO2 => "CO2 (conventional / FES / savings):",
        RESULT_COSTS => "Season cost (conventional / FES electricity / FES water):",
        RESULT_SAVINGS => "Season savings:",
        AREAS_HEADING => "\n-- Application Areas (code, name, ACH) --",
        COOLERS_HEADING => "\n-- FES Models --",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current input units / language:",
        SETTINGS_OPTIONS => "1) Temperature unit  2) Length unit  3) Area unit  4) Language",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        TEMPERATURE_UNIT_OPTIONS => "Temperature units: 1=°C 2=°F 3=K",
        LENGTH_UNIT_OPTIONS => "Length units: 1=m 2=ft",
        AREA_UNIT_OPTIONS => "Area units: 1=m² 2=ft²",
        LANGUAGE_OPTIONS => "Language: 1=auto 2=en 3=tr",
        _ => return None,
    })
}

fn tr(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Hata",
        APP_EXIT => "Uygulamadan çıkılıyor.",
        MAIN_MENU_TITLE => "\n=== FES Evaporatif Soğutma Hesaplayıcı ===",
        MAIN_MENU_CALCULATE => "1) Yeni hesaplama",
        MAIN_MENU_AREAS => "2) Uygulama alanları",
        MAIN_MENU_COOLERS => "3) FES modelleri",
        MAIN_MENU_SETTINGS => "4) Ayarlar",
        MAIN_MENU_EXIT => "0) Çıkış",
        PROMPT_MENU_SELECT => "Menü seçimi: ",
        PROMPT_SELECT => "Seçim: ",
        INVALID_SELECTION_RETRY => "Geçersiz giriş. Lütfen tekrar deneyin.",
        ERROR_INVALID_NUMBER => "Lütfen bir sayı girin.",
        CALC_HEADING => "\n-- Yeni Hesaplama --",
        PROMPT_AREA => "Alan",
        PROMPT_HEIGHT => "Tavan yüksekliği",
        PROMPT_PEOPLE => "Kişi sayısı",
        PROMPT_APPLICATION_AREA => "Uygulama alanı kodu (enter = yok, ? = liste): ",
        PROMPT_OUTDOOR_TEMP => "Dış hava sıcaklığı",
        PROMPT_HUMIDITY => "Bağıl nem [%]",
        PROMPT_MANUAL_ACH => "Hava değişimi elle girilsin mi? (e/H): ",
        PROMPT_CUSTOM_ACH => "Saatlik hava değişimi",
        PROMPT_SAVE_REPORT => "Raporu dosyaya kaydet (atlamak için enter): ",
        PROMPT_PROJECT_NAME => "Proje adı: ",
        PROMPT_COMPANY_NAME => "Firma adı: ",
        PROMPT_CITY => "Şehir: ",
        PROMPT_PHONE => "Telefon: ",
        PROMPT_EMAIL => "E-posta: ",
        UNKNOWN_AREA => "Bilinmeyen uygulama alanı; varsayılan hava değişimi kullanılacak.",
        REPORT_SAVED => "Rapor kaydedildi:",
        HINT_DEFAULT => "varsayılan",
        RESULT_HEADING => "\n-- Sonuçlar --",
        RESULT_AIRFLOW => "Toplam hava debisi:",
        RESULT_LOAD => "Soğutma yükü:",
        RESULT_AIR_CHANGES => "Hava değişimi:",
        RESULT_OPTIONS => "Cihaz seçenekleri:",
        RESULT_RECOMMENDED => "ÖNERİLEN",
        RESULT_POWER => "Güç (klasik klima / FES):",
        RESULT_POWER_SAVINGS => "Güç tasarrufu:",
        RESULT_WATER => "Su tüketimi:",
        RESULT_CO2 => "CO2 (klasik / FES / tasarruf):",
        RESULT_COSTS => "Sezon maliyeti (klasik / FES elektrik / FES su):",
        RESULT_SAVINGS => "Sezon tasarrufu:",
        AREAS_HEADING => "\n-- Uygulama Alanları (kod, ad, ACH) --",
        COOLERS_HEADING => "\n-- FES Modelleri --",
        SETTINGS_HEADING => "\n-- Ayarlar --",
        SETTINGS_CURRENT => "Geçerli giriş birimleri / dil:",
        SETTINGS_OPTIONS => "1) Sıcaklık birimi  2) Uzunluk birimi  3) Alan birimi  4) Dil",
        SETTINGS_PROMPT_CHANGE => "Değiştirilecek numara (iptal için enter): ",
        SETTINGS_INVALID => "Geçersiz giriş; ayarlar değişmedi.",
        SETTINGS_SAVED => "Ayarlar kaydedildi.",
        TEMPERATURE_UNIT_OPTIONS => "Sıcaklık birimleri: 1=°C 2=°F 3=K",
        LENGTH_UNIT_OPTIONS => "Uzunluk birimleri: 1=m 2=ft",
        AREA_UNIT_OPTIONS => "Alan birimleri: 1=m² 2=ft²",
        LANGUAGE_OPTIONS => "Dil: 1=otomatik 2=en 3=tr",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turkish_falls_back_to_english_then_key() {
        let t = Translator::new("tr-TR");
        assert_eq!(t.language(), Language::Tr);
        assert_eq!(t.t(keys::MAIN_MENU_EXIT), "0) Çıkış");
        assert_eq!(t.t("gui.not.a.key"), "gui.not.a.key");
        assert!(t.lookup("gui.not.a.key").is_none());
    }

    #[test]
    fn explicit_language_beats_config() {
        assert_eq!(resolve_language("tr", Some("en")), "tr");
        assert_eq!(resolve_language("auto", Some("en-US")), "en");
    }

    #[test]
    fn nested_toml_pack_flattens_keys() {
        let map = parse_toml_to_map(
            r#"
[main_menu]
exit = "0) Quit"

[gui.form]
area = "Floor"
"#,
        )
        .expect("pack");
        assert_eq!(map.get("main_menu.exit").map(String::as_str), Some("0) Quit"));
        assert_eq!(map.get("gui.form.area").map(String::as_str), Some("Floor"));
    }
}
