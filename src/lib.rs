//! FES 증발식 냉각기 선정 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod app;
pub mod catalog;
pub mod config;
pub mod cooling;
pub mod i18n;
pub mod report;
pub mod ui_cli;
pub mod units;
