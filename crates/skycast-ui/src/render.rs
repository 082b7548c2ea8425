//! Pure render functions: view-model state in, display text out.
//!
//! Nothing here mutates state or talks to the network; every screen is a
//! function of its model.

use skycast_weather::format::{
    capitalize_first, format_clock_time, icon_url, rounded_temperature,
};

use crate::models::forecast_model::ForecastModel;
use crate::models::login_model::LoginModel;

/// Landing screen.
pub fn landing() -> String {
    [
        "Welcome to weather forecast!",
        "",
        "Commands:",
        "  login     sign in",
        "  forecast  open the forecast",
        "  quit      exit",
        "",
    ]
    .join("\n")
}

/// Login screen header, including the last submit error when present.
pub fn login(model: &LoginModel) -> String {
    let mut out = String::from("Sign in\n");

    if let Some(message) = model.error_message() {
        out.push_str("Error: ");
        out.push_str(message);
        out.push('\n');
    }

    out
}

/// Forecast screen.
pub fn forecast(model: &ForecastModel) -> String {
    let mut out = String::new();

    if model.loading() {
        out.push_str("Loading...\n");
    }

    if let Some(notice) = model.notice() {
        out.push_str(&format!("Error: {}\n", capitalize_first(notice.message())));
    }

    if let Some(report) = model.weather() {
        out.push_str(&format!("{}°C\n", rounded_temperature(report.temperature)));
        out.push_str(&format!("Sunrise: {}\n", format_clock_time(report.sunrise)));
        out.push_str(&format!("Sunset:  {}\n", format_clock_time(report.sunset)));
        out.push_str(&format!("{}, {}\n", report.city_name, report.country_code));
        out.push_str(&format!("{}\n", capitalize_first(&report.description)));
        out.push_str(&format!("Icon: {}\n", icon_url(&report.icon_id)));
    }

    if out.is_empty() {
        out.push_str("Enter a city name to look up the weather.\n");
    }

    out
}
