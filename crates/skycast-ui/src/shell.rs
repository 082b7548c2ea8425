//! Interactive terminal front-end.
//!
//! Drives the landing → login → forecast screens from stdin lines. All
//! screen content comes from `render` over view-model state; the shell only
//! routes input and prints.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use skycast_core::AppError;

use crate::app_services::AppServices;
use crate::models::{ForecastModel, LoginModel};
use crate::render;
use crate::services::weather_service::{self, WeatherServiceError, WeatherServiceMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Landing,
    Login,
    Forecast,
}

/// Run the interactive loop until the user quits or stdin closes.
pub fn run(services: &AppServices, fallback_city: &str) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut screen = Screen::Landing;
    let mut login_model = LoginModel::new();
    let mut forecast_model = ForecastModel::new(fallback_city);

    println!("{}", render::landing());

    loop {
        match screen {
            Screen::Landing => {
                let Some(line) = read_line(&mut input, "> ")? else {
                    break;
                };
                match line.trim() {
                    "login" => screen = Screen::Login,
                    "forecast" => {
                        screen = if mount_forecast(services, &mut forecast_model)? {
                            Screen::Forecast
                        } else {
                            Screen::Login
                        };
                    }
                    "quit" | "exit" => break,
                    "" => {}
                    _ => println!("Unknown command. Type `login`, `forecast` or `quit`."),
                }
            }

            Screen::Login => {
                print!("{}", render::login(&login_model));

                let Some(email) = read_line(&mut input, "Email: ")? else {
                    break;
                };
                let Some(password) = read_line(&mut input, "Password: ")? else {
                    break;
                };

                if login_model.submit(&services.auth_gate(), email.trim(), &password)? {
                    println!("Signed in as {}", email.trim());
                    if mount_forecast(services, &mut forecast_model)? {
                        screen = Screen::Forecast;
                    }
                }
            }

            Screen::Forecast => {
                let prompt = format!(
                    "City (blank for {}), `logout` or `quit` > ",
                    forecast_model.fallback_city()
                );
                let Some(line) = read_line(&mut input, &prompt)? else {
                    break;
                };
                match line.trim() {
                    "logout" => {
                        services.auth_gate().logout()?;
                        println!("Signed out.");
                        screen = Screen::Landing;
                        println!("{}", render::landing());
                    }
                    "quit" | "exit" => break,
                    city => run_query(services, &mut forecast_model, city)?,
                }
            }
        }
    }

    Ok(())
}

/// Enter the forecast screen.
///
/// An unauthenticated mount redirects to login and does not issue the
/// initial query; an authenticated mount queries the fallback city.
fn mount_forecast(services: &AppServices, model: &mut ForecastModel) -> Result<bool> {
    if !services.auth_gate().is_authenticated() {
        tracing::info!("Forecast requested while unauthenticated; redirecting to login");
        println!("Please sign in first.");
        return Ok(false);
    }

    run_query(services, model, "")?;
    Ok(true)
}

/// Issue one query and block until its result lands.
fn run_query(services: &AppServices, model: &mut ForecastModel, raw_input: &str) -> Result<()> {
    let Some(provider) = services.weather_provider() else {
        let err: AppError = WeatherServiceError::NotInitialized.into();
        println!("Error: {}", err.user_message());
        return Ok(());
    };

    let ticket = model.begin_query(raw_input);
    println!("Looking up {}...", ticket.city);

    weather_service::request_query(
        &services.weather_tx(),
        &services.runtime_handle(),
        provider,
        &ticket,
    );

    // Drain messages until the latest query's result lands; results for
    // superseded generations are dropped by the model.
    while let Some(WeatherServiceMessage::QueryDone { generation, result }) =
        services.recv_weather()
    {
        if model.apply(generation, result) {
            break;
        }
    }

    print!("{}", render::forecast(model));
    Ok(())
}

fn read_line(reader: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Ok(None); // EOF
    }

    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}
