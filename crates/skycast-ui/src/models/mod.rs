pub mod forecast_model;
pub mod login_model;

pub use forecast_model::{ForecastModel, Notice, QueryTicket};
pub use login_model::LoginModel;
