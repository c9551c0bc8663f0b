use std::sync::Arc;

use actix_web::error::JsonPayloadError;
use actix_web::web::{self, Data, ServiceConfig};
use actix_web::HttpResponse;
use expense_repo::expense_repo::ExpenseRepo;
use ::tracing::error;

pub mod auth;
pub mod config;
mod error;
pub mod expense;
pub mod tracing;

pub use crate::error::ErrorBody;

/// Registers the repo, the JSON config and the expense routes on an app.
pub fn app_config_func(expense_repo: Arc<dyn ExpenseRepo>) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(expense_repo))
            .app_data(json_config())
            .service(expense::expense_service());
    }
}

/// Turns body decode failures into a 400 with a `{"message": ...}` body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        error!(req_path = req.path(), %err);
        let message = match &err {
            JsonPayloadError::Deserialize(deserialize_err) => deserialize_err.to_string(),
            _ => err.to_string(),
        };
        let response = HttpResponse::BadRequest().json(ErrorBody { message });
        actix_web::error::InternalError::from_response(err, response).into()
    })
}
