use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use expense_repo::expense_repo::ExpenseRepoError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of every error response.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("expense not found")]
    ExpenseNotFound,
    #[error("{0:#}")]
    Internal(anyhow::Error),
}

impl From<ExpenseRepoError> for HandlerError {
    fn from(e: ExpenseRepoError) -> Self {
        match e {
            ExpenseRepoError::ExpenseNotFound(_) => HandlerError::ExpenseNotFound,
            ExpenseRepoError::Other(e) => HandlerError::Internal(e),
        }
    }
}

impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::ExpenseNotFound => StatusCode::NOT_FOUND,
            HandlerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.to_string(),
        })
    }
}
