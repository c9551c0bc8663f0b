use actix_web::dev::Payload;
use actix_web::http::header::{CONTENT_LENGTH, TRANSFER_ENCODING};
use actix_web::{web, FromRequest, HttpRequest};
use expense_repo::expense_repo::NewExpense;
use futures_util::future::{ready, LocalBoxFuture};

/// Create/update body. A request without a body binds to a zero valued expense, anything
/// else goes through the regular JSON extractor and its config.
pub struct ExpenseBody(pub NewExpense);

impl ExpenseBody {
    pub fn into_inner(self) -> NewExpense {
        self.0
    }
}

fn has_empty_body(req: &HttpRequest) -> bool {
    let headers = req.headers();
    match headers.get(CONTENT_LENGTH) {
        Some(length) => length
            .to_str()
            .ok()
            .and_then(|length| length.trim().parse::<u64>().ok())
            == Some(0),
        None => !headers.contains_key(TRANSFER_ENCODING),
    }
}

impl FromRequest for ExpenseBody {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if has_empty_body(req) {
            return Box::pin(ready(Ok(ExpenseBody(NewExpense::default()))));
        }

        let json = web::Json::<NewExpense>::from_request(req, payload);
        Box::pin(async move {
            let new_expense = json.await?;
            Ok(ExpenseBody(new_expense.into_inner()))
        })
    }
}
