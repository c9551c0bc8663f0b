//! Static `Authorization` header check.
//!
//! Compares the header against a fixed token. It only keeps casual callers out and is not
//! an authentication scheme.

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::HttpResponse;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::warn;

#[derive(Clone)]
pub struct StaticHeaderAuth {
    token: Rc<str>,
}

impl StaticHeaderAuth {
    pub fn new(token: &str) -> StaticHeaderAuth {
        StaticHeaderAuth {
            token: Rc::from(token),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for StaticHeaderAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Transform = StaticHeaderAuthMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StaticHeaderAuthMiddleware {
            service,
            token: self.token.clone(),
        }))
    }
}

pub struct StaticHeaderAuthMiddleware<S> {
    service: S,
    token: Rc<str>,
}

impl<S> StaticHeaderAuthMiddleware<S> {
    fn is_authorized(&self, req: &ServiceRequest) -> bool {
        req.headers()
            .get(AUTHORIZATION)
            .map(|value| value.as_bytes() == self.token.as_bytes())
            .unwrap_or(false)
    }
}

impl<S, B> Service<ServiceRequest> for StaticHeaderAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !self.is_authorized(&req) {
            warn!(req_path = req.path(), "rejected request without valid authorization");
            let response = req
                .into_response(HttpResponse::Unauthorized().json("Unauthorized"))
                .map_into_right_body();
            return Box::pin(ready(Ok(response)));
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}
