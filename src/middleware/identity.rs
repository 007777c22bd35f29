use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};

use crate::store::Store;
use crate::utils::AppError;

/// Resolved identity attached to the request after the gate passes.
/// Handlers pull it out with `web::ReqData<CurrentUser>`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
}

/// Gate for all `/todos*` routes: resolves the `username` header against the
/// registry before any handler runs. Identification only, not authentication.
pub struct IdentityGate;

impl<S, B> Transform<S, ServiceRequest> for IdentityGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = IdentityGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(IdentityGateMiddleware { service }))
    }
}

pub struct IdentityGateMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for IdentityGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Missing header and unknown username are the same failure: 400.
        let username = req
            .headers()
            .get("username")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let resolved = username.as_deref().and_then(|username| {
            req.app_data::<web::Data<Store>>()
                .and_then(|store| store.find_by_username(username))
        });

        match resolved {
            Some(user) => {
                req.extensions_mut().insert(CurrentUser {
                    id: user.id,
                    username: user.username,
                });

                let fut = self.service.call(req);
                Box::pin(async move {
                    let res = fut.await?;
                    Ok(res)
                })
            }
            None => {
                log::warn!(
                    "⚠️ Identity gate rejected request: unknown user {:?}",
                    username
                );
                Box::pin(async move { Err(AppError::UnknownUser.into()) })
            }
        }
    }
}
