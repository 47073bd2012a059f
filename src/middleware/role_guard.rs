use std::future::{Ready, ready};

use actix_web::{
    Error, HttpMessage, ResponseError,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header,
    web::Data,
};
use futures_util::future::LocalBoxFuture;

use crate::config::Config;
use crate::error::AppError;
use crate::services::auth::{Claims, Role, decode_token};

/// Access-control gate. Wraps a scope or resource, requires a valid bearer
/// token, and optionally a specific role. Validated claims are stored in the
/// request extensions for downstream extraction.
pub struct RequireAuth {
    required_role: Option<Role>,
}

impl RequireAuth {
    /// Authenticate only; any valid token passes.
    pub fn authenticated() -> Self {
        Self {
            required_role: None,
        }
    }

    pub fn role(role: Role) -> Self {
        Self {
            required_role: Some(role),
        }
    }

    pub fn admin() -> Self {
        Self::role(Role::Admin)
    }

    pub fn employee() -> Self {
        Self::role(Role::Employee)
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthMiddleware {
            service,
            required_role: self.required_role,
        }))
    }
}

pub struct RequireAuthMiddleware<S> {
    service: S,
    required_role: Option<Role>,
}

impl<S, B> Service<ServiceRequest> for RequireAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match authenticate(&req, self.required_role) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            Err(err) => {
                let response = err.error_response();
                Box::pin(ready(Ok(req.into_response(response).map_into_right_body())))
            }
        }
    }
}

fn authenticate(req: &ServiceRequest, required_role: Option<Role>) -> Result<Claims, AppError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(AppError::Unauthenticated)?;

    let config = req.app_data::<Data<Config>>().ok_or_else(|| {
        log::error!("Config missing from app data; cannot validate tokens");
        AppError::Internal(None)
    })?;

    let claims = decode_token(config, token)?;

    if let Some(role) = required_role {
        if claims.role() != role {
            return Err(AppError::Unauthorized);
        }
    }

    Ok(claims)
}
