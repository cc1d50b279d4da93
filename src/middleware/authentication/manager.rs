use super::TokenCache;
use crate::configuration::Settings;
use crate::forms;
use crate::models;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    web, Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

/// Resolves a bearer token against the external auth service and attaches
/// the caller's identity to the request. Requests without an Authorization
/// header pass through anonymously; listings stay public while mutations
/// require the resolved identity.
pub struct Manager {}

impl Manager {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for Manager
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ManagerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ManagerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ManagerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ManagerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        Box::pin(async move {
            try_authenticate(&req).await.map_err(|err| {
                tracing::error!("Authentication failed: {}", err);
                ErrorUnauthorized(err)
            })?;
            service.call(req).await
        })
    }
}

async fn try_authenticate(req: &ServiceRequest) -> Result<(), String> {
    let authorization = match req.headers().get(AUTHORIZATION) {
        Some(value) => value
            .to_str()
            .map_err(|_| "authorization header is not valid utf8".to_string())?
            .to_string(),
        None => return Ok(()), // anonymous
    };
    let token = try_extract_token(authorization)?;

    let settings = req
        .app_data::<web::Data<Settings>>()
        .ok_or_else(|| "settings are not attached".to_string())?;
    let cache = req
        .app_data::<web::Data<TokenCache>>()
        .ok_or_else(|| "token cache is not attached".to_string())?;

    let user = match cache.get(&token).await {
        Some(user) => user,
        None => {
            let user = fetch_user(settings.auth_url.as_str(), &token).await?;
            cache.insert(token, user.clone()).await;
            user
        }
    };

    if req.extensions_mut().insert(Arc::new(user)).is_some() {
        return Err("user already resolved".to_string());
    }

    Ok(())
}

fn try_extract_token(authentication: String) -> Result<String, String> {
    let mut authentication_parts = authentication.splitn(2, ' ');
    match authentication_parts.next() {
        Some("Bearer") => {}
        _ => return Err("Bearer scheme is missing".to_string()),
    }

    authentication_parts
        .next()
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or_else(|| "Bearer token is missing".to_string())
}

async fn fetch_user(auth_url: &str, token: &str) -> Result<models::User, String> {
    let client = reqwest::Client::new();
    let resp = client
        .get(auth_url)
        .bearer_auth(token)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|_err| "no response from the auth server".to_string())?;

    if !resp.status().is_success() {
        return Err("401 Unauthorized".to_string());
    }

    resp.json::<forms::UserForm>()
        .await
        .map_err(|_err| "can't parse the auth response body".to_string())
        .map(|form| form.user.into())
}

#[cfg(test)]
mod tests {
    use super::try_extract_token;

    #[test]
    fn bearer_token_is_extracted() {
        assert_eq!(
            try_extract_token("Bearer abc123".to_string()),
            Ok("abc123".to_string())
        );
    }

    #[test]
    fn other_schemes_are_rejected() {
        assert!(try_extract_token("Basic abc123".to_string()).is_err());
        assert!(try_extract_token("Bearer".to_string()).is_err());
        assert!(try_extract_token("Bearer ".to_string()).is_err());
    }
}
