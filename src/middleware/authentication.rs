use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderMap, AUTHORIZATION},
    Error, HttpMessage, HttpResponse,
};
use chrono::{Duration, Utc};
use futures_util::{future::LocalBoxFuture, FutureExt};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::{
    future::{ready, Ready},
    rc::Rc,
};

use crate::util::ResponseMessage;

/// Rejects requests without a valid bearer token before the handler runs.
pub struct Authentication {
    secret: Rc<str>,
}

impl Authentication {
    pub fn new(secret: &str) -> Self {
        Authentication {
            secret: Rc::from(secret),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Claims {
    pub id: String,
    pub exp: usize,
}

pub fn generate_token(
    id: impl Into<String>,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = (Utc::now() + Duration::days(7)).timestamp() as usize;
    let claims = Claims { id: id.into(), exp };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }
    Some(token.trim()).filter(|token| !token.is_empty())
}

impl<S, B> Transform<S, ServiceRequest> for Authentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticationMiddleware {
            service,
            secret: self.secret.clone(),
        }))
    }
}

pub struct AuthenticationMiddleware<S> {
    service: S,
    secret: Rc<str>,
}

fn reject<B: 'static>(
    req: ServiceRequest,
    response: HttpResponse,
) -> LocalBoxFuture<'static, Result<ServiceResponse<EitherBody<B>>, Error>> {
    let (http_req, _) = req.into_parts();
    let res = ServiceResponse::new(http_req, response).map_into_right_body();
    (async move { Ok(res) }).boxed_local()
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;
    type Error = Error;
    type Response = ServiceResponse<EitherBody<B>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = bearer_token(req.headers()).map(str::to_owned);
        let token = match token {
            Some(token) => token,
            None => {
                tracing::error!("No bearer token found in request");
                return reject(
                    req,
                    HttpResponse::Unauthorized()
                        .json(ResponseMessage::new("No token, authorization denied")),
                );
            }
        };

        let claims = match decode_token(token.as_str(), &self.secret) {
            Ok(claims) => claims,
            Err(err) => {
                tracing::error!("Rejected bearer token: {}", err);
                return reject(
                    req,
                    HttpResponse::Forbidden().json(ResponseMessage::new("Token is not valid")),
                );
            }
        };

        tracing::info!("Authenticated request for {}", claims.id);
        req.extensions_mut().insert::<Rc<Claims>>(Rc::new(claims));
        let fut = self.service.call(req);
        async move {
            let res: ServiceResponse<B> = fut.await?;
            Ok(res.map_into_left_body())
        }
        .boxed_local()
    }
}
