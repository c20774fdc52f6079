use actix_web::FromRequest;
use actix_web::{Error, HttpRequest, dev::Payload, web};
use sea_orm::DatabaseConnection;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::auth::jwks::JwksCache;
use crate::auth::jwt::{self, Claims};
use crate::db::users::find_or_create_from_auth;
use crate::models::users::{self, CreateUserFromAuth, Roles};

/// Extractor for any signed-in user. Validates the Supabase JWT (JWKS first,
/// HS256 legacy secret as fallback) and finds-or-creates the local user row.
pub struct AuthenticatedUser(pub users::Model);

/// Extractor for admin-only routes: an authenticated user whose role is Admin.
pub struct AdminUser(pub users::Model);

async fn validate_request_token(req: &HttpRequest, token: &str) -> Result<Claims, Error> {
    let jwks_cache = req
        .app_data::<web::Data<Arc<JwksCache>>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("JWKS cache not configured"))?;

    match jwks_cache.validate_token(token).await {
        Ok(claims) => Ok(claims),
        Err(jwks_err) => {
            // Projects still on the legacy shared secret sign with HS256.
            if let Ok(secret) = std::env::var("SUPABASE_JWT_SECRET") {
                return jwt::validate_token(token, &secret)
                    .map_err(|e| actix_web::error::ErrorUnauthorized(format!("Invalid token: {e}")));
            }
            Err(actix_web::error::ErrorUnauthorized(format!(
                "Invalid token: {jwks_err}"
            )))
        }
    }
}

async fn authenticate(req: HttpRequest) -> Result<users::Model, Error> {
    // 1. Extract the Bearer token from the Authorization header.
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| actix_web::error::ErrorUnauthorized("Missing Authorization header"))?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        actix_web::error::ErrorUnauthorized("Authorization header must be: Bearer <token>")
    })?;

    // 2. Validate the JWT.
    let claims = validate_request_token(&req, token).await?;

    // 3. Extract user info from claims.
    let user_id = claims
        .user_id()
        .map_err(actix_web::error::ErrorUnauthorized)?;

    let email = claims
        .user_email()
        .ok_or_else(|| actix_web::error::ErrorUnauthorized("No email in token claims"))?;

    // 4. Get the database connection.
    let db = req
        .app_data::<web::Data<DatabaseConnection>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Database not configured"))?;

    // 5. Find or create the user.
    find_or_create_from_auth(
        db.get_ref(),
        CreateUserFromAuth {
            id: user_id,
            email,
            display_name: claims.display_name(),
            avatar_url: claims.avatar_url(),
            auth_provider: "supabase".to_string(),
            role: Roles::Applicant, // default role for new users
        },
    )
    .await
    .map_err(|e| actix_web::error::ErrorInternalServerError(format!("Database error: {e}")))
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move { authenticate(req).await.map(AuthenticatedUser) })
    }
}

impl FromRequest for AdminUser {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let user = authenticate(req).await?;
            if user.role != Roles::Admin {
                return Err(actix_web::error::ErrorForbidden(
                    "This action requires an admin account",
                ));
            }
            Ok(AdminUser(user))
        })
    }
}
