use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use moka::future::Cache;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::jwt::Claims;

/// One key from the Supabase JWKS document. Supabase signs with EC keys
/// (ES256 by default), so only the EC components are modeled.
#[derive(Debug, Clone, Deserialize)]
struct Jwk {
    kid: Option<String>,
    x: Option<String>,
    y: Option<String>,
    alg: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JwksDocument {
    keys: Vec<Jwk>,
}

/// Fetches and caches the project's JWKS so token validation doesn't hit
/// Supabase on every request. Keys are cached per `kid` for an hour.
#[derive(Clone)]
pub struct JwksCache {
    keys: Arc<Cache<String, Jwk>>,
    jwks_url: String,
    client: reqwest::Client,
    anon_key: String,
}

impl JwksCache {
    pub fn new(project_ref: &str, anon_key: &str) -> Self {
        Self {
            keys: Arc::new(
                Cache::builder()
                    .time_to_live(Duration::from_secs(3600))
                    .max_capacity(10)
                    .build(),
            ),
            jwks_url: format!(
                "https://{project_ref}.supabase.co/auth/v1/.well-known/jwks.json"
            ),
            client: reqwest::Client::new(),
            anon_key: anon_key.to_string(),
        }
    }

    async fn key_for_kid(&self, kid: &str) -> Result<Jwk, String> {
        if let Some(cached) = self.keys.get(kid).await {
            return Ok(cached);
        }

        debug!("Fetching JWKS from {}", self.jwks_url);
        let response = self
            .client
            .get(&self.jwks_url)
            .header("apikey", &self.anon_key)
            .send()
            .await
            .map_err(|e| format!("Failed to fetch JWKS: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("Failed to fetch JWKS: HTTP {status}"));
        }

        let document: JwksDocument = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse JWKS JSON: {e}"))?;

        for key in document.keys {
            if let Some(key_id) = &key.kid {
                self.keys.insert(key_id.clone(), key.clone()).await;
            }
        }

        self.keys
            .get(kid)
            .await
            .ok_or_else(|| format!("Key with kid={kid} not found in JWKS"))
    }

    /// Validate an ES256/ES384-signed Supabase JWT against the cached JWKS.
    pub async fn validate_token(&self, token: &str) -> Result<Claims, String> {
        let header = decode_header(token).map_err(|e| format!("Failed to decode header: {e}"))?;
        let kid = header.kid.ok_or("No 'kid' in token header")?;

        let jwk = self.key_for_kid(&kid).await?;
        let x = jwk.x.as_deref().ok_or("Missing 'x' in JWK")?;
        let y = jwk.y.as_deref().ok_or("Missing 'y' in JWK")?;

        let algorithm = match jwk.alg.as_deref() {
            Some("ES384") => Algorithm::ES384,
            _ => Algorithm::ES256,
        };

        let decoding_key = DecodingKey::from_ec_components(x, y)
            .map_err(|e| format!("Failed to create decoding key: {e}"))?;

        let mut validation = Validation::new(algorithm);
        validation.validate_aud = false;

        decode::<Claims>(token, &decoding_key, &validation)
            .map(|td| td.claims)
            .map_err(|e| format!("Token validation failed: {e}"))
    }
}
