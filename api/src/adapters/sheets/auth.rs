//! Google credentials and access tokens
//!
//! Either a fixed bearer token, or a service-account key exchanged for
//! short-lived access tokens via the OAuth2 JWT bearer grant.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::error::SheetsError;

const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Lifetime requested for the signed assertion
const ASSERTION_TTL_SECS: i64 = 3600;
/// Refresh a cached token this long before it expires
const EXPIRY_MARGIN_SECS: i64 = 60;

/// The fields of a service-account JSON key this client needs
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

/// How requests to the Sheets API are authorized
#[derive(Clone)]
pub enum Credentials {
    /// A pre-issued OAuth2 access token
    AccessToken(String),
    ServiceAccount(ServiceAccountKey),
}

impl Credentials {
    /// Parse a service-account JSON key
    pub fn service_account_from_json(json: &str) -> Result<Self, SheetsError> {
        let key: ServiceAccountKey = serde_json::from_str(json)
            .map_err(|e| SheetsError::Credentials(format!("invalid service account key: {}", e)))?;
        Ok(Credentials::ServiceAccount(key))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::AccessToken(_) => f.write_str("AccessToken(..)"),
            Credentials::ServiceAccount(key) => f.debug_tuple("ServiceAccount").field(key).finish(),
        }
    }
}

#[derive(Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

/// Hands out access tokens, exchanging the service-account key when needed
pub struct TokenProvider {
    http: Client,
    credentials: Credentials,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenProvider {
    pub fn new(http: Client, credentials: Credentials) -> Self {
        Self {
            http,
            credentials,
            cached: Mutex::new(None),
        }
    }

    /// A bearer token valid for at least the next minute
    pub async fn access_token(&self) -> Result<String, SheetsError> {
        let key = match &self.credentials {
            Credentials::AccessToken(token) => return Ok(token.clone()),
            Credentials::ServiceAccount(key) => key,
        };

        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.expires_at > Utc::now() + Duration::seconds(EXPIRY_MARGIN_SECS) {
                return Ok(token.token.clone());
            }
        }

        let fresh = self.exchange(key).await?;
        let token = fresh.token.clone();
        *cached = Some(fresh);
        Ok(token)
    }

    async fn exchange(&self, key: &ServiceAccountKey) -> Result<CachedToken, SheetsError> {
        let now = Utc::now();
        let claims = AssertionClaims {
            iss: &key.client_email,
            scope: SHEETS_SCOPE,
            aud: &key.token_uri,
            iat: now.timestamp(),
            exp: now.timestamp() + ASSERTION_TTL_SECS,
        };

        let signing_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .map_err(|e| SheetsError::Credentials(format!("invalid private key: {}", e)))?;
        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &signing_key)
            .map_err(|e| SheetsError::Credentials(format!("could not sign assertion: {}", e)))?;

        tracing::debug!("Exchanging service account assertion for {}", key.client_email);
        let resp = self
            .http
            .post(&key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(SheetsError::Credentials(format!(
                "token exchange failed: {} - {}",
                status.as_u16(),
                message
            )));
        }

        let body: TokenResponse = resp
            .json()
            .await
            .map_err(|e| SheetsError::Deserialization(e.to_string()))?;

        Ok(CachedToken {
            token: body.access_token,
            expires_at: now + Duration::seconds(body.expires_in),
        })
    }
}
