use crate::client::ApiClient;
use crate::error::ApiError;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Exchange credentials for a bearer token. The backend answers with
    /// the raw credential string, not JSON.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        self.expect_text(self.post("/auth/login").json(&LoginRequest { email, password }))
            .await
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), ApiError> {
        self.expect_ok(
            self.post("/auth/register")
                .json(&RegisterRequest { name, email, password }),
        )
        .await
    }
}
