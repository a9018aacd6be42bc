use crate::client::ApiClient;
use crate::error::ApiError;
use rumbo_admin::AccountDraft;
use rumbo_shared::{Role, UserAccount};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AccountPayload<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    role: Role,
}

#[derive(Debug, Serialize)]
struct RolePatch {
    role: Role,
}

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<UserAccount>, ApiError> {
        self.expect_json(self.get("/users")).await
    }

    pub async fn create_user(&self, draft: &AccountDraft) -> Result<UserAccount, ApiError> {
        let role = draft.role.ok_or(ApiError::IncompleteDraft)?;
        let payload = AccountPayload {
            name: &draft.name,
            email: &draft.email,
            password: &draft.password,
            role,
        };
        self.expect_json(self.post("/users").json(&payload)).await
    }

    pub async fn delete_user(&self, id: Uuid) -> Result<(), ApiError> {
        self.expect_ok(self.delete(&format!("/users/{}", id))).await
    }

    /// Role changes go out as a PATCH; everything else is immutable from
    /// the accounts panel.
    pub async fn patch_user_role(&self, id: Uuid, role: Role) -> Result<UserAccount, ApiError> {
        self.expect_json(self.patch(&format!("/users/{}", id)).json(&RolePatch { role }))
            .await
    }
}
