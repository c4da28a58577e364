use serde::{Deserialize, Serialize};

use triangle_core::{EpochMillis, UserId};

/// Identity assertion carried inside a session credential.
///
/// This is the payload the issuer signed. Field names follow the issuer's
/// camelCase JSON; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaim {
    /// Opaque user identifier (string or integer).
    pub user_id: UserId,

    /// Display only; never re-validated.
    pub email: String,

    /// Privilege flag, trusted as signed.
    pub is_admin: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Issuance instant.
    pub timestamp: EpochMillis,
}

impl SessionClaim {
    /// Read-only projection handed to the rendering layer.
    pub fn authorization_context(&self) -> AuthorizationContext {
        AuthorizationContext::from(self.clone())
    }
}

/// Authenticated identity for the duration of one request.
///
/// Built only from a verified [`SessionClaim`]; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationContext {
    user_id: UserId,
    email: String,
    is_admin: bool,
    company_name: Option<String>,
}

impl AuthorizationContext {
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn company_name(&self) -> Option<&str> {
        self.company_name.as_deref()
    }

    /// Company name when the claim has one, otherwise the email.
    pub fn display_name(&self) -> &str {
        self.company_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(self.email.as_str())
    }
}

impl From<SessionClaim> for AuthorizationContext {
    fn from(claim: SessionClaim) -> Self {
        Self {
            user_id: claim.user_id,
            email: claim.email,
            is_admin: claim.is_admin,
            company_name: claim.company_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_issuer_json() {
        let claim: SessionClaim = serde_json::from_str(
            r#"{"userId":"u1","email":"a@b.com","isAdmin":true,"companyName":"Acme","timestamp":1700000000000}"#,
        )
        .unwrap();

        assert_eq!(claim.user_id, UserId::from("u1"));
        assert_eq!(claim.email, "a@b.com");
        assert!(claim.is_admin);
        assert_eq!(claim.company_name.as_deref(), Some("Acme"));
        assert_eq!(claim.timestamp, EpochMillis::from_millis(1_700_000_000_000));
    }

    #[test]
    fn company_name_is_optional_and_nullable() {
        let absent: SessionClaim = serde_json::from_str(
            r#"{"userId":7,"email":"a@b.com","isAdmin":false,"timestamp":1}"#,
        )
        .unwrap();
        let null: SessionClaim = serde_json::from_str(
            r#"{"userId":7,"email":"a@b.com","isAdmin":false,"companyName":null,"timestamp":1}"#,
        )
        .unwrap();

        assert_eq!(absent.company_name, None);
        assert_eq!(null.company_name, None);
        assert_eq!(absent.user_id, UserId::from(7));
    }

    #[test]
    fn required_fields_are_enforced() {
        for json in [
            r#"{"email":"a@b.com","isAdmin":false,"timestamp":1}"#,
            r#"{"userId":"u1","isAdmin":false,"timestamp":1}"#,
            r#"{"userId":"u1","email":"a@b.com","timestamp":1}"#,
            r#"{"userId":"u1","email":"a@b.com","isAdmin":false}"#,
            r#"{"userId":"u1","email":"a@b.com","isAdmin":"yes","timestamp":1}"#,
            r#"{"userId":"u1","email":"a@b.com","isAdmin":false,"timestamp":"1"}"#,
        ] {
            assert!(serde_json::from_str::<SessionClaim>(json).is_err(), "{json}");
        }
    }

    #[test]
    fn context_is_a_projection_of_the_claim() {
        let claim = SessionClaim {
            user_id: UserId::from("u1"),
            email: "a@b.com".to_string(),
            is_admin: true,
            company_name: None,
            timestamp: EpochMillis::from_millis(1),
        };

        let ctx = claim.authorization_context();
        assert_eq!(ctx.user_id(), &claim.user_id);
        assert_eq!(ctx.email(), "a@b.com");
        assert!(ctx.is_admin());
        assert_eq!(ctx.display_name(), "a@b.com");

        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["isAdmin"], true);
        assert!(json["companyName"].is_null());
    }

    #[test]
    fn display_name_prefers_company() {
        let ctx = AuthorizationContext::from(SessionClaim {
            user_id: UserId::from(3),
            email: "ops@acme.test".to_string(),
            is_admin: false,
            company_name: Some("Acme Imports".to_string()),
            timestamp: EpochMillis::from_millis(1),
        });
        assert_eq!(ctx.display_name(), "Acme Imports");
    }
}
