use serde_derive::Deserialize;

/// OAuth access and refresh tokens issued by the platform login service.
#[derive(Deserialize, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::TokenPair;
    use insta::assert_debug_snapshot;

    #[test]
    fn deserialization() -> anyhow::Result<()> {
        let token_pair: TokenPair = serde_json::from_str(
            r#"{
                "access_token": "access-2",
                "refresh_token": "refresh-2",
                "token_type": "bearer",
                "expires_in": 86399
            }"#,
        )?;
        assert_eq!(
            token_pair,
            TokenPair {
                access_token: "access-2".to_string(),
                refresh_token: "refresh-2".to_string(),
            }
        );

        assert_debug_snapshot!(token_pair, @r###"
        TokenPair {
            access_token: "[REDACTED]",
            refresh_token: "[REDACTED]",
        }
        "###);

        Ok(())
    }
}
