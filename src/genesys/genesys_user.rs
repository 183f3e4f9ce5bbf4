use serde_derive::Deserialize;

/// Platform user the access token was issued for.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenesysUser {
    /// Unique identifier of the user.
    pub id: String,
    /// Display name of the user.
    pub name: Option<String>,
}
