/// Describes voicemail bridge specific error types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested secret, or the secret version with the requested stage, doesn't exist.
    ResourceNotFound,
    /// The identity provider didn't return an authenticated user for the access token.
    UserNotFound,
    /// Unknown error.
    Unknown,
}
