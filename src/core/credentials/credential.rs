/*
A transient credential presented during a login or `forceAuthentication`
attempt. Core treats it as an opaque `(kind, payload)` pair — it has no idea
whether `payload` is a password, a certificate blob, or a bearer assertion.
`CredentialHandler::supports` inspects `kind`; only the matching handler ever
sees `payload`.

`Credential` intentionally does not implement `Clone` — the payload may carry
secret material, and core should not be able to accidentally duplicate it
beyond the single handler that consumes it.
*/
pub struct Credential {
    kind: String,
    payload: String,
}

impl Credential {
    pub fn new(kind: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: payload.into(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Consume the credential and return its payload. Used by the handler
    /// that claims it; core itself never needs the raw payload.
    pub fn into_payload(self) -> String {
        self.payload
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("kind", &self.kind)
            .field("payload", &"[REDACTED]")
            .finish()
    }
}
