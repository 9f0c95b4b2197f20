use base64::engine::general_purpose::STANDARD as b64;
use base64::Engine;
use md5::{Digest, Md5};

use super::DigestChallenge;

/// Nonce count sent with every answer. A fresh client nonce is generated per
/// challenge, so the count never advances.
pub const NONCE_COUNT: &str = "00000001";

/// Lowercase hex MD5 of `input`.
pub fn md5_hex(input: &str) -> String {
    hex::encode(Md5::digest(input.as_bytes()))
}

/// Base64 form of the 8 random client-nonce bytes (always 12 characters).
pub fn encode_client_nonce(bytes: [u8; 8]) -> String {
    b64.encode(bytes)
}

/// Inputs of one digest answer, borrowed from the credentials, the server
/// challenge and the request being retried.
#[derive(Debug, Clone, Copy)]
pub struct DigestResponse<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub realm: &'a str,
    pub nonce: &'a str,
    pub qop: &'a str,
    pub algorithm: &'a str,
    pub method: &'a str,
    pub uri: &'a str,
    pub cnonce: &'a str,
}

impl<'a> DigestResponse<'a> {
    pub fn from_challenge(
        challenge: &'a DigestChallenge,
        username: &'a str,
        password: &'a str,
        method: &'a str,
        uri: &'a str,
        cnonce: &'a str,
    ) -> Self {
        Self {
            username,
            password,
            realm: challenge.realm(),
            nonce: challenge.nonce(),
            qop: challenge.qop(),
            algorithm: challenge.algorithm(),
            method,
            uri,
            cnonce,
        }
    }

    /// `MD5(HA1:nonce:nc:cnonce:qop:HA2)`. The advertised algorithm is echoed
    /// back but never switches the hash function.
    pub fn response(&self) -> String {
        let ha1 = md5_hex(&format!("{}:{}:{}", self.username, self.realm, self.password));
        let ha2 = md5_hex(&format!("{}:{}", self.method, self.uri));
        let parts = [
            ha1.as_str(),
            self.nonce,
            NONCE_COUNT,
            self.cnonce,
            self.qop,
            ha2.as_str(),
        ];
        md5_hex(&parts.join(":"))
    }

    /// Full `Authorization` header value. Field order and quoting are fixed;
    /// monerod's parser depends on them.
    pub fn authorization_header(&self) -> String {
        format!(
            r#"Digest username="{}", realm="{}", nonce="{}", uri="{}", algorithm="{}", response="{}", qop={}, nc={}, cnonce="{}""#,
            self.username,
            self.realm,
            self.nonce,
            self.uri,
            self.algorithm,
            self.response(),
            self.qop,
            NONCE_COUNT,
            self.cnonce,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::{Entropy, ThreadRngEntropy};

    fn monero_inputs(cnonce: &str) -> DigestResponse<'_> {
        DigestResponse {
            username: "username",
            password: "password",
            realm: "monero-rpc",
            nonce: "jmk3hzH2xpPmUBSD0uy+uQ==",
            qop: "auth",
            algorithm: "MD5",
            method: "POST",
            uri: "/json_rpc",
            cnonce,
        }
    }

    #[test]
    fn md5_hex_regression_vector() {
        assert_eq!(md5_hex("1234567890"), "e807f1fcf82d132f9bb018ca6738a19f");
    }

    #[test]
    fn client_nonce_is_twelve_chars_of_eight_bytes() {
        for _ in 0..32 {
            let encoded = encode_client_nonce(ThreadRngEntropy.client_nonce());
            assert_eq!(encoded.len(), 12);
            let decoded = b64.decode(&encoded).expect("client nonce must be valid base64");
            assert_eq!(decoded.len(), 8);
        }
    }

    #[test]
    fn response_is_deterministic_for_fixed_inputs() {
        let first = monero_inputs("MTIzNDU2Nzg=").response();
        let second = monero_inputs("MTIzNDU2Nzg=").response();
        assert_eq!(first, second);
        assert_eq!(first.len(), 32);

        let other = monero_inputs("ODc2NTQzMjE=").response();
        assert_ne!(first, other);
    }

    #[test]
    fn response_matches_manual_composition() {
        let inputs = monero_inputs("MTIzNDU2Nzg=");
        let ha1 = md5_hex("username:monero-rpc:password");
        let ha2 = md5_hex("POST:/json_rpc");
        let expected = md5_hex(&format!(
            "{ha1}:jmk3hzH2xpPmUBSD0uy+uQ==:00000001:MTIzNDU2Nzg=:auth:{ha2}"
        ));
        assert_eq!(inputs.response(), expected);
    }

    #[test]
    fn authorization_header_layout() {
        let inputs = monero_inputs("MTIzNDU2Nzg=");
        let expected = format!(
            r#"Digest username="username", realm="monero-rpc", nonce="jmk3hzH2xpPmUBSD0uy+uQ==", uri="/json_rpc", algorithm="MD5", response="{}", qop=auth, nc=00000001, cnonce="MTIzNDU2Nzg=""#,
            inputs.response()
        );
        assert_eq!(inputs.authorization_header(), expected);
    }

    #[test]
    fn from_challenge_tolerates_missing_keys() {
        let challenge = DigestChallenge::parse("Digest stale=false").expect("challenge must parse");
        let inputs =
            DigestResponse::from_challenge(&challenge, "u", "p", "POST", "/json_rpc", "cn");
        assert_eq!(inputs.realm, "");
        assert_eq!(inputs.nonce, "");
        assert!(inputs
            .authorization_header()
            .starts_with(r#"Digest username="u", realm="", nonce="""#));
    }
}
