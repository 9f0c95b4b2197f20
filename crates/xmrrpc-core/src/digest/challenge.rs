use std::collections::HashMap;

const SCHEME: &str = "Digest";

/// Named parameters of one `WWW-Authenticate: Digest ...` header line.
///
/// No key is guaranteed to be present; accessors for the well-known keys
/// return an empty string when the daemon omitted them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigestChallenge {
    params: HashMap<String, String>,
}

impl DigestChallenge {
    /// Parse a single header value.
    ///
    /// Returns `None` unless the value starts with the `Digest` scheme token
    /// followed by whitespace. Pairs are split on commas; bare keys without
    /// `=` are skipped and the last occurrence of a duplicate key wins.
    pub fn parse(header: &str) -> Option<Self> {
        let (scheme, rest) = header.split_once(char::is_whitespace)?;
        if scheme != SCHEME {
            return None;
        }

        let params = rest
            .split(',')
            .filter_map(|pair| pair.split_once('='))
            .map(|(key, value)| (unquote(key).to_owned(), unquote(value).to_owned()))
            .collect();

        Some(Self { params })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn realm(&self) -> &str {
        self.get("realm").unwrap_or_default()
    }

    pub fn nonce(&self) -> &str {
        self.get("nonce").unwrap_or_default()
    }

    pub fn qop(&self) -> &str {
        self.get("qop").unwrap_or_default()
    }

    pub fn algorithm(&self) -> &str {
        self.get("algorithm").unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    fn prefers_md5(&self) -> bool {
        match self.get("algorithm") {
            None => true,
            Some(algorithm) => algorithm.eq_ignore_ascii_case("MD5"),
        }
    }
}

/// Pick the challenge to answer from every `WWW-Authenticate` line of a
/// response.
///
/// Daemons may offer several variants (`MD5`, `MD5-sess`). Only plain MD5
/// is computed here, so the first challenge advertising `MD5` (or no
/// algorithm at all) is chosen; otherwise the first parseable Digest line.
pub fn select_challenge<'a, I>(headers: I) -> Option<DigestChallenge>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut fallback = None;
    for challenge in headers.into_iter().filter_map(DigestChallenge::parse) {
        if challenge.prefers_md5() {
            return Some(challenge);
        }
        fallback.get_or_insert(challenge);
    }
    fallback
}

fn unquote(raw: &str) -> &str {
    raw.trim_matches(|c: char| c == '"' || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONERO_CHALLENGE: &str = r#"Digest qop="auth",algorithm=MD5,realm="monero-rpc",nonce="jmk3hzH2xpPmUBSD0uy+uQ==",stale=false"#;

    #[test]
    fn parse_rejects_other_schemes() {
        assert_eq!(
            DigestChallenge::parse(r#"NotDigest qop="auth",algorithm=MD5"#),
            None
        );
        assert_eq!(DigestChallenge::parse(r#"Basic realm="monero-rpc""#), None);
        assert_eq!(DigestChallenge::parse("Digest"), None);
    }

    #[test]
    fn parse_skips_bare_keys() {
        let challenge = DigestChallenge::parse(
            r#"Digest qop="auth",algorithm=MD5,realm="monero-rpc",nonce,stale=false"#,
        )
        .expect("digest scheme must parse");
        assert_eq!(challenge.get("nonce"), None);
        assert_eq!(challenge.nonce(), "");
        assert_eq!(challenge.realm(), "monero-rpc");
    }

    #[test]
    fn parse_unquotes_values() {
        let challenge = DigestChallenge::parse(MONERO_CHALLENGE).expect("challenge must parse");
        assert!(!challenge.is_empty());
        assert_eq!(challenge.nonce(), "jmk3hzH2xpPmUBSD0uy+uQ==");
        assert_eq!(challenge.qop(), "auth");
        assert_eq!(challenge.algorithm(), "MD5");
        assert_eq!(challenge.get("stale"), Some("false"));
    }

    #[test]
    fn parse_last_duplicate_wins() {
        let challenge = DigestChallenge::parse(r#"Digest realm="a", realm="b""#)
            .expect("challenge must parse");
        assert_eq!(challenge.realm(), "b");
    }

    #[test]
    fn select_prefers_plain_md5() {
        let sess = r#"Digest qop="auth",algorithm=MD5-sess,realm="monero-rpc",nonce="sess""#;
        let plain = r#"Digest qop="auth",algorithm=MD5,realm="monero-rpc",nonce="plain""#;

        let chosen = select_challenge([sess, plain]).expect("a challenge must be selected");
        assert_eq!(chosen.nonce(), "plain");
    }

    #[test]
    fn select_falls_back_to_first_digest() {
        let basic = r#"Basic realm="x""#;
        let sess = r#"Digest algorithm=MD5-sess,nonce="sess""#;

        let chosen = select_challenge([basic, sess]).expect("fallback must be selected");
        assert_eq!(chosen.nonce(), "sess");
        assert_eq!(select_challenge([basic]), None);
    }
}
