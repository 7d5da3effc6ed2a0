use crate::token::DecodedToken;

/// Registered JOSE header parameters (RFC 7515 §4.1)
impl DecodedToken {
    /// Algorithm (`alg`) the producer claims to have signed with
    pub fn algorithm(&self) -> Option<&str> {
        self.header_claim("alg").as_str()
    }

    /// Token type (`typ`), typically "JWT"
    pub fn token_type(&self) -> Option<&str> {
        self.header_claim("typ").as_str()
    }

    /// Key ID (`kid`)
    pub fn key_id(&self) -> Option<&str> {
        self.header_claim("kid").as_str()
    }

    /// Content type (`cty`)
    pub fn content_type(&self) -> Option<&str> {
        self.header_claim("cty").as_str()
    }
}
