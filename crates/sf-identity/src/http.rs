//! Response checks shared by every provider attempt.

use serde::Deserialize;

use crate::error::IdentityError;

/// Body shape shared by the supported public-IP providers.
#[derive(Debug, Deserialize)]
struct IpPayload {
    #[serde(default)]
    ip: Option<String>,
}

/// Reject non-success responses with [`IdentityError::Status`].
pub fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, IdentityError> {
    if !resp.status().is_success() {
        return Err(IdentityError::Status {
            status: resp.status().as_u16(),
        });
    }
    Ok(resp)
}

/// Pull a non-blank `ip` out of a JSON body.
pub fn parse_address(body: &[u8]) -> Result<String, IdentityError> {
    let payload: IpPayload =
        serde_json::from_slice(body).map_err(|e| IdentityError::Parse(e.to_string()))?;
    payload
        .ip
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
        .ok_or(IdentityError::MissingAddress)
}
