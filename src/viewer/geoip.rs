//! IP-based viewer location via ipapi.co.

use serde::Deserialize;
use std::time::Duration;

use crate::error::{LocalityError, Result};
use crate::geo::{canonicalize, UserLocale};

pub const IPAPI_URL: &str = "https://ipapi.co/json/";

const USER_AGENT: &str = concat!("locality/", env!("CARGO_PKG_VERSION"));

#[derive(Deserialize, Debug, Default)]
struct IpApiResult {
    city: Option<String>,
    country_name: Option<String>,
    #[serde(default)]
    error: bool,
    reason: Option<String>,
}

/// Locate the viewer from their public IP.
pub fn locate() -> Result<UserLocale> {
    locate_from(IPAPI_URL)
}

pub fn locate_from(url: &str) -> Result<UserLocale> {
    let response = ureq::get(url)
        .set("User-Agent", USER_AGENT)
        .timeout(Duration::from_secs(5))
        .call()
        .map_err(|e| LocalityError::Network(e.to_string()))?;

    let result: IpApiResult = response
        .into_json()
        .map_err(|e| LocalityError::InvalidResponse(e.to_string()))?;

    locale_from(result)
}

fn locale_from(result: IpApiResult) -> Result<UserLocale> {
    if result.error {
        return Err(LocalityError::InvalidResponse(
            result.reason.unwrap_or_else(|| "lookup refused".into()),
        ));
    }

    let locale = UserLocale::new(result.city.as_deref(), result.country_name.as_deref());
    if locale.is_empty() {
        return Err(LocalityError::InvalidResponse("no city or country".into()));
    }

    Ok(UserLocale {
        country: locale.country.map(|c| canonicalize(&c)),
        ..locale
    })
}
