//! Where the viewer is: explicit input, IP geolocation, or the stored profile.

pub mod geoip;
pub mod profile;

pub use profile::ProfileStore;

use crate::geo::UserLocale;

/// Merge viewer sources, most specific first: `explicit`, then IP
/// geolocation when `auto` is set, then the stored profile.
///
/// Geolocation failures are logged and skipped.
pub fn resolve_viewer(explicit: UserLocale, auto: bool, profile: &ProfileStore) -> UserLocale {
    let located = if auto {
        geoip::locate().unwrap_or_else(|e| {
            tracing::warn!("IP geolocation failed, using stored profile: {}", e);
            UserLocale::default()
        })
    } else {
        UserLocale::default()
    };
    explicit.or(located).or(profile.locale())
}
