//! Asset lookup
//!
//! Data-driven derivation of vector asset locations from the catalog.
//! Libraries that publish raw assets carry a URL template; the rest get a
//! generic per-library placeholder so callers always have something to
//! render. Fetching and sanitizing the real asset is a caller concern.

use crate::catalog::IconLibrary;

/// Direct URL for an icon's raw vector asset, when the library has one
pub fn asset_url(library: &IconLibrary, name: &str) -> Option<String> {
    library
        .asset_base_url
        .as_ref()
        .map(|template| template.replace("{name}", name))
}

/// Neutral placeholder markup for libraries without an asset scheme:
/// a rounded square carrying the library initial.
pub fn placeholder_svg(library: &IconLibrary) -> String {
    let initial = library
        .display_name
        .chars()
        .next()
        .unwrap_or('?')
        .to_uppercase();

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"><rect x="3" y="3" width="18" height="18" rx="4"/><text x="12" y="16" text-anchor="middle" font-size="10" stroke="none" fill="currentColor">{initial}</text></svg>"#
    )
}

/// Asset fields for a suggestion of `name` from `library`: a real asset
/// URL when the library exposes one, otherwise placeholder markup.
pub fn asset_fields(library: &IconLibrary, name: &str) -> (Option<String>, Option<String>) {
    match asset_url(library, name) {
        Some(url) => (Some(url), None),
        None => (None, Some(placeholder_svg(library))),
    }
}
