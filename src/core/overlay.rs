use std::sync::LazyLock;

use regex::Regex;

use crate::core::location::LatLng;

static COORDINATES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(-?\d+\.\d+),\s*(-?\d+\.\d+)").unwrap());

/// Extract `lat,lng` pairs embedded in a free-text route description.
///
/// Best effort: the optimizer is never asked for coordinates. Returns [`None`]
/// when nothing matches or when any of the matches does not parse.
#[must_use]
pub fn derive_path_overlay(route: &str) -> Option<Vec<LatLng>> {
    let path = COORDINATES
        .captures_iter(route)
        .map(|captures| Some(LatLng::new(captures[1].parse().ok()?, captures[2].parse().ok()?)))
        .collect::<Option<Vec<_>>>()?;
    if path.is_empty() { None } else { Some(path) }
}
