//! URL slug generation and uniqueness allocation for property listings.
//!
//! `normalize` is a total, pure function: same input, same output, no I/O.
//! The allocators probe persisted uniqueness through a caller-supplied
//! async lookup so they stay testable without a database.

use std::future::Future;

use onestay_core::AppResult;
use onestay_core::error::AppError;

/// Maximum slug length after normalization.
const MAX_SLUG_LEN: usize = 100;

/// Base used when a name normalizes to the empty string (all emoji, etc.).
const FALLBACK_BASE: &str = "untitled";

/// Upper bound on suffix probing before giving up.
///
/// An unbounded collision sequence is theoretically possible but has never
/// been observed; beyond this many candidates something is wrong with the
/// data and we fail instead of looping.
const MAX_ATTEMPTS: u32 = 1_000;

/// Normalizes a listing name into a URL-friendly slug.
///
/// Lowercases, folds the common accented Latin letters to their base
/// letter, and collapses every run of other characters into a single
/// hyphen. The result is trimmed of leading/trailing hyphens and capped
/// at 100 characters (re-trimmed so truncation never leaves a dangling
/// hyphen). Idempotent on its own output.
///
/// # Examples
///
/// ```
/// use onestay_service::slug::normalize;
///
/// assert_eq!(normalize("Café de l'Été"), "cafe-de-l-ete");
/// assert_eq!(normalize("  Multiple   Spaces!! "), "multiple-spaces");
/// ```
pub fn normalize(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        let c = fold_accent(c);
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    if slug.len() > MAX_SLUG_LEN {
        // Output is pure ASCII at this point, so byte truncation is safe.
        slug.truncate(MAX_SLUG_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    slug
}

/// Maps the supported accented Latin letters to their unaccented base.
/// Anything else passes through unchanged.
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'ç' => 'c',
        'ñ' => 'n',
        _ => c,
    }
}

/// Allocates a unique slug for a new listing.
///
/// Computes `base = normalize(name)` and probes `base`, `base-1`,
/// `base-2`, ... through `exists`, returning the first unused candidate.
/// A name that normalizes to nothing falls back to [`FALLBACK_BASE`].
pub async fn allocate<F, Fut>(name: &str, mut exists: F) -> AppResult<String>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = AppResult<bool>>,
{
    let base = base_slug(name);
    let mut candidate = base.clone();

    for counter in 1..=MAX_ATTEMPTS {
        if !exists(candidate.clone()).await? {
            return Ok(candidate);
        }
        candidate = format!("{base}-{counter}");
    }

    Err(AppError::internal(format!(
        "Could not allocate a unique slug for '{base}' after {MAX_ATTEMPTS} attempts"
    )))
}

/// Allocates a slug for a renamed listing.
///
/// Same candidate sequence as [`allocate`], but a candidate equal to the
/// listing's current slug is accepted immediately: renaming to a name
/// that normalizes to the existing slug keeps it instead of forcing a
/// numeric suffix.
pub async fn allocate_for_rename<F, Fut>(
    name: &str,
    current_slug: &str,
    mut exists: F,
) -> AppResult<String>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = AppResult<bool>>,
{
    let base = base_slug(name);
    let mut candidate = base.clone();

    for counter in 1..=MAX_ATTEMPTS {
        if candidate == current_slug || !exists(candidate.clone()).await? {
            return Ok(candidate);
        }
        candidate = format!("{base}-{counter}");
    }

    Err(AppError::internal(format!(
        "Could not allocate a unique slug for '{base}' after {MAX_ATTEMPTS} attempts"
    )))
}

fn base_slug(name: &str) -> String {
    let base = normalize(name);
    if base.is_empty() {
        FALLBACK_BASE.to_string()
    } else {
        base
    }
}
