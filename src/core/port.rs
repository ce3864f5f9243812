//! Natural ordering of switch port names.
//!
//! Three naming schemes sort in hardware order:
//! - `1, 2, 3, ..., 12, 13`
//! - `A1, A2, ..., C20, C22`
//! - `1/1/1, 1/1/2, 2/1/1, 2/2/20`
//!
//! Anything else, and any comparison across two different schemes, falls
//! back to plain string order. That fallback is not transitive across
//! schemes, so sorting goes through [`sort_order`] instead.

use crate::domain::model::PortKind;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());
static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z][0-9]+$").unwrap());
static SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+/[0-9]+/[0-9]+$").unwrap());
static UNKNOWN_WRAPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\?\? \((.+)\)$").unwrap());

pub fn classify(name: Option<&str>) -> PortKind {
    let Some(name) = name else {
        return PortKind::Unclassified;
    };

    if NUMERIC.is_match(name) {
        PortKind::Numeric
    } else if ALPHANUMERIC.is_match(name) {
        PortKind::Alphanumeric
    } else if SLASH.is_match(name) {
        PortKind::Slash
    } else {
        PortKind::Unclassified
    }
}

/// Strips the `?? (...)` wrapper used for patch ports whose switch port is
/// unknown, e.g. `?? (Gi1/0/1)` becomes `Gi1/0/1`.
pub fn clean_port_name(name: Option<&str>) -> Option<&str> {
    let name = name?;
    match UNKNOWN_WRAPPER.captures(name).and_then(|caps| caps.get(1)) {
        Some(inner) => Some(inner.as_str()),
        None => Some(name),
    }
}

pub fn compare_port(a: Option<&str>, b: Option<&str>) -> Ordering {
    let kind = classify(a);
    if kind != classify(b) {
        return a.cmp(&b);
    }

    let (Some(a), Some(b)) = (a, b) else {
        // 兩邊都是 None
        return a.cmp(&b);
    };

    match kind {
        PortKind::Numeric => compare_digits(a, b),
        PortKind::Alphanumeric => compare_alphanumeric(a, b),
        PortKind::Slash => compare_slash(a, b),
        PortKind::Unclassified => a.cmp(b),
    }
}

pub fn compare_patch_port(a: Option<&str>, b: Option<&str>) -> Ordering {
    compare_port(clean_port_name(a), clean_port_name(b))
}

pub fn compare_patch_port_sort(a: Option<&str>, b: Option<&str>) -> Ordering {
    sort_order(clean_port_name(a), clean_port_name(b))
}

/// Total order for sorting port columns.
///
/// Missing names come first, then names grouped by scheme in [`PortKind`]
/// order. Inside a group this agrees with [`compare_port`].
pub fn sort_order(a: Option<&str>, b: Option<&str>) -> Ordering {
    let kind_a = classify(a);
    let kind_b = classify(b);
    (a.is_some(), kind_a)
        .cmp(&(b.is_some(), kind_b))
        .then_with(|| compare_port(a, b))
}

/// Letter first (case-sensitive), then the number behind it.
fn compare_alphanumeric(a: &str, b: &str) -> Ordering {
    let mut a_chars = a.chars();
    let mut b_chars = b.chars();
    a_chars
        .next()
        .cmp(&b_chars.next())
        .then_with(|| compare_digits(leading_digits(a_chars.as_str()), leading_digits(b_chars.as_str())))
}

fn compare_slash(a: &str, b: &str) -> Ordering {
    a.split('/')
        .zip(b.split('/'))
        .map(|(x, y)| compare_digits(x, y))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn leading_digits(s: &str) -> &str {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    &s[..end]
}

/// Compares two ASCII digit strings by numeric value, at any length.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
