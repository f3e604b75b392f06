//! Canonical SKU derivation.
//!
//! A SKU is the article code followed by one canonical token per attribute, in
//! schema order, joined with `-` (e.g. `BGC-1011-10-RED`).

use crate::attribute::AttributeValues;

const SEPARATOR: char = '-';

/// Canonicalize a raw attribute value into a SKU token.
///
/// Rules, applied in order:
/// 1. trim surrounding whitespace
/// 2. for the `size` attribute (any case), drop a trailing `oz` (any case)
/// 3. uppercase
/// 4. replace every character outside `A-Z0-9` with `-`
/// 5. collapse runs of `-`
/// 6. trim leading/trailing `-`
///
/// Never fails: blank or all-punctuation input yields an empty token.
pub fn format_attribute_token(value: &str, attribute_name: &str) -> String {
    let mut value = value.trim();

    if attribute_name.eq_ignore_ascii_case("size") {
        value = strip_ounces(value);
    }

    let mut token = String::with_capacity(value.len());
    for c in value.to_uppercase().chars() {
        let c = if c.is_ascii_uppercase() || c.is_ascii_digit() {
            c
        } else {
            SEPARATOR
        };
        if c == SEPARATOR && token.ends_with(SEPARATOR) {
            continue;
        }
        token.push(c);
    }

    token.trim_matches(SEPARATOR).to_string()
}

fn strip_ounces(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 && bytes[bytes.len() - 2..].eq_ignore_ascii_case(b"oz") {
        // Both trailing bytes are ASCII, so this is a char boundary.
        &value[..value.len() - 2]
    } else {
        value
    }
}

/// Assemble a SKU from an article code and a variant's attribute values.
///
/// Tokens follow `attribute_order`; attributes with no value are skipped. A
/// value that canonicalizes to nothing (blank, all punctuation) still adds an
/// empty segment. The same inputs always produce the same SKU, and reordering the
/// attributes changes it.
pub fn build_sku<S: AsRef<str>>(
    article: &str,
    attribute_values: &AttributeValues,
    attribute_order: &[S],
) -> String {
    let mut segments = vec![article.trim().to_string()];

    for name in attribute_order {
        let name = name.as_ref();
        if let Some(value) = attribute_values.get(name) {
            segments.push(format_attribute_token(value, name));
        }
    }

    segments.join("-")
}
