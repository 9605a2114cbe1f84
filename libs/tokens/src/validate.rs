//! # Validation
//!
//! Checks a [`ConfigurationRoot`] against the contract of the CSS engine.
//! The engine itself silently produces wrong CSS for most of these, so the
//! checks run before the configuration is written out.
//!
//! Rules:
//!
//! - at least one non-empty content glob, no blank safelist entry
//! - screens strictly ascending
//! - every converted length finite and non-negative
//! - every font stack has a preferred face and at least one fallback

use crate::configuration::ConfigurationRoot;
use crate::error::TokenError;
use crate::scale::TokenScale;
use crate::typography::FontStack;
use crate::units::{Length, Rem};

/// Runs every rule, returning the first violation.
pub fn validate_configuration(root: &ConfigurationRoot) -> Result<(), TokenError> {
    let result = check_directives(root)
        .and_then(|()| check_screens(&root.theme.screens))
        .and_then(|()| check_rems("container", [("padding", &root.theme.container.padding)]))
        .and_then(|()| check_rems("borderRadius", root.theme.border_radius.iter()))
        .and_then(|()| check_font_sizes(&root.theme.font_size))
        .and_then(|()| check_font_families(&root.theme.font_family));
    if let Err(err) = &result {
        log::warn!("configuration rejected: {err}");
    }
    result
}

fn check_directives(root: &ConfigurationRoot) -> Result<(), TokenError> {
    if root.content.is_empty() || root.content.iter().any(|glob| glob.trim().is_empty()) {
        return Err(TokenError::EmptyContentPatterns);
    }
    if root.safelist.iter().any(|class| class.trim().is_empty()) {
        return Err(TokenError::EmptySafelistEntry);
    }
    Ok(())
}

fn check_screens(screens: &TokenScale<Rem>) -> Result<(), TokenError> {
    check_rems("screens", screens.iter())?;
    let ordered: Vec<_> = screens.iter().collect();
    for pair in ordered.windows(2) {
        let (previous, smaller) = pair[0];
        let (next, larger) = pair[1];
        if larger.value() <= smaller.value() {
            return Err(TokenError::ScreensOutOfOrder {
                previous: previous.to_string(),
                next: next.to_string(),
            });
        }
    }
    Ok(())
}

fn check_rems<'a>(
    family: &'static str,
    tokens: impl IntoIterator<Item = (&'a str, &'a Rem)>,
) -> Result<(), TokenError> {
    for (token, rem) in tokens {
        if !rem.is_valid() {
            return Err(invalid_length(family, token, rem));
        }
    }
    Ok(())
}

fn check_font_sizes(sizes: &TokenScale<Length>) -> Result<(), TokenError> {
    match sizes.iter().find(|(_, length)| !length.is_valid()) {
        Some((token, length)) => Err(invalid_length("fontSize", token, length)),
        None => Ok(()),
    }
}

fn check_font_families(families: &TokenScale<FontStack>) -> Result<(), TokenError> {
    for (name, stack) in families.iter() {
        if stack.preferred().trim().is_empty() {
            return Err(TokenError::EmptyFontFace(name.to_string()));
        }
        if stack.fallbacks().is_empty()
            || stack.fallbacks().iter().any(|face| face.trim().is_empty())
        {
            return Err(TokenError::EmptyFallbacks(name.to_string()));
        }
    }
    Ok(())
}

fn invalid_length(family: &'static str, token: &str, value: impl ToString) -> TokenError {
    TokenError::InvalidLength {
        family,
        token: token.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests;
