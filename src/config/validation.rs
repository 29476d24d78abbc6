//! Configuration validation logic

use crate::config::{Config, PersonConfig};
use crate::error::MatchError;
use crate::export::ExportLayout;
use anyhow::Result;

/// Validate a complete configuration
///
/// # Errors
///
/// Returns an error if:
/// - The configuration does not name exactly two people
/// - A person has an empty name or export path
/// - A layout member is empty
#[inline]
pub fn validate_config(config: &Config) -> Result<()> {
    let (first, second) = people_pair(config)?;
    validate_person(first, 0)?;
    validate_person(second, 1)?;

    validate_layout(&config.layout)
}

/// The two people to compare, in display order
///
/// # Errors
///
/// Returns an error if the configuration does not name exactly two people
#[inline]
pub fn people_pair(config: &Config) -> Result<(&PersonConfig, &PersonConfig)> {
    match config.people.as_slice() {
        [first, second] => Ok((first, second)),
        people => Err(MatchError::configuration(format!(
            "Configuration must name exactly two people, found {}",
            people.len()
        ))
        .into()),
    }
}

fn validate_person(person: &PersonConfig, index: usize) -> Result<()> {
    let context = format!("Person #{}", index + 1);

    if person.name.trim().is_empty() {
        return Err(MatchError::configuration(format!("{context}: Name cannot be empty")).into());
    }

    if person.export.trim().is_empty() {
        return Err(MatchError::configuration(format!(
            "{context} ({}): Export path cannot be empty",
            person.name
        ))
        .into());
    }

    Ok(())
}

/// Validate that every list has a member path
///
/// # Errors
///
/// Returns an error if any member path is empty
#[inline]
pub fn validate_layout(layout: &ExportLayout) -> Result<()> {
    let members = [
        ("watched", &layout.watched),
        ("liked", &layout.liked),
        ("watchlist", &layout.watchlist),
    ];

    for (list, member) in members {
        if member.trim().is_empty() {
            return Err(MatchError::configuration(format!(
                "Layout: the {list} member path cannot be empty"
            ))
            .into());
        }
    }

    Ok(())
}
