//! Item references to order entries
//!
//! An add-order command names one or more items, each either by menu index
//! or by (part of) its name, each with an optional quantity. Resolution
//! copies the matched item into the entry so later menu edits do not
//! touch placed orders.

use crate::errors::{MgwError, Result};
use crate::model::{Item, OrderEntry};
use crate::ops::Menu;
use crate::parser::{Flag, RawCommand};
use crate::rules::FlagSpec;

#[derive(Debug)]
struct PendingEntry<'a> {
    reference: &'a str,
    quantity: Option<&'a Flag>,
}

/// Resolve every item flag of an add-order command
///
/// A quantity binds to the nearest item flag before it; a quantity given
/// before any item binds to the first item.
///
/// # Errors
/// * `MissingFlag` - no item flag, or an empty one
/// * `DuplicateFlag` - two quantities for the same item
/// * `NegativeIndex` / `IndexOutOfRange` - numeric reference outside the menu
/// * `NoSuchItem` / `AmbiguousItem` - text reference matching none or several
/// * `NotAnInteger` / `NonPositiveQuantity` - bad quantity
pub fn resolve(raw: &RawCommand, menu: &Menu) -> Result<Vec<OrderEntry>> {
    let mut pending: Vec<PendingEntry<'_>> = Vec::new();
    let mut leading_quantity: Option<&Flag> = None;

    for flag in raw.flags() {
        if FlagSpec::ITEM.matches(&flag.key) {
            pending.push(PendingEntry {
                reference: &flag.value,
                quantity: None,
            });
        } else if FlagSpec::QUANTITY.matches(&flag.key) {
            let slot = match pending.last_mut() {
                Some(entry) => &mut entry.quantity,
                None => &mut leading_quantity,
            };
            if slot.is_some() {
                return Err(MgwError::DuplicateFlag {
                    flag: flag.spelled(),
                });
            }
            *slot = Some(flag);
        }
    }

    let first = pending.first_mut().ok_or_else(|| MgwError::MissingFlag {
        flag: FlagSpec::ITEM.describe(),
    })?;
    if let Some(flag) = leading_quantity {
        if first.quantity.is_some() {
            return Err(MgwError::DuplicateFlag {
                flag: flag.spelled(),
            });
        }
        first.quantity = Some(flag);
    }

    pending
        .into_iter()
        .map(|entry| {
            let item = resolve_item(entry.reference, menu)?;
            let quantity = parse_quantity(entry.quantity.map(|f| f.value.as_str()))?;
            Ok(OrderEntry::new(item.clone(), quantity))
        })
        .collect()
}

/// Find the menu item a reference points at
///
/// # Errors
/// * `MissingFlag` - empty reference
/// * `NegativeIndex` - integer below zero
/// * `IndexOutOfRange` - integer past the end of the menu
/// * `NoSuchItem` - text matching no item
/// * `AmbiguousItem` - text matching several items
pub fn resolve_item<'m>(reference: &str, menu: &'m Menu) -> Result<&'m Item> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(MgwError::MissingFlag {
            flag: FlagSpec::ITEM.describe(),
        });
    }

    if let Ok(index) = reference.parse::<i64>() {
        if index < 0 {
            return Err(MgwError::NegativeIndex { index });
        }
        let position = usize::try_from(index).map_err(|_| MgwError::IndexOutOfRange {
            index,
            len: menu.len(),
        })?;
        return menu.get(position);
    }

    match menu.find_matching_indices(reference).as_slice() {
        [] => Err(MgwError::NoSuchItem {
            query: reference.to_string(),
        }),
        [only] => menu.get(*only),
        several => Err(MgwError::AmbiguousItem {
            query: reference.to_string(),
            candidates: several
                .iter()
                .filter_map(|&i| menu.get(i).ok())
                .map(|item| item.name.clone())
                .collect(),
        }),
    }
}

/// Parse an optional quantity; absent means 1
///
/// # Errors
/// * `NotAnInteger` - not an integer, or too large
/// * `NonPositiveQuantity` - zero or below
pub fn parse_quantity(raw: Option<&str>) -> Result<u32> {
    let Some(raw) = raw else {
        return Ok(1);
    };
    let value = raw.trim();
    let not_an_integer = || MgwError::NotAnInteger {
        value: value.to_string(),
    };

    let quantity: i64 = value.parse().map_err(|_| not_an_integer())?;
    if quantity <= 0 {
        return Err(MgwError::NonPositiveQuantity { quantity });
    }
    u32::try_from(quantity).map_err(|_| not_an_integer())
}
