use crate::commands::{Command, CommandKind};
use crate::errors::{MgwError, Result, MAX_NAME_LEN};
use crate::model::Money;
use crate::ops::{Menu, OrderRef};
use crate::order_resolver;
use crate::parser::RawCommand;

/// A flag accepted by some command, under both of its spellings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    pub long: &'static str,
    pub short: &'static str,
}

impl FlagSpec {
    pub const NAME: FlagSpec = FlagSpec::new("name", "n");
    pub const PRICE: FlagSpec = FlagSpec::new("price", "p");
    pub const INDEX: FlagSpec = FlagSpec::new("index", "i");
    pub const ITEM: FlagSpec = FlagSpec::new("item", "i");
    pub const QUANTITY: FlagSpec = FlagSpec::new("quantity", "q");
    pub const ORDER_ID: FlagSpec = FlagSpec::new("id", "i");

    pub const fn new(long: &'static str, short: &'static str) -> Self {
        Self { long, short }
    }

    /// True if `key` is either spelling of this flag
    pub fn matches(&self, key: &str) -> bool {
        key == self.long || key == self.short
    }

    /// Both spellings, as shown in error messages (`-n/--name`)
    pub fn describe(&self) -> String {
        format!("-{}/--{}", self.short, self.long)
    }
}

/// Turn a parsed command into its typed form
///
/// Validation never touches `menu`; it is only consulted for bounds and
/// name lookups.
///
/// # Errors
/// Returns the first rule the command breaks. See [`MgwError`] for the
/// taxonomy; every variant except the persistence ones can come from here.
pub fn validate(mut raw: RawCommand, kind: CommandKind, menu: &Menu) -> Result<Command> {
    match kind {
        CommandKind::Help => Ok(Command::Help),
        CommandKind::ListItems => Ok(Command::ListItems),
        CommandKind::ListOrders => Ok(Command::ListOrders),
        CommandKind::Exit => Ok(Command::Exit),
        CommandKind::AddItem => validate_add_item(&mut raw),
        CommandKind::UpdateItem => validate_update_item(&mut raw, menu),
        CommandKind::DeleteItem => validate_delete_item(&mut raw, menu),
        CommandKind::FindItem => validate_find_item(&raw),
        CommandKind::AddOrder => validate_add_order(&raw, menu),
        CommandKind::RefundOrder => validate_refund_order(&mut raw),
    }
}

fn validate_add_item(raw: &mut RawCommand) -> Result<Command> {
    reject_unknown_flags(raw, &[FlagSpec::NAME, FlagSpec::PRICE])?;
    canonicalize(raw, &[FlagSpec::NAME, FlagSpec::PRICE]);

    let name = require(raw, FlagSpec::NAME)?;
    let price = require(raw, FlagSpec::PRICE)?;

    Ok(Command::AddItem {
        name: check_name(&name)?,
        price: Money::parse_strict(&price)?,
    })
}

fn validate_update_item(raw: &mut RawCommand, menu: &Menu) -> Result<Command> {
    if menu.is_empty() {
        return Err(MgwError::EmptyMenu);
    }
    reject_unknown_flags(raw, &[FlagSpec::INDEX, FlagSpec::NAME, FlagSpec::PRICE])?;
    canonicalize(raw, &[FlagSpec::INDEX, FlagSpec::NAME, FlagSpec::PRICE]);

    let index = require(raw, FlagSpec::INDEX)?;
    let name = raw.get(FlagSpec::NAME.long).map(str::to_string);
    let price = raw.get(FlagSpec::PRICE.long).map(str::to_string);
    if name.is_none() && price.is_none() {
        return Err(MgwError::MissingFlag {
            flag: format!(
                "{} or {}",
                FlagSpec::NAME.describe(),
                FlagSpec::PRICE.describe()
            ),
        });
    }

    let name = name.as_deref().map(check_name).transpose()?;
    let price = price.as_deref().map(Money::parse_strict).transpose()?;
    let index = check_index(&index, menu)?;

    Ok(Command::UpdateItem { index, name, price })
}

fn validate_delete_item(raw: &mut RawCommand, menu: &Menu) -> Result<Command> {
    if menu.is_empty() {
        return Err(MgwError::EmptyMenu);
    }
    reject_unknown_flags(raw, &[FlagSpec::INDEX])?;
    canonicalize(raw, &[FlagSpec::INDEX]);

    let index = require(raw, FlagSpec::INDEX)?;
    Ok(Command::DeleteItem {
        index: check_index(&index, menu)?,
    })
}

fn validate_find_item(raw: &RawCommand) -> Result<Command> {
    reject_unknown_flags(raw, &[])?;

    let query = raw.argument_string().trim();
    if query.is_empty() {
        return Err(MgwError::MissingArgument {
            what: "the name of the item to find".to_string(),
        });
    }
    Ok(Command::FindItem {
        query: query.to_string(),
    })
}

fn validate_add_order(raw: &RawCommand, menu: &Menu) -> Result<Command> {
    reject_unknown_flags(raw, &[FlagSpec::ITEM, FlagSpec::QUANTITY])?;
    let entries = order_resolver::resolve(raw, menu)?;
    Ok(Command::AddOrder { entries })
}

fn validate_refund_order(raw: &mut RawCommand) -> Result<Command> {
    reject_unknown_flags(raw, &[FlagSpec::ORDER_ID])?;
    canonicalize(raw, &[FlagSpec::ORDER_ID]);

    let reference = require(raw, FlagSpec::ORDER_ID)?;
    let reference = match reference.parse::<i64>() {
        Ok(position) => OrderRef::Position(position),
        Err(_) => OrderRef::Id(reference),
    };
    Ok(Command::RefundOrder { reference })
}

/// Fail on the first flag outside `allowed`
fn reject_unknown_flags(raw: &RawCommand, allowed: &[FlagSpec]) -> Result<()> {
    match raw
        .flags()
        .iter()
        .find(|flag| !allowed.iter().any(|spec| spec.matches(&flag.key)))
    {
        Some(flag) => Err(MgwError::UnknownFlag {
            flag: flag.spelled(),
            command: raw.name().to_string(),
        }),
        None => Ok(()),
    }
}

fn canonicalize(raw: &mut RawCommand, specs: &[FlagSpec]) {
    for spec in specs {
        raw.map_argument_alias(spec.long, spec.short);
    }
}

/// Value of a required flag, read under its long spelling
fn require(raw: &RawCommand, spec: FlagSpec) -> Result<String> {
    raw.get(spec.long)
        .map(str::to_string)
        .ok_or_else(|| MgwError::MissingFlag {
            flag: spec.describe(),
        })
}

/// Check an item name is 1 to 25 characters
///
/// # Errors
/// * `NameTooShort` - empty after trimming
/// * `NameTooLong` - more than 25 characters
pub fn check_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    let len = name.chars().count();
    if len == 0 {
        return Err(MgwError::NameTooShort);
    }
    if len > MAX_NAME_LEN {
        return Err(MgwError::NameTooLong { len });
    }
    Ok(name.to_string())
}

/// Parse a menu position and check it against the menu
///
/// # Errors
/// * `MissingFlag` - empty value
/// * `NotAnInteger` - not an integer
/// * `IndexOutOfRange` - outside `[0, menu.len())`
pub fn check_index(raw: &str, menu: &Menu) -> Result<usize> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(MgwError::MissingFlag {
            flag: FlagSpec::INDEX.describe(),
        });
    }
    let index: i64 = value.parse().map_err(|_| MgwError::NotAnInteger {
        value: value.to_string(),
    })?;

    match usize::try_from(index) {
        Ok(position) if position < menu.len() => Ok(position),
        _ => Err(MgwError::IndexOutOfRange {
            index,
            len: menu.len(),
        }),
    }
}
