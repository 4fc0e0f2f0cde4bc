use mgw_core_types::CommandId;
use thiserror::Error;

/// Result type alias using MgwError
pub type Result<T> = std::result::Result<T, MgwError>;

/// Longest item name accepted on the menu, in characters
pub const MAX_NAME_LEN: usize = 25;

// ========== Error Facility ==========

/// Coarse error families recovered at the command boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or malformed flags and arguments
    Format,
    /// Index or quantity outside its allowed bounds
    Range,
    /// A name matched more than one menu item
    Ambiguity,
    /// No matching item or order
    NotFound,
    /// Failure reading or writing a snapshot
    Persistence,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorCategory::Format => "FormatError",
            ErrorCategory::Range => "RangeError",
            ErrorCategory::Ambiguity => "AmbiguityError",
            ErrorCategory::NotFound => "NotFoundError",
            ErrorCategory::Persistence => "PersistenceError",
        };
        f.write_str(name)
    }
}

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Format
    MissingFlag,
    UnknownFlag,
    DuplicateFlag,
    MissingArgument,
    NameTooShort,
    NameTooLong,
    NotANumber,
    NegativePrice,
    BadPrecision,
    NotAnInteger,
    EmptyOrder,
    UnknownCommand,

    // Range
    IndexOutOfRange,
    NegativeIndex,
    NonPositiveQuantity,
    EmptyMenu,

    // Ambiguity
    AmbiguousItem,

    // Not found
    NoSuchItem,
    OrderNotFound,
    AlreadyRefunded,

    // Persistence
    Persistence,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MissingFlag => "ERR_MISSING_FLAG",
            ExErrorKind::UnknownFlag => "ERR_UNKNOWN_FLAG",
            ExErrorKind::DuplicateFlag => "ERR_DUPLICATE_FLAG",
            ExErrorKind::MissingArgument => "ERR_MISSING_ARGUMENT",
            ExErrorKind::NameTooShort => "ERR_NAME_TOO_SHORT",
            ExErrorKind::NameTooLong => "ERR_NAME_TOO_LONG",
            ExErrorKind::NotANumber => "ERR_NOT_A_NUMBER",
            ExErrorKind::NegativePrice => "ERR_NEGATIVE_PRICE",
            ExErrorKind::BadPrecision => "ERR_BAD_PRECISION",
            ExErrorKind::NotAnInteger => "ERR_NOT_AN_INTEGER",
            ExErrorKind::EmptyOrder => "ERR_EMPTY_ORDER",
            ExErrorKind::UnknownCommand => "ERR_UNKNOWN_COMMAND",
            ExErrorKind::IndexOutOfRange => "ERR_INDEX_OUT_OF_RANGE",
            ExErrorKind::NegativeIndex => "ERR_NEGATIVE_INDEX",
            ExErrorKind::NonPositiveQuantity => "ERR_NON_POSITIVE_QUANTITY",
            ExErrorKind::EmptyMenu => "ERR_EMPTY_MENU",
            ExErrorKind::AmbiguousItem => "ERR_AMBIGUOUS_ITEM",
            ExErrorKind::NoSuchItem => "ERR_NO_SUCH_ITEM",
            ExErrorKind::OrderNotFound => "ERR_ORDER_NOT_FOUND",
            ExErrorKind::AlreadyRefunded => "ERR_ALREADY_REFUNDED",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }

    /// Get the error family this kind belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExErrorKind::MissingFlag
            | ExErrorKind::UnknownFlag
            | ExErrorKind::DuplicateFlag
            | ExErrorKind::MissingArgument
            | ExErrorKind::NameTooShort
            | ExErrorKind::NameTooLong
            | ExErrorKind::NotANumber
            | ExErrorKind::NegativePrice
            | ExErrorKind::BadPrecision
            | ExErrorKind::NotAnInteger
            | ExErrorKind::EmptyOrder
            | ExErrorKind::UnknownCommand => ErrorCategory::Format,
            ExErrorKind::IndexOutOfRange
            | ExErrorKind::NegativeIndex
            | ExErrorKind::NonPositiveQuantity
            | ExErrorKind::EmptyMenu => ErrorCategory::Range,
            ExErrorKind::AmbiguousItem => ErrorCategory::Ambiguity,
            ExErrorKind::NoSuchItem | ExErrorKind::OrderNotFound | ExErrorKind::AlreadyRefunded => {
                ErrorCategory::NotFound
            }
            ExErrorKind::Persistence | ExErrorKind::Serialization => ErrorCategory::Persistence,
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification fields used by the logging macros alongside
/// the user-facing message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    command_id: Option<CommandId>,
    message: String,
    candidates: Option<Vec<String>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            command_id: None,
            message: String::new(),
            candidates: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add command correlation context
    pub fn with_command_id(mut self, command_id: CommandId) -> Self {
        self.command_id = Some(command_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add candidate item names (used for AmbiguousItem)
    pub fn with_candidates(mut self, names: Vec<String>) -> Self {
        self.candidates = Some(names);
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the error family
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the command correlation id, if any
    pub fn command_id(&self) -> Option<&CommandId> {
        self.command_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get candidate item names, if any
    pub fn candidates(&self) -> Option<&[String]> {
        self.candidates.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.category())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for MoneyGoWhere operations
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MgwError {
    // ===== Format Errors =====
    #[error("Missing required flag {flag}.")]
    MissingFlag { flag: String },

    #[error("Unknown flag {flag} for {command}.")]
    UnknownFlag { flag: String, command: String },

    #[error("Flag {flag} was given more than once for the same entry.")]
    DuplicateFlag { flag: String },

    #[error("Please provide {what}.")]
    MissingArgument { what: String },

    #[error("Name cannot be empty.")]
    NameTooShort,

    #[error("Name exceeds the 25 character limit ({len} characters).")]
    NameTooLong { len: usize },

    #[error("Price must be a number: {value}")]
    NotANumber { value: String },

    #[error("Price cannot be negative.")]
    NegativePrice,

    #[error("Price must have exactly 2 decimal places, e.g. 5.10: {value}")]
    BadPrecision { value: String },

    #[error("Argument needs to be an integer: {value}")]
    NotAnInteger { value: String },

    #[error("An order needs at least one item.")]
    EmptyOrder,

    #[error("The command: {command} is not a valid command.")]
    UnknownCommand { command: String },

    // ===== Range Errors =====
    #[error("Index {index} is out of range; the menu has {len} item(s).")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Index cannot be negative: {index}")]
    NegativeIndex { index: i64 },

    #[error("Quantity must be more than 0: {quantity}")]
    NonPositiveQuantity { quantity: i64 },

    #[error("The menu is empty.")]
    EmptyMenu,

    // ===== Ambiguity Errors =====
    #[error("Multiple items match \"{query}\" ({}); please use the item index instead.", .candidates.join(", "))]
    AmbiguousItem {
        query: String,
        candidates: Vec<String>,
    },

    // ===== Not Found Errors =====
    #[error("No such item on the menu: {query}")]
    NoSuchItem { query: String },

    #[error("No such order: {reference}")]
    OrderNotFound { reference: String },

    #[error("Order {order_id} has already been refunded.")]
    AlreadyRefunded { order_id: String },

    // ===== Persistence Errors =====
    #[error("Failed to {op}: {message}")]
    Persistence { op: String, message: String },

    #[error("Serialization failed: {message}")]
    Serialization { message: String },
}

impl MgwError {
    /// Get the structured kind of this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            MgwError::MissingFlag { .. } => ExErrorKind::MissingFlag,
            MgwError::UnknownFlag { .. } => ExErrorKind::UnknownFlag,
            MgwError::DuplicateFlag { .. } => ExErrorKind::DuplicateFlag,
            MgwError::MissingArgument { .. } => ExErrorKind::MissingArgument,
            MgwError::NameTooShort => ExErrorKind::NameTooShort,
            MgwError::NameTooLong { .. } => ExErrorKind::NameTooLong,
            MgwError::NotANumber { .. } => ExErrorKind::NotANumber,
            MgwError::NegativePrice => ExErrorKind::NegativePrice,
            MgwError::BadPrecision { .. } => ExErrorKind::BadPrecision,
            MgwError::NotAnInteger { .. } => ExErrorKind::NotAnInteger,
            MgwError::EmptyOrder => ExErrorKind::EmptyOrder,
            MgwError::UnknownCommand { .. } => ExErrorKind::UnknownCommand,
            MgwError::IndexOutOfRange { .. } => ExErrorKind::IndexOutOfRange,
            MgwError::NegativeIndex { .. } => ExErrorKind::NegativeIndex,
            MgwError::NonPositiveQuantity { .. } => ExErrorKind::NonPositiveQuantity,
            MgwError::EmptyMenu => ExErrorKind::EmptyMenu,
            MgwError::AmbiguousItem { .. } => ExErrorKind::AmbiguousItem,
            MgwError::NoSuchItem { .. } => ExErrorKind::NoSuchItem,
            MgwError::OrderNotFound { .. } => ExErrorKind::OrderNotFound,
            MgwError::AlreadyRefunded { .. } => ExErrorKind::AlreadyRefunded,
            MgwError::Persistence { .. } => ExErrorKind::Persistence,
            MgwError::Serialization { .. } => ExErrorKind::Serialization,
        }
    }

    /// Get the error family of this error
    pub fn category(&self) -> ErrorCategory {
        self.kind().category()
    }

    /// Shorthand for a persistence failure during `op`
    pub fn persistence(op: impl Into<String>, message: impl Into<String>) -> Self {
        MgwError::Persistence {
            op: op.into(),
            message: message.into(),
        }
    }
}

/// Conversion from MgwError to the structured ExError
impl From<MgwError> for ExError {
    fn from(err: MgwError) -> Self {
        let message = err.to_string();
        let kind = err.kind();
        match err {
            MgwError::AmbiguousItem { candidates, .. } => ExError::new(kind)
                .with_message(message)
                .with_candidates(candidates),
            MgwError::Persistence { op, .. } => {
                ExError::new(kind).with_op(op).with_message(message)
            }
            _ => ExError::new(kind).with_message(message),
        }
    }
}

/// Conversion from serde_json::Error to MgwError
impl From<serde_json::Error> for MgwError {
    fn from(err: serde_json::Error) -> Self {
        MgwError::Serialization {
            message: err.to_string(),
        }
    }
}
