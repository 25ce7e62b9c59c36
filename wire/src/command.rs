//! Command and sub-field splitting.

use crate::error::{DecodeError, LimitKind, WireResult};
use crate::limits::Limits;

/// Separates commands within one layer field.
pub const COMMAND_DELIMITER: char = ',';

/// Separates sub-fields within one command.
pub const FIELD_DELIMITER: char = ';';

/// Separates the positional fields of a data record.
pub const RECORD_DELIMITER: char = '`';

/// Splits a layer field into its commands.
///
/// An empty field holds no commands. The command count is checked against
/// [`Limits::max_commands_per_field`] before anything is collected.
pub fn split_commands<'a>(data: &'a str, limits: &Limits) -> WireResult<Vec<&'a str>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let count = data.matches(COMMAND_DELIMITER).count() + 1;
    if count > limits.max_commands_per_field {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::CommandsPerField,
            limit: limits.max_commands_per_field,
            actual: count,
        });
    }
    Ok(data.split(COMMAND_DELIMITER).collect())
}

/// Splits one command into its sub-fields.
#[must_use]
pub fn split_fields(command: &str) -> Vec<&str> {
    command.split(FIELD_DELIMITER).collect()
}
