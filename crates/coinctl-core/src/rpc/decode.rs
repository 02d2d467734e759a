//! Decoders from a JSON-RPC `result` value to typed values.
//!
//! Scalar mapping:
//!
//! | target            | accepted JSON                         |
//! |-------------------|---------------------------------------|
//! | `f64`             | any number                            |
//! | `u64`/`u32`/`i32` | integral number within the type range |
//! | `bool`            | `true` / `false`                      |
//! | `String`          | string                                |
//! | `()`              | anything                              |
//!
//! Nothing is truncated or defaulted: a fractional number where an integer
//! is expected, or a missing record field, is an error.

use serde_json::{Map, Value};

use crate::error::{json_type_name, CoreError, DecodeError};
use crate::types::{AccountInfo, AddressInfo, LabelInfo, ServerInfo, ValidatedAddressInfo};

use super::protocol::{expect_array, expect_object};

/// Field name used when the whole `result` is a scalar.
const RESULT: &str = "result";

// ==============================================================================
// Scalar Results
// ==============================================================================

pub fn parse_f64(value: Value) -> Result<f64, CoreError> {
    Ok(number_field(Some(&value), RESULT)?)
}

pub fn parse_u64(value: Value) -> Result<u64, CoreError> {
    Ok(integer_field(Some(&value), RESULT)?)
}

pub fn parse_u32(value: Value) -> Result<u32, CoreError> {
    Ok(integer_field(Some(&value), RESULT)?)
}

pub fn parse_bool(value: Value) -> Result<bool, CoreError> {
    Ok(bool_field(Some(&value), RESULT)?)
}

pub fn parse_string(value: Value) -> Result<String, CoreError> {
    Ok(string_field(Some(&value), RESULT)?)
}

/// For methods whose result carries no information.
pub fn parse_unit(_value: Value) -> Result<(), CoreError> {
    Ok(())
}

// ==============================================================================
// Lists
// ==============================================================================

/// Decode every element of an array result, keeping the original order.
pub fn parse_list<T>(
    value: Value,
    element: fn(Value) -> Result<T, CoreError>,
) -> Result<Vec<T>, CoreError> {
    expect_array(value)?.into_iter().map(element).collect()
}

pub fn parse_string_list(value: Value) -> Result<Vec<String>, CoreError> {
    parse_list(value, parse_string)
}

pub fn parse_address_infos(value: Value) -> Result<Vec<AddressInfo>, CoreError> {
    parse_list(value, parse_address_info)
}

pub fn parse_label_infos(value: Value) -> Result<Vec<LabelInfo>, CoreError> {
    parse_list(value, parse_label_info)
}

pub fn parse_account_infos(value: Value) -> Result<Vec<AccountInfo>, CoreError> {
    parse_list(value, parse_account_info)
}

// ==============================================================================
// Records
// ==============================================================================

pub fn parse_address_info(value: Value) -> Result<AddressInfo, CoreError> {
    let fields = expect_object(value)?;
    Ok(AddressInfo {
        address: string_field(fields.get("address"), "address")?,
        label: string_field(fields.get("label"), "label")?,
        amount: number_field(fields.get("amount"), "amount")?,
        confirmations: integer_field(fields.get("confirmations"), "confirmations")?,
    })
}

pub fn parse_label_info(value: Value) -> Result<LabelInfo, CoreError> {
    let fields = expect_object(value)?;
    Ok(LabelInfo {
        label: string_field(fields.get("label"), "label")?,
        amount: number_field(fields.get("amount"), "amount")?,
        confirmations: integer_field(fields.get("confirmations"), "confirmations")?,
    })
}

pub fn parse_account_info(value: Value) -> Result<AccountInfo, CoreError> {
    let fields = expect_object(value)?;
    Ok(AccountInfo {
        account: string_field(fields.get("account"), "account")?,
        amount: number_field(fields.get("amount"), "amount")?,
        confirmations: integer_field(fields.get("confirmations"), "confirmations")?,
    })
}

pub fn parse_server_info(value: Value) -> Result<ServerInfo, CoreError> {
    let fields = expect_object(value)?;
    Ok(ServerInfo {
        version: version_field(&fields)?,
        balance: number_field(fields.get("balance"), "balance")?,
        blocks: integer_field(fields.get("blocks"), "blocks")?,
        connections: integer_field(fields.get("connections"), "connections")?,
        is_generating: bool_field(fields.get("generate"), "generate")?,
        used_cpus: integer_field(fields.get("genproclimit"), "genproclimit")?,
        difficulty: number_field(fields.get("difficulty"), "difficulty")?,
        hashes_per_second: integer_field(fields.get("hashespersec"), "hashespersec")?,
    })
}

/// `address` and `ismine` are only read once `isvalid` is known to be true;
/// the daemon omits them for invalid addresses.
pub fn parse_validated_address(value: Value) -> Result<ValidatedAddressInfo, CoreError> {
    let fields = expect_object(value)?;
    if !bool_field(fields.get("isvalid"), "isvalid")? {
        return Ok(ValidatedAddressInfo::Invalid);
    }

    Ok(ValidatedAddressInfo::Valid {
        address: string_field(fields.get("address"), "address")?,
        is_mine: bool_field(fields.get("ismine"), "ismine")?,
    })
}

// ==============================================================================
// Field Helpers
// ==============================================================================

fn wrong_type(field: &'static str, expected: &'static str, found: &Value) -> DecodeError {
    DecodeError::WrongType {
        field,
        expected,
        found: json_type_name(found),
    }
}

fn number_field(value: Option<&Value>, field: &'static str) -> Result<f64, DecodeError> {
    let value = value.ok_or(DecodeError::MissingField { field })?;
    value.as_f64().ok_or_else(|| wrong_type(field, "number", value))
}

fn bool_field(value: Option<&Value>, field: &'static str) -> Result<bool, DecodeError> {
    let value = value.ok_or(DecodeError::MissingField { field })?;
    value.as_bool().ok_or_else(|| wrong_type(field, "bool", value))
}

fn string_field(value: Option<&Value>, field: &'static str) -> Result<String, DecodeError> {
    let value = value.ok_or(DecodeError::MissingField { field })?;
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| wrong_type(field, "string", value))
}

// Generic integer reader behind every integral field. Unsigned JSON values
// are tried first so the full `u64` range is reachable.
fn integer_field<T>(value: Option<&Value>, field: &'static str) -> Result<T, DecodeError>
where
    T: TryFrom<i64> + TryFrom<u64>,
{
    let value = value.ok_or(DecodeError::MissingField { field })?;
    let Value::Number(n) = value else {
        return Err(wrong_type(field, "integer", value));
    };

    if let Some(u) = n.as_u64() {
        return <T as TryFrom<u64>>::try_from(u).map_err(|_| DecodeError::OutOfRange {
            field,
            value: u.to_string(),
        });
    }
    if let Some(i) = n.as_i64() {
        return <T as TryFrom<i64>>::try_from(i).map_err(|_| DecodeError::OutOfRange {
            field,
            value: i.to_string(),
        });
    }

    Err(DecodeError::WrongType {
        field,
        expected: "integer",
        found: "fractional number",
    })
}

// Older daemons report the version as a bare integer.
fn version_field(fields: &Map<String, Value>) -> Result<String, DecodeError> {
    match fields.get("version") {
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        other => string_field(other, "version"),
    }
}
