//! Request router: decode one channel call, run one store operation, map the
//! status into a response
//!
//! The operation name is decoded ONCE at the boundary into [`MethodCall`];
//! everything downstream works with the typed variant, never the raw string.

use crate::core::CredentialStore;
use crate::logger;
use crate::models::{AccountId, SecureString, StoreStatus};
use crate::utils::CredentialError;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::time::SystemTime;

/// One decoded credential operation
#[derive(Debug)]
pub enum MethodCall {
    /// Replace-or-create the password for an account
    UpsertAccountPassword {
        account: AccountId,
        password: SecureString,
    },
    /// Create a new record; duplicates surface the platform's status
    CreateAccountPassword {
        account: AccountId,
        password: SecureString,
    },
    /// Look up the password for an account
    ReadAccountPassword { account: AccountId },
    /// Update an existing record's password
    UpdateAccountPassword {
        account: AccountId,
        password: SecureString,
    },
    /// Remove the record for an account
    DeleteAccountPassword { account: AccountId },
}

/// Typed response sent back over the message channel
///
/// Exactly one of these is produced per call: a plain value, an absence
/// marker, a structured error, or the distinguished not-implemented marker
/// for unrecognized operation names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Operation outcome as a boolean (write and delete operations)
    Bool(bool),
    /// Retrieved password value (read operation)
    Value(String),
    /// No value to return; not an error (serializes as `null`)
    Absent,
    /// The operation name is not part of this bridge's surface
    NotImplemented,
    /// Structured store failure with a fixed per-operation code
    Error {
        code: &'static str,
        message: String,
    },
}

impl Serialize for Response {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Response::Bool(b) => serializer.serialize_bool(*b),
            Response::Value(v) => serializer.serialize_str(v),
            Response::Absent => serializer.serialize_none(),
            Response::NotImplemented => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("notImplemented", &true)?;
                map.end()
            }
            Response::Error { code, message } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("code", code)?;
                map.serialize_entry("message", message)?;
                map.end()
            }
        }
    }
}

/// The five recognized operations, with their fixed error vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Upsert,
    Create,
    Read,
    Update,
    Delete,
}

impl Op {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "upsertAccountPassword" => Some(Op::Upsert),
            "createAccountPassword" => Some(Op::Create),
            "readAccountPassword" => Some(Op::Read),
            "updateAccountPassword" => Some(Op::Update),
            "deleteAccountPassword" => Some(Op::Delete),
            _ => None,
        }
    }

    fn error_code(self) -> &'static str {
        match self {
            Op::Upsert => "upsert_password_error",
            Op::Create => "create_password_error",
            Op::Read => "read_password_error",
            Op::Update => "update_password_error",
            Op::Delete => "delete_password_error",
        }
    }

    /// Verb used in error messages: "error <verb> password: <status>"
    fn verb(self) -> &'static str {
        match self {
            Op::Upsert => "upserting",
            Op::Create => "creating",
            Op::Read => "reading",
            Op::Update => "updating",
            Op::Delete => "deleting",
        }
    }
}

fn op_error(op: Op, detail: impl std::fmt::Display) -> Response {
    Response::Error {
        code: op.error_code(),
        message: format!("error {} password: {}", op.verb(), detail),
    }
}

impl MethodCall {
    /// Decode an operation name plus parameter bag into a typed call
    ///
    /// An unrecognized name yields `Err(Response::NotImplemented)` and must
    /// not touch the store. A recognized name with missing or invalid
    /// parameters yields that operation's structured error, also without
    /// touching the store.
    pub fn decode(name: &str, args: &Value) -> Result<MethodCall, Response> {
        let op = Op::from_name(name).ok_or(Response::NotImplemented)?;

        let account = match args.get("account").and_then(Value::as_str) {
            Some(raw) => AccountId::new(raw).map_err(|e| op_error(op, e))?,
            None => return Err(op_error(op, "missing parameter 'account'")),
        };

        let password = |args: &Value| -> Result<SecureString, Response> {
            match args.get("password").and_then(Value::as_str) {
                Some(raw) => Ok(SecureString::new(raw)),
                None => Err(op_error(op, "missing parameter 'password'")),
            }
        };

        Ok(match op {
            Op::Upsert => MethodCall::UpsertAccountPassword {
                account,
                password: password(args)?,
            },
            Op::Create => MethodCall::CreateAccountPassword {
                account,
                password: password(args)?,
            },
            Op::Read => MethodCall::ReadAccountPassword { account },
            Op::Update => MethodCall::UpdateAccountPassword {
                account,
                password: password(args)?,
            },
            Op::Delete => MethodCall::DeleteAccountPassword { account },
        })
    }

    fn account(&self) -> &AccountId {
        match self {
            MethodCall::UpsertAccountPassword { account, .. }
            | MethodCall::CreateAccountPassword { account, .. }
            | MethodCall::ReadAccountPassword { account }
            | MethodCall::UpdateAccountPassword { account, .. }
            | MethodCall::DeleteAccountPassword { account } => account,
        }
    }
}

/// Handle one channel call end to end: decode, dispatch, map
pub async fn route(store: &dyn CredentialStore, name: &str, args: &Value) -> Response {
    let call = match MethodCall::decode(name, args) {
        Ok(call) => call,
        Err(Response::NotImplemented) => {
            logger::log_warn(&format!("route: unrecognized operation '{}'", name));
            return Response::NotImplemented;
        }
        Err(response) => {
            logger::log_warn(&format!("route: {}: invalid parameters", name));
            return response;
        }
    };

    let start = SystemTime::now();
    let account = call.account().clone();
    let response = dispatch(store, call).await;

    let elapsed_ms = start.elapsed().unwrap_or_default().as_millis();
    match &response {
        Response::Error { code, message } => logger::log_error(&format!(
            "{}: account='{}' FAILED {}ms [{}] {}",
            name, account, elapsed_ms, code, message
        )),
        _ => logger::log_info(&format!(
            "{}: account='{}' OK {}ms",
            name, account, elapsed_ms
        )),
    }

    response
}

/// Run a decoded call against the store and classify its status
pub async fn dispatch(store: &dyn CredentialStore, call: MethodCall) -> Response {
    match call {
        MethodCall::UpsertAccountPassword { account, password } => {
            map_write(store.upsert(&account, &password).await, Op::Upsert)
        }
        MethodCall::CreateAccountPassword { account, password } => {
            map_write(store.create(&account, &password).await, Op::Create)
        }
        MethodCall::ReadAccountPassword { account } => match store.read(&account).await {
            Ok((status, value)) => map_read(status, value),
            Err(e) => op_error(Op::Read, e),
        },
        MethodCall::UpdateAccountPassword { account, password } => {
            map_write(store.update(&account, &password).await, Op::Update)
        }
        MethodCall::DeleteAccountPassword { account } => match store.delete(&account).await {
            Ok(status) if status == StoreStatus::OK || status == StoreStatus::ITEM_NOT_FOUND => {
                Response::Bool(status == StoreStatus::OK)
            }
            Ok(status) => op_error(Op::Delete, status),
            Err(e) => op_error(Op::Delete, e),
        },
    }
}

/// Status mapping shared by upsert/create/update
///
/// Ok means success, user-canceled is a normal negative outcome, everything
/// else (including not-found on update and duplicate on create) is surfaced
/// as a structured error carrying the raw status.
fn map_write(result: Result<StoreStatus, CredentialError>, op: Op) -> Response {
    match result {
        Ok(status) if status == StoreStatus::OK || status == StoreStatus::USER_CANCELED => {
            Response::Bool(status == StoreStatus::OK)
        }
        Ok(status) => op_error(op, status),
        Err(e) => op_error(op, e),
    }
}

/// An ok status with no value maps to absent, matching not-found; the store
/// is allowed to report ok without producing a payload.
fn map_read(status: StoreStatus, value: Option<SecureString>) -> Response {
    if status == StoreStatus::OK {
        match value {
            Some(password) => Response::Value(password.as_str().to_string()),
            None => Response::Absent,
        }
    } else if status == StoreStatus::ITEM_NOT_FOUND || status == StoreStatus::USER_CANCELED {
        Response::Absent
    } else {
        op_error(Op::Read, status)
    }
}
