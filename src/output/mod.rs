//! Envelopes for nutrilog's JSON output.
//!
//! Every command (`init`, `profile`, `meal`, `show`, `analytics`,
//! `recommend`, `config`, `clear`) prints exactly one envelope on stdout,
//! with `command` set to the top-level command name. Failures go to stderr
//! through [`error`] with code `general_error`. `--human` swaps the envelope
//! for the renderers in [`human`].

pub mod human;

use serde_json::{Value, json};

/// `{"status":"ok","command":..,"data":..,"error":null}`
pub fn success(command: &str, data: Value) -> Value {
    json!({
        "status": "ok",
        "command": command,
        "data": data,
        "error": null
    })
}

/// `{"status":"error","command":..,"data":null,"error":{"code":..,"message":..}}`
pub fn error(command: &str, code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "command": command,
        "data": null,
        "error": {
            "code": code,
            "message": message
        }
    })
}
