//! Canonical network messages carried by a transaction.

use crate::address::Address;
use crate::coin::Coins;
use crate::package::MemPackage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message discriminant, used for batch homogeneity checks and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MsgKind {
    /// Contract function invocation.
    Call,
    /// Value transfer between accounts.
    Send,
    /// Ephemeral script execution.
    Run,
    /// Persistent package publication.
    AddPackage,
    /// Sponsorship placeholder with no effect.
    Noop,
}

impl fmt::Display for MsgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MsgKind::Call => "call",
            MsgKind::Send => "send",
            MsgKind::Run => "run",
            MsgKind::AddPackage => "add_package",
            MsgKind::Noop => "noop",
        };
        write!(f, "{name}")
    }
}

/// Invoke an exported function on a published package.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCall {
    /// Account the call is attributed to.
    pub caller: Address,
    /// Coins transferred alongside the call.
    pub send: Coins,
    /// Import path of the target package.
    pub pkg_path: String,
    /// Exported function name.
    pub func: String,
    /// Positional string arguments.
    pub args: Vec<String>,
}

/// Transfer coins from one account to another.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSend {
    /// Source account.
    pub from_address: Address,
    /// Destination account.
    pub to_address: Address,
    /// Coins to transfer.
    pub amount: Coins,
}

/// Execute an in-memory package as a one-shot script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgRun {
    /// Account the execution is attributed to.
    pub caller: Address,
    /// Coins transferred alongside the execution.
    pub send: Coins,
    /// Script package to execute.
    pub package: MemPackage,
}

/// Publish an in-memory package under its import path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgAddPackage {
    /// Account publishing the package.
    pub creator: Address,
    /// Package to publish.
    pub package: MemPackage,
    /// Coins deposited with the publication.
    pub deposit: Coins,
}

/// Placeholder marking a transaction as sponsorship-eligible.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgNoop {
    /// Account the placeholder is attributed to, the fee payer.
    pub caller: Address,
}

/// The closed set of messages understood by the chain.
///
/// The `@type` tag selects the variant on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum Msg {
    /// See [`MsgCall`].
    #[serde(rename = "/vm.m_call")]
    Call(MsgCall),
    /// See [`MsgSend`].
    #[serde(rename = "/bank.MsgSend")]
    Send(MsgSend),
    /// See [`MsgRun`].
    #[serde(rename = "/vm.m_run")]
    Run(MsgRun),
    /// See [`MsgAddPackage`].
    #[serde(rename = "/vm.m_addpkg")]
    AddPackage(MsgAddPackage),
    /// See [`MsgNoop`].
    #[serde(rename = "/vm.m_noop")]
    Noop(MsgNoop),
}

impl Msg {
    /// The variant's discriminant.
    pub fn kind(&self) -> MsgKind {
        match self {
            Msg::Call(_) => MsgKind::Call,
            Msg::Send(_) => MsgKind::Send,
            Msg::Run(_) => MsgKind::Run,
            Msg::AddPackage(_) => MsgKind::AddPackage,
            Msg::Noop(_) => MsgKind::Noop,
        }
    }

    /// The account whose signature authorizes this message.
    pub fn signer(&self) -> Address {
        match self {
            Msg::Call(msg) => msg.caller,
            Msg::Send(msg) => msg.from_address,
            Msg::Run(msg) => msg.caller,
            Msg::AddPackage(msg) => msg.creator,
            Msg::Noop(msg) => msg.caller,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coin::Coins;

    fn test_address() -> Address {
        "g1jg8mtutu9khhfwc4nxmuhcpftf0pajdhfvsqf5".parse().unwrap()
    }

    #[test]
    fn test_call_wire_tag() {
        let msg = Msg::Call(MsgCall {
            caller: test_address(),
            send: Coins::parse("100ugnot").unwrap(),
            pkg_path: "gno.land/r/demo/app".to_string(),
            func: "Render".to_string(),
            args: vec![String::new()],
        });
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""@type":"/vm.m_call""#));
        assert!(json.contains(r#""pkg_path":"gno.land/r/demo/app""#));

        let back: Msg = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_send_wire_tag() {
        let msg = Msg::Send(MsgSend {
            from_address: test_address(),
            to_address: test_address(),
            amount: Coins::parse("1ugnot").unwrap(),
        });
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""@type":"/bank.MsgSend""#));
        assert!(json.contains(r#""amount":"1ugnot""#));
    }

    #[test]
    fn test_tag_selects_variant() {
        let json = format!(
            r#"{{"@type":"/vm.m_noop","caller":"{}"}}"#,
            test_address()
        );
        let msg: Msg = serde_json::from_str(&json).unwrap();
        assert_eq!(msg.kind(), MsgKind::Noop);
        assert_eq!(msg.signer(), test_address());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(MsgKind::Call.to_string(), "call");
        assert_eq!(MsgKind::AddPackage.to_string(), "add_package");
        assert_eq!(MsgKind::Noop.to_string(), "noop");
    }
}
