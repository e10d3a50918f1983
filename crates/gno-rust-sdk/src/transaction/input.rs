//! User-facing message descriptors.
//!
//! Descriptors carry raw caller input: string coin amounts, optional
//! packages, no sender. [`Msg::validate`] applies each variant's
//! structural rules before any network access, and [`Msg::into_msg`]
//! binds the effective sender and produces the canonical network message.

use crate::error::{GnoError, GnoResult};
use gno_rust_sdk_types::msg::{MsgAddPackage, MsgCall, MsgNoop, MsgRun, MsgSend};
use gno_rust_sdk_types::{Address, Coins, MemPackage, MsgKind};

/// Describe a contract function call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallMsg {
    /// Import path of the target package.
    pub pkg_path: String,
    /// Exported function to invoke.
    pub func_name: String,
    /// Positional string arguments.
    pub args: Vec<String>,
    /// Coins to transfer alongside the call, as a coin list string.
    pub send: String,
}

impl CallMsg {
    /// Create a call descriptor with no arguments and nothing sent.
    pub fn new(pkg_path: impl Into<String>, func_name: impl Into<String>) -> Self {
        Self {
            pkg_path: pkg_path.into(),
            func_name: func_name.into(),
            args: Vec::new(),
            send: String::new(),
        }
    }

    /// Sets the positional arguments.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Sets the coins transferred alongside the call.
    pub fn with_send(mut self, send: impl Into<String>) -> Self {
        self.send = send.into();
        self
    }
}

/// Describe a coin transfer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SendMsg {
    /// Destination account.
    pub to_address: Address,
    /// Coins to transfer, as a coin list string.
    pub send: String,
}

impl SendMsg {
    /// Create a send descriptor.
    pub fn new(to_address: Address, send: impl Into<String>) -> Self {
        Self {
            to_address,
            send: send.into(),
        }
    }
}

/// Describe a one-shot script execution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMsg {
    /// Script package; absent counts as empty.
    pub package: Option<MemPackage>,
    /// Coins to transfer alongside the execution, as a coin list string.
    pub send: String,
}

impl RunMsg {
    /// Create a run descriptor with nothing sent.
    pub fn new(package: MemPackage) -> Self {
        Self {
            package: Some(package),
            send: String::new(),
        }
    }

    /// Sets the coins transferred alongside the execution.
    pub fn with_send(mut self, send: impl Into<String>) -> Self {
        self.send = send.into();
        self
    }
}

/// Describe a package publication.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddPackageMsg {
    /// Package to publish; absent counts as empty.
    pub package: Option<MemPackage>,
    /// Coins deposited with the publication, as a coin list string.
    pub deposit: String,
}

impl AddPackageMsg {
    /// Create a publication descriptor with no deposit.
    pub fn new(package: MemPackage) -> Self {
        Self {
            package: Some(package),
            deposit: String::new(),
        }
    }

    /// Sets the coins deposited with the publication.
    pub fn with_deposit(mut self, deposit: impl Into<String>) -> Self {
        self.deposit = deposit.into();
        self
    }
}

/// A message descriptor of any variant, for APIs that accept a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// See [`CallMsg`].
    Call(CallMsg),
    /// See [`SendMsg`].
    Send(SendMsg),
    /// See [`RunMsg`].
    Run(RunMsg),
    /// See [`AddPackageMsg`].
    AddPackage(AddPackageMsg),
    /// Sponsorship placeholder; built internally, never accepted from
    /// callers.
    Noop,
}

impl Msg {
    /// The variant's discriminant.
    pub fn kind(&self) -> MsgKind {
        match self {
            Msg::Call(_) => MsgKind::Call,
            Msg::Send(_) => MsgKind::Send,
            Msg::Run(_) => MsgKind::Run,
            Msg::AddPackage(_) => MsgKind::AddPackage,
            Msg::Noop => MsgKind::Noop,
        }
    }

    /// Apply the variant's structural rules.
    ///
    /// Pure over the descriptor's own fields; network state is never
    /// consulted.
    ///
    /// # Errors
    ///
    /// Returns the [`GnoError`] validation variant matching the first
    /// rule the descriptor breaks.
    pub fn validate(&self) -> GnoResult<()> {
        match self {
            Msg::Call(msg) => {
                if msg.pkg_path.is_empty() {
                    return Err(GnoError::EmptyPkgPath);
                }
                if msg.func_name.is_empty() {
                    return Err(GnoError::EmptyFuncName);
                }
                Ok(())
            }
            Msg::Send(msg) => {
                if msg.to_address.is_zero() {
                    return Err(GnoError::InvalidToAddress {
                        address: msg.to_address.to_string(),
                    });
                }
                parse_amount(&msg.send)?;
                Ok(())
            }
            Msg::Run(msg) => match &msg.package {
                Some(package) if !package.is_empty() => Ok(()),
                _ => Err(GnoError::EmptyPackage),
            },
            Msg::AddPackage(msg) => match &msg.package {
                Some(package) if !package.is_empty() => Ok(()),
                _ => Err(GnoError::EmptyPackage),
            },
            Msg::Noop => Ok(()),
        }
    }

    /// Parse the variant's transfer (or deposit) amount.
    ///
    /// # Errors
    ///
    /// Returns [`GnoError::InvalidAmount`] when the amount string does
    /// not parse as coins.
    pub fn coins(&self) -> GnoResult<Coins> {
        match self {
            Msg::Call(msg) => parse_amount(&msg.send),
            Msg::Send(msg) => parse_amount(&msg.send),
            Msg::Run(msg) => parse_amount(&msg.send),
            Msg::AddPackage(msg) => parse_amount(&msg.deposit),
            Msg::Noop => Ok(Coins::empty()),
        }
    }

    /// Bind `sender` as the effective principal and convert to the
    /// canonical network message, parsing the amount field along the way.
    ///
    /// # Errors
    ///
    /// Returns [`GnoError::InvalidAmount`] on unparseable amounts and
    /// [`GnoError::EmptyPackage`] when a run or publication descriptor
    /// carries no package.
    pub fn into_msg(self, sender: Address) -> GnoResult<gno_rust_sdk_types::Msg> {
        use gno_rust_sdk_types::Msg as Canonical;

        match self {
            Msg::Call(msg) => Ok(Canonical::Call(MsgCall {
                caller: sender,
                send: parse_amount(&msg.send)?,
                pkg_path: msg.pkg_path,
                func: msg.func_name,
                args: msg.args,
            })),
            Msg::Send(msg) => Ok(Canonical::Send(MsgSend {
                from_address: sender,
                to_address: msg.to_address,
                amount: parse_amount(&msg.send)?,
            })),
            Msg::Run(msg) => {
                let send = parse_amount(&msg.send)?;
                let mut package = msg.package.ok_or(GnoError::EmptyPackage)?;
                // One-shot scripts always execute as package "main" at the
                // empty path; this is a protocol rule, not configurable.
                package.name = "main".to_string();
                package.path = String::new();
                Ok(Canonical::Run(MsgRun {
                    caller: sender,
                    send,
                    package,
                }))
            }
            Msg::AddPackage(msg) => {
                let deposit = parse_amount(&msg.deposit)?;
                let package = msg.package.ok_or(GnoError::EmptyPackage)?;
                Ok(Canonical::AddPackage(MsgAddPackage {
                    creator: sender,
                    package,
                    deposit,
                }))
            }
            Msg::Noop => Ok(Canonical::Noop(MsgNoop { caller: sender })),
        }
    }
}

impl From<CallMsg> for Msg {
    fn from(msg: CallMsg) -> Self {
        Msg::Call(msg)
    }
}

impl From<SendMsg> for Msg {
    fn from(msg: SendMsg) -> Self {
        Msg::Send(msg)
    }
}

impl From<RunMsg> for Msg {
    fn from(msg: RunMsg) -> Self {
        Msg::Run(msg)
    }
}

impl From<AddPackageMsg> for Msg {
    fn from(msg: AddPackageMsg) -> Self {
        Msg::AddPackage(msg)
    }
}

fn parse_amount(value: &str) -> GnoResult<Coins> {
    Coins::parse(value).map_err(|source| GnoError::InvalidAmount {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gno_rust_sdk_types::{MemFile, Msg as Canonical};

    fn sender() -> Address {
        "g1jg8mtutu9khhfwc4nxmuhcpftf0pajdhfvsqf5".parse().unwrap()
    }

    fn script_package() -> MemPackage {
        MemPackage::new(
            "script",
            "gno.land/r/unused",
            vec![MemFile::new("main.gno", "package main\nfunc main() {}")],
        )
    }

    #[test]
    fn test_call_validation() {
        let missing_path = Msg::Call(CallMsg::new("", "Render"));
        assert!(matches!(
            missing_path.validate(),
            Err(GnoError::EmptyPkgPath)
        ));

        let missing_func = Msg::Call(CallMsg::new("gno.land/r/demo/app", ""));
        assert!(matches!(
            missing_func.validate(),
            Err(GnoError::EmptyFuncName)
        ));

        let valid = Msg::Call(CallMsg::new("gno.land/r/demo/app", "Render"));
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_send_rejects_zero_address() {
        let msg = Msg::Send(SendMsg::new(Address::ZERO, "1ugnot"));
        match msg.validate() {
            Err(GnoError::InvalidToAddress { address }) => {
                assert!(address.starts_with("g1"));
            }
            other => panic!("Expected InvalidToAddress, got {other:?}"),
        }
    }

    #[test]
    fn test_send_rejects_bad_amount() {
        let msg = Msg::Send(SendMsg::new(sender(), "not-coins"));
        match msg.validate() {
            Err(GnoError::InvalidAmount { value, .. }) => assert_eq!(value, "not-coins"),
            other => panic!("Expected InvalidAmount, got {other:?}"),
        }
    }

    #[test]
    fn test_package_variants_require_files() {
        let absent = Msg::Run(RunMsg {
            package: None,
            send: String::new(),
        });
        assert!(matches!(absent.validate(), Err(GnoError::EmptyPackage)));

        let no_files = Msg::AddPackage(AddPackageMsg::new(MemPackage::default()));
        assert!(matches!(no_files.validate(), Err(GnoError::EmptyPackage)));

        let ok = Msg::Run(RunMsg::new(script_package()));
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_coins_reads_the_variant_amount_field() {
        let call = Msg::Call(CallMsg::new("p", "F").with_send("100ugnot"));
        assert_eq!(call.coins().unwrap().amount_of("ugnot"), 100);

        let deposit = Msg::AddPackage(AddPackageMsg::new(script_package()).with_deposit("5uatom"));
        assert_eq!(deposit.coins().unwrap().amount_of("uatom"), 5);

        let unset = Msg::Call(CallMsg::new("p", "F"));
        assert!(unset.coins().unwrap().is_empty());

        assert!(Msg::Noop.coins().unwrap().is_empty());
    }

    #[test]
    fn test_into_msg_binds_sender() {
        let msg = Msg::Send(SendMsg::new(sender(), "1ugnot"));
        let bound = msg.into_msg(sender()).unwrap();
        assert_eq!(bound.signer(), sender());
        match bound {
            Canonical::Send(send) => assert_eq!(send.amount.amount_of("ugnot"), 1),
            other => panic!("Expected canonical Send, got {other:?}"),
        }
    }

    #[test]
    fn test_run_conversion_normalizes_package_identity() {
        let msg = Msg::Run(RunMsg::new(script_package()));
        match msg.into_msg(sender()).unwrap() {
            Canonical::Run(run) => {
                assert_eq!(run.package.name, "main");
                assert_eq!(run.package.path, "");
                assert_eq!(run.package.files.len(), 1);
            }
            other => panic!("Expected canonical Run, got {other:?}"),
        }
    }

    #[test]
    fn test_add_package_conversion_keeps_package_identity() {
        let msg = Msg::AddPackage(AddPackageMsg::new(script_package()));
        match msg.into_msg(sender()).unwrap() {
            Canonical::AddPackage(add) => {
                assert_eq!(add.package.name, "script");
                assert_eq!(add.package.path, "gno.land/r/unused");
            }
            other => panic!("Expected canonical AddPackage, got {other:?}"),
        }
    }

    #[test]
    fn test_noop_binds_caller() {
        assert!(Msg::Noop.validate().is_ok());
        match Msg::Noop.into_msg(sender()).unwrap() {
            Canonical::Noop(noop) => assert_eq!(noop.caller, sender()),
            other => panic!("Expected canonical Noop, got {other:?}"),
        }
    }
}
