//! Sponsor batch construction and hand-off verification.
//!
//! A sponsored transaction carries a noop placeholder at message index 0
//! naming the fee payer, followed by the user's messages re-bound to the
//! principal their effects are attributed to. The batch is homogeneous:
//! one message variant per transaction.

use crate::error::{GnoError, GnoResult};
use crate::transaction::input;
use gno_rust_sdk_types::msg::MsgNoop;
use gno_rust_sdk_types::{Address, Msg, Tx};

/// Build the ordered message batch for a sponsored transaction.
///
/// `noop_caller` is the account that will sign for fees and lands in the
/// placeholder at index 0. `sender` is the principal every user message
/// is re-bound to.
///
/// Homogeneity is checked across the whole batch before any per-message
/// validation, so a mixed batch is rejected regardless of whether its
/// messages are individually valid.
///
/// # Errors
///
/// Returns [`GnoError::NoMessages`] on an empty batch,
/// [`GnoError::MixedMessageTypes`] when variants differ,
/// [`GnoError::UnsupportedMsgType`] for caller-supplied noops, and each
/// descriptor's own validation errors.
pub fn build_sponsor_batch(
    noop_caller: Address,
    sender: Address,
    msgs: Vec<input::Msg>,
) -> GnoResult<Vec<Msg>> {
    let first = match msgs.first() {
        Some(msg) => msg.kind(),
        None => return Err(GnoError::NoMessages),
    };
    for msg in &msgs {
        if msg.kind() != first {
            return Err(GnoError::MixedMessageTypes {
                expected: first,
                found: msg.kind(),
            });
        }
    }

    let mut batch = Vec::with_capacity(msgs.len() + 1);
    batch.push(Msg::Noop(MsgNoop {
        caller: noop_caller,
    }));
    for msg in msgs {
        if let input::Msg::Noop = msg {
            return Err(GnoError::UnsupportedMsgType { kind: msg.kind() });
        }
        msg.validate()?;
        batch.push(msg.into_msg(sender)?);
    }
    Ok(batch)
}

/// Check that a transaction handed off for sponsored broadcast is usable:
/// it carries messages, at least one signature from the sponsoree, and
/// the noop marker at index 0.
///
/// # Errors
///
/// Returns [`GnoError::NoMessages`], [`GnoError::NoSignatures`], or
/// [`GnoError::InvalidSponsorTx`], in that precedence order.
pub fn verify_sponsor_transaction(tx: &Tx) -> GnoResult<()> {
    if tx.msgs.is_empty() {
        return Err(GnoError::NoMessages);
    }
    if tx.signatures.is_empty() {
        return Err(GnoError::NoSignatures);
    }
    if !tx.is_sponsor() {
        return Err(GnoError::InvalidSponsorTx);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::input::{CallMsg, SendMsg};
    use gno_rust_sdk_types::{Coin, Fee, MsgKind, Signature};

    fn sponsor() -> Address {
        Address::from([1u8; 20])
    }

    fn sponsoree() -> Address {
        Address::from([2u8; 20])
    }

    fn call(pkg_path: &str) -> input::Msg {
        input::Msg::Call(CallMsg::new(pkg_path, "Render"))
    }

    fn test_fee() -> Fee {
        Fee::new(100_000, Coin::new("ugnot", 10_000).unwrap())
    }

    #[test]
    fn test_empty_batch_rejected() {
        match build_sponsor_batch(sponsor(), sponsoree(), Vec::new()) {
            Err(GnoError::NoMessages) => {}
            other => panic!("Expected NoMessages, got {other:?}"),
        }
    }

    #[test]
    fn test_mixed_batch_rejected() {
        let msgs = vec![
            call("gno.land/r/demo/app"),
            input::Msg::Send(SendMsg::new(sponsoree(), "1ugnot")),
        ];
        match build_sponsor_batch(sponsor(), sponsoree(), msgs) {
            Err(GnoError::MixedMessageTypes { expected, found }) => {
                assert_eq!(expected, MsgKind::Call);
                assert_eq!(found, MsgKind::Send);
            }
            other => panic!("Expected MixedMessageTypes, got {other:?}"),
        }
    }

    #[test]
    fn test_mixing_detected_before_message_validity() {
        // Both messages are individually invalid; the mix still wins.
        let msgs = vec![
            input::Msg::Call(CallMsg::new("", "")),
            input::Msg::Send(SendMsg::new(Address::ZERO, "bogus")),
        ];
        assert!(matches!(
            build_sponsor_batch(sponsor(), sponsoree(), msgs),
            Err(GnoError::MixedMessageTypes { .. })
        ));
    }

    #[test]
    fn test_invalid_message_in_homogeneous_batch() {
        let msgs = vec![call("gno.land/r/demo/app"), call("")];
        assert!(matches!(
            build_sponsor_batch(sponsor(), sponsoree(), msgs),
            Err(GnoError::EmptyPkgPath)
        ));
    }

    #[test]
    fn test_caller_supplied_noop_rejected() {
        match build_sponsor_batch(sponsor(), sponsoree(), vec![input::Msg::Noop]) {
            Err(GnoError::UnsupportedMsgType { kind }) => assert_eq!(kind, MsgKind::Noop),
            other => panic!("Expected UnsupportedMsgType, got {other:?}"),
        }
    }

    #[test]
    fn test_batch_shape() {
        let msgs = vec![call("gno.land/r/demo/app"), call("gno.land/r/demo/other")];
        let batch = build_sponsor_batch(sponsor(), sponsoree(), msgs).unwrap();

        assert_eq!(batch.len(), 3);
        match &batch[0] {
            Msg::Noop(noop) => assert_eq!(noop.caller, sponsor()),
            other => panic!("Expected Noop at index 0, got {other:?}"),
        }
        for msg in &batch[1..] {
            assert_eq!(msg.kind(), MsgKind::Call);
            assert_eq!(msg.signer(), sponsoree());
        }
    }

    #[test]
    fn test_verify_precedence() {
        let empty = Tx::new(Vec::new(), test_fee(), "");
        assert!(matches!(
            verify_sponsor_transaction(&empty),
            Err(GnoError::NoMessages)
        ));

        let batch =
            build_sponsor_batch(sponsor(), sponsoree(), vec![call("gno.land/r/demo/app")]).unwrap();
        let unsigned = Tx::new(batch, test_fee(), "");
        assert!(matches!(
            verify_sponsor_transaction(&unsigned),
            Err(GnoError::NoSignatures)
        ));

        let mut not_sponsored = Tx::new(
            vec![call("gno.land/r/demo/app").into_msg(sponsoree()).unwrap()],
            test_fee(),
            "",
        );
        not_sponsored.signatures.push(Signature::default());
        assert!(matches!(
            verify_sponsor_transaction(&not_sponsored),
            Err(GnoError::InvalidSponsorTx)
        ));

        let mut signed = Tx::new(
            build_sponsor_batch(sponsor(), sponsoree(), vec![call("gno.land/r/demo/app")])
                .unwrap(),
            test_fee(),
            "",
        );
        signed.signatures.push(Signature::default());
        assert!(verify_sponsor_transaction(&signed).is_ok());
    }
}
