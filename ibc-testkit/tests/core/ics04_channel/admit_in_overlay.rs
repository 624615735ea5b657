use std::sync::Arc;
use std::thread;

use ibc_core::channel::config::AdmissionConfig;
use ibc_core::channel::types::channel::{Counterparty, Order, State};
use ibc_core::channel::types::error::PacketError;
use ibc_core::channel::types::msgs::MsgRecvPacket;
use ibc_core::channel::types::packet::{Packet, Receipt};
use ibc_core::handler::types::error::{ContextError, ModuleError};
use ibc_core::handler::types::events::{IbcEvent, MessageEvent};
use ibc_core::host::types::identifiers::{ChannelId, ClientId, ConnectionId, Sequence};
use ibc_core::host::types::path::{ReceiptPath, SeqRecvPath};
use ibc_core::host::ValidationContext;
use ibc_testkit::context::MockContext;
use ibc_testkit::fixtures::core::channel::{
    dummy_channel_end, dummy_connection_end, mock_admission_config, transfer_port, PacketConfig,
};
use ibc_testkit::relayer::context::RelayerContext;
use ibc_testkit::testapp::ibc::applications::mock::{MockApp, MOCK_MODULE_NAME};
use parking_lot::Mutex;
use rstest::*;
use test_log::test;

/// Chain B after chain A committed `packet` and B learned A's root. The
/// returned message proves the packet's commitment.
fn setup(ordering: Order, packet: Packet) -> (MockContext, AdmissionConfig, MsgRecvPacket) {
    let client_id_on_b = ClientId::new("07-tendermint", 0).expect("no error");
    let config = mock_admission_config();

    let ctx_a = MockContext::default();
    let prefix_on_a = ctx_a.ibc_store().commitment_prefix();

    let ctx_b = MockContext::default()
        .with_connection(
            ConnectionId::zero(),
            dummy_connection_end(client_id_on_b.clone(), prefix_on_a),
        )
        .with_channel(
            transfer_port(),
            ChannelId::zero(),
            dummy_channel_end(
                State::Open,
                ordering,
                Counterparty::new(transfer_port(), Some(ChannelId::new(1))),
            ),
        )
        .with_recv_sequence(transfer_port(), ChannelId::zero(), 1.into());

    let mut relayer = RelayerContext::new(ctx_a, ctx_b);
    relayer.send_packet_on_a(config.committer(), &packet);
    let proof_height = relayer.update_client_on_b(&client_id_on_b);
    let msg = relayer.build_msg_recv_packet(packet, proof_height);

    let (_, ctx_b) = relayer.into_contexts();
    (ctx_b, config, msg)
}

fn packet(seq: u64) -> Packet {
    PacketConfig::builder().seq_on_a(seq.into()).build()
}

fn receipt(ctx: &MockContext, seq: u64) -> Receipt {
    ctx.ibc_store()
        .get_packet_receipt(&ReceiptPath::new(
            &transfer_port(),
            &ChannelId::zero(),
            seq.into(),
        ))
        .expect("no error")
}

fn next_sequence_recv(ctx: &MockContext) -> Sequence {
    ctx.ibc_store()
        .get_next_sequence_recv(&SeqRecvPath::new(&transfer_port(), &ChannelId::zero()))
        .expect("no error")
}

#[test]
fn rejected_packet_leaves_no_trace() {
    let (mut ctx, config, msg) = setup(Order::Unordered, packet(1));
    let height_before = ctx.latest_height();

    let rejecting = MockApp::rejecting("insufficient funds");
    let res = ctx.deliver_in_overlay(&config, msg.clone(), |ctx, admitted| {
        rejecting.on_recv_packet(ctx, admitted)
    });

    let expected: ContextError = ModuleError::Callback {
        description: "insufficient funds".to_string(),
    }
    .into();
    assert_eq!(res, Err(expected.clone()));
    assert_eq!(receipt(&ctx, 1), Receipt::None);
    assert!(ctx.get_events().is_empty());
    assert!(ctx.get_logs().is_empty());
    assert_eq!(ctx.latest_height(), height_before);

    // the same message may be submitted again, with the same outcome
    let res = ctx.deliver_in_overlay(&config, msg.clone(), |ctx, admitted| {
        rejecting.on_recv_packet(ctx, admitted)
    });
    assert_eq!(res, Err(expected));

    let app = MockApp::default();
    let admitted = ctx
        .deliver_in_overlay(&config, msg, |ctx, admitted| app.on_recv_packet(ctx, admitted))
        .expect("admitted");

    assert_eq!(admitted.packet, packet(1));
    assert_eq!(receipt(&ctx, 1), Receipt::Ok);
    assert!(matches!(
        ctx.get_events().as_slice(),
        [
            IbcEvent::Message(MessageEvent::Channel),
            IbcEvent::ReceivePacket(_),
            IbcEvent::Message(MessageEvent::Module(name)),
        ] if name == MOCK_MODULE_NAME
    ));
    assert_eq!(
        ctx.get_logs(),
        vec!["success: packet receive", "mock: received packet 1"]
    );
    assert_eq!(ctx.latest_height(), height_before.increment());
}

#[test]
fn rejected_ordered_packet_keeps_next_sequence_recv() {
    let (mut ctx, config, msg) = setup(Order::Ordered, packet(1));

    let rejecting = MockApp::rejecting("bad denomination");
    let res = ctx.deliver_in_overlay(&config, msg.clone(), |ctx, admitted| {
        rejecting.on_recv_packet(ctx, admitted)
    });

    assert!(res.is_err());
    assert_eq!(next_sequence_recv(&ctx), Sequence::from(1));

    let app = MockApp::default();
    ctx.deliver_in_overlay(&config, msg, |ctx, admitted| app.on_recv_packet(ctx, admitted))
        .expect("admitted");

    assert_eq!(next_sequence_recv(&ctx), Sequence::from(2));
}

#[test]
fn failed_admission_skips_the_application() {
    let (mut ctx, config, mut msg) = setup(Order::Unordered, packet(1));
    msg.packet.data = b"forged data".to_vec();

    let mut invoked = false;
    let res = ctx.deliver_in_overlay(&config, msg, |_, _| {
        invoked = true;
        Ok(())
    });

    assert!(res.is_err());
    assert!(!invoked);
    assert!(ctx.get_events().is_empty());
    assert!(ctx.get_logs().is_empty());
}

#[rstest]
#[case::two(2)]
#[case::eight(8)]
#[test_log::test]
fn concurrent_deliveries_admit_once(#[case] threads: usize) {
    let (ctx, config, msg) = setup(Order::Unordered, packet(3));
    let ctx = Arc::new(Mutex::new(ctx));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let ctx = Arc::clone(&ctx);
            let config = config.clone();
            let msg = msg.clone();
            thread::spawn(move || {
                let app = MockApp::default();
                let mut guard = ctx.lock();
                guard.deliver_in_overlay(&config, msg, |ctx, admitted| {
                    app.on_recv_packet(ctx, admitted)
                })
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread panicked"))
        .collect();

    assert_eq!(results.iter().filter(|res| res.is_ok()).count(), 1);
    for res in results.iter().filter(|res| res.is_err()) {
        assert_eq!(
            res,
            &Err(PacketError::PacketAlreadyReceived {
                sequence: 3.into()
            }
            .into())
        );
    }

    let ctx = ctx.lock();
    assert_eq!(receipt(&ctx, 3), Receipt::Ok);
    assert_eq!(ctx.get_logs().len(), 2);
}
