use ibc_core::channel::config::AdmissionConfig;
use ibc_core::channel::handler::Admitted;
use ibc_core::channel::types::channel::{Counterparty, Order, State};
use ibc_core::channel::types::error::{ChannelError, PacketError};
use ibc_core::channel::types::msgs::MsgRecvPacket;
use ibc_core::channel::types::packet::{Packet, Receipt};
use ibc_core::client::types::error::ClientError;
use ibc_core::client::types::Height;
use ibc_core::commitment_types::error::CommitmentError;
use ibc_core::entrypoint::validate;
use ibc_core::handler::types::error::ContextError;
use ibc_core::handler::types::events::{IbcEvent, MessageEvent};
use ibc_core::host::types::identifiers::{ChannelId, ClientId, ConnectionId, PortId, Sequence};
use ibc_core::host::types::path::{ChannelEndPath, ReceiptPath, SeqRecvPath};
use ibc_core::host::{ExecutionContext, ValidationContext};
use ibc_testkit::context::MockContext;
use ibc_testkit::fixtures::core::channel::{
    dummy_channel_end, dummy_connection_end, mock_admission_config, transfer_port, PacketConfig,
};
use ibc_testkit::fixtures::core::signer::dummy_account_id;
use ibc_testkit::relayer::context::RelayerContext;
use rstest::*;
use test_log::test;

pub struct Fixture {
    pub relayer: RelayerContext,
    pub config: AdmissionConfig,
    pub client_id_on_b: ClientId,
}

impl Fixture {
    fn ctx_b(&self) -> &MockContext {
        self.relayer.get_ctx_b()
    }

    fn ctx_b_mut(&mut self) -> &mut MockContext {
        self.relayer.get_ctx_b_mut()
    }

    /// Commits `packet` on A and records the resulting root of A on B.
    /// Returns the height at which the commitment is provable.
    fn send(&mut self, packet: &Packet) -> Height {
        self.relayer
            .send_packet_on_a(self.config.committer(), packet);
        self.relayer.update_client_on_b(&self.client_id_on_b)
    }

    fn deliver(&mut self, msg: MsgRecvPacket) -> Result<Admitted, ContextError> {
        let config = self.config.clone();
        self.ctx_b_mut().deliver(&config, msg)
    }

    fn relay(&mut self, packet: Packet) -> Result<Admitted, ContextError> {
        let proof_height = self.send(&packet);
        let msg = self.relayer.build_msg_recv_packet(packet, proof_height);
        self.deliver(msg)
    }

    fn next_sequence_recv(&self) -> Sequence {
        self.ctx_b()
            .ibc_store()
            .get_next_sequence_recv(&SeqRecvPath::new(&transfer_port(), &ChannelId::zero()))
            .expect("next sequence recv is set")
    }

    fn receipt(&self, seq: u64) -> Receipt {
        self.ctx_b()
            .ibc_store()
            .get_packet_receipt(&ReceiptPath::new(
                &transfer_port(),
                &ChannelId::zero(),
                seq.into(),
            ))
            .expect("no error")
    }
}

fn packet(seq: u64) -> Packet {
    PacketConfig::builder().seq_on_a(seq.into()).build()
}

/// Chain B holds channel (`transfer`, `channel-0`) whose counterparty is
/// (`transfer`, `channel-1`) on chain A, with `nextSequenceRecv = 1`.
fn setup(ordering: Order) -> Fixture {
    setup_with_recv_sequence(ordering, Some(1.into()))
}

fn setup_with_recv_sequence(ordering: Order, next_seq_recv: Option<Sequence>) -> Fixture {
    let client_id_on_b = ClientId::new("07-tendermint", 0).expect("no error");

    let ctx_a = MockContext::default();
    let prefix_on_a = ctx_a.ibc_store().commitment_prefix();

    let mut ctx_b = MockContext::default()
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
        );
    if let Some(seq) = next_seq_recv {
        ctx_b = ctx_b.with_recv_sequence(transfer_port(), ChannelId::zero(), seq);
    }

    Fixture {
        relayer: RelayerContext::new(ctx_a, ctx_b),
        config: mock_admission_config(),
        client_id_on_b,
    }
}

#[fixture]
fn ordered() -> Fixture {
    setup(Order::Ordered)
}

#[fixture]
fn unordered() -> Fixture {
    setup(Order::Unordered)
}

#[rstest]
fn ordered_packet_advances_next_sequence_recv(mut ordered: Fixture) {
    let proof_height = ordered.send(&packet(1));
    let msg = ordered
        .relayer
        .build_msg_recv_packet(packet(1), proof_height);

    let admitted = ordered.deliver(msg.clone()).expect("admitted");

    assert_eq!(admitted.packet, packet(1));
    assert_eq!(admitted.ordering, Order::Ordered);
    assert_eq!(admitted.connection_id, ConnectionId::zero());
    assert_eq!(ordered.next_sequence_recv(), Sequence::from(2));

    let events = ordered.ctx_b().get_events();
    assert!(matches!(
        events.as_slice(),
        [IbcEvent::Message(MessageEvent::Channel), IbcEvent::ReceivePacket(e)]
            if e.seq_on_a() == &Sequence::from(1)
                && e.channel_ordering() == &Order::Ordered
                && e.conn_id_on_b() == &ConnectionId::zero()
    ));
    assert_eq!(ordered.ctx_b().get_logs(), vec!["success: packet receive"]);

    let res = ordered.deliver(msg);

    assert_eq!(
        res,
        Err(PacketError::UnexpectedSequence {
            given: 1.into(),
            expected: 2.into(),
        }
        .into())
    );
    assert_eq!(ordered.next_sequence_recv(), Sequence::from(2));
    assert_eq!(ordered.ctx_b().get_events().len(), 2);
}

#[rstest]
fn recv_packet_fail_no_channel(mut ordered: Fixture) {
    let packet = PacketConfig::builder()
        .chan_id_on_b(ChannelId::new(7))
        .build();

    let res = ordered.relay(packet);

    assert_eq!(
        res,
        Err(ChannelError::ChannelNotFound {
            port_id: transfer_port(),
            channel_id: ChannelId::new(7),
        }
        .into())
    );
}

#[rstest]
fn proof_height_without_recorded_root(mut ordered: Fixture) {
    ordered
        .relayer
        .send_packet_on_a(ordered.config.committer(), &packet(1));
    // the client of A on B was never updated past A's new height
    let proof_height = ordered.relayer.get_ctx_a().latest_height();
    let msg = ordered
        .relayer
        .build_msg_recv_packet(packet(1), proof_height);

    let res = ordered.deliver(msg);

    assert_eq!(
        res,
        Err(ClientError::ConsensusStateNotFound {
            client_id: ordered.client_id_on_b.clone(),
            height: proof_height,
        }
        .into())
    );
    assert_eq!(ordered.next_sequence_recv(), Sequence::from(1));
}

#[rstest]
fn only_committed_sequences_are_admitted(mut unordered: Fixture) {
    for seq in 0..5 {
        unordered
            .relayer
            .send_packet_on_a(unordered.config.committer(), &packet(seq));
    }
    let proof_height = unordered.relayer.update_client_on_b(&unordered.client_id_on_b);

    // packets 5..=10 were never committed on A: relay them with the proof of
    // packet 0
    let proof_of_0 = unordered
        .relayer
        .build_msg_recv_packet(packet(0), proof_height)
        .proof_commitment_on_a;

    for seq in (0..=10).rev() {
        let msg = if seq < 5 {
            unordered
                .relayer
                .build_msg_recv_packet(packet(seq), proof_height)
        } else {
            MsgRecvPacket {
                packet: packet(seq),
                proof_commitment_on_a: proof_of_0.clone(),
                proof_height_on_a: proof_height,
                signer: dummy_account_id(),
            }
        };

        let res = unordered.deliver(msg);

        if seq < 5 {
            assert!(res.is_ok(), "packet {seq} should be admitted: {res:?}");
            assert_eq!(unordered.receipt(seq), Receipt::Ok);
        } else {
            assert!(
                matches!(
                    &res,
                    Err(ContextError::ChannelError(ChannelError::InvalidProof { sequence, .. }))
                        if *sequence == Sequence::from(seq)
                ),
                "packet {seq} should fail proof verification: {res:?}"
            );
            assert_eq!(unordered.receipt(seq), Receipt::None);
        }
    }

    // sequences do not advance on unordered channels
    assert_eq!(unordered.next_sequence_recv(), Sequence::from(1));
}

#[rstest]
fn unordered_replay_is_rejected(mut unordered: Fixture) {
    let proof_height = unordered.send(&packet(3));
    let msg = unordered
        .relayer
        .build_msg_recv_packet(packet(3), proof_height);

    let admitted = unordered.deliver(msg.clone()).expect("admitted");
    assert_eq!(admitted.ordering, Order::Unordered);
    assert_eq!(unordered.receipt(3), Receipt::Ok);

    let res = unordered.deliver(msg);

    assert_eq!(
        res,
        Err(PacketError::PacketAlreadyReceived {
            sequence: 3.into()
        }
        .into())
    );
    assert_eq!(unordered.ctx_b().get_logs().len(), 1);
}

#[rstest]
#[test_log::test]
fn ordered_sequence_must_be_next(
    mut ordered: Fixture,
    #[values(0, 1, 2, 3, 4, 5, 6, 7, 8, 9)] next_seq_recv: u64,
) {
    ordered
        .ctx_b_mut()
        .ibc_store_mut()
        .store_next_sequence_recv(
            &SeqRecvPath::new(&transfer_port(), &ChannelId::zero()),
            next_seq_recv.into(),
        )
        .expect("no error");

    let res = ordered.relay(packet(5));

    if next_seq_recv == 5 {
        assert!(res.is_ok(), "in-order packet should be admitted: {res:?}");
        assert_eq!(ordered.next_sequence_recv(), Sequence::from(6));
    } else {
        assert_eq!(
            res,
            Err(PacketError::UnexpectedSequence {
                given: 5.into(),
                expected: next_seq_recv.into(),
            }
            .into())
        );
        assert_eq!(ordered.next_sequence_recv(), Sequence::from(next_seq_recv));
    }
}

#[rstest]
fn tampered_packet_fails_before_ordering(mut ordered: Fixture) {
    let proof_height = ordered.send(&packet(1));
    let mut msg = ordered
        .relayer
        .build_msg_recv_packet(packet(1), proof_height);
    msg.packet.data = b"forged data".to_vec();

    let res = ordered.deliver(msg);

    assert_eq!(
        res,
        Err(ChannelError::InvalidProof {
            sequence: 1.into(),
            error: CommitmentError::VerificationFailure,
        }
        .into())
    );
    assert_eq!(ordered.next_sequence_recv(), Sequence::from(1));
    assert!(ordered.ctx_b().get_events().is_empty());
}

#[rstest]
fn undecodable_proof_is_an_invalid_proof(mut ordered: Fixture) {
    let proof_height = ordered.send(&packet(1));

    let msg = MsgRecvPacket::new(packet(1), vec![0xff; 8], proof_height, dummy_account_id())
        .expect("non-empty proof bytes");
    let res = ordered.deliver(msg);

    assert!(
        matches!(
            &res,
            Err(ContextError::ChannelError(ChannelError::InvalidProof {
                error: CommitmentError::DecodingFailure(_),
                ..
            }))
        ),
        "{res:?}"
    );
    assert_eq!(ordered.next_sequence_recv(), Sequence::from(1));
}

#[rstest]
#[test_log::test]
fn non_open_channel_is_rejected(
    mut ordered: Fixture,
    #[values(State::Init, State::TryOpen, State::Closed)] state: State,
) {
    ordered
        .ctx_b_mut()
        .ibc_store_mut()
        .store_channel(
            &ChannelEndPath::new(&transfer_port(), &ChannelId::zero()),
            dummy_channel_end(
                state,
                Order::Ordered,
                Counterparty::new(transfer_port(), Some(ChannelId::new(1))),
            ),
        )
        .expect("no error");

    let res = ordered.relay(packet(1));

    assert_eq!(
        res,
        Err(ChannelError::ChannelNotOpen {
            port_id: transfer_port(),
            channel_id: ChannelId::zero(),
            state,
        }
        .into())
    );
}

#[test]
fn ordered_channel_without_next_sequence_recv() {
    let mut fixture = setup_with_recv_sequence(Order::Ordered, None);

    let res = fixture.relay(packet(1));

    assert_eq!(
        res,
        Err(PacketError::MissingNextRecvSeq {
            port_id: transfer_port(),
            channel_id: ChannelId::zero(),
        }
        .into())
    );
    let seq_recv_path = SeqRecvPath::new(&transfer_port(), &ChannelId::zero());
    assert!(fixture
        .ctx_b()
        .ibc_store()
        .get_next_sequence_recv(&seq_recv_path)
        .is_err());
    assert_eq!(fixture.receipt(1), Receipt::None);
    assert!(fixture.ctx_b().get_events().is_empty());
    assert!(fixture.ctx_b().get_logs().is_empty());
}

#[rstest]
fn empty_data_does_not_bypass_channel_checks(mut ordered: Fixture) {
    let empty = |chan_id_on_b: ChannelId| {
        PacketConfig::builder()
            .chan_id_on_b(chan_id_on_b)
            .data(vec![])
            .build()
    };

    let res = ordered.relay(empty(ChannelId::new(7)));
    assert_eq!(
        res,
        Err(ChannelError::ChannelNotFound {
            port_id: transfer_port(),
            channel_id: ChannelId::new(7),
        }
        .into())
    );

    ordered
        .ctx_b_mut()
        .ibc_store_mut()
        .store_channel(
            &ChannelEndPath::new(&transfer_port(), &ChannelId::zero()),
            dummy_channel_end(
                State::Closed,
                Order::Ordered,
                Counterparty::new(transfer_port(), Some(ChannelId::new(1))),
            ),
        )
        .expect("no error");

    let res = ordered.relay(empty(ChannelId::zero()));
    assert_eq!(
        res,
        Err(ChannelError::ChannelNotOpen {
            port_id: transfer_port(),
            channel_id: ChannelId::zero(),
            state: State::Closed,
        }
        .into())
    );
}

#[rstest]
#[test_log::test]
fn proven_packet_with_empty_data_is_admitted(
    #[values(Order::Ordered, Order::Unordered)] ordering: Order,
) {
    let mut fixture = setup(ordering);
    let packet = PacketConfig::builder().data(vec![]).build();

    let admitted = fixture.relay(packet.clone()).expect("admitted");

    assert_eq!(admitted.packet, packet);
    match ordering {
        Order::Ordered => assert_eq!(fixture.next_sequence_recv(), Sequence::from(2)),
        Order::Unordered => assert_eq!(fixture.receipt(1), Receipt::Ok),
    }
}

#[rstest]
#[case::foreign_channel(transfer_port(), ChannelId::new(5))]
#[case::foreign_port(PortId::new("oracle".to_string()).expect("no error"), ChannelId::new(1))]
#[test_log::test]
fn packet_from_other_source_is_rejected(
    mut unordered: Fixture,
    #[case] port_id_on_a: PortId,
    #[case] chan_id_on_a: ChannelId,
) {
    let packet = PacketConfig::builder()
        .port_id_on_a(port_id_on_a.clone())
        .chan_id_on_a(chan_id_on_a.clone())
        .build();

    let res = unordered.relay(packet);

    assert_eq!(
        res,
        Err(ChannelError::PacketRoutingMismatch {
            expected: Counterparty::new(transfer_port(), Some(ChannelId::new(1))),
            actual: Counterparty::new(port_id_on_a, Some(chan_id_on_a)),
        }
        .into())
    );
}

#[test]
fn empty_proof_is_an_invalid_proof() {
    let res = MsgRecvPacket::new(
        packet(4),
        vec![],
        Height::new(0, 6).expect("no error"),
        dummy_account_id(),
    )
    .map_err(ContextError::from);

    assert_eq!(
        res,
        Err(ChannelError::InvalidProof {
            sequence: 4.into(),
            error: CommitmentError::EmptyMerkleProof,
        }
        .into())
    );
}

#[rstest]
fn validation_alone_writes_nothing(mut unordered: Fixture) {
    let proof_height = unordered.send(&packet(2));
    let msg = unordered
        .relayer
        .build_msg_recv_packet(packet(2), proof_height);

    validate(unordered.ctx_b().ibc_store(), &unordered.config, &msg).expect("admissible");

    assert_eq!(unordered.receipt(2), Receipt::None);
    assert!(unordered.ctx_b().get_events().is_empty());
}
