use ndef_handover::{
    AlternativeCarrierRecord, CarrierPowerState, CarrierTypeFormat, CollisionResolutionRecord,
    ErrorReason, ErrorRecord, FormatError, HandoverCarrierRecord, HandoverRecord,
    HandoverRequestRecord, HandoverSelectRecord, MessageCodec, NdefMessageCodec, RawRecord,
    SelectEntry, WellKnownRecord,
};
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn alternative_carrier() -> AlternativeCarrierRecord {
    AlternativeCarrierRecord::new(CarrierPowerState::Active, "http://blabla")
}

fn handover_carrier() -> HandoverCarrierRecord {
    HandoverCarrierRecord::new(
        CarrierTypeFormat::AbsoluteUri,
        "http://absolute.url",
        vec![0x00, 0x01, 0x02, 0x03],
    )
}

fn records() -> Vec<HandoverRecord> {
    vec![
        HandoverRecord::CollisionResolution(CollisionResolutionRecord::new(123)),
        HandoverRecord::Error(ErrorRecord::new(ErrorReason::PermanentMemoryConstraints, 321)),
        HandoverRecord::AlternativeCarrier(alternative_carrier()),
        HandoverRecord::HandoverSelect(HandoverSelectRecord::new()),
        HandoverRecord::HandoverSelect(
            HandoverSelectRecord::new()
                .with_entry(SelectEntry::AlternativeCarrier(alternative_carrier()))
                .with_entry(SelectEntry::Carrier(handover_carrier())),
        ),
        HandoverRecord::HandoverCarrier(handover_carrier()),
        HandoverRecord::HandoverRequest(HandoverRequestRecord::new(
            CollisionResolutionRecord::new(321),
        )),
        HandoverRecord::HandoverRequest(
            HandoverRequestRecord::new(CollisionResolutionRecord::new(0xBEEF))
                .with_alternative_carrier(alternative_carrier())
                .with_alternative_carrier(
                    AlternativeCarrierRecord::new(CarrierPowerState::Activating, "1")
                        .with_auxiliary_data_reference("2"),
                ),
        ),
    ]
}

#[test]
fn encode_decode_roundtrip() {
    init_tracing();

    for record in records() {
        let payload = record.encode().unwrap();
        let decoded = HandoverRecord::decode(record.type_identifier(), &payload).unwrap();

        assert_eq!(decoded, record, "{}", record.record_type());
    }
}

#[test]
fn roundtrip_through_outer_framing() {
    init_tracing();

    // the caller's job: wrap each payload in an NDEF message and unwrap it again
    let framed: Vec<RawRecord> = records()
        .iter()
        .map(|record| RawRecord::well_known(record.type_identifier(), record.encode().unwrap()))
        .collect();

    let bytes = NdefMessageCodec.encode_message(&framed).unwrap();
    let unframed = NdefMessageCodec.decode_message(&bytes).unwrap();

    let decoded: Vec<HandoverRecord> = unframed
        .iter()
        .map(|raw| HandoverRecord::decode(&raw.type_, &raw.payload).unwrap())
        .collect();

    assert_eq!(decoded, records());
}

#[test]
fn known_byte_layouts() {
    let error = ErrorRecord::new(ErrorReason::PermanentMemoryConstraints, 321);
    assert_eq!(error.encode().unwrap(), vec![0x02, 0x01, 0x41]);

    let collision = CollisionResolutionRecord::new(321);
    assert_eq!(collision.encode().unwrap(), vec![0x01, 0x41]);

    let request = HandoverRequestRecord::new(collision);
    let payload = request.encode().unwrap();
    assert_eq!(payload, vec![0x10, 0xD1, 0x02, 0x02, b'c', b'r', 0x01, 0x41]);
}

#[test]
fn unknown_type_between_carriers_is_skipped() {
    init_tracing();

    let first = AlternativeCarrierRecord::new(CarrierPowerState::Active, "A");
    let second = AlternativeCarrierRecord::new(CarrierPowerState::Inactive, "B");

    // hand-crafted nested message: ac, unknown, ac
    let nested = NdefMessageCodec
        .encode_message(&[
            RawRecord::well_known(b"ac", first.encode().unwrap()),
            RawRecord::well_known(b"zz", vec![0x01, 0x02, 0x03]),
            RawRecord::well_known(b"ac", second.encode().unwrap()),
        ])
        .unwrap();

    let mut payload = vec![0x10];
    payload.extend_from_slice(&nested);

    let decoded = HandoverRequestRecord::decode(&payload).unwrap();
    assert_eq!(decoded.alternative_carriers, vec![first, second]);
}

#[test]
fn unknown_type_is_an_error_at_the_top_level() {
    let error = HandoverRecord::decode(b"Sp", &[0x00]).unwrap_err();
    assert_eq!(error, FormatError::UnknownRecordType("Sp".into()));
}
