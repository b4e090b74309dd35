//! Integration tests for the SamplerService → publisher pipeline.
//!
//! These run on the host and verify the full cycle — due-check, sample,
//! encode, publish, mark — against recording mocks.  Default config:
//! luminosity and motion every 1 s, climate every 5 s.

use crate::mock_hw::{MockPublisher, MockSensors, RecordingSink};

use multisensor::app::events::AppEvent;
use multisensor::app::service::SamplerService;
use multisensor::config::SystemConfig;
use multisensor::scheduler::ChannelId;

fn make_service() -> (SamplerService, MockSensors, MockPublisher, RecordingSink) {
    let config = SystemConfig::default();
    let service = SamplerService::new(&config).expect("service construction");
    (
        service,
        MockSensors::new(),
        MockPublisher::new(),
        RecordingSink::new(),
    )
}

/// Build a service and run setup (advertisement phase) against the mocks.
fn make_started() -> (SamplerService, MockSensors, MockPublisher, RecordingSink) {
    let (mut service, sensors, mut publisher, mut sink) = make_service();
    service.setup(&mut publisher, &mut sink).expect("setup");
    publisher.calls.clear();
    sink.events.clear();
    (service, sensors, publisher, sink)
}

// ── Setup / advertisement phase ───────────────────────────────

#[test]
fn setup_publishes_retained_unit_metadata_once() {
    let (_service, _sensors, publisher, sink) = {
        let (mut service, sensors, mut publisher, mut sink) = make_service();
        service.setup(&mut publisher, &mut sink).expect("setup");
        (service, sensors, publisher, sink)
    };

    assert_eq!(
        publisher.last_accepted_value("luminosity", "unit"),
        Some("%".to_string())
    );
    assert_eq!(
        publisher.last_accepted_value("temperature", "unit"),
        Some("°C".to_string())
    );
    assert_eq!(
        publisher.last_accepted_value("humidity", "unit"),
        Some("%".to_string())
    );
    // Motion has no unit and gets no metadata publish.
    assert_eq!(publisher.accepted_count("motion", "unit"), 0);
    // Metadata is retained like everything else.
    assert!(publisher.calls.iter().all(|c| c.retained));

    assert!(sink
        .events
        .contains(&AppEvent::Advertised { nodes: 4 }));
    assert!(sink
        .events
        .contains(&AppEvent::Started { channels: 3 }));
}

// ── First-sample immediacy and ordering ───────────────────────

#[test]
fn first_pass_samples_every_channel_immediately() {
    let (mut service, mut sensors, mut publisher, mut sink) = make_started();

    service.tick(0, &mut sensors, &mut publisher, &mut sink);

    // All three channels run on the very first pass regardless of `now`.
    assert_eq!(
        sensors.sampled,
        vec![ChannelId::Luminosity, ChannelId::Motion, ChannelId::Climate]
    );
    assert_eq!(publisher.accepted_count("luminosity", "state"), 1);
    assert_eq!(publisher.accepted_count("motion", "state"), 1);
    assert_eq!(publisher.accepted_count("temperature", "state"), 1);
    assert_eq!(publisher.accepted_count("humidity", "state"), 1);
}

#[test]
fn state_publishes_are_always_retained() {
    let (mut service, mut sensors, mut publisher, mut sink) = make_started();
    service.tick(0, &mut sensors, &mut publisher, &mut sink);
    assert!(!publisher.calls.is_empty());
    assert!(publisher.calls.iter().all(|c| c.retained));
}

// ── Interval adherence ────────────────────────────────────────

#[test]
fn channel_not_due_again_before_interval_elapses() {
    let (mut service, mut sensors, mut publisher, mut sink) = make_started();

    service.tick(0, &mut sensors, &mut publisher, &mut sink);
    assert_eq!(publisher.accepted_count("luminosity", "state"), 1);

    // 999 ms after a successful run: the 1 s channels are not yet due.
    service.tick(999, &mut sensors, &mut publisher, &mut sink);
    assert_eq!(publisher.accepted_count("luminosity", "state"), 1);
    assert_eq!(publisher.accepted_count("motion", "state"), 1);

    // Exactly at the interval boundary they run again.
    service.tick(1000, &mut sensors, &mut publisher, &mut sink);
    assert_eq!(publisher.accepted_count("luminosity", "state"), 2);
    assert_eq!(publisher.accepted_count("motion", "state"), 2);
}

#[test]
fn climate_runs_on_its_own_slower_interval() {
    let (mut service, mut sensors, mut publisher, mut sink) = make_started();

    service.tick(0, &mut sensors, &mut publisher, &mut sink);
    // The 1 s channels cycle four more times before climate is due again.
    for now in [1000, 2000, 3000, 4999] {
        service.tick(now, &mut sensors, &mut publisher, &mut sink);
    }
    assert_eq!(publisher.accepted_count("temperature", "state"), 1);
    assert_eq!(publisher.accepted_count("humidity", "state"), 1);

    service.tick(5000, &mut sensors, &mut publisher, &mut sink);
    assert_eq!(publisher.accepted_count("temperature", "state"), 2);
    assert_eq!(publisher.accepted_count("humidity", "state"), 2);
}

// ── Retry policy ──────────────────────────────────────────────

#[test]
fn publish_failure_retries_on_the_very_next_pass() {
    let (mut service, mut sensors, mut publisher, mut sink) = make_started();

    publisher.fail_all = true;
    service.tick(0, &mut sensors, &mut publisher, &mut sink);
    assert_eq!(publisher.accepted_count("luminosity", "state"), 0);
    // Timestamps did not advance: every channel is still never-run.
    assert!(service.channels().iter().all(|c| c.last_run().is_none()));

    // Next pass, 50 ms later — not a full interval — everything publishes.
    publisher.fail_all = false;
    service.tick(50, &mut sensors, &mut publisher, &mut sink);
    assert_eq!(publisher.accepted_count("luminosity", "state"), 1);
    assert_eq!(publisher.accepted_count("motion", "state"), 1);
    assert_eq!(publisher.accepted_count("temperature", "state"), 1);
    // One refusal event per channel on the failed pass (the per-reading
    // loop short-circuits, so climate reports only its first property).
    assert_eq!(
        sink.count(|e| matches!(e, AppEvent::PublishFailed { .. })),
        3
    );
}

#[test]
fn sensor_failure_keeps_channel_due_and_others_running() {
    let (mut service, mut sensors, mut publisher, mut sink) = make_started();

    sensors.fail_luminosity = true;
    service.tick(0, &mut sensors, &mut publisher, &mut sink);

    // Luminosity published nothing; the other channels were unaffected.
    assert_eq!(publisher.accepted_count("luminosity", "state"), 0);
    assert_eq!(publisher.accepted_count("motion", "state"), 1);
    assert_eq!(publisher.accepted_count("temperature", "state"), 1);
    assert_eq!(
        sink.count(|e| matches!(
            e,
            AppEvent::SampleFailed {
                channel: ChannelId::Luminosity,
                ..
            }
        )),
        1
    );

    // Recovery on the immediately following pass, no interval imposed.
    sensors.fail_luminosity = false;
    service.tick(50, &mut sensors, &mut publisher, &mut sink);
    assert_eq!(publisher.accepted_count("luminosity", "state"), 1);
    // Motion/climate ran at t=0 and are not due again at t=50.
    assert_eq!(publisher.accepted_count("motion", "state"), 1);
}

// ── Combined-sensor atomicity ─────────────────────────────────

#[test]
fn climate_read_failure_publishes_neither_value() {
    let (mut service, mut sensors, mut publisher, mut sink) = make_started();

    sensors.fail_climate = true;
    service.tick(0, &mut sensors, &mut publisher, &mut sink);

    assert_eq!(publisher.accepted_count("temperature", "state"), 0);
    assert_eq!(publisher.accepted_count("humidity", "state"), 0);
}

#[test]
fn climate_partial_publish_failure_republishes_both() {
    let (mut service, mut sensors, mut publisher, mut sink) = make_started();

    // Temperature goes through, humidity is refused.
    publisher.fail_properties = vec![("humidity", "state")];
    service.tick(0, &mut sensors, &mut publisher, &mut sink);
    assert_eq!(publisher.accepted_count("temperature", "state"), 1);
    assert_eq!(publisher.accepted_count("humidity", "state"), 0);
    // The climate channel did not mark the cycle as run.
    assert!(sink
        .events
        .iter()
        .all(|e| *e != AppEvent::Published { channel: ChannelId::Climate }));

    // Next pass: the whole pair is re-sampled and re-published.
    publisher.fail_properties.clear();
    service.tick(50, &mut sensors, &mut publisher, &mut sink);
    assert_eq!(publisher.accepted_count("temperature", "state"), 2);
    assert_eq!(publisher.accepted_count("humidity", "state"), 1);
    assert!(sink
        .events
        .contains(&AppEvent::Published { channel: ChannelId::Climate }));
}

// ── Wire encoding ─────────────────────────────────────────────

#[test]
fn values_reach_the_wire_in_canonical_form() {
    let (mut service, mut sensors, mut publisher, mut sink) = make_started();

    sensors.luminosity_percent = 73;
    sensors.motion = true;
    sensors.temperature_c = 21.5;
    sensors.humidity_pct = 48.0;
    service.tick(0, &mut sensors, &mut publisher, &mut sink);

    assert_eq!(
        publisher.last_accepted_value("luminosity", "state"),
        Some("73".to_string())
    );
    assert_eq!(
        publisher.last_accepted_value("motion", "state"),
        Some("true".to_string())
    );
    assert_eq!(
        publisher.last_accepted_value("temperature", "state"),
        Some("21.5".to_string())
    );
    assert_eq!(
        publisher.last_accepted_value("humidity", "state"),
        Some("48".to_string())
    );

    sensors.motion = false;
    service.tick(1000, &mut sensors, &mut publisher, &mut sink);
    assert_eq!(
        publisher.last_accepted_value("motion", "state"),
        Some("false".to_string())
    );
}

// ── Transport readiness ───────────────────────────────────────

#[test]
fn nothing_publishes_until_transport_is_ready() {
    let (mut service, mut sensors, mut publisher, mut sink) = make_started();

    publisher.ready = false;
    service.tick(0, &mut sensors, &mut publisher, &mut sink);
    service.tick(1000, &mut sensors, &mut publisher, &mut sink);
    assert!(publisher.calls.is_empty());
    assert!(sensors.sampled.is_empty(), "no sampling while transport is down");

    // Transport returns: accumulated due-ness drains immediately.
    publisher.ready = true;
    service.tick(2000, &mut sensors, &mut publisher, &mut sink);
    assert_eq!(publisher.accepted_count("luminosity", "state"), 1);
    assert_eq!(publisher.accepted_count("temperature", "state"), 1);
}
