//! Integration tests for capability discovery, activation and events.
//!
//! Every test drives the full `Device` facade against an in-memory
//! `MockNode`; no input device is needed.

use std::collections::BTreeSet;
use std::sync::Arc;

use evprobe_device::{
    CategoryKind, CodeRegistry, Device, DeviceError, EventRecord, RawEvent, RepeatSettings,
    UNKNOWN_NAME,
};
use evprobe_transport::mock::{MockNode, WrittenEvent};
use evprobe_transport::protocol::ev;
use evprobe_transport::{AxisParameters, BusIdentity, TransportError};

/// A keyboard with three LEDs, a few keys and a PC speaker
fn keyboard() -> MockNode {
    MockNode::new()
        .with_name("Test Keyboard")
        .with_topology("usb-0000:00:14.0-1/input0")
        .with_identity(BusIdentity {
            bus_type: 0x03,
            vendor: 0x3151,
            product: 0x5030,
            version: 0x0111,
        })
        .with_category(ev::SYN)
        .with_features(ev::KEY, &[1, 30, 42, 48])
        .with_features(ev::LED, &[0, 1, 2])
        .with_features(ev::SND, &[0, 1])
        .with_features(ev::MSC, &[4])
}

fn codes<'d>(features: impl IntoIterator<Item = evprobe_device::Feature<'d>>) -> Vec<u16> {
    features.into_iter().map(|f| f.code()).collect()
}

// ── Identity ──

#[test]
fn identity_passes_through() {
    let device = Device::new(keyboard().with_interface_version(0x010001));

    assert_eq!(device.name().unwrap(), "Test Keyboard");
    assert_eq!(device.topology().unwrap(), "usb-0000:00:14.0-1/input0");
    assert_eq!(device.unique_id().unwrap(), "");
    assert_eq!(device.interface_version().unwrap().to_string(), "1.0.1");
    assert_eq!(device.vendor().unwrap(), 0x3151);
    assert_eq!(device.product().unwrap(), 0x5030);
    assert_eq!(device.version().unwrap(), 0x0111);
    assert_eq!(device.bus_type_name().unwrap(), Some("USB"));
}

#[test]
fn unknown_bus_type_has_no_name() {
    let node = keyboard().with_identity(BusIdentity {
        bus_type: 0xee,
        ..Default::default()
    });
    let device = Device::new(node);
    assert_eq!(device.bus_type_name().unwrap(), None);
}

// ── Categories ──

#[test]
fn supported_categories_are_named() {
    let device = Device::new(keyboard());
    let names: Vec<&str> = device
        .supported_categories()
        .unwrap()
        .iter()
        .map(|c| c.name())
        .collect();
    assert_eq!(names, vec!["SYN", "KEY", "MSC", "LED", "SND"]);
}

#[test]
fn category_lookup_absent_vs_not_supported() {
    let node = MockNode::new().with_features(ev::KEY, &[30]);
    let device = Device::new(node);

    assert!(device.find_category("LED").unwrap().is_none());
    let err = device.category_named("LED").unwrap_err();
    assert!(matches!(err, DeviceError::NotSupported(_)));

    let keys = device.category_named("KEY").unwrap();
    assert_eq!(keys.code(), ev::KEY);
    assert_eq!(keys.kind(), CategoryKind::Keys);
}

#[test]
fn unknown_category_name_is_not_supported() {
    let device = Device::new(keyboard());
    assert!(device.find_category("BOGUS").unwrap().is_none());
    assert!(device.category_named("BOGUS").unwrap_err().is_not_supported());
}

#[test]
fn category_display() {
    let device = Device::new(keyboard());
    assert_eq!(device.category(ev::LED).to_string(), "LED (0x11)");
    assert_eq!(device.category(0x1e).to_string(), "<unknown> (0x1e)");
}

// ── Features ──

#[test]
fn supported_features_deduplicate() {
    let node = MockNode::new().with_features(ev::KEY, &[30, 30, 48, 30, 48]);
    let device = Device::new(node);
    let features = device.category(ev::KEY).supported_features().unwrap();
    assert_eq!(codes(features), vec![30, 48]);
}

#[test]
fn feature_lookup_by_name() {
    let device = Device::new(keyboard());
    let leds = device.category_named("LED").unwrap();

    let scroll = leds.feature_named("SCROLLL").unwrap();
    assert_eq!(scroll.code(), 0x02);
    assert_eq!(scroll.name(), "SCROLLL");
    assert_eq!(scroll.to_string(), "SCROLLL (0x02)");

    // Known name, but the device lacks it
    assert!(leds.find_feature("KANA").unwrap().is_none());
    assert!(leds.feature_named("KANA").unwrap_err().is_not_supported());

    // Name from another category
    assert!(leds.find_feature("ESC").unwrap().is_none());
}

#[test]
fn find_is_absent_exactly_when_named_fails() {
    let device = Device::new(keyboard());
    let names = ["ESC", "A", "B", "LEFTSHIFT", "NUML", "SCROLLL", "KANA", "CLICK", "", "nope"];

    for category in device.supported_categories().unwrap() {
        for name in names {
            let found = category.find_feature(name).unwrap();
            let named = category.feature_named(name);
            match (found, named) {
                (Some(f), Ok(g)) => assert_eq!(f, g),
                (None, Err(DeviceError::NotSupported(_))) => {}
                (found, named) => panic!(
                    "{category} {name}: find={found:?} named={:?}",
                    named.map(|f| f.code())
                ),
            }
        }
    }
}

// ── Activation ──

#[test]
fn activated_keys_single_bit() {
    let node = MockNode::new()
        .with_features(ev::KEY, &[0, 1, 2])
        .with_activation(ev::KEY, &[0x02]);
    let device = Device::new(node);
    assert_eq!(codes(device.activated_keys().unwrap()), vec![1]);
}

#[test]
fn activated_is_subset_of_supported() {
    let node = keyboard();
    let device = Device::new(node.clone());
    let keys = device.category(ev::KEY);
    let supported = keys.supported_features().unwrap();

    node.set_activation(ev::KEY, &[0u8; 8]);
    assert!(keys.activated_features().unwrap().is_empty());

    node.set_activation(ev::KEY, &[0xffu8; 96]);
    assert_eq!(keys.activated_features().unwrap(), supported);

    node.set_activation(ev::KEY, &[0xa5, 0x3c, 0x0f, 0xf0, 0x81, 0x42, 0x00, 0x7e]);
    let active = keys.activated_features().unwrap();
    assert!(active.is_subset(&supported));
}

#[test]
fn activated_leds_and_sounds() {
    let node = keyboard()
        .with_activation(ev::LED, &[0b0000_0101])
        .with_activation(ev::SND, &[0b0000_0010]);
    let device = Device::new(node);

    let leds: Vec<&str> = device.activated_leds().unwrap().iter().map(|f| f.name()).collect();
    assert_eq!(leds, vec!["NUML", "SCROLLL"]);
    assert_eq!(codes(device.activated_sounds().unwrap()), vec![1]);
}

#[test]
fn is_activated_matches_activated_set() {
    let node = keyboard().with_activation(ev::LED, &[0b0000_0100]);
    let device = Device::new(node.clone());
    let leds = device.category(ev::LED);

    assert!(leds.feature_named("SCROLLL").unwrap().is_activated().unwrap());
    assert!(!leds.feature_named("NUML").unwrap().is_activated().unwrap());

    node.set_activation(ev::LED, &[0]);
    assert!(!leds.feature_named("SCROLLL").unwrap().is_activated().unwrap());
}

#[test]
fn activation_on_axis_category_is_unsupported_semantics() {
    let node = keyboard().with_features(ev::REL, &[0, 1, 8]);
    let device = Device::new(node);
    let rel = device.category(ev::REL);

    let err = rel.activated_features().unwrap_err();
    assert!(matches!(err, DeviceError::UnsupportedSemantics { ref category } if category == "REL"));

    let wheel = rel.feature_named("WHEEL").unwrap();
    assert!(matches!(
        wheel.is_activated(),
        Err(DeviceError::UnsupportedSemantics { .. })
    ));

}

#[test]
fn activation_semantics_checked_before_node_call() {
    let node = keyboard();
    let device = Device::new(node.clone());
    node.disconnect();

    // A node call would fail with Disconnected
    assert!(matches!(
        device.category(ev::MSC).activated_features(),
        Err(DeviceError::UnsupportedSemantics { .. })
    ));
    assert!(matches!(
        device.category(ev::REL).feature(8).is_activated(),
        Err(DeviceError::UnsupportedSemantics { .. })
    ));
}

#[test]
fn disconnected_lookups_are_errors_not_absent() {
    let node = keyboard();
    let device = Device::new(node.clone());
    let leds = device.category(ev::LED);
    node.disconnect();

    assert!(matches!(
        device.find_category("LED"),
        Err(DeviceError::Transport(TransportError::Disconnected))
    ));
    assert!(matches!(
        device.category_named("LED"),
        Err(DeviceError::Transport(TransportError::Disconnected))
    ));
    assert!(matches!(
        leds.find_feature("SCROLLL"),
        Err(DeviceError::Transport(TransportError::Disconnected))
    ));
    assert!(matches!(
        leds.feature_named("SCROLLL"),
        Err(DeviceError::Transport(TransportError::Disconnected))
    ));
    assert!(matches!(
        leds.activated_features(),
        Err(DeviceError::Transport(TransportError::Disconnected))
    ));
    assert!(matches!(
        device.supported_categories(),
        Err(DeviceError::Transport(TransportError::Disconnected))
    ));
}

// ── Events ──

#[test]
fn read_event_decodes_record() {
    let node = keyboard();
    node.push_event(RawEvent::at(1_700_000_000, 125_000, ev::KEY, 30, 1));
    let device = Device::new(node);

    let event = device.read_event().unwrap();
    assert_eq!(event.feature().category().name(), "KEY");
    assert_eq!(event.feature().name(), "A");
    assert_eq!(event.value(), 1);
    let time = event.time().unwrap();
    assert_eq!((time.seconds, time.microseconds), (1_700_000_000, 125_000));
    assert_eq!(event.to_string(), "1700000000.125000 KEY A (0x1e) = 1");
}

#[test]
fn decode_unknown_codes_does_not_fail() {
    let device = Device::new(keyboard());

    let event = device.decode(&RawEvent::new(0x1e, 0x7ff, -5));
    assert_eq!(event.feature().name(), UNKNOWN_NAME);
    assert_eq!(event.feature().category().name(), UNKNOWN_NAME);
    assert_eq!(event.value(), -5);

    let event = device.decode(&RawEvent::new(ev::LED, 0x0f, 1));
    assert_eq!(event.feature().category().name(), "LED");
    assert_eq!(event.feature().known_name(), None);
}

#[test]
fn decode_real_unknown_key_differs_from_uncatalogued() {
    let device = Device::new(keyboard());

    // KEY_UNKNOWN (240) is a catalogued key
    let known = device.decode(&RawEvent::new(ev::KEY, 240, 1));
    assert_eq!(known.feature().known_name(), Some("UNKNOWN"));
    assert_ne!(known.feature().name(), UNKNOWN_NAME);

    let uncatalogued = device.decode(&RawEvent::new(ev::KEY, 0x2f0, 1));
    assert_eq!(uncatalogued.feature().known_name(), None);
    assert_eq!(uncatalogued.feature().name(), UNKNOWN_NAME);

    // The sentinel never resolves to a code
    let node = MockNode::new().with_features(ev::KEY, &[240]);
    let device = Device::new(node);
    let keys = device.category(ev::KEY);
    assert!(keys.find_feature(UNKNOWN_NAME).unwrap().is_none());
    assert_eq!(keys.feature_named("UNKNOWN").unwrap().code(), 240);
}

#[test]
fn encode_then_decode_keeps_feature_and_value() {
    let device = Device::new(keyboard());
    let cases = [(ev::LED, 2, 1), (ev::KEY, 0x110, 0), (ev::REL, 8, -1), (ev::ABS, 0x35, 4095)];

    for (category, code, value) in cases {
        let feature = device.category(category).feature(code);
        let written = EventRecord::new(feature, value);
        assert_eq!(written.time(), None);

        let decoded = device.decode(&written.to_raw());
        assert_eq!(decoded.feature(), feature);
        assert_eq!(decoded.value(), value);
    }
}

#[test]
fn disconnected_read_propagates() {
    let node = keyboard();
    let device = Device::new(node.clone());
    node.disconnect();
    assert!(matches!(
        device.read_event(),
        Err(DeviceError::Transport(TransportError::Disconnected))
    ));
}

#[test]
fn writing_indicator_issues_exactly_two_writes() {
    let node = keyboard();
    let device = Device::new(node.clone());
    let scroll = device
        .category_named("LED")
        .unwrap()
        .feature_named("SCROLLL")
        .unwrap();

    scroll.write_value(1).unwrap();
    scroll.write_value(0).unwrap();

    assert_eq!(
        node.written(),
        vec![
            WrittenEvent {
                category: ev::LED,
                code: 2,
                value: 1
            },
            WrittenEvent {
                category: ev::LED,
                code: 2,
                value: 0
            },
        ]
    );
}

#[test]
fn write_event_by_codes() {
    let node = keyboard();
    let device = Device::new(node.clone());
    device.write_event(ev::SND, 1, 1).unwrap();
    assert_eq!(
        node.written(),
        vec![WrittenEvent {
            category: ev::SND,
            code: 1,
            value: 1
        }]
    );
}

// ── Pass-through queries ──

#[test]
fn axis_repeat_and_keycode_pass_through() {
    let x = AxisParameters {
        value: 512,
        minimum: 0,
        maximum: 1023,
        fuzz: 4,
        flat: 16,
        resolution: 12,
    };
    let node = keyboard()
        .with_features(ev::ABS, &[0x00])
        .with_axis(0x00, x)
        .with_repeat(RepeatSettings {
            delay_ms: 250,
            period_ms: 33,
        })
        .with_keycode(0x70004, 30);
    let device = Device::new(node);

    assert_eq!(device.axis_parameters(0x00).unwrap(), x);
    assert!(device.axis_parameters(0x01).is_err());

    assert_eq!(device.repeat_settings().unwrap().delay_ms, 250);
    device
        .set_repeat_settings(RepeatSettings {
            delay_ms: 500,
            period_ms: 50,
        })
        .unwrap();
    assert_eq!(device.repeat_settings().unwrap().period_ms, 50);

    assert_eq!(device.keycode_for_scancode(0x70004).unwrap(), 30);
    device.set_keycode_for_scancode(0x70004, 48).unwrap();
    assert_eq!(device.keycode_for_scancode(0x70004).unwrap(), 48);
}

#[test]
fn close_releases_node() {
    let node = keyboard();
    let device = Device::new(node.clone());
    device.close();
    assert!(node.is_closed());
}

// ── Fixture registry ──

#[test]
fn fixture_registry_replaces_builtins() {
    let mut registry = CodeRegistry::new();
    registry.register_category(ev::LED, "INDICATOR");
    registry.register_feature(ev::LED, 0x02, "SCROLL");
    let device = Device::with_registry(keyboard(), Arc::new(registry));

    assert!(device.find_category("LED").unwrap().is_none());
    let leds = device.category_named("INDICATOR").unwrap();
    assert_eq!(leds.feature_named("SCROLL").unwrap().code(), 0x02);

    // Supported by the device, but not catalogued here
    let names: BTreeSet<&str> = leds
        .supported_features()
        .unwrap()
        .iter()
        .map(|f| f.name())
        .collect();
    assert_eq!(names, BTreeSet::from(["SCROLL", UNKNOWN_NAME]));
}
