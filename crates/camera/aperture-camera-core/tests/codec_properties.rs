use aperture_camera_core::{
    decode_fixture, decode_modifier, encode_fixture, encode_modifier, CircularFixture,
    DecodeError, Fixture, FixtureKind, FollowFixture, IdleFixture, LookFixture, Modifier,
    Modify, PathFixture, PathInterpolation, Position, ShakeModifier,
};
use serde_json::{json, Value as JsonValue};

fn shake(period: f32, amount: f32) -> ShakeModifier {
    ShakeModifier::new(period, amount).expect("valid shake")
}

/// One fixture of every variant, with non-trivial field values.
fn every_variant() -> Vec<(Fixture, &'static str)> {
    let p = |x: f32, yaw: f32| Position::new(x, 64.5, -x, yaw, 12.25, 0.1);
    vec![
        (
            Fixture::new(IdleFixture::new(p(3.0, 45.0)), 20)
                .unwrap()
                .with_name("hold"),
            "idle",
        ),
        (
            Fixture::new(
                PathFixture::new(
                    vec![p(0.0, 0.0), p(10.0, 33.3), p(20.0, 90.0)],
                    PathInterpolation::Cubic,
                ),
                120,
            )
            .unwrap()
            .with_modifier(shake(5.0, 0.3)),
            "path",
        ),
        (
            Fixture::new(LookFixture::new(p(1.0, 0.0), "player"), 40)
                .unwrap()
                .with_modifier(shake(4.0, 0.5)),
            "look",
        ),
        (
            Fixture::new(FollowFixture::new(p(0.5, 180.0), "@e[type=pig,limit=1]"), 90)
                .unwrap()
                .with_name("pig cam"),
            "follow",
        ),
        (
            Fixture::new(CircularFixture::new(p(-7.0, 0.0), 12.0, 90.0, 720.0), 300)
                .unwrap()
                .with_modifier(shake(2.0, 0.1))
                .with_modifier(shake(3.0, 0.2)),
            "circular",
        ),
    ]
}

#[test]
fn every_variant_round_trips() {
    for (fixture, _) in every_variant() {
        let encoded = encode_fixture(&fixture).unwrap();
        let decoded = decode_fixture(encoded).unwrap();
        assert_eq!(decoded, fixture, "{:?} did not round-trip", fixture.kind());
    }
}

#[test]
fn round_trip_survives_text() {
    for (fixture, _) in every_variant() {
        let text = serde_json::to_string(&encode_fixture(&fixture).unwrap()).unwrap();
        let parsed: JsonValue = serde_json::from_str(&text).unwrap();
        assert_eq!(decode_fixture(parsed).unwrap(), fixture);
    }
}

#[test]
fn encoded_type_matches_registered_discriminator() {
    for (fixture, discriminator) in every_variant() {
        let encoded = encode_fixture(&fixture).unwrap();
        assert_eq!(encoded["type"], discriminator);
        for m in encoded["modifiers"].as_array().unwrap() {
            assert_eq!(m["type"], "shake");
        }
    }
}

#[test]
fn extra_top_level_fields_do_not_change_decoding() {
    for (fixture, _) in every_variant() {
        let mut encoded = encode_fixture(&fixture).unwrap();
        let obj = encoded.as_object_mut().unwrap();
        obj.insert("cache".into(), json!({ "spline": [1, 2, 3] }));
        obj.insert("version".into(), json!(7));
        obj.insert("target_entity_id".into(), json!(null));
        assert_eq!(decode_fixture(encoded).unwrap(), fixture);
    }
}

#[test]
fn unlisted_or_absent_type_is_rejected() {
    let (fixture, _) = every_variant().remove(0);
    let mut encoded = encode_fixture(&fixture).unwrap();

    encoded["type"] = json!("IDLE");
    assert!(matches!(
        decode_fixture(encoded.clone()),
        Err(DecodeError::UnknownDiscriminator { found: Some(ref s), .. }) if s == "IDLE"
    ));

    encoded.as_object_mut().unwrap().remove("type");
    assert!(matches!(
        decode_fixture(encoded.clone()),
        Err(DecodeError::UnknownDiscriminator { found: None, .. })
    ));

    encoded["type"] = JsonValue::Null;
    assert!(matches!(
        decode_fixture(encoded),
        Err(DecodeError::UnknownDiscriminator { found: None, .. })
    ));

    let err = decode_modifier(json!({ "type": "wobble", "shake": 1.0 })).unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnknownDiscriminator {
            family: "modifier",
            found: Some("wobble".into())
        }
    );
}

#[test]
fn modifier_order_is_preserved() {
    let modifiers: Vec<Modifier> = (1..=6)
        .map(|i| shake(i as f32 * 1.5, 0.1 * i as f32).into())
        .collect();
    let mut fixture = Fixture::new(IdleFixture::default(), 10).unwrap();
    fixture.modifiers = modifiers.clone();

    let decoded = decode_fixture(encode_fixture(&fixture).unwrap()).unwrap();
    assert_eq!(decoded.modifiers, modifiers);
}

#[test]
fn shake_is_deterministic() {
    let fixture = Fixture::new(IdleFixture::default(), 10).unwrap();
    let mut pos = Position::origin();
    shake(2.0, 1.0).modify(4, &fixture, 0.0, &mut pos);

    let t = 2.0f32;
    assert!((pos.angle.yaw - t.sin().powi(2) * t.cos()).abs() <= 1e-6);
    assert!((pos.angle.pitch - t.cos() * t.sin().powi(2)).abs() <= 1e-6);
    assert_eq!(pos.point.x, 0.0);
    assert_eq!(pos.point.y, 0.0);
    assert_eq!(pos.point.z, 0.0);
    assert_eq!(pos.angle.roll, 0.0);
}

#[test]
fn zero_shake_is_rejected_on_construction_and_decoding() {
    assert!(ShakeModifier::new(0.0, 1.0).is_err());

    let err = decode_modifier(json!({ "type": "shake", "shake": 0.0, "shakeAmount": 1.0 }))
        .unwrap_err();
    assert!(matches!(err, DecodeError::InvariantViolation(_)));

    // A missing period defaults to zero and is rejected the same way.
    let err = decode_modifier(json!({ "type": "shake", "shakeAmount": 1.0 })).unwrap_err();
    assert!(matches!(err, DecodeError::InvariantViolation(_)));
}

#[test]
fn swapping_shakes_changes_the_result() {
    let a = shake(2.0, 0.7);
    let b = shake(3.0, 0.2);

    let mut ab = Fixture::new(IdleFixture::default(), 10).unwrap();
    ab.modifiers = vec![a.into(), b.into()];
    let mut ba = ab.clone();
    ba.modifiers.reverse();

    // Shake offsets add up to the same total either way; the order shows in
    // the position each later modifier receives.
    let trace = |fixture: &Fixture| -> Vec<Position> {
        let mut pos = Position::origin();
        fixture
            .modifiers
            .iter()
            .map(|m| {
                m.modify(5, fixture, 0.0, &mut pos);
                pos
            })
            .collect()
    };
    assert_ne!(trace(&ab)[0], trace(&ba)[0]);

    let mut applied = Position::origin();
    ab.apply_modifiers(5, 0.0, &mut applied);
    assert_eq!(Some(&applied), trace(&ab).last());

    let decoded = decode_fixture(encode_fixture(&ba).unwrap()).unwrap();
    assert_eq!(trace(&decoded), trace(&ba));
    assert_ne!(trace(&decoded), trace(&ab));
}

#[test]
fn modifier_objects_use_camel_case_amount() {
    let json = encode_modifier(&shake(4.0, 0.5).into()).unwrap();
    assert_eq!(json, json!({ "shake": 4.0, "shakeAmount": 0.5, "type": "shake" }));
}

#[test]
fn targets_live_at_the_fixture_top_level() {
    let fixture = Fixture::new(FollowFixture::new(Position::origin(), "player"), 5).unwrap();
    let json = encode_fixture(&fixture).unwrap();
    assert_eq!(json["target"], "player");
    assert!(json.get("position").is_none());
    assert_eq!(decode_fixture(json).unwrap().kind(), FixtureKind::Follow);
}
