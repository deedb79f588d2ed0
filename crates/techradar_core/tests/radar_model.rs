use techradar_core::{build_radar, RawRow};

fn rows() -> Vec<RawRow> {
    [("Rust", "Adopt", "true"), ("Zig", "Assess", "false")]
        .into_iter()
        .map(|(name, ring, is_new)| -> RawRow {
            [
                ("name", name),
                ("ring", ring),
                ("quadrant", "languages"),
                ("isNew", is_new),
            ]
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
        })
        .collect()
}

#[test]
fn radar_serializes_for_the_renderer() {
    let radar = build_radar(&["name", "ring", "quadrant", "isNew"], &rows()).expect("valid");
    let json = serde_json::to_value(&radar).expect("serializable");

    assert_eq!(json["title"], serde_json::Value::Null);
    let quadrant = &json["quadrants"][0];
    assert_eq!(quadrant["name"], "Languages");
    assert_eq!(quadrant["blips"][0]["name"], "Rust");
    assert_eq!(quadrant["blips"][0]["isNew"], true);
    assert_eq!(quadrant["blips"][0]["ring"]["name"], "Adopt");
    assert_eq!(quadrant["blips"][1]["ring"]["order"], 1);
}

#[test]
fn blip_count_spans_all_quadrants() {
    let radar = build_radar(&["name", "ring", "quadrant", "isNew"], &rows()).expect("valid");
    assert_eq!(radar.blip_count(), 2);
    assert_eq!(radar.rings().len(), 2);
}
