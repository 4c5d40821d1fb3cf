use serde_json::{Value, json};

/// `count` items of one size in a container `width` wide.
pub fn uniform_scene(count: u64, item: (f32, f32), width: f32) -> Value {
    let items: Vec<Value> = (1..=count)
        .map(|i| json!({ "id": i, "width": item.0, "height": item.1 }))
        .collect();
    json!({
        "container": { "width": width, "height": 0 },
        "items": items
    })
}

/// Items with explicit sizes, ids starting at 1.
pub fn sized_scene(sizes: &[(f32, f32)], width: f32, height: f32) -> Value {
    let items: Vec<Value> = sizes
        .iter()
        .enumerate()
        .map(|(i, (w, h))| json!({ "id": i + 1, "width": w, "height": h }))
        .collect();
    json!({
        "container": { "width": width, "height": height },
        "items": items
    })
}

/// Six tagged elements: odd ids are "metal", even ids "gas"; 1 and 2 also "rare".
pub fn tagged_scene() -> Value {
    json!({
        "container": { "width": 300, "height": 0 },
        "items": [
            { "id": 1, "width": 100, "height": 50, "tags": ["metal", "rare"] },
            { "id": 2, "width": 100, "height": 50, "tags": ["gas", "rare"] },
            { "id": 3, "width": 100, "height": 50, "tags": ["metal"] },
            { "id": 4, "width": 100, "height": 50, "tags": ["gas"] },
            { "id": 5, "width": 100, "height": 50, "tags": ["metal"] },
            { "id": 6, "width": 100, "height": 50, "tags": ["gas"] }
        ]
    })
}

pub fn with_padding(mut scene: Value, left: f32, top: f32) -> Value {
    scene["padding"] = json!({ "x": left, "y": top });
    scene
}

pub fn default_options() -> Value {
    json!({})
}
