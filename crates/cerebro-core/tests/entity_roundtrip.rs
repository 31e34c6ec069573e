//! Serde roundtrip and JsonSchema validation tests for entity and response types.

use cerebro_core::entities::*;
use cerebro_core::enrichment::Enrichment;
use cerebro_core::enums::*;
use cerebro_core::responses::*;
use chrono::Utc;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    note_item_roundtrip,
    SearchableItem,
    SearchableItem::Note(Note {
        id: "nte-a3f8b2c1".into(),
        content: "Llamar al dentista el martes".into(),
        status: ItemStatus::Processed,
        processed_path: Some("knowledge/salud/dentista.md".into()),
        topic: Some("salud".into()),
        enrichment: Some(r#"{"title":"Dentista","topics":["salud"]}"#.into()),
        created_at: Utc::now(),
    })
);

roundtrip_and_validate!(
    link_item_roundtrip,
    SearchableItem,
    SearchableItem::Link(Link {
        id: "lnk-c4e2d1f0".into(),
        url: "https://example.org/articulo".into(),
        title: None,
        metadata: Some(r#"{"og:title":"Artículo"}"#.into()),
        status: ItemStatus::Pending,
        processed_path: None,
        topic: None,
        enrichment: None,
        created_at: Utc::now(),
    })
);

roundtrip_and_validate!(
    photo_item_roundtrip,
    SearchableItem,
    SearchableItem::Photo(Photo {
        id: "pht-0a1b2c3d".into(),
        filename: "playa.jpg".into(),
        file_path: "uploads/2026/playa.jpg".into(),
        status: ItemStatus::Processed,
        processed_path: None,
        topic: Some("viajes".into()),
        enrichment: Some("garbage".into()),
        created_at: Utc::now(),
    })
);

roundtrip_and_validate!(
    audio_item_roundtrip,
    SearchableItem,
    SearchableItem::Audio(Audio {
        id: "aud-11223344".into(),
        file_path: "uploads/memo.m4a".into(),
        transcription: Some("recordar comprar leche".into()),
        status: ItemStatus::Processed,
        processed_path: None,
        topic: None,
        enrichment: None,
        created_at: Utc::now(),
    })
);

roundtrip_and_validate!(
    enrichment_roundtrip,
    Enrichment,
    Enrichment {
        title: Some("Cita médica".into()),
        summary: None,
        topics: vec!["salud".into(), "consulta".into()],
        keywords: Vec::new(),
        category: Some("personal".into()),
        language: Some("es".into()),
    }
);

roundtrip_and_validate!(
    search_response_roundtrip,
    SearchResponse,
    SearchResponse {
        query: "cita medica".into(),
        kind: Some(ItemKind::Note),
        fallback: false,
        results: vec![ScoredResult {
            id: "nte-a3f8b2c1".into(),
            kind: ItemKind::Note,
            title: "Pedir cita".into(),
            filename: None,
            url: None,
            file_path: None,
            thumbnail_url: None,
            topic: None,
            ai_title: Some("Cita médica".into()),
            ai_summary: None,
            ai_tags: vec!["salud".into()],
            ai_topics: vec!["salud".into()],
            ai_category: None,
            processed_path: None,
            created_at: Utc::now(),
            score: 24,
            explain: Some(ScoreBreakdown {
                title: 20,
                raw: 20,
                matched_tokens: 2,
                total_tokens: 2,
                score: 20,
                ..ScoreBreakdown::default()
            }),
        }],
        total_results: 1,
    }
);

roundtrip_and_validate!(
    import_response_roundtrip,
    ImportResponse,
    ImportResponse {
        imported: 12,
        skipped: 1,
        duration_ms: 40,
    }
);

#[test]
fn scored_result_uses_camel_case_keys() {
    let result = ScoredResult {
        id: "vid-1".into(),
        kind: ItemKind::Video,
        title: "clip.mp4".into(),
        filename: None,
        url: None,
        file_path: Some("uploads/clip.mp4".into()),
        thumbnail_url: None,
        topic: None,
        ai_title: None,
        ai_summary: None,
        ai_tags: Vec::new(),
        ai_topics: Vec::new(),
        ai_category: None,
        processed_path: None,
        created_at: Utc::now(),
        score: 0,
        explain: None,
    };
    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("filePath").is_some());
    assert!(json.get("aiTags").is_some());
    assert!(json.get("thumbnailUrl").is_some());
    assert!(json.get("explain").is_none(), "explain is omitted when absent");
    assert_eq!(json["kind"], "video");
}
