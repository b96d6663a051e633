use crate::core::{Announcement, Artifact, Bundle, BundleKind, Payload};
use serde_json::{Map, Value};

pub const TEMPLATES_FILE: &str = "templates_instagram.json";

const STRATEGY: &str = include_str!("../../../assets/social/social_media_strategy.md");

/// Instagram post templates keyed by content category, in publishing order.
pub const POST_TEMPLATES: [(&str, &str); 5] = [
    (
        "motivacional",
        include_str!("../../../assets/social/templates/motivacional.txt"),
    ),
    (
        "produto",
        include_str!("../../../assets/social/templates/produto.txt"),
    ),
    (
        "transformacao",
        include_str!("../../../assets/social/templates/transformacao.txt"),
    ),
    (
        "lifestyle",
        include_str!("../../../assets/social/templates/lifestyle.txt"),
    ),
    (
        "workout",
        include_str!("../../../assets/social/templates/workout.txt"),
    ),
];

fn templates_payload() -> Payload {
    let map: Map<String, Value> = POST_TEMPLATES
        .iter()
        .map(|(category, template)| (category.to_string(), Value::String(template.to_string())))
        .collect();
    Payload::Json(Value::Object(map))
}

pub fn social() -> Bundle {
    Bundle {
        kind: BundleKind::Social,
        artifacts: vec![
            Artifact::text(
                "social_media_strategy.md",
                STRATEGY,
                "✅ Estratégia de Social Media criada!",
            ),
            Artifact {
                file_name: TEMPLATES_FILE,
                payload: templates_payload(),
                announcement: Announcement::new("✅ Templates do Instagram criados!")
                    .with_total("📝 Total de templates"),
            },
        ],
    }
}
