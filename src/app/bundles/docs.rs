use crate::core::{Artifact, Bundle, BundleKind};

const API_DOCS: &str = include_str!("../../../assets/docs/API_DOCS.md");
const DEPLOY_SCRIPT: &str = include_str!("../../../assets/docs/deploy.sh");
const ENV_EXAMPLE: &str = include_str!("../../../assets/docs/.env.example");

pub fn docs() -> Bundle {
    Bundle {
        kind: BundleKind::Docs,
        artifacts: vec![
            Artifact::text("API_DOCS.md", API_DOCS, "✅ Documentação da API criada!"),
            Artifact::text("deploy.sh", DEPLOY_SCRIPT, "✅ Script de deploy criado!"),
            Artifact::text(".env.example", ENV_EXAMPLE, "✅ Arquivo .env.example criado!"),
        ],
    }
}
