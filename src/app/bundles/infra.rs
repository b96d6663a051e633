use crate::core::{Artifact, Bundle, BundleKind};

const PACKAGE_JSON: &str = include_str!("../../../assets/infra/package.json");
const DOCKERFILE: &str = include_str!("../../../assets/infra/Dockerfile");
const DOCKER_COMPOSE: &str = include_str!("../../../assets/infra/docker-compose.yml");

/// Backend package manifest, container image and compose stack.
pub fn infra() -> Bundle {
    Bundle {
        kind: BundleKind::Infra,
        artifacts: vec![
            Artifact::text("package.json", PACKAGE_JSON, "✅ Package.json criado!"),
            Artifact::text("Dockerfile", DOCKERFILE, "✅ Dockerfile criado!"),
            Artifact::text(
                "docker-compose.yml",
                DOCKER_COMPOSE,
                "✅ Docker Compose criado!",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infra_file_order() {
        let names: Vec<_> = infra().artifacts.iter().map(|a| a.file_name).collect();
        assert_eq!(names, vec!["package.json", "Dockerfile", "docker-compose.yml"]);
    }

    #[test]
    fn test_package_manifest_is_valid_json() {
        let manifest: serde_json::Value = serde_json::from_str(PACKAGE_JSON).unwrap();
        assert_eq!(manifest["name"], "lumos-backend");
        assert_eq!(manifest["scripts"]["start"], "node server.js");
        assert!(!PACKAGE_JSON.ends_with('\n'));
    }

    #[test]
    fn test_compose_declares_three_services() {
        for service in ["lumos-backend:", "lumos-database:", "lumos-redis:"] {
            assert!(DOCKER_COMPOSE.contains(service), "missing {}", service);
        }
        assert!(DOCKERFILE.starts_with("FROM node:18-alpine"));
    }
}
