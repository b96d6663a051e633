use crate::core::{Announcement, Artifact, Bundle, BundleKind, Payload, Product, Result};

pub const CATALOG_FILE: &str = "produtos.json";

const SIZES: [&str; 5] = ["PP", "P", "M", "G", "GG"];

struct ProductEntry {
    name: &'static str,
    price: f64,
    category: &'static str,
    image: &'static str,
    description: &'static str,
    colors: [&'static str; 3],
}

const PRODUCTS: [ProductEntry; 5] = [
    ProductEntry {
        name: "Legging High Power",
        price: 149.90,
        category: "Leggings",
        image: "/images/legging1.jpg",
        description: "Legging de alta compressão com tecnologia dry-fit",
        colors: ["Preto", "Azul", "Rosa"],
    },
    ProductEntry {
        name: "Top Sport Comfort",
        price: 89.90,
        category: "Tops",
        image: "/images/top1.jpg",
        description: "Top esportivo com suporte médio e alças ajustáveis",
        colors: ["Preto", "Branco", "Verde"],
    },
    ProductEntry {
        name: "Conjunto Active Power",
        price: 229.90,
        category: "Conjuntos",
        image: "/images/conjunto1.jpg",
        description: "Conjunto completo: legging + top com modelagem exclusiva",
        colors: ["Preto", "Azul marinho", "Marsala"],
    },
    ProductEntry {
        name: "Short Fit Pro",
        price: 119.90,
        category: "Shorts",
        image: "/images/short1.jpg",
        description: "Short com compressão estratégica e bolsos laterais",
        colors: ["Preto", "Cinza", "Rosa"],
    },
    ProductEntry {
        name: "Calça Yoga Comfort",
        price: 139.90,
        category: "Calças",
        image: "/images/calca1.jpg",
        description: "Calça confortável para o dia a dia e yoga",
        colors: ["Preto", "Cáqui", "Azul petróleo"],
    },
];

/// The storefront catalog. Ids are assigned sequentially from 1.
pub fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .zip(1..)
        .map(|(entry, id)| Product {
            id,
            name: entry.name.to_string(),
            price: entry.price,
            category: entry.category.to_string(),
            image: entry.image.to_string(),
            description: entry.description.to_string(),
            sizes: SIZES.iter().map(|s| s.to_string()).collect(),
            colors: entry.colors.iter().map(|c| c.to_string()).collect(),
        })
        .collect()
}

pub fn catalog() -> Result<Bundle> {
    Ok(Bundle {
        kind: BundleKind::Catalog,
        artifacts: vec![Artifact {
            file_name: CATALOG_FILE,
            payload: Payload::json(&products())?,
            announcement: Announcement::new("Arquivo produtos.json criado com sucesso!")
                .with_total("Total de produtos"),
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_products_have_sequential_unique_ids() {
        let products = products();
        let ids: Vec<u32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 5);
    }

    #[test]
    fn test_products_are_complete() {
        for product in products() {
            assert!(product.price > 0.0, "{} has no price", product.name);
            assert!(!product.sizes.is_empty());
            assert!(!product.colors.is_empty());
            assert!(product.image.starts_with("/images/"));
        }
    }

    #[test]
    fn test_first_record_serialization() {
        let bundle = catalog().unwrap();
        let Payload::Json(value) = &bundle.artifacts[0].payload else {
            panic!("catalog payload should be JSON");
        };

        let first = serde_json::to_string(&value[0]).unwrap();
        assert!(first.starts_with(r#"{"id":1,"nome":"Legging High Power","preco":149.9,"categoria":"Leggings""#));
    }
}
