use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Identity as reported by the auth backend.
///
/// GoTrue returns a much larger user object; only the fields the app reads are
/// kept, everything else is ignored on deserialize.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,

    /// Unix seconds.
    pub expires_at: i64,
    pub user: User,
}

impl AuthSession {
    pub fn is_expired_at(&self, now_secs: i64) -> bool {
        self.expires_at <= now_secs
    }
}

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum MaterialKind {
    Pdf,
    Link,
    Note,
}

impl MaterialKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Link => "Link",
            Self::Note => "Note",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Material {
    pub id: String,
    pub notebook_id: String,
    #[serde(rename = "type")]
    pub kind: MaterialKind,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Material as submitted by a page, before the backend assigns ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NewMaterial {
    pub kind: MaterialKind,
    pub name: String,
    pub url: Option<String>,
    pub content: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Notebook {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub last_accessed: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,

    /// Filled client-side from the `materials` table, ordered by creation.
    #[serde(default, skip_serializing)]
    pub materials: Vec<Material>,
}

impl Notebook {
    pub fn count_materials(&self, kind: MaterialKind) -> usize {
        self.materials.iter().filter(|m| m.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_material_kind_wire_names() {
        assert_eq!(MaterialKind::Pdf.to_string(), "pdf");
        assert_eq!(MaterialKind::from_str("link").ok(), Some(MaterialKind::Link));
        let v = serde_json::to_value(MaterialKind::Note).expect("should serialize");
        assert_eq!(v, "note");
    }

    #[test]
    fn test_material_deserialize_reads_type_column() {
        let json = r#"{
            "id": "m1",
            "notebook_id": "n1",
            "type": "link",
            "name": "Docs",
            "url": "https://example.com",
            "content": null,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;
        let m: Material = serde_json::from_str(json).expect("material should parse");
        assert_eq!(m.kind, MaterialKind::Link);
        assert_eq!(m.url.as_deref(), Some("https://example.com"));
        assert!(m.content.is_none());
    }

    #[test]
    fn test_notebook_count_materials_by_kind() {
        let mk = |id: &str, kind| Material {
            id: id.to_string(),
            notebook_id: "n1".to_string(),
            kind,
            name: id.to_string(),
            url: None,
            content: None,
            created_at: String::new(),
            updated_at: String::new(),
        };
        let nb = Notebook {
            id: "n1".to_string(),
            name: "Biology".to_string(),
            last_accessed: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
            materials: vec![
                mk("a", MaterialKind::Pdf),
                mk("b", MaterialKind::Pdf),
                mk("c", MaterialKind::Note),
            ],
        };
        assert_eq!(nb.count_materials(MaterialKind::Pdf), 2);
        assert_eq!(nb.count_materials(MaterialKind::Link), 0);
    }

    #[test]
    fn test_auth_session_expiry() {
        let s = AuthSession {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            expires_at: 100,
            user: User {
                id: "u1".to_string(),
                email: None,
            },
        };
        assert!(!s.is_expired_at(99));
        assert!(s.is_expired_at(100));
    }
}
