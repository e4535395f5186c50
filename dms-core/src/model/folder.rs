use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EntityState;

/// A hierarchical virtual-filesystem node (§3 Folder).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    #[serde(rename = "_key")]
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
    pub path: String,
    pub state: EntityState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
}

impl Folder {
    /// The root folder: `parent_id = None`, `path = "/"`, `name = ""`.
    pub fn root(created_by: impl Into<String>) -> Self {
        let now = Utc::now();
        Folder {
            id: super::new_id(),
            name: String::new(),
            parent_id: None,
            path: "/".to_string(),
            state: EntityState::Active,
            created_at: now,
            updated_at: now,
            created_by: created_by.into(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Joins a parent path and a child name into a fully-qualified path,
/// honouring the root's special case (`path = "/"`, so the child becomes
/// `"/" + name` rather than `"//" + name`).
pub fn join_path(parent_path: &str, name: &str) -> String {
    if parent_path == "/" {
        format!("/{name}")
    } else {
        format!("{parent_path}/{name}")
    }
}

/// `true` iff `path` equals `ancestor` or is nested under it at a `/`
/// boundary (§4.5 step 1: move-into-self / move-into-own-descendant
/// detection; same anchoring rule as the bulk prefix rewrite in §4.3 so
/// `/a/b` never matches `/a/bc`).
pub fn path_is_self_or_descendant(ancestor: &str, path: &str) -> bool {
    if path == ancestor {
        return true;
    }
    if ancestor == "/" {
        return path.starts_with('/');
    }
    path.starts_with(ancestor) && path[ancestor.len()..].starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_path_handles_root() {
        assert_eq!(join_path("/", "a"), "/a");
        assert_eq!(join_path("/a", "b"), "/a/b");
    }

    #[test]
    fn self_or_descendant_is_boundary_anchored() {
        assert!(path_is_self_or_descendant("/a/b", "/a/b"));
        assert!(path_is_self_or_descendant("/a/b", "/a/b/c"));
        assert!(!path_is_self_or_descendant("/a/b", "/a/bc"));
        assert!(path_is_self_or_descendant("/", "/anything"));
    }
}
