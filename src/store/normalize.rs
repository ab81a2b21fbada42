use std::collections::HashSet;

use tracing::warn;

use crate::models::Record;
use crate::models::session::entities::SessionIdentity;
use crate::utils::new_id;

/// 加载边界上的 ID 规整：空 ID 补发新 ID，重复 ID 只保留第一条
pub fn normalize_ids<T: Record>(items: Vec<T>, collection: &str) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut result = Vec::with_capacity(items.len());

    for mut item in items {
        if item.id().trim().is_empty() {
            warn!("{} entry without id, assigning a new one", collection);
            item.set_id(new_id());
        }
        if !seen.insert(item.id().to_string()) {
            warn!("Dropping {} entry with duplicate id {}", collection, item.id());
            continue;
        }
        result.push(item);
    }

    result
}

/// 会话身份要么缺失，要么是有效的 (name, role)
pub fn normalize_session(identity: Option<SessionIdentity>) -> Option<SessionIdentity> {
    identity.and_then(|mut identity| {
        identity.name = identity.name.trim().to_string();
        if identity.name.is_empty() {
            warn!("Stored session identity has an empty name, ignoring it");
            None
        } else {
            Some(identity)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::forum::entities::ForumPost;
    use crate::models::session::entities::Role;

    fn post(id: &str, message: &str) -> ForumPost {
        ForumPost {
            id: id.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_duplicates_dropped_and_blank_ids_filled() {
        let posts = vec![post("a", "first"), post("", "blank"), post("a", "dup"), post("b", "ok")];
        let normalized = normalize_ids(posts, "forum");
        assert_eq!(normalized.len(), 3);
        assert_eq!(normalized[0].message, "first");
        assert_eq!(normalized[1].message, "blank");
        assert!(!normalized[1].id.is_empty());
        assert_eq!(normalized[2].id, "b");
    }

    #[test]
    fn test_session_with_blank_name_is_absent() {
        assert_eq!(normalize_session(Some(SessionIdentity::new("  ", Role::Student))), None);
        assert_eq!(
            normalize_session(Some(SessionIdentity::new(" Bob ", Role::Student))),
            Some(SessionIdentity::new("Bob", Role::Student))
        );
        assert_eq!(normalize_session(None), None);
    }
}
