//! # Hybrid View Resolution
//!
//! A [`View`] collects objects two ways at once:
//!
//! - **Query**: every object whose tags satisfy `view.query` (dynamic).
//! - **Membership**: every object explicitly added to the View (static).
//!
//! The View's objects are the **union** of the two. One mechanism covers
//! query-only Views, hand-picked Views, and queries with manual additions.
//!
//! ## Membership Encoding
//!
//! Explicit membership is stored as a reserved tag, `view-<guid>`, in the
//! member's own tag list. That keeps membership inside the data the host
//! already persists per object, at the cost of sharing a namespace with user
//! tags. Use [`membership_tag`] and [`is_membership_tag`] rather than building
//! or sniffing the prefix by hand.
//!
//! Membership edits need a guid. A View without one (created before guids
//! existed) resolves by query only, and every membership edit on it fails with
//! [`VgError::MissingGuid`] instead of quietly doing nothing.

use crate::error::{Result, VgError};
use crate::host::SceneEntity;
use crate::model::View;
use crate::scan::match_query;
use crate::tags::{add_tag, has_tag, remove_tag};
use std::collections::BTreeSet;

/// Prefix shared by every membership tag.
pub const MEMBERSHIP_PREFIX: &str = "view-";

/// The reserved tag marking explicit membership in the View with `guid`.
pub fn membership_tag(guid: &str) -> String {
    format!("{}{}", MEMBERSHIP_PREFIX, guid)
}

pub fn is_membership_tag(tag: &str) -> bool {
    tag.starts_with(MEMBERSHIP_PREFIX)
}

fn require_guid(view: &View) -> Result<String> {
    if view.has_guid() {
        Ok(membership_tag(&view.guid))
    } else {
        Err(VgError::MissingGuid(view.name.clone()))
    }
}

/// Names of the objects explicitly added to `view`.
pub fn members<'a, O, I>(view: &View, objects: I) -> BTreeSet<String>
where
    O: SceneEntity + 'a,
    I: IntoIterator<Item = &'a O>,
{
    if !view.has_guid() {
        return BTreeSet::new();
    }
    let tag = membership_tag(&view.guid);
    objects
        .into_iter()
        .filter(|o| has_tag(*o, &tag))
        .map(|o| o.name().to_string())
        .collect()
}

/// Names of every object in `view`: query matches united with explicit members.
pub fn resolve_view<'a, O, I>(view: &View, objects: I) -> BTreeSet<String>
where
    O: SceneEntity + 'a,
    I: IntoIterator<Item = &'a O>,
    I::IntoIter: Clone,
{
    let objects = objects.into_iter();

    let mut resolved = if view.query.trim().is_empty() {
        BTreeSet::new()
    } else {
        match_query(&view.query, objects.clone())
    };
    let explicit = members(view, objects);
    resolved.extend(explicit);

    tracing::debug!(view = %view.name, count = resolved.len(), "resolved view");
    resolved
}

/// Resolves `view` and stores the size in `cached_count`.
pub fn recompute_count<'a, O, I>(view: &mut View, objects: I) -> usize
where
    O: SceneEntity + 'a,
    I: IntoIterator<Item = &'a O>,
    I::IntoIter: Clone,
{
    let count = resolve_view(view, objects).len();
    view.cached_count = count;
    count
}

/// Adds each object to `view`'s explicit membership. Already-members are left
/// alone.
///
/// Returns how many objects were visited.
pub fn add_members<'a, O, I>(view: &View, objects: I) -> Result<usize>
where
    O: SceneEntity + 'a,
    I: IntoIterator<Item = &'a mut O>,
{
    let tag = require_guid(view)?;
    let mut count = 0;
    for object in objects {
        add_tag(object, &tag)?;
        count += 1;
    }
    Ok(count)
}

/// Removes each object from `view`'s explicit membership. Objects that were
/// not members are left alone; objects matching the query stay in the View.
///
/// Returns how many objects were visited.
pub fn remove_members<'a, O, I>(view: &View, objects: I) -> Result<usize>
where
    O: SceneEntity + 'a,
    I: IntoIterator<Item = &'a mut O>,
{
    let tag = require_guid(view)?;
    let mut count = 0;
    for object in objects {
        remove_tag(object, &tag)?;
        count += 1;
    }
    Ok(count)
}

/// Drops every explicit member of `view`. Pass the whole scene.
///
/// Returns how many objects were members.
pub fn clear_membership<'a, O, I>(view: &View, objects: I) -> Result<usize>
where
    O: SceneEntity + 'a,
    I: IntoIterator<Item = &'a mut O>,
{
    let tag = require_guid(view)?;
    let mut cleared = 0;
    for object in objects {
        if remove_tag(object, &tag)? {
            cleared += 1;
        }
    }
    Ok(cleared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SceneObject;
    use crate::tags::{get_tags, set_tags};

    const GUID: &str = "test-guid-12345";

    fn tagged(name: &str, tags: &[&str]) -> SceneObject {
        let mut obj = SceneObject::new(name);
        let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        set_tags(&mut obj, &tags).unwrap();
        obj
    }

    fn names(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn membership_tag_format() {
        assert_eq!(membership_tag("abc-123"), "view-abc-123");
        assert!(is_membership_tag("view-abc-123"));
        assert!(!is_membership_tag("desk"));
        assert!(!is_membership_tag("preview-x"));
    }

    #[test]
    fn query_only_view() {
        let objects = vec![tagged("Desk", &["desk"]), tagged("Lamp", &["lamp"])];
        let view = View::new("Desks", GUID).with_query("tag:desk");
        assert_eq!(resolve_view(&view, &objects), names(&["Desk"]));
    }

    #[test]
    fn membership_only_view() {
        let member = membership_tag(GUID);
        let objects = vec![
            tagged("Desk", &["desk"]),
            tagged("Lamp", &["lamp", member.as_str()]),
        ];
        let view = View::new("Picked", GUID);
        assert_eq!(resolve_view(&view, &objects), names(&["Lamp"]));
    }

    #[test]
    fn hybrid_is_union_not_intersection() {
        let member = membership_tag(GUID);
        let objects = vec![
            tagged("Desk", &["desk"]),
            tagged("Lamp", &["lamp", member.as_str()]),
            tagged("Chair", &["chair"]),
        ];
        let view = View::new("Office", GUID).with_query("tag:desk");
        assert_eq!(resolve_view(&view, &objects), names(&["Desk", "Lamp"]));
    }

    #[test]
    fn object_in_both_halves_counted_once() {
        let member = membership_tag(GUID);
        let objects = vec![tagged("Desk", &["desk", member.as_str()])];
        let mut view = View::new("Office", GUID).with_query("tag:desk");
        assert_eq!(recompute_count(&mut view, &objects), 1);
        assert_eq!(view.cached_count, 1);
    }

    #[test]
    fn other_views_membership_ignored() {
        let other = membership_tag("other-guid");
        let objects = vec![tagged("Lamp", &[other.as_str()])];
        let view = View::new("Mine", GUID);
        assert!(resolve_view(&view, &objects).is_empty());
    }

    #[test]
    fn whitespace_query_treated_as_empty() {
        let objects = vec![tagged("Desk", &["desk"])];
        let view = View::new("Blank", GUID).with_query("   ");
        assert!(resolve_view(&view, &objects).is_empty());
    }

    #[test]
    fn legacy_view_resolves_by_query_only() {
        let objects = vec![tagged("Desk", &["desk"]), tagged("Odd", &["view-"])];
        let view = View::new("Legacy", "").with_query("tag:desk");
        assert_eq!(resolve_view(&view, &objects), names(&["Desk"]));
    }

    #[test]
    fn add_members_is_idempotent() {
        let mut objects = vec![tagged("Desk", &["desk"]), SceneObject::new("Lamp")];
        let view = View::new("Picked", GUID);

        assert_eq!(add_members(&view, objects.iter_mut()).unwrap(), 2);
        assert_eq!(add_members(&view, objects.iter_mut()).unwrap(), 2);

        let member = membership_tag(GUID);
        assert_eq!(get_tags(&objects[0]), vec!["desk".to_string(), member.clone()]);
        assert_eq!(get_tags(&objects[1]), vec![member]);
    }

    #[test]
    fn remove_members_keeps_query_matches() {
        let member = membership_tag(GUID);
        let mut objects = vec![
            tagged("Desk", &["desk", member.as_str()]),
            tagged("Lamp", &[member.as_str()]),
        ];
        let view = View::new("Office", GUID).with_query("tag:desk");

        remove_members(&view, objects.iter_mut()).unwrap();

        assert_eq!(resolve_view(&view, &objects), names(&["Desk"]));
        assert_eq!(get_tags(&objects[0]), vec!["desk"]);
    }

    #[test]
    fn remove_members_on_non_member_is_noop() {
        let mut objects = vec![tagged("Desk", &["desk"])];
        let view = View::new("Office", GUID);
        assert_eq!(remove_members(&view, objects.iter_mut()).unwrap(), 1);
        assert_eq!(get_tags(&objects[0]), vec!["desk"]);
    }

    #[test]
    fn clear_membership_counts_former_members() {
        let member = membership_tag(GUID);
        let other = membership_tag("other");
        let mut objects = vec![
            tagged("A", &[member.as_str()]),
            tagged("B", &["desk", member.as_str(), other.as_str()]),
            tagged("C", &["desk"]),
        ];
        let view = View::new("Picked", GUID);

        assert_eq!(clear_membership(&view, objects.iter_mut()).unwrap(), 2);
        assert!(members(&view, &objects).is_empty());
        assert_eq!(get_tags(&objects[1]), vec!["desk".to_string(), other]);
    }

    #[test]
    fn membership_edits_fail_without_guid() {
        let mut objects = vec![SceneObject::new("Desk")];
        let view = View::new("Legacy", "");

        assert!(matches!(
            add_members(&view, objects.iter_mut()),
            Err(VgError::MissingGuid(name)) if name == "Legacy"
        ));
        assert!(matches!(
            remove_members(&view, objects.iter_mut()),
            Err(VgError::MissingGuid(_))
        ));
        assert!(matches!(
            clear_membership(&view, objects.iter_mut()),
            Err(VgError::MissingGuid(_))
        ));
        assert!(get_tags(&objects[0]).is_empty());
    }
}
