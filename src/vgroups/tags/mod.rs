//! Tag store.
//!
//! Tags are free-form labels attached to scene objects. Each object keeps its
//! tags in a single host property, [`TAG_PROPERTY`], encoded as a JSON array of
//! strings:
//!
//! ```text
//! vg_tags = ["desk", "props", "view-2f1c…"]
//! ```
//!
//! ## Reading
//!
//! A missing property reads as no tags. So does a property that is not a JSON
//! array of strings: a corrupt blob on one object must never stop a scan over
//! the whole scene, so it is logged and treated as empty.
//!
//! ## Writing
//!
//! Every mutation rewrites the whole property in one write. There is no
//! batching; callers editing many objects loop themselves.
//!
//! ## Naming Rules
//!
//! See [`validation`]. The store itself never validates: `add_tag` happily
//! stores anything, which is how the reserved `view-<guid>` membership tags get
//! written.

pub mod set;
pub mod validation;

use crate::error::Result;
use crate::host::PropertyHost;
use std::collections::{BTreeMap, BTreeSet};

pub use set::TagSet;
pub use validation::{validate_tag_name, TagValidationError, MAX_TAG_LENGTH};

/// Host property key holding an object's encoded tag list.
pub const TAG_PROPERTY: &str = "vg_tags";

/// Reads an object's tags in stored order.
pub fn get_tags<H: PropertyHost + ?Sized>(object: &H) -> Vec<String> {
    let Some(raw) = object.property(TAG_PROPERTY) else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(tags) => tags,
        Err(err) => {
            tracing::warn!(error = %err, "unreadable tag data, treating object as untagged");
            Vec::new()
        }
    }
}

/// Overwrites an object's tags.
pub fn set_tags<H: PropertyHost + ?Sized>(object: &mut H, tags: &[String]) -> Result<()> {
    let encoded = serde_json::to_string(tags)?;
    object.set_property(TAG_PROPERTY, encoded);
    Ok(())
}

/// Appends `tag` unless it is already present.
///
/// Returns whether the object changed.
pub fn add_tag<H: PropertyHost + ?Sized>(object: &mut H, tag: &str) -> Result<bool> {
    let mut tags = get_tags(object);
    if tags.iter().any(|t| t == tag) {
        return Ok(false);
    }
    tags.push(tag.to_string());
    set_tags(object, &tags)?;
    Ok(true)
}

/// Removes `tag` if present. Removing an absent tag is a no-op.
///
/// Returns whether the object changed.
pub fn remove_tag<H: PropertyHost + ?Sized>(object: &mut H, tag: &str) -> Result<bool> {
    let mut tags = get_tags(object);
    let Some(pos) = tags.iter().position(|t| t == tag) else {
        return Ok(false);
    };
    tags.remove(pos);
    set_tags(object, &tags)?;
    Ok(true)
}

pub fn has_tag<H: PropertyHost + ?Sized>(object: &H, tag: &str) -> bool {
    get_tags(object).iter().any(|t| t == tag)
}

/// Reads an object's tags as a [`TagSet`] for query evaluation.
pub fn tag_set<H: PropertyHost + ?Sized>(object: &H) -> TagSet {
    get_tags(object).into_iter().collect()
}

/// Every tag used anywhere in the scene, sorted and without duplicates.
pub fn get_all_scene_tags<'a, H, I>(objects: I) -> Vec<String>
where
    H: PropertyHost + 'a,
    I: IntoIterator<Item = &'a H>,
{
    let all: BTreeSet<String> = objects.into_iter().flat_map(|o| get_tags(o)).collect();
    all.into_iter().collect()
}

/// Number of objects carrying each tag, keyed by tag name.
pub fn tag_usage<'a, H, I>(objects: I) -> BTreeMap<String, usize>
where
    H: PropertyHost + 'a,
    I: IntoIterator<Item = &'a H>,
{
    let mut usage = BTreeMap::new();
    for object in objects {
        // Count each object once even if its stored list has duplicates.
        let unique: BTreeSet<String> = get_tags(object).into_iter().collect();
        for tag in unique {
            *usage.entry(tag).or_insert(0) += 1;
        }
    }
    usage
}
