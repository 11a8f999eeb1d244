use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::identity::datum::{Datum, UNADDRESSABLE_TAGS};

/// Class applied to every addressable mark.
pub const MARK_CLASS: &str = "mark";

/// Labels reserved per namespace under [`MarkIdScheme::Namespaced`].
pub const NAMESPACE_BLOCK: u64 = 1000;

/// Class tokens derived from a datum, in output order.
pub type ClassTags = SmallVec<[String; 4]>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// How mark-id labels are numbered within an epoch.
pub enum MarkIdScheme {
    /// One counter shared by every mark: `mark1`, `mark2`, ...
    #[default]
    Sequential,
    /// One block of [`NAMESPACE_BLOCK`] labels per `_TYPE` tag, in order of first appearance.
    Namespaced,
}

#[derive(Clone, Copy, Debug)]
struct Block {
    base: u64,
    used: u64,
}

#[derive(Debug, Default)]
/// Issues `markN` labels. Unique until [`MarkIdAllocator::reset`] starts a new epoch.
pub struct MarkIdAllocator {
    scheme: MarkIdScheme,
    next: u64,
    next_block: u64,
    blocks: HashMap<String, Block>,
}

impl MarkIdAllocator {
    pub fn new(scheme: MarkIdScheme) -> Self {
        Self {
            scheme,
            ..Self::default()
        }
    }

    pub fn scheme(&self) -> MarkIdScheme {
        self.scheme
    }

    /// The id for an element carrying `datum`.
    ///
    /// Axes, legends and nested charts get none. An unparseable payload is used verbatim and does
    /// not consume a label.
    pub fn mark_id(&mut self, datum: &Datum) -> Option<String> {
        if !datum.is_addressable() {
            return None;
        }
        if let Datum::Unparseable(raw) = datum {
            return Some(raw.clone());
        }
        let n = match self.scheme {
            MarkIdScheme::Sequential => {
                self.next += 1;
                self.next
            }
            MarkIdScheme::Namespaced => self.next_in_namespace(datum.type_tag().unwrap_or("")),
        };
        Some(format!("{MARK_CLASS}{n}"))
    }

    fn next_in_namespace(&mut self, namespace: &str) -> u64 {
        let next_block = &mut self.next_block;
        let mut take_block = || {
            let base = *next_block * NAMESPACE_BLOCK;
            *next_block += 1;
            Block { base, used: 0 }
        };

        let block = self
            .blocks
            .entry(namespace.to_owned())
            .or_insert_with(&mut take_block);
        if block.used + 1 >= NAMESPACE_BLOCK {
            *block = take_block();
            tracing::debug!(namespace, base = block.base, "mark-id namespace spilled into a new block");
        }
        block.used += 1;
        block.base + block.used
    }

    /// Start a new epoch; labels restart from the first.
    pub fn reset(&mut self) {
        self.next = 0;
        self.next_block = 0;
        self.blocks.clear();
    }
}

/// Class tokens for an element carrying `datum`.
///
/// | datum | classes |
/// |---|---|
/// | `_TYPE` starting with `axis-` or `legend-` | `mark`, tag |
/// | `_TYPE` of `axis`, `legend` or `nested-chart` | tag |
/// | other `_TYPE` | `mark`, `_MARKID` (when present), tag |
/// | no `_TYPE` | `mark` |
/// | not JSON | none |
pub fn classify(datum: &Datum) -> ClassTags {
    let mut tags = ClassTags::new();
    match datum {
        Datum::Unparseable(_) => {}
        Datum::Untagged => tags.push(MARK_CLASS.to_owned()),
        Datum::Tagged { type_tag, mark_id } => {
            if type_tag.starts_with("axis-") || type_tag.starts_with("legend-") {
                tags.push(MARK_CLASS.to_owned());
            } else if !UNADDRESSABLE_TAGS.contains(&type_tag.as_str()) {
                tags.push(MARK_CLASS.to_owned());
                tags.extend(mark_id.iter().cloned());
            }
            tags.push(type_tag.clone());
        }
    }
    tags
}

#[cfg(test)]
#[path = "../../tests/unit/identity/marks.rs"]
mod tests;
