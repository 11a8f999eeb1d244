use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{
    foundation::error::ChartResult,
    identity::{
        marks::{MarkIdAllocator, MarkIdScheme},
        unique::UniqueIdPool,
    },
    output::{
        element::{SvgElement, SvgTag},
        markup::SvgDocument,
    },
    render::options::RenderOptions,
    scene::model::Element,
};

/// Instance key of a root rendered without [`RenderOptions::key`].
pub const ROOT_KEY: &str = "root";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Settings fixed for the lifetime of a [`RenderSession`].
pub struct SessionConfig {
    pub mark_id_scheme: MarkIdScheme,
    /// Seed of the reference-id stream; equal seeds give equal ids for equal renders.
    pub id_seed: u64,
    /// Base36 digits per reference id, after the `u` prefix.
    pub id_token_len: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mark_id_scheme: MarkIdScheme::Sequential,
            id_seed: 0x5EED_C4A7_0000_0001,
            id_token_len: 6,
        }
    }
}

impl SessionConfig {
    pub fn from_json(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug)]
/// Owns everything that must persist between render passes of one chart view.
///
/// Mark ids restart with every [`RenderSession::render`] call. Text-path reference ids persist
/// for as long as the same instance key keeps being rendered and are released after the first
/// pass that does not render it. Use one session per view; sessions share nothing.
pub struct RenderSession {
    config: SessionConfig,
    pub(super) marks: MarkIdAllocator,
    ids: UniqueIdPool,
    text_paths: HashMap<String, String>,
    visited: HashSet<String>,
}

impl Default for RenderSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl RenderSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            marks: MarkIdAllocator::new(config.mark_id_scheme),
            ids: UniqueIdPool::new(config.id_seed, config.id_token_len),
            text_paths: HashMap::new(),
            visited: HashSet::new(),
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Render one pass. `None` renders nothing and leaves the session untouched.
    #[tracing::instrument(skip_all, fields(kind = element.map(|e| e.kind.name()), key = ?options.key))]
    pub fn render(
        &mut self,
        element: Option<&Element>,
        options: &RenderOptions,
    ) -> Option<SvgElement> {
        let element = element?;
        self.marks.reset();
        self.visited.clear();

        let root_path = options.key.as_deref().unwrap_or(ROOT_KEY).to_owned();
        let out = self.render_node(element, options, &root_path);
        self.release_unvisited();
        tracing::debug!(text_paths = self.text_paths.len(), "render pass complete");
        Some(out)
    }

    /// Render one pass onto a standalone canvas of the given size.
    pub fn render_document(
        &mut self,
        element: &Element,
        options: &RenderOptions,
        width: f64,
        height: f64,
    ) -> SvgDocument {
        let content = self
            .render(Some(element), options)
            .unwrap_or_else(|| SvgElement::new(SvgTag::G));
        SvgDocument::new(width, height, content)
    }

    /// Number of text-path references currently held.
    pub fn live_text_paths(&self) -> usize {
        self.text_paths.len()
    }

    /// The reference id for the text-path instance at `instance_key`, allocating on first use.
    pub(super) fn text_path_ref(&mut self, instance_key: &str) -> String {
        self.visited.insert(instance_key.to_owned());
        if let Some(id) = self.text_paths.get(instance_key) {
            return id.clone();
        }
        let id = self.ids.allocate();
        self.text_paths.insert(instance_key.to_owned(), id.clone());
        id
    }

    fn release_unvisited(&mut self) {
        let visited = &self.visited;
        let ids = &mut self.ids;
        self.text_paths.retain(|key, id| {
            let keep = visited.contains(key);
            if !keep {
                ids.release(id);
                tracing::debug!(key = %key, id = %id, "released text-path reference");
            }
            keep
        });
    }
}

/// Render with a throwaway session.
pub fn render(element: Option<&Element>, options: &RenderOptions) -> Option<SvgElement> {
    RenderSession::default().render(element, options)
}

#[cfg(test)]
#[path = "../../tests/unit/render/session.rs"]
mod tests;
