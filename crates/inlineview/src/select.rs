use std::time::Instant;

use log::{debug, trace};

use crate::classify::classify;
use crate::error::InvariantViolation;
use crate::model::{CachedView, ViewContext, ViewKind};

/// Chooses the presentation for consecutive renders of one edit session.
/// The kind picked for an edit is kept until the edit itself changes, or
/// until a width change invalidates a width-sensitive layout, so cosmetic
/// re-renders do not flip the visualization.
#[derive(Debug, Default)]
pub struct ViewSelector {
    cached: Option<CachedView>,
}

impl ViewSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks the kind for this render. `collapsed` overrides the reported
    /// kind while the cache keeps the true classification.
    pub fn select(&mut self, ctx: &ViewContext, collapsed: bool) -> ViewKind {
        self.select_with(ctx, collapsed, classify)
    }

    pub(crate) fn select_with(
        &mut self,
        ctx: &ViewContext,
        collapsed: bool,
        classifier: impl FnOnce(&ViewContext) -> ViewKind,
    ) -> ViewKind {
        let kind = match self.reusable_kind(ctx) {
            Some(kind) => {
                trace!("reusing cached view kind {kind:?}");
                kind
            }
            None => {
                let kind = classifier(ctx);
                let shown_since = match &self.cached {
                    Some(cached) if cached.kind == kind => cached.shown_since,
                    Some(cached) => {
                        debug!("view kind changed from {:?} to {kind:?}", cached.kind);
                        Instant::now()
                    }
                    None => Instant::now(),
                };
                self.cached = Some(CachedView {
                    identity: ctx.identity.clone(),
                    kind,
                    editor_width: ctx.editor_width,
                    shown_since,
                });
                kind
            }
        };

        if collapsed {
            ViewKind::Collapsed
        } else {
            kind
        }
    }

    fn reusable_kind(&self, ctx: &ViewContext) -> Option<ViewKind> {
        let cached = self.cached.as_ref()?;
        if cached.identity != ctx.identity {
            return None;
        }
        if cached.kind.is_width_sensitive() && cached.editor_width != ctx.editor_width {
            return None;
        }
        Some(cached.kind)
    }

    /// Whether `editor_width` would force the cached kind to be
    /// reconsidered. Asking before anything was cached is a caller bug.
    pub fn stale_after_resize(&self, editor_width: u32) -> Result<bool, InvariantViolation> {
        let Some(cached) = &self.cached else {
            return Err(InvariantViolation::NothingCached);
        };
        Ok(cached.kind.is_width_sensitive() && cached.editor_width != editor_width)
    }

    /// Since when the current kind has been continuously displayed.
    pub fn shown_since(&self) -> Option<Instant> {
        self.cached.as_ref().map(|cached| cached.shown_since)
    }

    /// Ends the presentation session.
    pub fn clear(&mut self) {
        self.cached = None;
    }
}
