// ABOUTME: Diagnostics accumulator for non-fatal warnings during a listing.
// ABOUTME: Collects lookups that degraded a row to a placeholder instead of failing.

/// Collects non-fatal warnings while rows are being enriched.
#[derive(Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// One-line summary of degraded rows, if any.
    pub fn summary(&self) -> Option<String> {
        let lookups = self
            .warnings
            .iter()
            .filter(|w| w.kind == WarningKind::ImageLookup)
            .count();
        (lookups > 0).then(|| format!("{lookups} image lookups failed; their ages show as ?"))
    }
}

/// A non-fatal warning collected during a listing.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// Create an image lookup warning.
    pub fn image_lookup(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::ImageLookup,
            message: message.into(),
        }
    }
}

/// Categories of warnings that can occur during a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A container's image could not be inspected; its age shows as `?`.
    ImageLookup,
}
