//! Intersection notifications for vertical spans of the page.

/// A target's rows on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub top: u16,
    pub height: u16,
}

impl Span {
    pub fn new(top: u16, height: u16) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> u32 {
        u32::from(self.top) + u32::from(self.height)
    }
}

/// The visible window onto the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportRect {
    pub offset: u16,
    pub height: u16,
}

impl ViewportRect {
    pub fn new(offset: u16, height: u16) -> Self {
        Self { offset, height }
    }

    pub fn bottom(&self) -> u32 {
        u32::from(self.offset) + u32::from(self.height)
    }

    /// Visible fraction of `span`, measured against the smaller of the span
    /// and the viewport so tall targets can reach 1.0.
    pub fn ratio(&self, span: Span) -> f32 {
        if self.height == 0 {
            return 0.0;
        }
        let top = u32::from(span.top).max(u32::from(self.offset));
        let bottom = span.bottom().min(self.bottom());

        if span.height == 0 {
            let inside = u32::from(span.top) >= u32::from(self.offset)
                && u32::from(span.top) < self.bottom();
            return if inside { 1.0 } else { 0.0 };
        }

        let visible = bottom.saturating_sub(top) as f32;
        let basis = f32::from(span.height.min(self.height));
        (visible / basis).min(1.0)
    }
}

/// When a target counts as intersecting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Visible ratio at or above the threshold (and above zero).
    Ratio(f32),
    /// Top edge at or above `offset + fraction * height` of the viewport.
    ///
    /// Stays true once the target scrolls past the top.
    StartLine(f32),
}

impl Trigger {
    fn evaluate(&self, viewport: ViewportRect, span: Span) -> (bool, f32) {
        let ratio = viewport.ratio(span);
        let intersecting = match *self {
            Trigger::Ratio(threshold) => ratio > 0.0 && ratio >= threshold,
            Trigger::StartLine(fraction) => {
                let line = f32::from(viewport.offset) + fraction * f32::from(viewport.height);
                f32::from(span.top) <= line
            }
        };
        (intersecting, ratio)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserveMode {
    /// Detach a target after its first intersecting entry.
    Once,
    /// Report every transition.
    Repeating,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObserverEntry<K> {
    pub target: K,
    pub is_intersecting: bool,
    pub ratio: f32,
}

#[derive(Debug, Clone)]
struct Observed<K> {
    key: K,
    span: Span,
    last: Option<bool>,
}

/// Watches registered targets against the viewport.
///
/// The first evaluation of a target always produces an entry, later ones only
/// on transitions. Entries come back in registration order. Without viewport
/// geometry every target is reported intersecting with ratio 1.0.
#[derive(Debug, Clone)]
pub struct VisibilityObserver<K> {
    trigger: Trigger,
    mode: ObserveMode,
    targets: Vec<Observed<K>>,
}

impl<K> VisibilityObserver<K>
where
    K: Copy + PartialEq + std::fmt::Debug,
{
    pub fn new(trigger: Trigger, mode: ObserveMode) -> Self {
        Self {
            trigger,
            mode,
            targets: Vec::new(),
        }
    }

    /// Register a target, or move an already registered one.
    pub fn observe(&mut self, key: K, span: Span) {
        match self.targets.iter_mut().find(|t| t.key == key) {
            Some(target) => target.span = span,
            None => self.targets.push(Observed {
                key,
                span,
                last: None,
            }),
        }
    }

    /// Move a target after a layout change. Detached targets stay detached.
    pub fn update_span(&mut self, key: K, span: Span) {
        if let Some(target) = self.targets.iter_mut().find(|t| t.key == key) {
            target.span = span;
        }
    }

    pub fn disconnect(&mut self) {
        self.targets.clear();
    }

    pub fn is_observing(&self, key: K) -> bool {
        self.targets.iter().any(|t| t.key == key)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Compute the batch of changes for the current viewport.
    pub fn evaluate(&mut self, viewport: Option<ViewportRect>) -> Vec<ObserverEntry<K>> {
        let trigger = self.trigger;
        let mut entries = Vec::new();

        for target in &mut self.targets {
            let (is_intersecting, ratio) = match viewport {
                Some(viewport) => trigger.evaluate(viewport, target.span),
                None => (true, 1.0),
            };
            if target.last == Some(is_intersecting) {
                continue;
            }
            target.last = Some(is_intersecting);
            entries.push(ObserverEntry {
                target: target.key,
                is_intersecting,
                ratio,
            });
        }

        if self.mode == ObserveMode::Once {
            let fired: Vec<K> = entries
                .iter()
                .filter(|e| e.is_intersecting)
                .map(|e| e.target)
                .collect();
            if !fired.is_empty() {
                log::debug!("One-shot targets fired: {fired:?}");
                self.targets.retain(|t| !fired.contains(&t.key));
            }
        }

        entries
    }
}
