#![forbid(unsafe_code)]

//! Multi-instance slideshow state machine.
//!
//! Each [`SlideshowInstance`] owns an ordered list of slide elements and a
//! 1-based current position. Moving outside `1..=count` wraps exactly once:
//! past the end lands on `1`, before the start lands on `count`. Larger jumps
//! are not reduced modulo `count`; `3 + 5` on a three-slide show lands on `1`,
//! not `2`.
//!
//! Rendering hides every slide of the instance and then shows the slide at
//! the current position, so exactly one slide is visible afterwards.

use tracing::trace;

use crate::view::View;

/// Resolve a requested 1-based position against `count` slides.
///
/// Returns `None` for an empty slideshow.
#[must_use]
pub fn wrap_position(requested: i64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let count_i64 = i64::try_from(count).unwrap_or(i64::MAX);
    let position = if requested > count_i64 {
        1
    } else if requested < 1 {
        count
    } else {
        // 1 <= requested <= count, so the cast is lossless.
        requested as usize
    };
    Some(position)
}

/// One slideshow: its identifier, slides, and current position.
#[derive(Debug, Clone)]
pub struct SlideshowInstance<E> {
    name: String,
    slides: Vec<E>,
    position: usize,
}

impl<E> SlideshowInstance<E> {
    /// Create an instance positioned on its first slide. Nothing is rendered
    /// until [`render`](Self::render) is called.
    #[must_use]
    pub fn new(name: impl Into<String>, slides: Vec<E>) -> Self {
        Self {
            name: name.into(),
            slides,
            position: 1,
        }
    }

    /// Identifier the slides were collected by (a class name in the DOM host).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn slides(&self) -> &[E] {
        &self.slides
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Current 1-based position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The slide at the current position.
    #[must_use]
    pub fn current(&self) -> Option<&E> {
        self.slides.get(self.position.checked_sub(1)?)
    }

    /// Move by `delta` slides and render. No-op on an empty instance.
    ///
    /// Returns the new position, or `None` if nothing changed.
    pub fn advance<V>(&mut self, view: &mut V, delta: i64) -> Option<usize>
    where
        V: View<Element = E>,
    {
        let position_i64 = i64::try_from(self.position).unwrap_or(i64::MAX);
        self.show(view, position_i64.saturating_add(delta))
    }

    /// Jump to `requested` (1-based, wrapped once) and render.
    pub fn show<V>(&mut self, view: &mut V, requested: i64) -> Option<usize>
    where
        V: View<Element = E>,
    {
        let position = wrap_position(requested, self.count())?;
        self.position = position;
        self.render(view);
        Some(position)
    }

    /// Hide every slide, then show the current one.
    pub fn render<V>(&self, view: &mut V)
    where
        V: View<Element = E>,
    {
        for slide in &self.slides {
            view.set_visible(slide, false);
        }
        if let Some(current) = self.current() {
            view.set_visible(current, true);
        }
    }
}

/// All slideshow instances on the page, addressed by registration index.
#[derive(Debug, Clone)]
pub struct SlideshowRegistry<E> {
    instances: Vec<SlideshowInstance<E>>,
}

impl<E> Default for SlideshowRegistry<E> {
    fn default() -> Self {
        Self {
            instances: Vec::new(),
        }
    }
}

impl<E> SlideshowRegistry<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an instance and return its index.
    pub fn register(&mut self, instance: SlideshowInstance<E>) -> usize {
        self.instances.push(instance);
        self.instances.len() - 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SlideshowInstance<E>> {
        self.instances.get(index)
    }

    /// Index of the instance registered under `name`.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.instances.iter().position(|inst| inst.name() == name)
    }

    /// Current position of instance `index`.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<usize> {
        self.get(index).map(SlideshowInstance::position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlideshowInstance<E>> {
        self.instances.iter()
    }

    /// Render every instance at its current position.
    pub fn render_all<V>(&self, view: &mut V)
    where
        V: View<Element = E>,
    {
        for instance in &self.instances {
            instance.render(view);
        }
    }

    /// Advance instance `index` by `delta`.
    ///
    /// Unknown indexes and empty instances are left untouched.
    pub fn advance<V>(&mut self, view: &mut V, delta: i64, index: usize) -> Option<usize>
    where
        V: View<Element = E>,
    {
        let instance = self.instances.get_mut(index)?;
        let position = instance.advance(view, delta)?;
        trace!(
            slideshow = instance.name(),
            index,
            delta,
            position,
            "slideshow advanced"
        );
        Some(position)
    }
}
