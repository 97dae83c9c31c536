use std::collections::VecDeque;

use super::state::{Patch, StateDelta};

/// Component definition: initializer and render function supplied as data.
pub struct ViewSpec<P, S, V> {
    pub name: &'static str,
    pub init: fn(&P) -> S,
    pub render: fn(&P, &S) -> V,
}

impl<P, S, V> Clone for ViewSpec<P, S, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, S, V> Copy for ViewSpec<P, S, V> {}

impl<P, S, V> ViewSpec<P, S, V> {
    pub const fn new(name: &'static str, init: fn(&P) -> S, render: fn(&P, &S) -> V) -> Self {
        Self { name, init, render }
    }

    /// Run the initializer and take ownership of the props.
    pub fn mount(self, props: P) -> ViewHost<P, S, V>
    where
        S: Patch + Clone,
    {
        ViewHost::mount(self, props)
    }
}

/// A mounted component.
///
/// Owns props, the committed state, the queue of not-yet-applied deltas and
/// the most recent render. The only constructor is [`ViewHost::mount`], so a
/// host never exists without initialized state.
pub struct ViewHost<P, S: Patch, V> {
    spec: ViewSpec<P, S, V>,
    props: P,
    state: S,
    pending: VecDeque<StateDelta<S::Field>>,
    needs_render: bool,
    rendered: Option<V>,
    render_count: u64,
}

impl<P, S, V> ViewHost<P, S, V>
where
    S: Patch + Clone,
{
    pub fn mount(spec: ViewSpec<P, S, V>, props: P) -> Self {
        let state = (spec.init)(&props);
        tracing::trace!(view = spec.name, "mounted");
        Self {
            spec,
            props,
            state,
            pending: VecDeque::new(),
            needs_render: true,
            rendered: None,
            render_count: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    /// Committed state (deltas still queued are not reflected)
    pub fn state(&self) -> &S {
        &self.state
    }

    /// State as it will be once the queue is flushed
    pub fn latest_state(&self) -> S
    where
        S::Field: Clone,
    {
        self.pending
            .iter()
            .cloned()
            .fold(self.state.clone(), |state, delta| delta.apply_to(state))
    }

    pub fn set_single_state(&mut self, field: S::Field) {
        self.enqueue(StateDelta::Single(field));
    }

    pub fn set_multi_state<I>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S::Field>,
    {
        self.enqueue(StateDelta::Multi(fields.into_iter().collect()));
    }

    pub fn enqueue(&mut self, delta: StateDelta<S::Field>) {
        if delta.is_empty() {
            return;
        }
        self.pending.push_back(delta);
    }

    pub fn set_props(&mut self, props: P) {
        self.props = props;
        self.needs_render = true;
    }

    pub fn update_props(&mut self, update: impl FnOnce(&mut P)) {
        update(&mut self.props);
        self.needs_render = true;
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_dirty(&self) -> bool {
        self.needs_render || !self.pending.is_empty()
    }

    /// Apply all queued deltas in arrival order and render once if anything
    /// changed. Returns whether a render happened.
    pub fn flush(&mut self) -> bool {
        if !self.pending.is_empty() {
            let mut next = self.state.clone();
            while let Some(delta) = self.pending.pop_front() {
                next = delta.apply_to(next);
            }
            self.state = next;
            self.needs_render = true;
        }

        if !self.needs_render {
            return false;
        }

        self.rendered = Some((self.spec.render)(&self.props, &self.state));
        self.needs_render = false;
        self.render_count += 1;
        tracing::trace!(view = self.spec.name, renders = self.render_count, "rendered");
        true
    }

    /// Flush, then return the current render.
    pub fn view(&mut self) -> &V {
        self.flush();
        match self.rendered {
            Some(ref view) => view,
            None => unreachable!("flush renders at least once after mount"),
        }
    }

    /// Most recent render without flushing
    pub fn last_view(&self) -> Option<&V> {
        self.rendered.as_ref()
    }

    pub fn render_count(&self) -> u64 {
        self.render_count
    }
}
