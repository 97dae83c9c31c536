//! Component state lifecycle
//!
//! A component is described by a [`ViewSpec`]: an initializer from props to
//! state and a render function from `(props, state)` to a view model. Mounting
//! a spec yields a [`ViewHost`], the only place the state lives.
//!
//! ## Update model:
//! - `set_single_state` / `set_multi_state` enqueue a [`StateDelta`]
//! - Nothing is applied until [`ViewHost::flush`]
//! - A flush applies every queued delta in arrival order, then renders once
//!
//! State values are replaced wholesale by [`Patch::apply`], never mutated in
//! place.

mod host;
mod state;

pub use host::{ViewHost, ViewSpec};
pub use state::{EmptyState, Patch, StateDelta};
