//! Brushes: shape sources, masks and effects over a voxel selection.
//!
//! A brush reads its arguments and the previous step's shape from a
//! [`BrushContext`], runs one algorithm to completion and stores its result
//! back into the context for the next step.

pub mod params;
pub mod context;
pub mod registry;
pub mod primitive;
pub mod mask;
pub mod effect;

pub use params::{Param, ParamStore};
pub use context::{BrushContext, CHAIN, MATERIALS_KEY, SHAPE_KEY};
pub use registry::BrushRegistry;

use crate::core::types::Result;
use crate::world::WorldView;

/// What a brush does to the chain state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BrushKind {
    /// Produces a fresh selection
    Shape,
    /// Narrows the current selection
    Mask,
    /// Computes materials from a world snapshot
    Effect,
}

/// Static registration data for a brush.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrushInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub kind: BrushKind,
    pub help: &'static str,
}

/// A single step of a brush chain.
pub trait Brush: Send + Sync {
    fn info(&self) -> &BrushInfo;

    /// Run against `world`, reading and writing chain state in `ctx`.
    ///
    /// Implementations must not touch `ctx` before every fallible step has
    /// succeeded, so an error leaves the chain state unchanged.
    fn run(&self, ctx: &mut BrushContext, world: &dyn WorldView) -> Result<()>;
}

impl<'a> std::fmt::Debug for dyn Brush + 'a {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let info = self.info();
        f.debug_struct("Brush")
            .field("name", &info.name)
            .field("kind", &info.kind)
            .finish()
    }
}

/// User-facing feedback channel.
pub trait Messenger {
    fn send_message(&self, text: &str);
}

/// Result of one brush step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Completed,
    /// Recoverable user error; the message was already sent.
    Aborted(String),
}

/// Run one brush, reporting recoverable errors to the user.
///
/// Fatal errors (argument, unsupported, config, io) are propagated.
pub fn execute_step(
    brush: &dyn Brush,
    ctx: &mut BrushContext,
    world: &dyn WorldView,
    messenger: &dyn Messenger,
) -> Result<StepOutcome> {
    match brush.run(ctx, world) {
        Ok(()) => {
            log::debug!("Brush '{}' completed", brush.info().name);
            Ok(StepOutcome::Completed)
        }
        Err(err) if err.is_recoverable() => {
            let message = err.to_string();
            log::info!("Brush '{}' aborted: {}", brush.info().name, message);
            messenger.send_message(&message);
            Ok(StepOutcome::Aborted(message))
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;

    use super::Messenger;

    /// Messenger that records everything it is sent.
    #[derive(Default)]
    pub struct RecordingMessenger {
        pub messages: RefCell<Vec<String>>,
    }

    impl Messenger for RecordingMessenger {
        fn send_message(&self, text: &str) {
            self.messages.borrow_mut().push(text.to_string());
        }
    }
}
