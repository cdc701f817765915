//! Traversal control for [`Index::walk`](crate::Index::walk).
//!
//! A visitor may return any value that converts into [`Walk`]. Only an explicit `false`
//! (or [`Walk::Stop`], `Some(false)`, or a `ControlFlow::Break`) ends the traversal;
//! everything else, `()` included, keeps going.

use std::ops::ControlFlow;

/// Whether a depth-first walk keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Walk {
    /// Visit the node's children, then its following siblings.
    #[default]
    Continue,
    /// Abort the whole traversal, siblings and ancestors' siblings included.
    Stop,
}

impl Walk {
    /// Returns true if the traversal was aborted.
    pub fn is_stop(self) -> bool {
        self == Self::Stop
    }
}

impl From<()> for Walk {
    fn from((): ()) -> Self {
        Self::Continue
    }
}

impl From<bool> for Walk {
    fn from(keep_going: bool) -> Self {
        if keep_going {
            Self::Continue
        } else {
            Self::Stop
        }
    }
}

impl From<Option<bool>> for Walk {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(false) => Self::Stop,
            Some(true) | None => Self::Continue,
        }
    }
}

impl<B, C> From<ControlFlow<B, C>> for Walk {
    fn from(flow: ControlFlow<B, C>) -> Self {
        match flow {
            ControlFlow::Continue(_) => Self::Continue,
            ControlFlow::Break(_) => Self::Stop,
        }
    }
}
