// MIT/Apache2 License

use crate::Surface;
use lyon_path::{iterator::PathIterator, PathEvent};

/// Replay a series of path events onto a surface's path construction methods. Curves are flattened into
/// line segments first.
#[inline]
pub(crate) fn trace_path<S: Surface + ?Sized, I: IntoIterator<Item = PathEvent>>(
    s: &mut S,
    iter: I,
) -> crate::Result {
    iter.into_iter()
        .flattened(0.5)
        .try_for_each(|event| match event {
            PathEvent::Begin { at } => s.move_to(at.x.into(), at.y.into()),
            PathEvent::Line { to, .. } => s.line_to(to.x.into(), to.y.into()),
            PathEvent::End { close: true, .. } => s.close_path(),
            _ => Ok(()),
        })
}
