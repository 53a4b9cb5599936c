//! The edited outline: an ordered run of anchors joined by cubic Bezier segments.
//!
//! `Path` is a value. Every operation borrows the current path and hands back the
//! next one, so the same snapshot can be rendered and stored in the history
//! without copying it again (see [`PathRef`]).
//!
//! Operations are total. A request that breaks a precondition (adding after the
//! path was closed, closing with fewer than two anchors, touching an unknown
//! anchor) returns an unchanged copy instead of failing, because the state
//! machine is expected to have disabled the action already.

use std::fmt;
use std::sync::Arc;

use egui::Pos2;
use uuid::Uuid;

pub mod builder;

pub use builder::{PathGeometry, build};

/// Stable identity of an anchor, independent of its index in the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorId(Uuid);

impl AnchorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AnchorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of an anchor's three points is addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointRole {
    Anchor,
    /// Incoming handle, shapes the segment ending at this anchor.
    CpIn,
    /// Outgoing handle, shapes the segment starting at this anchor.
    CpOut,
}

impl PointRole {
    pub fn is_handle(self) -> bool {
        !matches!(self, PointRole::Anchor)
    }
}

/// A vertex of the outline with its two control handles.
///
/// The three points move independently. Dragging one handle never mirrors the
/// other one.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    id: AnchorId,
    pub anchor: Pos2,
    pub cp_in: Pos2,
    pub cp_out: Pos2,
}

impl Anchor {
    /// A fresh anchor with zero-length handles at `position`.
    pub fn at(position: Pos2) -> Self {
        Self {
            id: AnchorId::new(),
            anchor: position,
            cp_in: position,
            cp_out: position,
        }
    }

    pub fn id(&self) -> AnchorId {
        self.id
    }

    pub fn point(&self, role: PointRole) -> Pos2 {
        match role {
            PointRole::Anchor => self.anchor,
            PointRole::CpIn => self.cp_in,
            PointRole::CpOut => self.cp_out,
        }
    }

    pub fn set_point(&mut self, role: PointRole, position: Pos2) {
        match role {
            PointRole::Anchor => self.anchor = position,
            PointRole::CpIn => self.cp_in = position,
            PointRole::CpOut => self.cp_out = position,
        }
    }

    /// Anchor, incoming handle, outgoing handle.
    pub fn points(&self) -> [Pos2; 3] {
        [self.anchor, self.cp_in, self.cp_out]
    }
}

/// Shared, immutable path snapshot.
pub type PathRef = Arc<Path>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    anchors: Vec<Anchor>,
    is_closed: bool,
}

impl Path {
    /// The empty, open path.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn can_close(&self) -> bool {
        self.anchors.len() >= 2
    }

    pub fn find(&self, id: AnchorId) -> Option<&Anchor> {
        self.anchors.iter().find(|anchor| anchor.id == id)
    }

    pub fn contains(&self, id: AnchorId) -> bool {
        self.find(id).is_some()
    }

    /// Every anchor and handle position, in anchor order.
    pub fn all_points(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.anchors.iter().flat_map(Anchor::points)
    }

    /// Append a new anchor at `position`.
    ///
    /// The previous last anchor gets its outgoing handle collapsed onto itself
    /// so every new point starts as a straight join. Ignored once the path is
    /// closed.
    pub fn add_anchor_at_end(&self, position: Pos2) -> Path {
        if self.is_closed {
            log::debug!("add_anchor_at_end ignored: path is closed");
            return self.clone();
        }

        let mut next = self.clone();
        if let Some(last) = next.anchors.last_mut() {
            last.cp_out = last.anchor;
        }
        next.anchors.push(Anchor::at(position));
        next
    }

    /// Replace one point of one anchor. Neighbours are untouched.
    pub fn update_anchor_point(&self, id: AnchorId, role: PointRole, position: Pos2) -> Path {
        let mut next = self.clone();
        match next.anchors.iter_mut().find(|anchor| anchor.id == id) {
            Some(anchor) => anchor.set_point(role, position),
            None => log::debug!("update_anchor_point ignored: unknown anchor {id}"),
        }
        next
    }

    /// Remove an anchor. Dropping below two anchors reopens the path.
    pub fn delete_anchor(&self, id: AnchorId) -> Path {
        let mut next = self.clone();
        let before = next.anchors.len();
        next.anchors.retain(|anchor| anchor.id != id);
        if next.anchors.len() == before {
            log::debug!("delete_anchor ignored: unknown anchor {id}");
        }
        if next.anchors.len() < 2 {
            next.is_closed = false;
        }
        next
    }

    /// Open or close the path. Closing needs at least two anchors.
    pub fn set_closed(&self, closed: bool) -> Path {
        if closed && !self.can_close() {
            log::debug!("set_closed(true) ignored: {} anchor(s)", self.anchors.len());
            return self.clone();
        }
        Path {
            anchors: self.anchors.clone(),
            is_closed: closed,
        }
    }

    pub fn clear(&self) -> Path {
        Path::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_anchor_has_zero_length_handles() {
        let anchor = Anchor::at(Pos2::new(4.0, 9.0));
        assert_eq!(anchor.points(), [Pos2::new(4.0, 9.0); 3]);
    }

    #[test]
    fn mutation_leaves_the_original_untouched() {
        let empty = Path::new();
        let one = empty.add_anchor_at_end(Pos2::new(1.0, 2.0));
        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
    }
}
