use std::sync::Arc;

use eframe_pen::command::PathHistory;
use eframe_pen::path::{Path, PathRef};
use egui::Pos2;

fn snapshot(points: usize) -> PathRef {
    let path = (0..points).fold(Path::new(), |path, i| {
        path.add_anchor_at_end(Pos2::new(i as f32 * 10.0, 0.0))
    });
    Arc::new(path)
}

#[test]
fn test_new_history_holds_empty_path() {
    let history = PathHistory::new();
    assert_eq!(history.len(), 1);
    assert_eq!(history.index(), 0);
    assert!(history.current().is_empty());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_undo_and_redo_walk_the_entries() {
    let mut history = PathHistory::new();
    for n in 1..=3 {
        history.commit(snapshot(n));
    }
    assert_eq!(history.current().len(), 3);

    assert_eq!(history.undo().map(|p| p.len()), Some(2));
    assert_eq!(history.undo().map(|p| p.len()), Some(1));
    assert_eq!(history.undo().map(|p| p.len()), Some(0));
    assert!(history.undo().is_none());
    assert_eq!(history.index(), 0);

    assert_eq!(history.redo().map(|p| p.len()), Some(1));
    assert!(history.can_redo());
}

#[test]
fn test_redo_at_newest_entry_is_none() {
    let mut history = PathHistory::new();
    history.commit(snapshot(1));
    assert!(history.redo().is_none());
    assert_eq!(history.current().len(), 1);
}

#[test]
fn test_commit_after_undo_discards_redo_branch() {
    let mut history = PathHistory::new();
    history.commit(snapshot(1));
    history.commit(snapshot(2));
    history.commit(snapshot(3));
    history.undo();
    history.undo();

    history.commit(snapshot(5));
    assert_eq!(history.len(), 3);
    assert!(!history.can_redo());
    assert_eq!(history.current().len(), 5);
    assert_eq!(history.undo().map(|p| p.len()), Some(1));
}

#[test]
fn test_undo_returns_the_committed_snapshot() {
    let mut history = PathHistory::new();
    let first = snapshot(2);
    history.commit(Arc::clone(&first));
    history.commit(snapshot(3));

    let restored = history.undo().unwrap();
    assert!(Arc::ptr_eq(&restored, &first));
}

#[test]
fn test_reset_is_not_undoable() {
    let mut history = PathHistory::new();
    history.commit(snapshot(1));
    history.commit(snapshot(2));

    history.reset();
    assert_eq!(history.len(), 1);
    assert!(history.current().is_empty());
    assert!(!history.can_undo());
    assert!(history.undo().is_none());
}
