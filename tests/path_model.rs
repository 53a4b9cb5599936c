use eframe_pen::path::{AnchorId, Path, PointRole};
use egui::Pos2;

fn path_through(points: &[(f32, f32)]) -> Path {
    points
        .iter()
        .fold(Path::new(), |path, &(x, y)| path.add_anchor_at_end(Pos2::new(x, y)))
}

#[test]
fn test_adding_n_points_gives_n_anchors_in_order() {
    let points = [(10.0, 10.0), (50.0, 20.0), (30.0, 80.0), (5.0, 40.0)];
    let path = path_through(&points);

    assert_eq!(path.len(), points.len());
    assert!(!path.is_closed());
    for (anchor, &(x, y)) in path.anchors().iter().zip(points.iter()) {
        assert_eq!(anchor.anchor, Pos2::new(x, y));
    }
}

#[test]
fn test_anchor_ids_are_unique() {
    let path = path_through(&[(0.0, 0.0), (0.0, 0.0), (0.0, 0.0)]);
    let ids: Vec<AnchorId> = path.anchors().iter().map(|a| a.id()).collect();
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
    assert_ne!(ids[0], ids[2]);
}

#[test]
fn test_adding_collapses_previous_outgoing_handle() {
    let path = path_through(&[(10.0, 10.0)]);
    let first = path.anchors()[0].id();
    let path = path.update_anchor_point(first, PointRole::CpOut, Pos2::new(40.0, 60.0));
    assert_eq!(path.anchors()[0].cp_out, Pos2::new(40.0, 60.0));

    let path = path.add_anchor_at_end(Pos2::new(100.0, 10.0));
    assert_eq!(path.anchors()[0].cp_out, Pos2::new(10.0, 10.0));
    // the new anchor starts with both handles on itself
    assert_eq!(path.anchors()[1].cp_in, Pos2::new(100.0, 10.0));
    assert_eq!(path.anchors()[1].cp_out, Pos2::new(100.0, 10.0));
}

#[test]
fn test_closed_path_ignores_new_points() {
    let path = path_through(&[(0.0, 0.0), (10.0, 0.0)]).set_closed(true);
    assert!(path.is_closed());

    let after = path.add_anchor_at_end(Pos2::new(20.0, 20.0));
    assert_eq!(after, path);
}

#[test]
fn test_cannot_close_with_fewer_than_two_anchors() {
    assert!(!Path::new().set_closed(true).is_closed());
    assert!(!path_through(&[(1.0, 1.0)]).set_closed(true).is_closed());
    assert!(path_through(&[(1.0, 1.0), (2.0, 2.0)]).set_closed(true).is_closed());
}

#[test]
fn test_reopening_keeps_anchors() {
    let closed = path_through(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]).set_closed(true);
    let open = closed.set_closed(false);
    assert!(!open.is_closed());
    assert_eq!(open.anchors(), closed.anchors());
}

#[test]
fn test_delete_below_two_anchors_reopens() {
    let closed = path_through(&[(0.0, 0.0), (10.0, 0.0)]).set_closed(true);
    let id = closed.anchors()[1].id();

    let after = closed.delete_anchor(id);
    assert_eq!(after.len(), 1);
    assert!(!after.is_closed());
}

#[test]
fn test_delete_keeps_closed_with_enough_anchors() {
    let closed = path_through(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]).set_closed(true);
    let id = closed.anchors()[0].id();

    let after = closed.delete_anchor(id);
    assert_eq!(after.len(), 2);
    assert!(after.is_closed());
    assert!(!after.contains(id));
}

#[test]
fn test_update_touches_only_the_addressed_point() {
    let path = path_through(&[(0.0, 0.0), (50.0, 0.0)]);
    let second = path.anchors()[1].id();

    let after = path.update_anchor_point(second, PointRole::CpIn, Pos2::new(25.0, 30.0));
    assert_eq!(after.anchors()[0], path.anchors()[0]);
    assert_eq!(after.anchors()[1].anchor, Pos2::new(50.0, 0.0));
    assert_eq!(after.anchors()[1].cp_in, Pos2::new(25.0, 30.0));
    assert_eq!(after.anchors()[1].cp_out, Pos2::new(50.0, 0.0));
}

#[test]
fn test_unknown_anchor_is_a_no_op() {
    let path = path_through(&[(0.0, 0.0), (50.0, 0.0)]);
    let stranger = AnchorId::new();

    assert_eq!(path.update_anchor_point(stranger, PointRole::Anchor, Pos2::new(9.0, 9.0)), path);
    assert_eq!(path.delete_anchor(stranger), path);
}

#[test]
fn test_clear_gives_empty_open_path() {
    let path = path_through(&[(0.0, 0.0), (50.0, 0.0)]).set_closed(true).clear();
    assert!(path.is_empty());
    assert!(!path.is_closed());
}
