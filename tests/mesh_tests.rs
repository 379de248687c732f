//! GearMesh integration tests: ring lookup, rotation laws and equality.

use gear_mesh::core::{Cell, Color, Layout, MeshError, MeshRng, Position};
use gear_mesh::mesh::{GearMesh, RING_SIZE};
use proptest::prelude::*;

// =============================================================================
// Helpers
// =============================================================================

/// Canonical board with gear `i` (row-major) painted `palette[i]`.
fn painted_canonical(palette: &[u8]) -> GearMesh {
    let base = Layout::canonical(&Color::default());
    let mut next = palette.iter();
    let rows = (0..base.rows())
        .map(|row| {
            (0..base.cols())
                .map(|col| match base.get(Position::new(row as i32, col as i32)) {
                    Some(Cell::Gear(_)) => {
                        let shade = next.next().copied().unwrap_or(0);
                        Cell::gear(format!("#0000{:02x}", shade))
                    }
                    _ => Cell::Empty,
                })
                .collect()
        })
        .collect();
    GearMesh::new(Layout::from_cells(rows).unwrap())
}

fn distinct_canonical() -> GearMesh {
    painted_canonical(&(0..19).collect::<Vec<u8>>())
}

fn ring_tokens(mesh: &GearMesh, center: Position) -> Vec<String> {
    mesh.ring_colors(center)
        .unwrap()
        .iter()
        .map(|c| c.as_str().to_string())
        .collect()
}

// =============================================================================
// Worked Examples
// =============================================================================

#[test]
fn test_center_rotation_uniform_colors() {
    let mut mesh = GearMesh::new(Layout::canonical(&Color::new("#00c7fd")));
    let before = mesh.clone();

    assert_eq!(mesh.rotate(Position::new(4, 4)), Ok(true));

    // All gears share one color, so nothing visible changes
    assert_eq!(mesh, before);
}

#[test]
fn test_center_rotation_distinct_colors() {
    let mut mesh = distinct_canonical();
    let center = Position::new(4, 4);
    let ring: Vec<_> = mesh.neighbors_of(center).unwrap().into_iter().collect();
    assert_eq!(
        ring,
        vec![
            Position::new(2, 3),
            Position::new(4, 2),
            Position::new(6, 3),
            Position::new(6, 5),
            Position::new(4, 6),
            Position::new(2, 5),
        ]
    );

    let c = ring_tokens(&mesh, center);
    assert_eq!(mesh.rotate(center), Ok(true));

    assert_eq!(
        ring_tokens(&mesh, center),
        vec![
            c[5].clone(),
            c[0].clone(),
            c[1].clone(),
            c[2].clone(),
            c[3].clone(),
            c[4].clone(),
        ]
    );
}

#[test]
fn test_corner_rotation_rejected() {
    let mut mesh = distinct_canonical();
    let before = mesh.clone();

    assert_eq!(mesh.rotate(Position::new(0, 2)), Ok(false));
    assert_eq!(mesh, before);
}

#[test]
fn test_every_edge_gear_rejected() {
    let mesh = distinct_canonical();
    let actuatable = mesh.actuatable();
    assert_eq!(actuatable.len(), 7);

    for &pos in mesh.positions() {
        if actuatable.contains(&pos) {
            continue;
        }
        let mut copy = mesh.clone();
        assert_eq!(copy.rotate(pos), Ok(false), "edge gear {} rotated", pos);
        assert_eq!(copy, mesh);
    }
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_color_at_out_of_bounds() {
    let mesh = distinct_canonical();
    for pos in [
        Position::new(-1, 0),
        Position::new(0, -1),
        Position::new(9, 4),
        Position::new(4, 9),
    ] {
        assert_eq!(
            mesh.color_at(pos),
            Err(MeshError::OutOfBounds {
                position: pos,
                rows: 9,
                cols: 9,
            })
        );
    }
}

#[test]
fn test_color_at_empty_cell() {
    let mesh = distinct_canonical();
    assert_eq!(mesh.color_at(Position::new(0, 0)), Ok(&Cell::Empty));
    assert_eq!(mesh.color_at(Position::new(3, 4)), Ok(&Cell::Empty));
}

#[test]
fn test_not_a_gear_errors() {
    let mut mesh = distinct_canonical();
    let empty = Position::new(4, 3);
    assert_eq!(mesh.neighbors_of(empty), Err(MeshError::NotAGear(empty)));
    assert_eq!(mesh.rotate(empty), Err(MeshError::NotAGear(empty)));
}

#[test]
fn test_with_colored_count_limit() {
    let layout = Layout::canonical(&Color::default());
    let red = Color::new("#ff0000");

    assert!(GearMesh::with_colored(layout.clone(), 19, red.clone(), &mut MeshRng::new(3)).is_ok());
    assert!(matches!(
        GearMesh::with_colored(layout, 20, red, &mut MeshRng::new(3)),
        Err(MeshError::InvalidArgument(_))
    ));
}

#[test]
fn test_with_colored_seed_determinism() {
    let layout = Layout::canonical(&Color::default());
    let red = Color::new("#ff0000");

    let a = GearMesh::with_colored(layout.clone(), 6, red.clone(), &mut MeshRng::new(99)).unwrap();
    let b = GearMesh::with_colored(layout, 6, red, &mut MeshRng::new(99)).unwrap();
    assert_eq!(a, b);
}

// =============================================================================
// Other Layouts
// =============================================================================

#[test]
fn test_larger_hexagon_rings() {
    let mesh = GearMesh::new(Layout::hexagon(3, &Color::default()));
    assert_eq!(mesh.gear_count(), 37);
    // Interior of a radius-3 board is a radius-2 board
    assert_eq!(mesh.actuatable().len(), 19);
}

#[test]
fn test_offset_layout_inside_larger_grid() {
    // A single 7-gear flower in an 11x11 grid, away from the origin
    let mask: Vec<Vec<u8>> = (0..11)
        .map(|row| {
            (0..11)
                .map(|col| {
                    let flower = [(3, 5), (3, 7), (5, 4), (5, 6), (5, 8), (7, 5), (7, 7)];
                    u8::from(flower.contains(&(row, col)))
                })
                .collect()
        })
        .collect();
    let mut mesh = GearMesh::new(Layout::from_mask(&mask, &Color::default()).unwrap());

    assert_eq!(mesh.gear_count(), 7);
    assert_eq!(mesh.actuatable(), vec![Position::new(5, 6)]);
    assert_eq!(mesh.rotate(Position::new(5, 6)), Ok(true));
    assert_eq!(mesh.rotate(Position::new(5, 4)), Ok(false));
}

// =============================================================================
// Properties
// =============================================================================

fn palette() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 19)
}

proptest! {
    #[test]
    fn prop_neighbors_are_gears_in_order(shades in palette()) {
        let mesh = painted_canonical(&shades);
        for &pos in mesh.positions() {
            let ring = mesh.neighbors_of(pos).unwrap();
            prop_assert!(ring.len() <= RING_SIZE);
            for (k, p) in ring.iter().enumerate() {
                prop_assert!(mesh.is_gear(*p));
                prop_assert!(!ring[k + 1..].contains(p));
            }
        }
    }

    #[test]
    fn prop_rotation_permutes_ring(shades in palette(), pick in 0usize..7) {
        let mut mesh = painted_canonical(&shades);
        let center = mesh.actuatable()[pick];

        let mut before = ring_tokens(&mesh, center);
        prop_assert_eq!(mesh.rotate(center), Ok(true));
        let mut after = ring_tokens(&mesh, center);

        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_six_rotations_restore(shades in palette(), pick in 0usize..7) {
        let mut mesh = painted_canonical(&shades);
        let start = mesh.clone();
        let center = mesh.actuatable()[pick];

        for _ in 0..RING_SIZE {
            prop_assert_eq!(mesh.rotate(center), Ok(true));
        }
        prop_assert_eq!(mesh, start);
    }

    #[test]
    fn prop_rotation_touches_only_ring(shades in palette(), pick in 0usize..7) {
        let mut mesh = painted_canonical(&shades);
        let before = mesh.clone();
        let center = mesh.actuatable()[pick];
        let ring = mesh.neighbors_of(center).unwrap();

        mesh.rotate(center).unwrap();

        for row in 0..9 {
            for col in 0..9 {
                let pos = Position::new(row, col);
                if !ring.contains(&pos) {
                    prop_assert_eq!(mesh.color_at(pos), before.color_at(pos));
                }
            }
        }
        prop_assert_eq!(mesh.positions(), before.positions());
    }

    #[test]
    fn prop_equality_laws(a in palette(), b in palette()) {
        let x = painted_canonical(&a);
        let y = painted_canonical(&b);
        prop_assert_eq!(&x, &x);
        prop_assert_eq!(x == y, y == x);
        prop_assert_eq!(x == y, a == b);
    }
}
