//! Unit tests for uw-topology.
//!
//! Hand-placed fields cover the exact cases; seeded random fields cover the
//! structural properties (symmetry, exclusion, coverage).

#[cfg(test)]
mod helpers {
    use uw_core::{NodeId, Point3, SimRng};
    use uw_field::{Field, Node};

    pub fn field_at(points: &[(f64, f64, f64)]) -> Field {
        let nodes = points
            .iter()
            .enumerate()
            .map(|(i, &(x, y, z))| Node::new(NodeId(i as u32), Point3::new(x, y, z)))
            .collect();
        Field::from_nodes(nodes).unwrap()
    }

    /// Four nodes 80 apart on a line: 0 - 1 - 2 - 3 at range 100.
    pub fn chain() -> Field {
        field_at(&[
            (0.0,   -50.0, 0.0),
            (80.0,  -50.0, 0.0),
            (160.0, -50.0, 0.0),
            (240.0, -50.0, 0.0),
        ])
    }

    pub fn random_field(n: usize, seed: u64) -> Field {
        Field::initialize(n, &mut SimRng::new(seed)).unwrap()
    }

    pub fn ids(raw: &[u32]) -> Vec<NodeId> {
        raw.iter().map(|&i| NodeId(i)).collect()
    }
}

// ── Neighbor discovery ────────────────────────────────────────────────────────

#[cfg(test)]
mod neighbors {
    use uw_core::Point3;

    use super::helpers::{chain, field_at, ids, random_field};
    use crate::{NeighborIndex, compute_neighbors};

    #[test]
    fn chain_one_and_two_hop() {
        let mut field = chain();
        compute_neighbors(&mut field, 100.0);
        let n = field.nodes();
        assert_eq!(n[0].neighbors(), ids(&[1]).as_slice());
        assert_eq!(n[1].neighbors(), ids(&[0, 2]).as_slice());
        assert_eq!(n[2].neighbors(), ids(&[1, 3]).as_slice());
        assert_eq!(n[3].neighbors(), ids(&[2]).as_slice());

        assert_eq!(n[0].two_hop_neighbors(), ids(&[2]).as_slice());
        assert_eq!(n[1].two_hop_neighbors(), ids(&[3]).as_slice());
        assert_eq!(n[2].two_hop_neighbors(), ids(&[0]).as_slice());
        assert_eq!(n[3].two_hop_neighbors(), ids(&[1]).as_slice());
    }

    #[test]
    fn range_is_inclusive() {
        let mut field = field_at(&[(0.0, -10.0, 0.0), (100.0, -10.0, 0.0)]);
        compute_neighbors(&mut field, 100.0);
        assert_eq!(field.nodes()[0].neighbors(), ids(&[1]).as_slice());

        compute_neighbors(&mut field, 99.9);
        assert!(field.nodes()[0].neighbors().is_empty());
    }

    #[test]
    fn isolated_node_has_no_neighbors() {
        let mut field = field_at(&[(0.0, -10.0, 0.0)]);
        compute_neighbors(&mut field, 100.0);
        assert!(field.nodes()[0].neighbors().is_empty());
        assert!(field.nodes()[0].two_hop_neighbors().is_empty());
    }

    #[test]
    fn relation_is_symmetric() {
        for seed in 0..5 {
            for range in [40.0, 100.0, 180.0] {
                let mut field = random_field(60, seed);
                compute_neighbors(&mut field, range);
                for a in field.nodes() {
                    assert!(!a.is_neighbor(a.id), "self-loop at {}", a.id);
                    for b in field.nodes() {
                        if a.id != b.id {
                            assert_eq!(a.is_neighbor(b.id), b.is_neighbor(a.id));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn matches_brute_force() {
        let mut field = random_field(80, 9);
        compute_neighbors(&mut field, 100.0);
        for a in field.nodes() {
            let expected: Vec<_> = field
                .nodes()
                .iter()
                .filter(|b| b.id != a.id && a.position().distance(b.position()) <= 100.0)
                .map(|b| b.id)
                .collect();
            assert_eq!(a.neighbors(), expected.as_slice());
        }
    }

    #[test]
    fn two_hop_excludes_self_and_direct() {
        for seed in 0..5 {
            let mut field = random_field(60, seed);
            compute_neighbors(&mut field, 90.0);
            for node in field.nodes() {
                for &t in node.two_hop_neighbors() {
                    assert_ne!(t, node.id);
                    assert!(!node.is_neighbor(t));
                    // reachable through at least one direct neighbor
                    assert!(node
                        .neighbors()
                        .iter()
                        .any(|&j| field.node(j).unwrap().is_neighbor(t)));
                }
            }
        }
    }

    #[test]
    fn index_range_query() {
        let field = chain();
        let index = NeighborIndex::build(&field);
        assert_eq!(index.len(), 4);
        let mut hits: Vec<_> = index.within(Point3::new(120.0, -50.0, 0.0), 50.0).collect();
        hits.sort();
        assert_eq!(hits, ids(&[1, 2]));
    }
}

// ── MPR selection ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod mpr {
    use uw_core::NodeId;

    use super::helpers::{chain, field_at, ids, random_field};
    use crate::{compute_neighbors, refresh, select_mprs, select_mprs_for};

    #[test]
    fn chain_forced_relays() {
        let mut field = chain();
        refresh(&mut field, 100.0);
        let n = field.nodes();
        assert_eq!(n[0].mprs(), ids(&[1]).as_slice());
        assert_eq!(n[1].mprs(), ids(&[2]).as_slice());
        assert_eq!(n[2].mprs(), ids(&[1]).as_slice());
        assert_eq!(n[3].mprs(), ids(&[2]).as_slice());
    }

    #[test]
    fn tie_goes_to_first_neighbor() {
        // 1 and 2 both reach 3; neither is a unique reacher.
        let mut field = field_at(&[
            (0.0,   -50.0, 0.0),
            (50.0,  -50.0, 30.0),
            (50.0,  -50.0, -30.0),
            (100.0, -50.0, 0.0),
        ]);
        refresh(&mut field, 70.0);
        assert_eq!(field.nodes()[0].two_hop_neighbors(), ids(&[3]).as_slice());
        assert_eq!(field.nodes()[0].mprs(), ids(&[1]).as_slice());
    }

    #[test]
    fn no_two_hop_means_no_mprs() {
        let mut field = field_at(&[(0.0, -10.0, 0.0), (10.0, -10.0, 0.0), (0.0, -20.0, 0.0)]);
        refresh(&mut field, 100.0);
        assert!(field.nodes().iter().all(|n| n.mprs().is_empty()));
    }

    #[test]
    fn uncoverable_targets_end_selection() {
        // Inconsistent tables: node 0 claims 2-hop neighbor 2 but its only
        // neighbor 1 does not reach it.
        let mut field = field_at(&[(0.0, -10.0, 0.0), (10.0, -10.0, 0.0), (500.0, -10.0, 0.0)]);
        field.nodes_mut()[0].set_neighbors(vec![NodeId(1)], vec![NodeId(2)]);
        field.nodes_mut()[1].set_neighbors(vec![NodeId(0)], vec![]);
        let mprs = select_mprs_for(&field.nodes()[0], &field);
        assert!(mprs.is_empty());
    }

    #[test]
    fn selection_covers_every_two_hop_neighbor() {
        for seed in 0..8 {
            let mut field = random_field(80, seed);
            refresh(&mut field, 100.0);
            for node in field.nodes() {
                let mprs = node.mprs();
                // relays are distinct direct neighbors
                for (k, &m) in mprs.iter().enumerate() {
                    assert!(node.is_neighbor(m));
                    assert!(!mprs[..k].contains(&m), "duplicate relay {m}");
                }
                for &t in node.two_hop_neighbors() {
                    let reachable = node
                        .neighbors()
                        .iter()
                        .any(|&j| field.node(j).unwrap().is_neighbor(t));
                    let covered = mprs.iter().any(|&m| field.node(m).unwrap().is_neighbor(t));
                    assert!(covered || !reachable, "{}: target {t} not covered", node.id);
                }
            }
        }
    }

    #[test]
    fn neighbor_refresh_clears_stale_mprs() {
        let mut field = chain();
        refresh(&mut field, 100.0);
        assert!(!field.nodes()[0].mprs().is_empty());
        compute_neighbors(&mut field, 10.0);
        assert!(field.nodes().iter().all(|n| n.mprs().is_empty()));
        select_mprs(&mut field);
        assert!(field.nodes().iter().all(|n| n.mprs().is_empty()));
    }
}
