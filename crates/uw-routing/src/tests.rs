//! Unit tests for uw-routing.

#[cfg(test)]
mod helpers {
    use uw_core::{NodeId, Point3, SimRng};
    use uw_field::{Field, Node};

    /// `(x, y, z, energy)` per node; ids follow slice order.
    pub fn field_of(specs: &[(f64, f64, f64, f64)]) -> Field {
        let nodes = specs
            .iter()
            .enumerate()
            .map(|(i, &(x, y, z, e))| {
                Node::new(NodeId(i as u32), Point3::new(x, y, z)).with_energy(e)
            })
            .collect();
        Field::from_nodes(nodes).unwrap()
    }

    /// Random layout with random energies in `[0, 100)`.
    pub fn drained_field(n: usize, seed: u64) -> Field {
        let mut rng = SimRng::new(seed);
        let mut field = Field::initialize(n, &mut rng).unwrap();
        for node in field.nodes_mut() {
            node.set_energy(rng.unit() * 100.0);
        }
        field
    }

    pub fn ids(nodes: &[&Node]) -> Vec<u32> {
        nodes.iter().map(|n| n.id.index() as u32).collect()
    }
}

// ── VBF / HHVBF ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod vector {
    use super::helpers::{field_of, ids};
    use crate::{ForwarderSelector, Hhvbf, Vbf};

    #[test]
    fn vbf_keeps_nodes_inside_pipe_ahead_of_source() {
        let field = field_of(&[
            (0.0, -100.0, 0.0, 100.0), // source
            (10.0, -50.0, 0.0, 100.0), // in pipe
            (60.0, -50.0, 0.0, 100.0), // 60 off axis
            (0.0, -150.0, 0.0, 100.0), // behind
            (0.0, -50.0, 50.0, 100.0), // exactly on the pipe wall
            (0.0, -60.0, 0.0, 5.0),    // drained
        ]);
        let out = Vbf.select_forwarders(&field.nodes()[0], &field);
        assert_eq!(ids(&out), vec![1, 4]);
    }

    #[test]
    fn vbf_source_on_sink_selects_nobody() {
        let field = field_of(&[(0.0, 0.0, 0.0, 100.0), (0.0, -10.0, 0.0, 100.0)]);
        assert!(Vbf.select_forwarders(&field.nodes()[0], &field).is_empty());
    }

    #[test]
    fn hhvbf_range_window_and_progress() {
        let field = field_of(&[
            (0.0, -100.0, 0.0, 100.0), // source, 100 from sink
            (0.0, -90.0, 0.0, 100.0),  // hop 10, too close
            (0.0, -50.0, 0.0, 100.0),  // hop 50, closer to sink
            (0.0, -250.0, 0.0, 100.0), // hop 150, farther from sink
            (0.0, -100.0, 30.0, 100.0),// hop 30, farther from sink
            (0.0, -80.0, 0.0, 100.0),  // hop exactly 20
        ]);
        let out = Hhvbf.select_forwarders(&field.nodes()[0], &field);
        assert_eq!(ids(&out), vec![2, 5]);
    }

    #[test]
    fn hhvbf_pipe_radius_not_applied() {
        // 80 off the source→sink axis, still within range and closer.
        let field = field_of(&[(0.0, -150.0, 0.0, 100.0), (80.0, -60.0, 0.0, 100.0)]);
        let out = Hhvbf.select_forwarders(&field.nodes()[0], &field);
        assert_eq!(ids(&out), vec![1]);
    }
}

// ── DBR / EEDBR ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod depth {
    use super::helpers::{drained_field, field_of, ids};
    use crate::{Dbr, Eedbr, ForwarderSelector};

    #[test]
    fn dbr_column_picks_shallower_only() {
        let field = field_of(&[
            (0.0, -10.0, 0.0, 100.0),
            (0.0, -50.0, 0.0, 100.0),
            (0.0, -90.0, 0.0, 100.0),
        ]);
        let out = Dbr.select_forwarders(&field.nodes()[1], &field);
        assert_eq!(ids(&out), vec![0]);
    }

    #[test]
    fn dbr_equal_depth_excluded() {
        let field = field_of(&[(0.0, -50.0, 0.0, 100.0), (40.0, -50.0, 9.0, 100.0)]);
        assert!(Dbr.select_forwarders(&field.nodes()[0], &field).is_empty());
    }

    #[test]
    fn eedbr_ranks_by_depth_and_energy() {
        let field = field_of(&[
            (0.0, -90.0, 0.0, 100.0), // source
            (0.0, -10.0, 0.0, 20.0),  // 63 + 6  = 69
            (0.0, -30.0, 0.0, 100.0), // 49 + 30 = 79
            (0.0, -50.0, 0.0, 50.0),  // 35 + 15 = 50
        ]);
        let out = Eedbr.select_forwarders(&field.nodes()[0], &field);
        assert_eq!(ids(&out), vec![2, 1, 3]);
        assert!(Eedbr.is_ranked());
    }

    #[test]
    fn eedbr_scores_non_increasing() {
        for seed in 0..6 {
            let field = drained_field(80, seed);
            for source in field.nodes().iter().take(10) {
                let out = Eedbr.select_forwarders(source, &field);
                for pair in out.windows(2) {
                    assert!(Eedbr::score(pair[0]) >= Eedbr::score(pair[1]));
                }
            }
        }
    }
}

// ── OLSR ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod olsr {
    use uw_core::NodeId;

    use super::helpers::{drained_field, field_of, ids};
    use crate::{ForwarderSelector, Olsr};

    fn tables() -> uw_field::Field {
        field_of(&[
            (0.0, -200.0, 0.0, 100.0), // source
            (0.0, -150.0, 0.0, 50.0),  // cost 105 - 15 = 90
            (30.0, -150.0, 0.0, 90.0), // cost ≈ 107.1 - 27 = 80.1
            (0.0, -120.0, 0.0, 15.0),  // weak
        ])
    }

    #[test]
    fn near_sink_selects_nobody() {
        let mut field = field_of(&[(0.0, -50.0, 0.0, 100.0), (0.0, -20.0, 0.0, 100.0)]);
        field.nodes_mut()[0].set_neighbors(vec![NodeId(1)], vec![]);
        field.nodes_mut()[0].set_mprs(vec![NodeId(1)]);
        assert!(Olsr.select_forwarders(&field.nodes()[0], &field).is_empty());
    }

    #[test]
    fn mprs_ranked_by_cost() {
        let mut field = tables();
        let all = vec![NodeId(1), NodeId(2), NodeId(3)];
        field.nodes_mut()[0].set_neighbors(all.clone(), vec![]);
        field.nodes_mut()[0].set_mprs(all);
        let out = Olsr.select_forwarders(&field.nodes()[0], &field);
        assert_eq!(ids(&out), vec![2, 1]);
    }

    #[test]
    fn weak_mprs_fall_back_to_neighbors() {
        let mut field = tables();
        field.nodes_mut()[0].set_neighbors(vec![NodeId(1), NodeId(2), NodeId(3)], vec![]);
        field.nodes_mut()[0].set_mprs(vec![NodeId(3)]);
        let out = Olsr.select_forwarders(&field.nodes()[0], &field);
        assert_eq!(ids(&out), vec![3, 1, 2]);
    }

    #[test]
    fn without_tables_selects_nobody() {
        let field = tables();
        assert!(Olsr.select_forwarders(&field.nodes()[0], &field).is_empty());
    }

    #[test]
    fn refreshed_results_are_neighbors() {
        let mut field = drained_field(60, 4);
        uw_topology::refresh(&mut field, 100.0);
        for source in field.nodes() {
            for c in Olsr.select_forwarders(source, &field) {
                assert!(source.is_neighbor(c.id));
            }
        }
    }
}

// ── Flood / strategy ──────────────────────────────────────────────────────────

#[cfg(test)]
mod strategy {
    use uw_core::Protocol;

    use super::helpers::{drained_field, field_of, ids};
    use crate::{Flood, ForwarderSelector, MIN_FORWARDER_ENERGY, RoutingStrategy};

    #[test]
    fn flood_requires_energy_above_floor() {
        let field = field_of(&[
            (0.0, -50.0, 0.0, 100.0),
            (0.0, -60.0, 0.0, 10.0),
            (0.0, -70.0, 0.0, 10.5),
        ]);
        let out = Flood.select_forwarders(&field.nodes()[0], &field);
        assert_eq!(ids(&out), vec![2]);
    }

    #[test]
    fn protocol_mapping() {
        for p in Protocol::ALL {
            assert_eq!(RoutingStrategy::from_protocol(p).protocol(), p);
        }
        assert!(matches!(RoutingStrategy::from(Protocol::Basic), RoutingStrategy::Flood(_)));
    }

    #[test]
    fn ranked_variants() {
        let ranked: Vec<Protocol> = Protocol::ALL
            .into_iter()
            .filter(|&p| RoutingStrategy::from_protocol(p).is_ranked())
            .collect();
        assert_eq!(ranked, vec![Protocol::Eedbr, Protocol::Olsr]);
    }

    #[test]
    fn never_source_never_drained() {
        for seed in 0..4 {
            let mut field = drained_field(70, seed);
            uw_topology::refresh(&mut field, 100.0);
            for p in Protocol::ALL {
                let strategy = RoutingStrategy::from_protocol(p);
                for source in field.nodes() {
                    for c in strategy.select_forwarders(source, &field) {
                        assert_ne!(c.id, source.id, "{p}: returned source");
                        assert!(c.energy() >= MIN_FORWARDER_ENERGY, "{p}: drained {}", c.id);
                    }
                }
            }
        }
    }
}
