//! Planner, pathfinder, and transcript tests.
//!
//! The `scenarios` module pins exact transcripts for small hand-built maps;
//! `random` sweeps seeded random fleets and checks the structural invariants
//! every plan must satisfy.

#[cfg(test)]
mod helpers {
    use sw_core::{GridPoint, HubRole, Turn, Zone};
    use sw_graph::{ReservationTracker, TimeGraph};
    use sw_topology::{Topology, TopologyBuilder};

    use crate::{FleetPlan, FleetPlanner};

    pub fn plan(topo: &Topology) -> FleetPlan {
        FleetPlanner::plan(topo).unwrap()
    }

    /// Linear corridor `start — w1 — … — w<k> — goal`, all link capacities 1.
    pub fn corridor(intermediates: usize, nb_drones: u16) -> Topology {
        let mut b = TopologyBuilder::new(nb_drones);
        let fleet = u32::from(nb_drones);
        let mut prev = b
            .add_hub("start", HubRole::Start, Zone::Normal, GridPoint::new(0, 0), fleet)
            .unwrap();
        for i in 0..intermediates {
            let hub = b
                .add_hub(
                    format!("w{}", i + 1),
                    HubRole::Intermediate,
                    Zone::Normal,
                    GridPoint::new(i as i32 + 1, 0),
                    1,
                )
                .unwrap();
            b.add_link(prev, hub, 1).unwrap();
            prev = hub;
        }
        let goal = b
            .add_hub(
                "goal",
                HubRole::End,
                Zone::Normal,
                GridPoint::new(intermediates as i32 + 1, 0),
                fleet,
            )
            .unwrap();
        b.add_link(prev, goal, 1).unwrap();
        b.build().unwrap()
    }

    /// Assert the structural invariants every committed plan must satisfy:
    /// routes anchored at the terminals, strictly monotonic turns, every step
    /// an existing edge, and a full reservation replay that never exceeds a
    /// capacity.
    pub fn assert_plan_valid(topo: &Topology, plan: &FleetPlan) {
        let mut graph = TimeGraph::build(topo, plan.horizon);
        let mut tracker = ReservationTracker::new();
        let start = graph.start_node();

        assert_eq!(plan.routes.len(), usize::from(topo.nb_drones));
        for (i, route) in plan.routes.iter().enumerate() {
            assert_eq!(route.drone.index(), i);
            assert_eq!(route.nodes[0], start, "route must begin at the start hub, turn 0");

            let last = *route.nodes.last().unwrap();
            assert_eq!(graph.hub_of(last), topo.end);
            assert!(graph.turn_of(last) <= plan.horizon);

            for pair in route.nodes.windows(2) {
                assert!(
                    graph.turn_of(pair[0]) < graph.turn_of(pair[1]),
                    "turns must be strictly monotonic"
                );
                let edge = graph.find_edge(pair[0], pair[1]).expect("step is a graph edge");
                tracker.reserve_edge(&graph, edge).expect("edge capacity respected");
            }
            for &node in &route.nodes {
                if node != start {
                    graph.enter(node).expect("hub capacity respected");
                }
            }
        }

        assert_eq!(
            plan.makespan,
            plan.routes.iter().map(|r| r.arrival(&graph)).max().unwrap()
        );
        assert!(plan.makespan <= plan.horizon);
        assert_drone_once_per_line(plan);
    }

    /// Every transcript line lists each drone at most once, in ascending
    /// id order.
    pub fn assert_drone_once_per_line(plan: &FleetPlan) {
        for line in &plan.transcript {
            let ids: Vec<u32> = line
                .split(' ')
                .map(|record| {
                    let head = record.split('-').next().unwrap();
                    head.strip_prefix('D').unwrap().parse().unwrap()
                })
                .collect();
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(ids, sorted, "line {line:?} repeats or misorders drones");
        }
    }

    pub fn turn(n: u32) -> Turn {
        Turn(n)
    }
}

// ── End-to-end scenarios ──────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use sw_core::{GridPoint, HubRole, Zone};
    use sw_topology::TopologyBuilder;

    use crate::{FleetPlanner, RouteError};

    use super::helpers;

    #[test]
    fn two_drones_pipeline_down_a_corridor() {
        let topo = helpers::corridor(2, 2);
        let plan = helpers::plan(&topo);
        assert_eq!(
            plan.transcript,
            vec![
                "D1-w1",
                "D1-w2 D2-w1",
                "D1-goal D2-w2",
                "D2-goal",
            ]
        );
        helpers::assert_plan_valid(&topo, &plan);
    }

    #[test]
    fn single_drone_emits_one_line_per_hop() {
        let topo = helpers::corridor(3, 1);
        let plan = helpers::plan(&topo);
        // Four hops, four lines, one record each.
        assert_eq!(plan.transcript.len(), 4);
        assert!(plan.transcript.iter().all(|l| !l.contains(' ')));
        assert_eq!(plan.transcript[0], "D1-w1");
        assert_eq!(plan.transcript[3], "D1-goal");
    }

    #[test]
    fn priority_hub_wins_equal_length_tie() {
        let mut b = TopologyBuilder::new(1);
        let s = b.add_hub("start", HubRole::Start, Zone::Normal, GridPoint::new(0, 0), 1).unwrap();
        let a = b.add_hub("a", HubRole::Intermediate, Zone::Normal, GridPoint::new(1, 1), 1).unwrap();
        let p = b.add_hub("b", HubRole::Intermediate, Zone::Priority, GridPoint::new(1, -1), 1).unwrap();
        let g = b.add_hub("goal", HubRole::End, Zone::Normal, GridPoint::new(2, 0), 1).unwrap();
        b.add_link(s, a, 1).unwrap();
        b.add_link(s, p, 1).unwrap();
        b.add_link(a, g, 1).unwrap();
        b.add_link(p, g, 1).unwrap();
        let topo = b.build().unwrap();

        let plan = helpers::plan(&topo);
        assert_eq!(plan.transcript, vec!["D1-b", "D1-goal"]);
    }

    #[test]
    fn restricted_traversal_emits_both_consumed_turns() {
        let mut b = TopologyBuilder::new(1);
        let s = b.add_hub("start", HubRole::Start, Zone::Normal, GridPoint::new(0, 0), 1).unwrap();
        let r = b.add_hub("r", HubRole::Intermediate, Zone::Restricted, GridPoint::new(1, 0), 1).unwrap();
        let g = b.add_hub("goal", HubRole::End, Zone::Normal, GridPoint::new(2, 0), 1).unwrap();
        b.add_link(s, r, 1).unwrap();
        b.add_link(r, g, 1).unwrap();
        let topo = b.build().unwrap();

        let plan = helpers::plan(&topo);
        assert_eq!(plan.transcript, vec!["D1-start-r", "D1-start-r", "D1-goal"]);
        helpers::assert_plan_valid(&topo, &plan);
    }

    #[test]
    fn bottleneck_staggers_departures() {
        let mut b = TopologyBuilder::new(3);
        let s = b.add_hub("start", HubRole::Start, Zone::Normal, GridPoint::new(0, 0), 3).unwrap();
        let m = b.add_hub("m", HubRole::Intermediate, Zone::Normal, GridPoint::new(1, 0), 1).unwrap();
        let g = b.add_hub("goal", HubRole::End, Zone::Normal, GridPoint::new(2, 0), 3).unwrap();
        b.add_link(s, m, 1).unwrap();
        b.add_link(m, g, 1).unwrap();
        let topo = b.build().unwrap();

        let plan = helpers::plan(&topo);
        // One drone through the gap per turn; last lands at turn 4 = H.
        assert_eq!(plan.makespan, helpers::turn(4));
        assert_eq!(plan.horizon, helpers::turn(4));
        assert_eq!(
            plan.transcript,
            vec![
                "D1-m",
                "D1-goal D2-m",
                "D2-goal D3-m",
                "D3-goal",
            ]
        );
        helpers::assert_plan_valid(&topo, &plan);
    }

    #[test]
    fn disconnected_terminals_fail_before_routing() {
        let mut b = TopologyBuilder::new(1);
        let s = b.add_hub("start", HubRole::Start, Zone::Normal, GridPoint::new(0, 0), 1).unwrap();
        let a = b.add_hub("isle", HubRole::Intermediate, Zone::Normal, GridPoint::new(1, 0), 1).unwrap();
        b.add_hub("goal", HubRole::End, Zone::Normal, GridPoint::new(5, 0), 1).unwrap();
        b.add_link(s, a, 1).unwrap();
        let topo = b.build().unwrap();

        let err = FleetPlanner::plan(&topo).unwrap_err();
        assert!(matches!(
            err,
            RouteError::Unreachable { ref start, ref end } if start == "start" && end == "goal"
        ));
    }

    #[test]
    fn priority_detour_beats_plain_twin() {
        // start—x—z—goal and start—y—z—goal are the same length; y is
        // PRIORITY so the route must pass through it.
        let mut b = TopologyBuilder::new(1);
        let s = b.add_hub("start", HubRole::Start, Zone::Normal, GridPoint::new(0, 0), 1).unwrap();
        let x = b.add_hub("x", HubRole::Intermediate, Zone::Normal, GridPoint::new(1, 1), 1).unwrap();
        let y = b.add_hub("y", HubRole::Intermediate, Zone::Priority, GridPoint::new(1, -1), 1).unwrap();
        let z = b.add_hub("z", HubRole::Intermediate, Zone::Normal, GridPoint::new(2, 0), 1).unwrap();
        let g = b.add_hub("goal", HubRole::End, Zone::Normal, GridPoint::new(3, 0), 1).unwrap();
        b.add_link(s, x, 1).unwrap();
        b.add_link(s, y, 1).unwrap();
        b.add_link(x, z, 1).unwrap();
        b.add_link(y, z, 1).unwrap();
        b.add_link(z, g, 1).unwrap();
        let topo = b.build().unwrap();

        let plan = helpers::plan(&topo);
        assert_eq!(plan.transcript, vec!["D1-y", "D1-z", "D1-goal"]);
        assert_eq!(plan.routes[0].priority_entries(
            &sw_graph::TimeGraph::build(&topo, plan.horizon)), 1);
    }

    #[test]
    fn blocked_hub_never_appears_in_a_plan() {
        let mut b = TopologyBuilder::new(2);
        let s = b.add_hub("start", HubRole::Start, Zone::Normal, GridPoint::new(0, 0), 2).unwrap();
        let w = b.add_hub("wall", HubRole::Intermediate, Zone::Blocked, GridPoint::new(1, 1), 9).unwrap();
        let m = b.add_hub("m", HubRole::Intermediate, Zone::Normal, GridPoint::new(1, -1), 2).unwrap();
        let g = b.add_hub("goal", HubRole::End, Zone::Normal, GridPoint::new(2, 0), 2).unwrap();
        // The blocked shortcut would be shorter if it were usable.
        b.add_link(s, w, 9).unwrap();
        b.add_link(w, g, 9).unwrap();
        b.add_link(s, m, 2).unwrap();
        b.add_link(m, g, 2).unwrap();
        let topo = b.build().unwrap();

        let plan = helpers::plan(&topo);
        assert!(plan.transcript.iter().all(|l| !l.contains("wall")));
        helpers::assert_plan_valid(&topo, &plan);
    }
}

// ── Pathfinder internals ──────────────────────────────────────────────────────

#[cfg(test)]
mod pathfinder {
    use sw_core::{DroneId, Turn};
    use sw_graph::{ReservationTracker, TimeGraph};

    use crate::{PathCost, RouteError, shortest_route};

    use super::helpers;

    #[test]
    fn cost_orders_turns_then_priority_descending() {
        let cheap_slow = PathCost { turns: 2, priority: 0 };
        let rich_slow  = PathCost { turns: 2, priority: 1 };
        let fast       = PathCost { turns: 1, priority: 0 };

        assert!(fast < rich_slow, "fewer turns always wins");
        assert!(rich_slow < cheap_slow, "more priority entries wins a tie");
        assert_eq!(rich_slow.cmp(&rich_slow), std::cmp::Ordering::Equal);
    }

    #[test]
    fn frontier_exhaustion_reports_the_drone() {
        // A horizon of 1 cannot fit the 3-turn corridor.
        let topo = helpers::corridor(2, 1);
        let graph = TimeGraph::build(&topo, Turn(1));
        let tracker = ReservationTracker::new();

        let err = shortest_route(&graph, &tracker, DroneId(4)).unwrap_err();
        assert!(matches!(err, RouteError::NoFeasibleRoute { drone } if drone == DroneId(4)));
    }

    #[test]
    fn search_does_not_mutate_reservations() {
        let topo = helpers::corridor(2, 1);
        let graph = TimeGraph::build(&topo, Turn(3));
        let tracker = ReservationTracker::new();

        shortest_route(&graph, &tracker, DroneId(0)).unwrap();
        let first_edge = graph.out_edges(graph.start_node()).next().unwrap();
        assert_eq!(tracker.occupied(first_edge, Turn(0)), 0);
        assert_eq!(graph.occupancy(graph.start_node()), 1);
    }
}

// ── Planner determinism & round-trips ─────────────────────────────────────────

#[cfg(test)]
mod planner {
    use sw_core::{GridPoint, HubRole, Zone};
    use sw_topology::TopologyBuilder;

    use super::helpers;

    #[test]
    fn replanning_is_byte_identical() {
        let topo = helpers::corridor(2, 3);
        let first = helpers::plan(&topo);
        let second = helpers::plan(&topo);
        assert_eq!(first.transcript, second.transcript);
        for (a, b) in first.routes.iter().zip(&second.routes) {
            assert_eq!(a.nodes, b.nodes);
        }
    }

    #[test]
    fn tie_rich_diamond_is_still_deterministic() {
        // Four interchangeable middle hubs: every run must pick the same one.
        let mut b = TopologyBuilder::new(4);
        let s = b.add_hub("start", HubRole::Start, Zone::Normal, GridPoint::new(0, 0), 4).unwrap();
        let g = b.add_hub("goal", HubRole::End, Zone::Normal, GridPoint::new(9, 0), 4).unwrap();
        for i in 0..4 {
            let m = b
                .add_hub(
                    format!("m{i}"),
                    HubRole::Intermediate,
                    Zone::Normal,
                    GridPoint::new(1, i),
                    1,
                )
                .unwrap();
            b.add_link(s, m, 1).unwrap();
            b.add_link(m, g, 1).unwrap();
        }
        let topo = b.build().unwrap();

        let reference = helpers::plan(&topo).transcript;
        for _ in 0..5 {
            assert_eq!(helpers::plan(&topo).transcript, reference);
        }
        // All four drones can fan out simultaneously.
        assert_eq!(helpers::plan(&topo).makespan, helpers::turn(2));
    }

    #[test]
    fn observer_sees_every_drone() {
        use sw_core::{DroneId, Turn};

        use crate::{FleetPlanner, PlanObserver};

        #[derive(Default)]
        struct Counting {
            horizon: Option<Turn>,
            routed:  Vec<DroneId>,
            done:    Option<Turn>,
        }
        impl PlanObserver for Counting {
            fn on_horizon(&mut self, horizon: Turn) {
                self.horizon = Some(horizon);
            }
            fn on_drone_routed(&mut self, drone: DroneId, _arrival: Turn) {
                self.routed.push(drone);
            }
            fn on_plan_done(&mut self, makespan: Turn) {
                self.done = Some(makespan);
            }
        }

        let topo = helpers::corridor(2, 3);
        let mut obs = Counting::default();
        let plan = FleetPlanner::plan_observed(&topo, &mut obs).unwrap();

        assert_eq!(obs.horizon, Some(plan.horizon));
        assert_eq!(obs.routed, vec![DroneId(0), DroneId(1), DroneId(2)]);
        assert_eq!(obs.done, Some(plan.makespan));
    }

    #[test]
    fn makespan_is_tight_on_the_corridor() {
        // min = k + 1 hops; fleet of n adds n - 1 staggering turns.
        for (intermediates, drones) in [(1usize, 1u16), (2, 2), (3, 4)] {
            let topo = helpers::corridor(intermediates, drones);
            let plan = helpers::plan(&topo);
            let expect = intermediates as u32 + 1 + u32::from(drones) - 1;
            assert_eq!(plan.makespan, helpers::turn(expect), "{intermediates} hops, {drones} drones");
            helpers::assert_plan_valid(&topo, &plan);
        }
    }
}

// ── Randomized sweeps ─────────────────────────────────────────────────────────

#[cfg(test)]
mod random {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use sw_core::{GridPoint, HubId, HubRole, Zone};
    use sw_topology::{Topology, TopologyBuilder};

    use super::helpers;

    /// Random connected fleet problem: a guaranteed corridor from start to
    /// goal plus random extra links, zones, and capacities.  Blocked hubs
    /// hang off the corridor so reachability is never lost.
    fn random_topology(rng: &mut SmallRng) -> Topology {
        let nb_drones: u16 = rng.gen_range(1..=4);
        let chain_len: usize = rng.gen_range(2..=6);
        let fleet = u32::from(nb_drones);

        let mut b = TopologyBuilder::new(nb_drones);
        let start = b
            .add_hub("start", HubRole::Start, Zone::Normal, GridPoint::new(0, 0), fleet + rng.gen_range(0..2))
            .unwrap();

        let mut chain: Vec<HubId> = vec![start];
        for i in 0..chain_len {
            let zone = match rng.gen_range(0..10) {
                0..=5 => Zone::Normal,
                6..=7 => Zone::Priority,
                _ => Zone::Restricted,
            };
            let hub = b
                .add_hub(
                    format!("h{i}"),
                    HubRole::Intermediate,
                    zone,
                    GridPoint::new(i as i32 + 1, 0),
                    rng.gen_range(1..=3),
                )
                .unwrap();
            b.add_link(*chain.last().unwrap(), hub, rng.gen_range(1..=2)).unwrap();
            chain.push(hub);
        }
        let goal = b
            .add_hub(
                "goal",
                HubRole::End,
                Zone::Normal,
                GridPoint::new(chain_len as i32 + 1, 0),
                fleet + rng.gen_range(0..2),
            )
            .unwrap();
        b.add_link(*chain.last().unwrap(), goal, rng.gen_range(1..=2)).unwrap();
        chain.push(goal);

        // A couple of blocked hubs wired into the map; they must vanish.
        for i in 0..rng.gen_range(0..=2) {
            let hub = b
                .add_hub(
                    format!("dead{i}"),
                    HubRole::Intermediate,
                    Zone::Blocked,
                    GridPoint::new(i, 5),
                    1,
                )
                .unwrap();
            let anchor = chain[rng.gen_range(0..chain.len())];
            b.add_link(hub, anchor, 1).unwrap();
        }

        // Random shortcuts between chain hubs (duplicates skipped).
        let mut taken: Vec<(HubId, HubId)> = Vec::new();
        for _ in 0..rng.gen_range(0..=4) {
            let i = rng.gen_range(0..chain.len());
            let j = rng.gen_range(0..chain.len());
            if i == j {
                continue;
            }
            let key = if chain[i] < chain[j] { (chain[i], chain[j]) } else { (chain[j], chain[i]) };
            if i.abs_diff(j) == 1 || taken.contains(&key) {
                continue; // already linked along the chain
            }
            taken.push(key);
            b.add_link(chain[i], chain[j], rng.gen_range(1..=2)).unwrap();
        }

        b.build().unwrap()
    }

    #[test]
    fn random_fleets_satisfy_all_plan_invariants() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        for case in 0..40 {
            let topo = random_topology(&mut rng);
            let plan = helpers::plan(&topo);
            helpers::assert_plan_valid(&topo, &plan);

            // Blocked hubs never show up in any record.
            assert!(
                plan.transcript.iter().all(|l| !l.contains("dead")),
                "case {case}: blocked hub leaked into {:?}",
                plan.transcript
            );

            // Determinism on every sampled input.
            let again = helpers::plan(&topo);
            assert_eq!(plan.transcript, again.transcript, "case {case}");
        }
    }

    #[test]
    fn every_drone_is_delivered_exactly_once() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            let topo = random_topology(&mut rng);
            let plan = helpers::plan(&topo);

            let goal_records: Vec<&str> = plan
                .transcript
                .iter()
                .flat_map(|l| l.split(' '))
                .filter(|r| r.ends_with("-goal"))
                .collect();
            assert_eq!(goal_records.len(), usize::from(topo.nb_drones));
        }
    }
}
