//! Unit tests for ns-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, LayerId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::from_index(42), id);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(LayerId::INVALID.0, u16::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(LayerId(2).to_string(), "LayerId(2)");
    }
}

#[cfg(test)]
mod time {
    use crate::{RunConfig, Tick};

    #[test]
    fn tick_counts_up_from_zero() {
        assert_eq!(Tick::ZERO.next(), Tick(1));
        assert_eq!(Tick(10).next(), Tick(11));
        assert_eq!(Tick(7).to_string(), "T7");
    }

    #[test]
    fn unlimited_budget_never_exhausts() {
        let cfg = RunConfig::new(1);
        assert!(!cfg.budget_exhausted(Tick(u64::MAX)));
    }

    #[test]
    fn budget_exhausts_at_max_steps() {
        let cfg = RunConfig::new(1).with_max_steps(3);
        assert!(!cfg.budget_exhausted(Tick(2)));
        assert!(cfg.budget_exhausted(Tick(3)));
        assert!(cfg.budget_exhausted(Tick(4)));
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, AgentRngs, DrawSource, ScriptedDraws, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            assert_eq!(r1.uniform(), r2.uniform());
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        assert_ne!(r0.uniform(), r1.uniform(), "seeds for adjacent agents should diverge");
    }

    #[test]
    fn uniform_in_unit_interval() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.uniform();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn agent_rngs_match_individual_streams() {
        let mut rngs = AgentRngs::new(4, 99);
        assert_eq!(rngs.len(), 4);
        let mut solo = AgentRng::new(99, AgentId(3));
        assert_eq!(rngs.get_mut(AgentId(3)).uniform(), solo.uniform());
    }

    #[test]
    fn child_streams_are_deterministic_and_distinct() {
        let mut a = SimRng::new(5).child(1);
        let mut b = SimRng::new(5).child(1);
        let mut c = SimRng::new(5).child(2);
        let (x, y, z) = (a.uniform(), b.uniform(), c.uniform());
        assert_eq!(x, y);
        assert_ne!(x, z);
    }

    #[test]
    fn sample_distinct_has_no_repeats() {
        let mut rng = SimRng::new(7);
        let mut picked = rng.sample_distinct(50, 20).unwrap();
        assert_eq!(picked.len(), 20);
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 20);
        assert!(picked.iter().all(|&i| i < 50));
    }

    #[test]
    fn sample_distinct_rejects_oversized_request() {
        let mut rng = SimRng::new(7);
        assert!(rng.sample_distinct(3, 4).is_none());
        assert_eq!(rng.sample_distinct(3, 3).map(|v| v.len()), Some(3));
    }

    #[test]
    fn scripted_draws_replay_in_order() {
        let mut d = ScriptedDraws::new([0.1, 0.9, 0.5]);
        assert_eq!(d.uniform(), 0.1);
        assert_eq!(d.uniform(), 0.9);
        assert_eq!(d.consumed(), 2);
        assert_eq!(d.remaining(), 1);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn scripted_draws_panic_when_empty() {
        let mut d = ScriptedDraws::new(Vec::<f64>::new());
        d.uniform();
    }
}
