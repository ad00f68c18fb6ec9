//! Unit tests for ns-epidemic.
//!
//! Rules are exercised one agent at a time against a hand-built snapshot
//! with scripted draws, so every assertion pins both the outcome and the
//! number of draws consumed.

#[cfg(test)]
mod helpers {
    use ns_spatial::{GraphBuilder, GraphSpace};

    /// Star: node 0 is the hub, nodes 1..=4 are leaves.
    pub fn star() -> GraphSpace {
        let mut b = GraphBuilder::dense(5);
        for leaf in 1..5 {
            b.add_edge(0, leaf);
        }
        b.build()
    }
}

// ── HealthState / StateCounts ─────────────────────────────────────────────────

#[cfg(test)]
mod state {
    use crate::{HealthState, StateCounts};

    use HealthState::*;

    #[test]
    fn stable_numeric_values() {
        assert_eq!(Susceptible.value(), 1);
        assert_eq!(Infected.value(), 2);
        assert_eq!(Resistant.value(), 3);
        assert_eq!(Infected.to_string(), "infected");
    }

    #[test]
    fn tally_counts_each_compartment() {
        let c = StateCounts::tally(&[Susceptible, Infected, Infected, Resistant, Susceptible]);
        assert_eq!(c, StateCounts { susceptible: 2, infected: 2, resistant: 1 });
        assert_eq!(c.total(), 5);
        assert_eq!(c.get(Infected), 2);
    }
}

// ── SI ────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod si {
    use ns_core::{AgentId, ScriptedDraws, Tick};
    use ns_rule::{AgentRule, ModelRule, RuleError, TickContext};

    use crate::{HealthState, SiRule};
    use super::helpers::star;

    use HealthState::*;

    #[test]
    fn rejects_out_of_range_probability() {
        assert!(matches!(SiRule::new(1.5), Err(RuleError::Config(_))));
        assert!(matches!(SiRule::new(-0.1), Err(RuleError::Config(_))));
        assert!(matches!(SiRule::new(f64::NAN), Err(RuleError::Config(_))));
        assert!(SiRule::new(0.0).is_ok());
        assert!(SiRule::new(1.0).is_ok());
    }

    #[test]
    fn draws_once_per_infected_neighbour_without_short_circuit() {
        let g = star();
        let states = [Susceptible, Infected, Susceptible, Infected, Infected];
        let ctx = TickContext::new(Tick::ZERO, &states, &g);
        let rule = SiRule::new(0.5).unwrap();

        // First draw already succeeds; the other two infected leaves still draw.
        let mut draws = ScriptedDraws::new([0.1, 0.9, 0.9]);
        assert_eq!(rule.compute(AgentId(0), &ctx, &mut draws).unwrap(), Infected);
        assert_eq!(draws.consumed(), 3);
    }

    #[test]
    fn threshold_is_inclusive() {
        let g = star();
        let states = [Susceptible, Infected, Susceptible, Susceptible, Susceptible];
        let ctx = TickContext::new(Tick::ZERO, &states, &g);
        let rule = SiRule::new(0.25).unwrap();

        let mut hit = ScriptedDraws::new([0.25]);
        assert_eq!(rule.compute(AgentId(0), &ctx, &mut hit).unwrap(), Infected);
        let mut miss = ScriptedDraws::new([0.2500001]);
        assert_eq!(rule.compute(AgentId(0), &ctx, &mut miss).unwrap(), Susceptible);
    }

    #[test]
    fn no_infected_neighbours_consumes_nothing() {
        let g = star();
        let states = [Susceptible; 5];
        let ctx = TickContext::new(Tick::ZERO, &states, &g);
        let mut draws = ScriptedDraws::new(Vec::<f64>::new());
        let rule = SiRule::new(1.0).unwrap();
        for i in 0..5 {
            assert_eq!(rule.compute(AgentId(i), &ctx, &mut draws).unwrap(), Susceptible);
        }
    }

    #[test]
    fn infected_is_absorbing() {
        let g = star();
        let states = [Infected; 5];
        let ctx = TickContext::new(Tick::ZERO, &states, &g);
        let mut draws = ScriptedDraws::new(Vec::<f64>::new());
        let rule = SiRule::new(0.0).unwrap();
        assert_eq!(rule.compute(AgentId(2), &ctx, &mut draws).unwrap(), Infected);
    }

    #[test]
    fn settled_when_no_susceptible_remain() {
        let rule = SiRule::new(0.1).unwrap();
        assert!(!rule.is_settled(&[Infected, Susceptible]));
        assert!(rule.is_settled(&[Infected, Infected]));
        assert_eq!(
            rule.model_vars(&[Infected, Susceptible, Susceptible]),
            vec![("susceptible", 2.0), ("infected", 1.0)]
        );
        assert_eq!(rule.agent_vars(&Infected), vec![("state", 2.0)]);
    }
}

// ── SIR ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sir {
    use ns_core::{AgentId, ScriptedDraws, Tick};
    use ns_rule::{AgentRule, ModelRule, RuleError, TickContext};

    use crate::{HealthState, SirRule};
    use super::helpers::star;

    use HealthState::*;

    #[test]
    fn rejects_out_of_range_recovery() {
        assert!(matches!(SirRule::new(0.5, 2.0), Err(RuleError::Config(_))));
        assert!(SirRule::new(0.5, 0.5).is_ok());
    }

    #[test]
    fn first_success_wins_and_stops_scan() {
        let g = star();
        // Leaves 1, 2, 3 infected; leaf 4 susceptible.
        let states = [Susceptible, Infected, Infected, Infected, Susceptible];
        let ctx = TickContext::new(Tick::ZERO, &states, &g);
        let rule = SirRule::new(0.5, 0.0).unwrap();

        // Leaf 1 misses, leaf 2 hits, leaf 3 is never scanned.
        let mut draws = ScriptedDraws::new([0.9, 0.1, 0.0]);
        assert_eq!(rule.compute(AgentId(0), &ctx, &mut draws).unwrap(), Infected);
        assert_eq!(draws.consumed(), 2);
        assert_eq!(draws.remaining(), 1);
    }

    #[test]
    fn all_misses_scan_every_infected_neighbour() {
        let g = star();
        let states = [Susceptible, Infected, Resistant, Infected, Susceptible];
        let ctx = TickContext::new(Tick::ZERO, &states, &g);
        let rule = SirRule::new(0.5, 0.0).unwrap();

        let mut draws = ScriptedDraws::new([0.6, 0.7]);
        assert_eq!(rule.compute(AgentId(0), &ctx, &mut draws).unwrap(), Susceptible);
        assert_eq!(draws.consumed(), 2);
    }

    #[test]
    fn infected_draws_exactly_once_for_recovery() {
        let g = star();
        let states = [Infected, Susceptible, Susceptible, Susceptible, Susceptible];
        let ctx = TickContext::new(Tick::ZERO, &states, &g);
        let rule = SirRule::new(1.0, 0.3).unwrap();

        let mut recover = ScriptedDraws::new([0.3]);
        assert_eq!(rule.compute(AgentId(0), &ctx, &mut recover).unwrap(), Resistant);
        assert_eq!(recover.consumed(), 1);

        let mut stay = ScriptedDraws::new([0.31]);
        assert_eq!(rule.compute(AgentId(0), &ctx, &mut stay).unwrap(), Infected);
        assert_eq!(stay.consumed(), 1);
    }

    #[test]
    fn resistant_is_absorbing_and_draws_nothing() {
        let g = star();
        let states = [Resistant, Infected, Infected, Infected, Infected];
        let ctx = TickContext::new(Tick::ZERO, &states, &g);
        let rule = SirRule::new(1.0, 1.0).unwrap();
        let mut draws = ScriptedDraws::new(Vec::<f64>::new());
        assert_eq!(rule.compute(AgentId(0), &ctx, &mut draws).unwrap(), Resistant);
    }

    #[test]
    fn settled_when_no_infected_remain() {
        let rule = SirRule::new(0.1, 0.1).unwrap();
        assert!(rule.is_settled(&[Susceptible, Resistant]));
        assert!(!rule.is_settled(&[Infected, Resistant]));
        assert_eq!(
            rule.model_vars(&[Infected, Resistant, Resistant]),
            vec![("susceptible", 0.0), ("infected", 1.0), ("resistant", 2.0)]
        );
    }
}
