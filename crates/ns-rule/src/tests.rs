//! Unit tests for ns-rule.

use ns_core::{AgentId, DrawSource, Tick};

use crate::{AgentRule, ModelRule, RuleError, RuleResult, TickContext, Vars};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Flips a coin per agent; a state becomes `true` if the draw is below the
/// bias or the left-hand neighbour was already `true`.
struct Spread {
    bias: f64,
}

impl AgentRule for Spread {
    type State = bool;
    type Space = ();

    fn compute<D: DrawSource>(
        &self,
        agent: AgentId,
        ctx:   &TickContext<'_, bool, ()>,
        draws: &mut D,
    ) -> RuleResult<bool> {
        if ctx.states[agent.index()] {
            return Ok(true);
        }
        let left = agent.index().checked_sub(1).is_some_and(|i| ctx.states[i]);
        Ok(left || draws.uniform() < self.bias)
    }
}

impl ModelRule for Spread {
    fn is_settled(&self, states: &[bool]) -> bool {
        states.iter().all(|&s| s)
    }

    fn model_vars(&self, states: &[bool]) -> Vars {
        vec![("on", states.iter().filter(|&&s| s).count() as f64)]
    }

    fn agent_vars(&self, state: &bool) -> Vars {
        vec![("on", f64::from(u8::from(*state)))]
    }
}

// ── TickContext ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod context {
    use super::*;

    #[test]
    fn exposes_committed_states() {
        let states = [true, false, false];
        let ctx = TickContext::new(Tick(4), &states, &());
        assert_eq!(ctx.tick, Tick(4));
        assert_eq!(ctx.agent_count(), 3);
        assert_eq!(ctx.state(AgentId(0)), Some(&true));
        assert_eq!(ctx.state(AgentId(3)), None);
    }

    #[test]
    fn is_copy_without_copy_state() {
        let states = vec![String::from("a")];
        let ctx = TickContext::new(Tick::ZERO, states.as_slice(), &());
        let copy = ctx;
        assert_eq!(ctx.states, copy.states);
    }
}

// ── AgentRule / ModelRule ─────────────────────────────────────────────────────

#[cfg(test)]
mod rule {
    use ns_core::ScriptedDraws;

    use super::*;

    #[test]
    fn rule_reads_previous_snapshot_only() {
        // Agent 1's left neighbour is on, agent 2's left neighbour is off in
        // the snapshot, so agent 2 must draw even though agent 1 will turn on.
        let states = [true, false, false];
        let ctx = TickContext::new(Tick::ZERO, &states, &());
        let rule = Spread { bias: 0.5 };
        let mut draws = ScriptedDraws::new([0.9]);

        let next: Vec<bool> = (0..3)
            .map(|i| rule.compute(AgentId(i), &ctx, &mut draws).unwrap())
            .collect();

        assert_eq!(next, vec![true, true, false]);
        assert_eq!(draws.consumed(), 1);
    }

    #[test]
    fn model_rule_reports_vars() {
        let rule = Spread { bias: 0.0 };
        let states = [true, false, true];
        assert_eq!(rule.model_vars(&states), vec![("on", 2.0)]);
        assert_eq!(rule.agent_vars(&false), vec![("on", 0.0)]);
        assert!(!rule.is_settled(&states));
        assert!(rule.is_settled(&[true, true]));
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod errors {
    use ns_core::NodeId;
    use ns_spatial::SpatialError;

    use super::*;

    #[test]
    fn spatial_error_converts() {
        let e: RuleError = SpatialError::NodeNotFound(NodeId(3)).into();
        assert!(matches!(e, RuleError::Spatial(SpatialError::NodeNotFound(NodeId(3)))));
    }

    #[test]
    fn stranded_display_names_agent_and_node() {
        let e = RuleError::Stranded { agent: AgentId(2), node: NodeId(9) };
        let msg = e.to_string();
        assert!(msg.contains("AgentId(2)"));
        assert!(msg.contains("NodeId(9)"));
    }
}
