use thiserror::Error;

use ns_core::{AgentId, NsError};
use ns_rule::RuleError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Core(#[from] NsError),

    #[error("rule failed for {agent}: {source}")]
    Rule {
        agent:  AgentId,
        #[source]
        source: RuleError,
    },
}

pub type SimResult<T> = Result<T, SimError>;
