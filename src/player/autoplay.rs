// Autoplay chain: the pending "up next" handoff and its countdown.

use super::PlayerError;

pub const DEFAULT_COUNTDOWN_SECS: u32 = 2;

/// Identifies the chain a scheduled tick belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Counting { remaining: u32 },
    Fire { video_id: String },
}

/// Pending-next state.
///
/// `pending.is_some() == (countdown > 0)` outside of `tick`. Every start,
/// cancel and fire bumps `generation`, which invalidates tickets handed out
/// earlier.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AutoplayChain {
    pending: Option<String>,
    source: Option<String>,
    countdown: u32,
    generation: u64,
}

impl AutoplayChain {
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Video whose completion started the current chain.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a countdown toward `next_id`, superseding any running chain.
    pub fn start(&mut self, source_id: &str, next_id: &str, seconds: u32) -> ChainTicket {
        self.generation += 1;
        self.pending = Some(next_id.to_string());
        self.source = Some(source_id.to_string());
        self.countdown = seconds.max(1);
        ChainTicket {
            generation: self.generation,
        }
    }

    /// Clears the chain. Returns whether anything was pending.
    pub fn cancel(&mut self) -> bool {
        if self.pending.is_none() {
            return false;
        }
        self.clear();
        true
    }

    pub fn tick(&mut self, ticket: ChainTicket) -> Result<TickOutcome, PlayerError> {
        if ticket.generation != self.generation || self.pending.is_none() {
            return Err(PlayerError::StaleTimer {
                tick: ticket.generation,
                current: self.generation,
            });
        }

        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown > 0 {
            return Ok(TickOutcome::Counting {
                remaining: self.countdown,
            });
        }

        let video_id = self.pending.take().unwrap_or_default();
        self.clear();
        Ok(TickOutcome::Fire { video_id })
    }

    fn clear(&mut self) {
        self.pending = None;
        self.source = None;
        self.countdown = 0;
        self.generation += 1;
    }

    #[cfg(test)]
    pub(crate) fn invariant_holds(&self) -> bool {
        self.pending.is_some() == (self.countdown > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_then_fires_once() {
        let mut chain = AutoplayChain::default();
        let ticket = chain.start("a", "b", 2);
        assert_eq!(chain.pending(), Some("b"));
        assert_eq!(chain.countdown(), 2);

        assert_eq!(chain.tick(ticket), Ok(TickOutcome::Counting { remaining: 1 }));
        assert!(chain.invariant_holds());
        assert_eq!(
            chain.tick(ticket),
            Ok(TickOutcome::Fire {
                video_id: "b".to_string()
            })
        );
        assert!(!chain.is_active());
        assert!(chain.invariant_holds());
        assert!(matches!(
            chain.tick(ticket),
            Err(PlayerError::StaleTimer { .. })
        ));
    }

    #[test]
    fn cancel_invalidates_outstanding_ticket() {
        let mut chain = AutoplayChain::default();
        let ticket = chain.start("a", "b", 2);
        assert!(chain.cancel());
        assert!(!chain.cancel());
        assert_eq!(chain.countdown(), 0);
        assert!(matches!(
            chain.tick(ticket),
            Err(PlayerError::StaleTimer { .. })
        ));
        assert!(chain.invariant_holds());
    }

    #[test]
    fn restart_supersedes_previous_ticket() {
        let mut chain = AutoplayChain::default();
        let first = chain.start("a", "b", 2);
        let second = chain.start("b", "c", 2);
        assert_ne!(first, second);
        assert!(chain.tick(first).is_err());
        assert_eq!(chain.countdown(), 2);
        assert_eq!(chain.tick(second), Ok(TickOutcome::Counting { remaining: 1 }));
    }

    #[test]
    fn zero_second_countdown_still_ticks_once() {
        let mut chain = AutoplayChain::default();
        let ticket = chain.start("a", "b", 0);
        assert_eq!(chain.countdown(), 1);
        assert!(matches!(chain.tick(ticket), Ok(TickOutcome::Fire { .. })));
    }
}
