/// How a section decides it has entered the viewport and what happens after.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionConfig {
    /// Fraction of the section's area that must be visible, `0.0..=1.0`.
    pub threshold: f64,
    /// Pixels added to every side of the viewport. Negative values trigger later.
    pub root_margin: f64,
    pub trigger_once: bool,
    /// Delays (ms after entry) of the secondary reveal stages, ascending.
    pub reveal_delays: &'static [u32],
}

impl SectionConfig {
    /// Animate once and stay revealed.
    pub const fn once(threshold: f64, root_margin: f64) -> Self {
        Self {
            threshold,
            root_margin,
            trigger_once: true,
            reveal_delays: &[],
        }
    }

    /// Animate in on every entry and back out on every exit.
    pub const fn repeating(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: 0.0,
            trigger_once: false,
            reveal_delays: &[],
        }
    }

    pub const fn with_reveal(mut self, delays: &'static [u32]) -> Self {
        self.reveal_delays = delays;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionState {
    pub is_in_view: bool,
    pub has_triggered: bool,
    /// Wall-clock ms at which the current reveal timers were armed.
    pub reveal_armed_at: Option<f64>,
    pub revealed_stages: usize,
}

/// What the renderer needs from a section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionView {
    pub in_view: bool,
    pub revealed_stages: usize,
}

impl SectionView {
    #[cfg(test)]
    pub fn reveal_started(&self) -> bool {
        self.revealed_stages > 0
    }

    pub fn stage_revealed(&self, stage: usize) -> bool {
        self.revealed_stages > stage
    }
}

/// Timer work the driver has to carry out after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealCommand {
    Arm {
        stage: usize,
        delay_ms: u32,
        generation: u64,
    },
    CancelAll,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealOutcome {
    Revealed,
    /// Cancelled or superseded by a newer arm.
    Stale,
    /// The timer woke up before the delay elapsed on the wall clock.
    Early { remaining_ms: u32 },
}

/// Per-section visibility state machine. Pure: timestamps come in as
/// arguments and timer work goes out as [`RevealCommand`]s.
#[derive(Clone, Debug)]
pub struct SectionMachine {
    config: SectionConfig,
    state: SectionState,
    generation: u64,
}

impl SectionMachine {
    pub fn new(config: SectionConfig) -> Self {
        Self {
            config,
            state: SectionState::default(),
            generation: 0,
        }
    }

    pub fn config(&self) -> &SectionConfig {
        &self.config
    }

    pub fn state(&self) -> &SectionState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// A triggered trigger-once section ignores further visibility changes.
    pub fn is_locked(&self) -> bool {
        self.config.trigger_once && self.state.has_triggered
    }

    pub fn view(&self) -> SectionView {
        SectionView {
            in_view: self.state.is_in_view,
            revealed_stages: self.state.revealed_stages,
        }
    }

    pub fn on_intersection_change(&mut self, is_intersecting: bool, now_ms: f64) -> Vec<RevealCommand> {
        if self.is_locked() || self.state.is_in_view == is_intersecting {
            return Vec::new();
        }

        self.state.is_in_view = is_intersecting;
        self.state.revealed_stages = 0;
        self.generation += 1;

        if !is_intersecting {
            self.state.reveal_armed_at = None;
            return vec![RevealCommand::CancelAll];
        }

        if self.config.trigger_once {
            self.state.has_triggered = true;
        }
        self.state.reveal_armed_at = Some(now_ms);

        let generation = self.generation;
        self.config
            .reveal_delays
            .iter()
            .enumerate()
            .map(|(stage, &delay_ms)| RevealCommand::Arm {
                stage,
                delay_ms,
                generation,
            })
            .collect()
    }

    pub fn fire_reveal(&mut self, stage: usize, generation: u64, now_ms: f64) -> RevealOutcome {
        if generation != self.generation || !self.state.is_in_view {
            return RevealOutcome::Stale;
        }
        let (Some(armed_at), Some(&delay_ms)) =
            (self.state.reveal_armed_at, self.config.reveal_delays.get(stage))
        else {
            return RevealOutcome::Stale;
        };

        let elapsed = now_ms - armed_at;
        let delay = f64::from(delay_ms);
        if elapsed < delay {
            return RevealOutcome::Early {
                remaining_ms: (delay - elapsed).ceil() as u32,
            };
        }

        self.state.revealed_stages = self.state.revealed_stages.max(stage + 1);
        RevealOutcome::Revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: SectionConfig = SectionConfig::repeating(0.3).with_reveal(&[1000]);
    const STAGGERED: SectionConfig = SectionConfig::repeating(0.3).with_reveal(&[1000, 3500]);

    fn armed(commands: &[RevealCommand]) -> Vec<(usize, u32, u64)> {
        commands
            .iter()
            .filter_map(|c| match *c {
                RevealCommand::Arm { stage, delay_ms, generation } => Some((stage, delay_ms, generation)),
                RevealCommand::CancelAll => None,
            })
            .collect()
    }

    #[test]
    fn trigger_once_section_stays_revealed_after_leaving() {
        let mut section = SectionMachine::new(SectionConfig::once(0.2, -50.0).with_reveal(&[1000]));
        let commands = section.on_intersection_change(true, 0.0);
        let (stage, _, generation) = armed(&commands)[0];

        assert!(section.on_intersection_change(false, 10.0).is_empty());
        assert!(section.view().in_view);
        assert!(section.state().has_triggered);

        // The timer armed on entry still lands even though the section scrolled away.
        assert_eq!(section.fire_reveal(stage, generation, 1000.0), RevealOutcome::Revealed);
        assert!(section.view().reveal_started());

        assert!(section.on_intersection_change(false, 2000.0).is_empty());
        assert!(section.on_intersection_change(true, 3000.0).is_empty());
        assert!(section.view().in_view);
        assert!(section.view().reveal_started());
    }

    #[test]
    fn repeating_section_rearms_from_zero_on_reentry() {
        let mut section = SectionMachine::new(CONTENT);
        let first = armed(&section.on_intersection_change(true, 0.0));
        assert_eq!(section.fire_reveal(0, first[0].2, 1000.0), RevealOutcome::Revealed);

        assert_eq!(section.on_intersection_change(false, 1500.0), vec![RevealCommand::CancelAll]);
        assert!(!section.view().in_view);
        assert!(!section.view().reveal_started());

        let second = armed(&section.on_intersection_change(true, 5000.0));
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].1, 1000);
        assert!(second[0].2 > first[0].2);
        assert_eq!(section.state().reveal_armed_at, Some(5000.0));
        assert!(!section.view().reveal_started());

        // Measured from the new entry, not the first one.
        assert_eq!(
            section.fire_reveal(0, second[0].2, 5500.0),
            RevealOutcome::Early { remaining_ms: 500 }
        );
        assert_eq!(section.fire_reveal(0, second[0].2, 6000.0), RevealOutcome::Revealed);
    }

    #[test]
    fn reveal_never_fires_before_its_delay() {
        let mut section = SectionMachine::new(CONTENT);
        let (stage, _, generation) = armed(&section.on_intersection_change(true, 100.0))[0];
        assert_eq!(
            section.fire_reveal(stage, generation, 1099.5),
            RevealOutcome::Early { remaining_ms: 1 }
        );
        assert!(!section.view().reveal_started());
        assert_eq!(section.fire_reveal(stage, generation, 1100.0), RevealOutcome::Revealed);
    }

    #[test]
    fn reveal_never_fires_after_leaving_first() {
        let mut section = SectionMachine::new(CONTENT);
        let (stage, _, generation) = armed(&section.on_intersection_change(true, 0.0))[0];
        section.on_intersection_change(false, 400.0);
        assert_eq!(section.fire_reveal(stage, generation, 1000.0), RevealOutcome::Stale);
        assert!(!section.view().reveal_started());
    }

    #[test]
    fn stale_generation_is_ignored_after_quick_reentry() {
        let mut section = SectionMachine::new(CONTENT);
        let (_, _, old) = armed(&section.on_intersection_change(true, 0.0))[0];
        section.on_intersection_change(false, 200.0);
        let (_, _, new) = armed(&section.on_intersection_change(true, 300.0))[0];

        // The first timer would have fired at t=1000 had it not been cancelled.
        assert_eq!(section.fire_reveal(0, old, 1000.0), RevealOutcome::Stale);
        assert_eq!(section.fire_reveal(0, new, 1300.0), RevealOutcome::Revealed);
    }

    #[test]
    fn repeated_reports_of_same_visibility_do_not_rearm() {
        let mut section = SectionMachine::new(CONTENT);
        assert_eq!(section.on_intersection_change(true, 0.0).len(), 1);
        let generation = section.generation();
        assert!(section.on_intersection_change(true, 16.0).is_empty());
        assert!(section.on_intersection_change(true, 32.0).is_empty());
        assert_eq!(section.generation(), generation);
        assert!(section.on_intersection_change(false, 48.0).len() == 1);
        assert!(section.on_intersection_change(false, 64.0).is_empty());
    }

    #[test]
    fn staggered_stages_reveal_in_order() {
        let mut section = SectionMachine::new(STAGGERED);
        let commands = armed(&section.on_intersection_change(true, 0.0));
        assert_eq!(commands.iter().map(|c| c.1).collect::<Vec<_>>(), vec![1000, 3500]);
        let generation = commands[0].2;

        assert_eq!(section.fire_reveal(0, generation, 1000.0), RevealOutcome::Revealed);
        assert!(section.view().stage_revealed(0));
        assert!(!section.view().stage_revealed(1));

        assert_eq!(section.fire_reveal(1, generation, 3500.0), RevealOutcome::Revealed);
        assert!(section.view().stage_revealed(1));
        assert_eq!(section.view().revealed_stages, 2);
    }

    #[test]
    fn section_without_reveal_stages_only_fades() {
        let mut section = SectionMachine::new(SectionConfig::once(0.1, -50.0));
        assert!(section.on_intersection_change(true, 0.0).is_empty());
        assert!(section.view().in_view);
        assert_eq!(section.fire_reveal(0, section.generation(), 5000.0), RevealOutcome::Stale);
    }
}
