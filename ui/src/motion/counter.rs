use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterState {
    NotStarted,
    Counting,
    Complete,
}

/// Proficiency counter that climbs from 0 to the skill level one step at a time.
///
/// Ticks feed an accumulator, so a long frame advances several steps and a
/// short one may advance none. The value never passes the target and a
/// finished counter cannot restart.
#[derive(Debug, Clone)]
pub struct SkillCounter {
    target: u8,
    value: u8,
    state: CounterState,
    step: Duration,
    accumulator: Duration,
}

impl SkillCounter {
    pub fn new(target: u8, step: Duration) -> Self {
        Self {
            target,
            value: 0,
            state: CounterState::NotStarted,
            step: step.max(Duration::from_millis(1)),
            accumulator: Duration::ZERO,
        }
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    /// Fraction of the bar to fill.
    pub fn ratio(&self) -> f32 {
        f32::from(self.value) / 100.0
    }

    /// Start counting. Only the first call has an effect.
    pub fn start(&mut self) {
        if self.state != CounterState::NotStarted {
            return;
        }
        self.state = if self.target == 0 {
            CounterState::Complete
        } else {
            CounterState::Counting
        };
    }

    /// Jump to the target.
    pub fn complete(&mut self) {
        self.value = self.target;
        self.accumulator = Duration::ZERO;
        self.state = CounterState::Complete;
    }

    /// Returns true when the value changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.state != CounterState::Counting {
            return false;
        }

        self.accumulator += dt;
        let before = self.value;
        while self.accumulator >= self.step && self.value < self.target {
            self.accumulator -= self.step;
            self.value += 1;
        }
        if self.value >= self.target {
            self.complete();
        }
        self.value != before
    }
}

/// Every counter of the skills section, started together.
#[derive(Debug, Clone, Default)]
pub struct SkillCounters {
    counters: Vec<SkillCounter>,
    animate: bool,
}

impl SkillCounters {
    pub fn new(levels: impl IntoIterator<Item = u8>, step: Duration, animate: bool) -> Self {
        Self {
            counters: levels
                .into_iter()
                .map(|level| SkillCounter::new(level, step))
                .collect(),
            animate,
        }
    }

    pub fn start_all(&mut self) {
        for counter in &mut self.counters {
            counter.start();
            if !self.animate {
                counter.complete();
            }
        }
    }

    pub fn tick(&mut self, dt: Duration) -> bool {
        let mut changed = false;
        for counter in &mut self.counters {
            changed |= counter.tick(dt);
        }
        changed
    }

    pub fn is_counting(&self) -> bool {
        self.counters
            .iter()
            .any(|c| c.state() == CounterState::Counting)
    }

    pub fn get(&self, index: usize) -> Option<&SkillCounter> {
        self.counters.get(index)
    }

    pub fn value(&self, index: usize) -> u8 {
        self.counters.get(index).map_or(0, SkillCounter::value)
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(15);

    #[test]
    fn test_idle_until_started() {
        let mut counter = SkillCounter::new(90, STEP);
        assert!(!counter.tick(Duration::from_secs(5)));
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.state(), CounterState::NotStarted);
    }

    #[test]
    fn test_accumulator_handles_uneven_frames() {
        let mut counter = SkillCounter::new(90, STEP);
        counter.start();

        assert!(!counter.tick(Duration::from_millis(10)));
        assert!(counter.tick(Duration::from_millis(10)));
        assert_eq!(counter.value(), 1);
        // One long frame catches up several steps
        counter.tick(Duration::from_millis(45));
        assert_eq!(counter.value(), 4);
    }

    #[test]
    fn test_terminates_exactly_at_level_and_never_restarts() {
        let mut counter = SkillCounter::new(70, STEP);
        counter.start();
        counter.tick(Duration::from_secs(60));

        assert_eq!(counter.value(), 70);
        assert_eq!(counter.state(), CounterState::Complete);

        counter.start();
        assert!(!counter.tick(Duration::from_secs(1)));
        assert_eq!(counter.value(), 70);
        assert_eq!(counter.state(), CounterState::Complete);
    }

    #[test]
    fn test_zero_level_completes_on_start() {
        let mut counter = SkillCounter::new(0, STEP);
        counter.start();
        assert_eq!(counter.state(), CounterState::Complete);
    }

    #[test]
    fn test_group_without_animation_jumps_to_levels() {
        let mut counters = SkillCounters::new([99, 45], STEP, false);
        counters.start_all();
        assert_eq!(counters.value(0), 99);
        assert_eq!(counters.value(1), 45);
        assert!(!counters.is_counting());
    }
}
