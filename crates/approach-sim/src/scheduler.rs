//! Cooperative scheduler for the two repeating simulation tasks.
//!
//! Ticks and spawns run on independent periods against one virtual clock.
//! The engine pops due invocations one at a time and runs each to
//! completion, so neither task can overlap itself or the other.

/// A task the scheduler can hand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledTask {
    Tick,
    Spawn,
}

/// One repeating schedule. `period_secs == None` means the task is suspended.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepeatingTask {
    period_secs: Option<f64>,
    next_due_secs: Option<f64>,
}

impl RepeatingTask {
    pub fn new(period_secs: Option<f64>) -> Self {
        Self {
            period_secs,
            next_due_secs: None,
        }
    }

    pub fn period_secs(&self) -> Option<f64> {
        self.period_secs
    }

    pub fn next_due_secs(&self) -> Option<f64> {
        self.next_due_secs
    }

    /// Arm the task so it first fires one period after `now`.
    fn start(&mut self, now: f64) {
        self.next_due_secs = self.period_secs.map(|p| now + p);
    }

    fn stop(&mut self) {
        self.next_due_secs = None;
    }

    /// Change the period and restart the countdown from `now`.
    fn restart_with(&mut self, period_secs: Option<f64>, now: f64, running: bool) {
        self.period_secs = period_secs;
        if running {
            self.start(now);
        } else {
            self.stop();
        }
    }

    fn fire(&mut self) {
        if let (Some(due), Some(period)) = (self.next_due_secs, self.period_secs) {
            self.next_due_secs = Some(due + period);
        }
    }
}

/// Virtual clock plus the tick and spawn schedules.
#[derive(Debug, Clone)]
pub struct Scheduler {
    now_secs: f64,
    running: bool,
    tick: RepeatingTask,
    spawn: RepeatingTask,
}

impl Scheduler {
    /// Create a running scheduler at time zero.
    pub fn new(tick_period_secs: f64, spawn_period_secs: Option<f64>) -> Self {
        let mut scheduler = Self {
            now_secs: 0.0,
            running: false,
            tick: RepeatingTask::new(Some(tick_period_secs)),
            spawn: RepeatingTask::new(spawn_period_secs),
        };
        scheduler.resume();
        scheduler
    }

    pub fn now_secs(&self) -> f64 {
        self.now_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn spawn_period_secs(&self) -> Option<f64> {
        self.spawn.period_secs()
    }

    /// Stop both schedules. Nothing fires until `resume`.
    pub fn halt(&mut self) {
        self.running = false;
        self.tick.stop();
        self.spawn.stop();
    }

    /// Restart both schedules from the current clock time.
    pub fn resume(&mut self) {
        self.running = true;
        self.tick.start(self.now_secs);
        self.spawn.start(self.now_secs);
    }

    /// Replace both periods and restart from the current clock time.
    pub fn restart(&mut self, tick_period_secs: f64, spawn_period_secs: Option<f64>) {
        self.tick = RepeatingTask::new(Some(tick_period_secs));
        self.spawn = RepeatingTask::new(spawn_period_secs);
        self.resume();
    }

    /// Change the spawn cadence. The next spawn comes one new period from now.
    pub fn set_spawn_period(&mut self, period_secs: Option<f64>) {
        self.spawn
            .restart_with(period_secs, self.now_secs, self.running);
    }

    /// Pop the earliest invocation due at or before `until`, moving the clock
    /// to its due time. Ties go to the tick.
    pub fn pop_due(&mut self, until_secs: f64) -> Option<ScheduledTask> {
        if !self.running {
            return None;
        }

        let tick_due = self.tick.next_due_secs().filter(|&t| t <= until_secs);
        let spawn_due = self.spawn.next_due_secs().filter(|&t| t <= until_secs);

        let (task, due) = match (tick_due, spawn_due) {
            (Some(t), Some(s)) if s < t => (ScheduledTask::Spawn, s),
            (Some(t), _) => (ScheduledTask::Tick, t),
            (None, Some(s)) => (ScheduledTask::Spawn, s),
            (None, None) => return None,
        };

        self.now_secs = self.now_secs.max(due);
        match task {
            ScheduledTask::Tick => self.tick.fire(),
            ScheduledTask::Spawn => self.spawn.fire(),
        }
        Some(task)
    }

    /// Move the clock forward once every due invocation has run.
    pub fn advance_to(&mut self, until_secs: f64) {
        self.now_secs = self.now_secs.max(until_secs);
    }

    /// Seconds until the next invocation, or `None` when nothing is scheduled.
    pub fn next_due_in(&self) -> Option<f64> {
        if !self.running {
            return None;
        }
        [self.tick.next_due_secs(), self.spawn.next_due_secs()]
            .into_iter()
            .flatten()
            .reduce(f64::min)
            .map(|due| (due - self.now_secs).max(0.0))
    }
}

/// Spawn period for a rate in aircraft per minute. Zero suspends spawning.
pub fn spawn_period_for(rate_per_min: u32) -> Option<f64> {
    (rate_per_min > 0).then(|| 60.0 / rate_per_min as f64)
}
