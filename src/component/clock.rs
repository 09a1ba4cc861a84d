/// Global counters driving lazy evaporation and O(1) restarts. Owned by the
/// colony driver; every tree query compares its per-node counters against
/// these instead of sweeping the whole tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct Clock {
    pub evap_times: usize,
    pub restart_times: usize,
    pub wont_visit_restart_times: usize,
}

impl Clock {
    pub fn new() -> Self {
        Clock::default()
    }
    /// One colony-wide evaporation event; nodes catch up lazily in closed form.
    pub fn evaporate(&mut self) {
        self.evap_times += 1;
    }
    /// Pheromone restart. Evaporation events are counted from the restart
    /// point, so the event counter rewinds to zero together.
    pub fn restart(&mut self) {
        self.restart_times += 1;
        self.evap_times = 0;
    }
    /// Drops every won't-visit mark at once; stale epochs read as unvisited.
    pub fn clear_visits(&mut self) {
        self.wont_visit_restart_times += 1;
    }
}
