//! Level list and per-level best results.

use bevy::prelude::*;
use std::time::Duration;

/// Levels available on a fresh profile: name and description.
const DEFAULT_LEVELS: [(&str, &str); 5] = [
    ("Tutorial Cube", "Learn the basics of cube manipulation"),
    ("Simple Scramble", "A slightly more challenging puzzle"),
    ("Intermediate Challenge", "Test your cube-solving skills"),
    ("Advanced Puzzle", "For experienced puzzle solvers"),
    ("Expert Level", "The ultimate challenge"),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("level {0} not found")]
    NotFound(u32),
    #[error("level {0} is locked")]
    Locked(u32),
}

/// One level. Numbers start at 1. Times are measured on the game clock.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub number: u32,
    pub name: String,
    pub description: String,
    pub unlocked: bool,
    pub completed: bool,
    pub best_moves: Option<u32>,
    pub best_time: Option<Duration>,
    pub last_played: Option<Duration>,
}

impl Level {
    fn new(number: u32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            description: description.into(),
            unlocked: false,
            completed: false,
            best_moves: None,
            best_time: None,
            last_played: None,
        }
    }

    pub fn stats(&self) -> LevelStats {
        LevelStats {
            best_moves: self.best_moves,
            best_time: self.best_time,
            completed: self.completed,
            last_played: self.last_played,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelStats {
    pub best_moves: Option<u32>,
    pub best_time: Option<Duration>,
    pub completed: bool,
    pub last_played: Option<Duration>,
}

/// Totals over completed levels. Averages are rounded to the nearest move / millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressStats {
    pub total_levels: usize,
    pub completed_levels: usize,
    pub unlocked_levels: usize,
    pub total_moves: u32,
    pub total_time: Duration,
    pub average_moves: u32,
    pub average_time: Duration,
}

/// Level unlocks and best results. Only the first level starts unlocked.
#[derive(Resource, Debug, Clone)]
pub struct LevelProgress {
    levels: Vec<Level>,
    current: u32,
}

impl Default for LevelProgress {
    fn default() -> Self {
        let mut progress = Self {
            levels: Vec::new(),
            current: 1,
        };
        for (name, description) in DEFAULT_LEVELS {
            progress.add_level(name, description);
        }
        progress.reset_all_progress();
        progress
    }
}

impl LevelProgress {
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level(&self, number: u32) -> Option<&Level> {
        self.levels.iter().find(|level| level.number == number)
    }

    fn level_mut(&mut self, number: u32) -> Option<&mut Level> {
        self.levels.iter_mut().find(|level| level.number == number)
    }

    pub fn current_level(&self) -> u32 {
        self.current
    }

    /// Makes `number` the level being played and stamps it as played at `now`.
    pub fn select_level(&mut self, number: u32, now: Duration) -> Result<&Level, LevelError> {
        let level = self.level_mut(number).ok_or(LevelError::NotFound(number))?;
        if !level.unlocked {
            return Err(LevelError::Locked(number));
        }
        level.last_played = Some(now);
        self.current = number;
        self.level(number).ok_or(LevelError::NotFound(number))
    }

    pub fn is_unlocked(&self, number: u32) -> bool {
        self.level(number).is_some_and(|level| level.unlocked)
    }

    pub fn is_completed(&self, number: u32) -> bool {
        self.level(number).is_some_and(|level| level.completed)
    }

    /// Records a finished level, keeping the best moves and time separately, and
    /// unlocks the next one. Returns the number of a newly unlocked level.
    pub fn complete_level(
        &mut self,
        number: u32,
        moves: u32,
        time: Duration,
        now: Duration,
    ) -> Option<u32> {
        let level = self.level_mut(number)?;
        level.completed = true;
        level.last_played = Some(now);
        if level.best_moves.is_none_or(|best| moves < best) {
            level.best_moves = Some(moves);
        }
        if level.best_time.is_none_or(|best| time < best) {
            level.best_time = Some(time);
        }

        self.unlock_level(number + 1).then_some(number + 1)
    }

    /// Returns true when the level exists and was locked.
    pub fn unlock_level(&mut self, number: u32) -> bool {
        match self.level_mut(number) {
            Some(level) if !level.unlocked => {
                level.unlocked = true;
                true
            }
            _ => false,
        }
    }

    pub fn unlock_all_levels(&mut self) {
        for level in &mut self.levels {
            level.unlocked = true;
        }
    }

    pub fn reset_all_progress(&mut self) {
        for level in &mut self.levels {
            level.completed = false;
            level.best_moves = None;
            level.best_time = None;
            level.last_played = None;
            level.unlocked = level.number == 1;
        }
    }

    /// Appends a locked level and returns its number.
    pub fn add_level(&mut self, name: impl Into<String>, description: impl Into<String>) -> u32 {
        let number = self.levels.len() as u32 + 1;
        self.levels.push(Level::new(number, name, description));
        number
    }

    pub fn level_stats(&self, number: u32) -> Option<LevelStats> {
        self.level(number).map(Level::stats)
    }

    pub fn all_stats(&self) -> ProgressStats {
        let completed: Vec<&Level> = self.levels.iter().filter(|level| level.completed).collect();
        let mut stats = ProgressStats {
            total_levels: self.levels.len(),
            completed_levels: completed.len(),
            unlocked_levels: self.levels.iter().filter(|level| level.unlocked).count(),
            ..default()
        };
        if completed.is_empty() {
            return stats;
        }

        stats.total_moves = completed.iter().filter_map(|level| level.best_moves).sum();
        stats.total_time = completed.iter().filter_map(|level| level.best_time).sum();
        let count = completed.len() as f64;
        stats.average_moves = (f64::from(stats.total_moves) / count).round() as u32;
        stats.average_time =
            Duration::from_millis((stats.total_time.as_millis() as f64 / count).round() as u64);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(secs: u64) -> Duration {
        Duration::from_secs(secs)
    }

    #[test]
    fn fresh_progress_unlocks_only_the_first_level() {
        let progress = LevelProgress::default();
        assert_eq!(progress.levels().len(), 5);
        assert!(progress.is_unlocked(1));
        assert!((2..=5).all(|number| !progress.is_unlocked(number)));
        assert_eq!(progress.current_level(), 1);
        assert_eq!(progress.level(1).unwrap().name, "Tutorial Cube");
    }

    #[test]
    fn completing_keeps_best_results_and_unlocks_next() {
        let mut progress = LevelProgress::default();
        assert_eq!(progress.complete_level(1, 30, secs(90), secs(100)), Some(2));
        assert!(progress.is_unlocked(2));
        assert!(progress.is_completed(1));

        // Fewer moves but slower: only the move record improves
        assert_eq!(progress.complete_level(1, 20, secs(120), secs(300)), None);
        let stats = progress.level_stats(1).unwrap();
        assert_eq!(stats.best_moves, Some(20));
        assert_eq!(stats.best_time, Some(secs(90)));
        assert_eq!(stats.last_played, Some(secs(300)));

        assert_eq!(progress.complete_level(1, 25, secs(60), secs(400)), None);
        let stats = progress.level_stats(1).unwrap();
        assert_eq!(stats.best_moves, Some(20));
        assert_eq!(stats.best_time, Some(secs(60)));
    }

    #[test]
    fn last_level_has_nothing_to_unlock() {
        let mut progress = LevelProgress::default();
        progress.unlock_all_levels();
        assert_eq!(progress.complete_level(5, 10, secs(10), secs(10)), None);
        assert!(progress.is_completed(5));
    }

    #[test]
    fn locked_and_unknown_levels_cannot_be_selected() {
        let mut progress = LevelProgress::default();
        assert_eq!(progress.select_level(3, secs(1)).unwrap_err(), LevelError::Locked(3));
        assert_eq!(progress.select_level(9, secs(1)).unwrap_err(), LevelError::NotFound(9));
        assert_eq!(progress.current_level(), 1);
        assert_eq!(progress.complete_level(9, 10, secs(10), secs(10)), None);
        assert!(progress.level_stats(9).is_none());

        progress.complete_level(1, 10, secs(10), secs(10));
        let level = progress.select_level(2, secs(20)).unwrap();
        assert_eq!(level.last_played, Some(secs(20)));
        assert_eq!(progress.current_level(), 2);
    }

    #[test]
    fn totals_cover_completed_levels_only() {
        let mut progress = LevelProgress::default();
        progress.complete_level(1, 10, Duration::from_millis(1_000), secs(5));
        progress.complete_level(2, 15, Duration::from_millis(2_001), secs(9));

        let stats = progress.all_stats();
        assert_eq!(stats.total_levels, 5);
        assert_eq!(stats.completed_levels, 2);
        assert_eq!(stats.unlocked_levels, 3);
        assert_eq!(stats.total_moves, 25);
        assert_eq!(stats.total_time, Duration::from_millis(3_001));
        assert_eq!(stats.average_moves, 13);
        assert_eq!(stats.average_time, Duration::from_millis(1_501));
    }

    #[test]
    fn reset_locks_everything_but_the_first_level() {
        let mut progress = LevelProgress::default();
        progress.complete_level(1, 10, secs(10), secs(10));
        let added = progress.add_level("Bonus", "Extra cube");
        assert_eq!(added, 6);
        assert!(!progress.is_unlocked(added));

        progress.reset_all_progress();
        assert_eq!(progress.all_stats().unlocked_levels, 1);
        assert_eq!(progress.all_stats().completed_levels, 0);
    }
}
