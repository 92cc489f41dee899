use std::sync::Arc;
use std::time::Duration;

use symptom_core::HeroConfig;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};
use tracing::debug;

use crate::view::ClassList;

/// Class that replays the hero entrance animation
pub const HERO_CLASS: &str = "hero-reanimate";

/// The user's `prefers-reduced-motion` setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    NoPreference,
    Reduce,
}

impl MotionPreference {
    /// Parses the media feature value (`reduce` / `no-preference`).
    pub fn from_media_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("reduce") {
            Self::Reduce
        } else {
            Self::NoPreference
        }
    }
}

/// Schedules the periodic hero re-animation.
pub struct HeroAnimator {
    config: HeroConfig,
}

impl HeroAnimator {
    pub fn new(config: HeroConfig) -> Self {
        Self { config }
    }

    /// Starts the animation loop on the current tokio runtime.
    ///
    /// Nothing is scheduled, and `None` returned, when the user asked for
    /// reduced motion.
    pub fn start(&self, hero: Arc<dyn ClassList>, motion: MotionPreference) -> Option<HeroHandle> {
        if motion == MotionPreference::Reduce {
            debug!("Reduced motion requested, hero animation disabled");
            return None;
        }

        let config = self.config;
        let target = hero.clone();
        let task = tokio::spawn(async move {
            let period = config.interval().max(Duration::from_millis(1));
            let mut ticker = interval_at(Instant::now() + config.initial_delay(), period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                target.add_class(HERO_CLASS);
                sleep(config.active_for()).await;
                target.remove_class(HERO_CLASS);
            }
        });

        Some(HeroHandle { task, hero })
    }
}

/// Owns a running hero animation. Cancelling or dropping it stops the timer
/// and clears the class.
pub struct HeroHandle {
    task: JoinHandle<()>,
    hero: Arc<dyn ClassList>,
}

impl HeroHandle {
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for HeroHandle {
    fn drop(&mut self) {
        self.task.abort();
        self.hero.remove_class(HERO_CLASS);
    }
}
