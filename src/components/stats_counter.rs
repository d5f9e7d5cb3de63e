use gloo_timers::callback::Interval;
use log::{info, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::content::Stat;
use crate::observer::{ObserverOptions, ViewportObserver};

const DURATION_MS: f64 = 2000.0;
const TICK_MS: u32 = 16;

/// Count-up from 0 to `target` in fixed 16ms steps over roughly two seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterTick {
    pub text: String,
    pub settled: bool,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            increment: target as f64 / (DURATION_MS / TICK_MS as f64),
            current: 0.0,
        }
    }

    pub fn tick(&mut self) -> CounterTick {
        self.current += self.increment;
        if self.current >= self.target as f64 {
            CounterTick {
                text: format!("{}+", self.target),
                settled: true,
            }
        } else {
            CounterTick {
                text: (self.current.floor() as u64).to_string(),
                settled: false,
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterPhase {
    Idle,
    Animating,
    Settled,
}

/// Latch for the section observer: the counters start on the first
/// intersecting entry and never again for the page load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOnce {
    fired: bool,
}

impl RunOnce {
    pub fn trigger(&mut self, is_intersecting: bool) -> bool {
        if is_intersecting && !self.fired {
            self.fired = true;
            true
        } else {
            false
        }
    }
}

#[derive(Properties, PartialEq)]
struct StatCounterProps {
    target: u64,
    label: String,
    started: bool,
}

#[function_component(StatCounter)]
fn stat_counter(props: &StatCounterProps) -> Html {
    let text = use_state(|| "0".to_string());
    let phase = use_state_eq(|| CounterPhase::Idle);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |started| {
                if *started && *phase == CounterPhase::Idle {
                    phase.set(CounterPhase::Animating);
                }
                || ()
            },
            props.started,
        );
    }

    // The interval lives as long as the Animating phase; settling drops it.
    {
        let text = text.clone();
        let phase_handle = phase.clone();
        let target = props.target;
        use_effect_with_deps(
            move |phase| {
                let interval = (*phase == CounterPhase::Animating).then(|| {
                    let mut animation = CounterAnimation::new(target);
                    Interval::new(TICK_MS, move || {
                        let tick = animation.tick();
                        text.set(tick.text);
                        if tick.settled {
                            phase_handle.set(CounterPhase::Settled);
                        }
                    })
                });
                move || drop(interval)
            },
            *phase,
        );
    }

    html! {
        <div class="stat">
            <span class="stat-number" data-target={props.target.to_string()}>{(*text).clone()}</span>
            <span class="stat-label">{&props.label}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsSectionProps {
    pub stats: Vec<Stat>,
}

#[function_component(StatsSection)]
pub fn stats_section(props: &StatsSectionProps) -> Html {
    let section_ref = use_node_ref();
    let started = use_state_eq(|| false);
    let run_once = use_mut_ref(RunOnce::default);

    {
        let section_ref = section_ref.clone();
        let started = started.clone();
        use_effect_with_deps(
            move |_| {
                let observer = section_ref.cast::<Element>().and_then(|section| {
                    let observer = ViewportObserver::new(ObserverOptions::STATS, move |entry, _| {
                        if run_once.borrow_mut().trigger(entry.is_intersecting()) {
                            info!("Stats section visible, starting counters");
                            started.set(true);
                        }
                    });
                    match observer {
                        Ok(observer) => {
                            observer.observe(&section);
                            Some(observer)
                        }
                        Err(err) => {
                            warn!("Stats counter disabled: {}", err);
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <div ref={section_ref} class="stats">
            { for props.stats.iter().map(|stat| html! {
                <StatCounter target={stat.target} label={stat.label.clone()} started={*started} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(target: u64) -> Vec<CounterTick> {
        let mut animation = CounterAnimation::new(target);
        let mut ticks = Vec::new();
        loop {
            let tick = animation.tick();
            let settled = tick.settled;
            ticks.push(tick);
            if settled || ticks.len() > 1000 {
                return ticks;
            }
        }
    }

    #[test]
    fn counts_to_100_and_ends_with_plus() {
        let ticks = run(100);
        let (last, frames) = ticks.split_last().unwrap();
        assert_eq!(last.text, "100+");
        assert!(last.settled);

        let values: Vec<u64> = frames.iter().map(|t| t.text.parse().unwrap()).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|v| *v < 100));
    }

    #[test]
    fn takes_about_two_seconds_of_ticks() {
        // 2000 / 16 = 125 ticks, give or take float rounding.
        let ticks = run(1500);
        assert!((124..=127).contains(&ticks.len()), "{} ticks", ticks.len());
        assert_eq!(ticks.last().unwrap().text, "1500+");
    }

    #[test]
    fn increment_is_target_over_125() {
        let mut animation = CounterAnimation::new(250);
        assert_eq!(animation.tick().text, "2");
        assert_eq!(animation.tick().text, "4");
    }

    #[test]
    fn small_targets_floor_intermediate_values() {
        let ticks = run(8);
        assert_eq!(ticks[0].text, "0");
        assert_eq!(ticks.last().unwrap().text, "8+");
    }

    #[test]
    fn counters_start_only_on_the_first_visible_entry() {
        let mut run_once = RunOnce::default();
        assert!(!run_once.trigger(false));
        assert!(run_once.trigger(true));
        assert!(!run_once.trigger(false));
        assert!(!run_once.trigger(true));
        assert!(!run_once.trigger(true));
    }

    #[test]
    fn zero_target_settles_on_first_tick() {
        let ticks = run(0);
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].text, "0+");
    }
}
