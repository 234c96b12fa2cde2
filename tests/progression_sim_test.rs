//! Integration tests for the progression simulator: cost curve, forward and
//! inverse simulation, and the speed modifier feeding the rate inputs.

use gearsim::catalog::{Catalog, Item, SlotKind, Stat, StatBlock, ZoneInfo};
use gearsim::loadout::Loadout;
use gearsim::optimizer::{CapStats, Factor};
use gearsim::progression::{
    speed, PotionEffects, PotionToggle, RateInputs, Simulator, SpeedConfig, TrackParams,
    TrackState,
};

fn track() -> TrackParams {
    TrackParams {
        base_cost: 10.0,
        milestone_spacing: 10,
        milestone_multiplier: 1.1,
        linear_bonus_coefficient: 1.0,
        level_cap: u64::MAX,
        self_accelerating: false,
    }
}

fn unit_rate() -> RateInputs {
    RateInputs {
        cap: 1.0,
        power: 1.0,
        speed: 1.0,
    }
}

fn start() -> TrackState {
    TrackState {
        level: 0,
        goal: 0,
        reducer: 0,
    }
}

#[test]
fn test_minute_budget_converts_to_ticks() {
    let params = track();
    let sim = Simulator::new(&params, unit_rate());
    // One minute is 3000 ticks; cost_at(0) is 10, so far more than one level.
    let reached = sim.reachable(&start(), 1.0);
    assert!(reached > 1, "one simulated minute covers many early levels");
    assert_eq!(reached, sim.reachable_ticks(&start(), 3000.0));
}

#[test]
fn test_exact_budget_boundary() {
    let params = track();
    let sim = Simulator::new(&params, unit_rate());
    assert_eq!(sim.reachable_ticks(&start(), 10.0), 1);
    assert_eq!(sim.reachable_ticks(&start(), 9.0), 0);
}

#[test]
fn test_inverse_then_forward_round_trip() {
    let params = track();
    let sim = Simulator::new(&params, unit_rate());
    for target in [1, 25, 400, 2000] {
        let ticks = sim.time_to(&start(), target);
        assert_eq!(
            sim.reachable_ticks(&start(), ticks),
            target,
            "time_to({target}) must be exactly enough budget to reach it"
        );
    }
}

#[test]
fn test_large_budget_jump_equals_reference_loop() {
    let params = track();
    let rate = unit_rate();
    let sim = Simulator::new(&params, rate);

    let budget = 5e8;
    let fast = sim.reachable_ticks(&start(), budget);

    let mut level = 0u64;
    let mut remaining = budget;
    loop {
        let cost = params.cost_at(level, 0, &rate);
        if remaining < cost {
            break;
        }
        remaining -= cost;
        level += 1;
    }
    assert_eq!(fast, level);
}

#[test]
fn test_faster_rate_reaches_further() {
    let params = track();
    let slow = Simulator::new(&params, unit_rate());
    let fast = Simulator::new(
        &params,
        RateInputs {
            cap: 2.0,
            power: 3.0,
            speed: 1.5,
        },
    );
    let budget = 1e6;
    assert!(fast.reachable_ticks(&start(), budget) > slow.reachable_ticks(&start(), budget));
}

#[test]
fn test_speed_modifier_feeds_rate_inputs() {
    // A dedicated loadout twice as strong as the current one should halve
    // the time to any target once its ratio is wired into the rate.
    let catalog = Catalog::from_items([
        Item {
            id: 1,
            name: "Worn band".into(),
            slot: SlotKind::Head,
            zone: ZoneInfo::default(),
            special: None,
            stats: StatBlock::new().with(Stat::EnergyPower, 100.0),
        },
        Item {
            id: 2,
            name: "Keen band".into(),
            slot: SlotKind::Head,
            zone: ZoneInfo::default(),
            special: None,
            stats: StatBlock::new().with(Stat::EnergyPower, 300.0),
        },
    ]);
    let mut current = Loadout::empty(0);
    current.set(SlotKind::Head, 0, Some(1)).unwrap();
    let mut dedicated = Loadout::empty(0);
    dedicated.set(SlotKind::Head, 0, Some(2)).unwrap();

    let cfg = SpeedConfig {
        modifiers: true,
        current_loadout: 0,
        dedicated_loadout: 1,
        ..SpeedConfig::default()
    };
    let factor = Factor::new("energy", [Stat::EnergyPower]);
    let ratio = speed(
        &catalog,
        &cfg,
        &[current, dedicated],
        &StatBlock::new(),
        &StatBlock::new(),
        &factor,
        &CapStats::new(),
        100.0,
        &PotionEffects::new(),
        1.0,
    );
    assert!((ratio - 2.0).abs() < 1e-12);

    let params = track();
    let plain = Simulator::new(&params, unit_rate());
    let boosted = Simulator::new(
        &params,
        RateInputs {
            speed: ratio,
            ..unit_rate()
        },
    );
    let target = 300;
    let plain_ticks = plain.time_to(&start(), target);
    let boosted_ticks = boosted.time_to(&start(), target);
    assert!(
        boosted_ticks < plain_ticks * 0.51,
        "doubled speed must roughly halve the time: {boosted_ticks} vs {plain_ticks}"
    );
}

#[test]
fn test_potion_toggles_alter_simulated_time() {
    let catalog = Catalog::new();
    let mut cfg = SpeedConfig {
        modifiers: true,
        ..SpeedConfig::default()
    };
    cfg.potions[0][1] = PotionToggle {
        dedicated: true,
        current: false,
    };
    let mut effects = PotionEffects::new();
    effects.set(0, 1, 3.0);

    // Empty loadout list: both sides resolve to the empty loadout, ratio 1,
    // and only the potion boost remains.
    let ratio = speed(
        &catalog,
        &cfg,
        &[],
        &StatBlock::new(),
        &StatBlock::new(),
        &Factor::new("energy", [Stat::EnergyPower]),
        &CapStats::new(),
        100.0,
        &effects,
        1.0,
    );
    assert!((ratio - 3.0).abs() < 1e-12);

    let params = track();
    let sim = Simulator::new(
        &params,
        RateInputs {
            speed: ratio,
            ..unit_rate()
        },
    );
    assert!(sim.reachable_ticks(&start(), 10.0) >= 1, "boosted rate cheapens level 1");
}

#[test]
fn test_reducer_state_carries_through_simulation() {
    let mut params = track();
    params.self_accelerating = true;
    let sim = Simulator::new(&params, unit_rate());
    let plain = TrackState {
        reducer: 0,
        ..start()
    };
    let reduced = TrackState {
        reducer: 8,
        ..start()
    };
    let budget = 1e5;
    assert!(
        sim.reachable_ticks(&reduced, budget) >= sim.reachable_ticks(&plain, budget),
        "a milestone reducer never slows a self-accelerating track"
    );
}

#[test]
fn test_level_cap_is_a_hard_stop() {
    let mut params = track();
    params.level_cap = 42;
    let sim = Simulator::new(&params, unit_rate());
    assert_eq!(sim.reachable_ticks(&start(), 1e14), 42);
    // Starting at the cap goes nowhere.
    let at_cap = TrackState {
        level: 42,
        ..start()
    };
    assert_eq!(sim.reachable_ticks(&at_cap, 1e9), 42);
}
