//! Event-driven simulation step
//!
//! Within one step the earliest impact is found across every body/wall and
//! body/body pair, all bodies are advanced to it, the pair's response is
//! applied, and the search repeats over the remaining time. Bodies therefore
//! never tunnel through walls or each other regardless of step size.

use super::state::{CollisionEvent, CollisionTarget, SimulationState};
use crate::consts::MAX_EVENTS_PER_STEP;

/// Earliest impact in `[0, horizon]` seconds from now, with `time` relative
/// to the current instant. Ties go to the first pair in index order, walls
/// before bodies.
pub fn next_impact(state: &SimulationState, horizon: f64) -> Option<CollisionEvent> {
    let mut earliest: Option<CollisionEvent> = None;
    let mut consider = |time: f64, body: usize, target: CollisionTarget| {
        // Also drops NaN, which compares false both ways
        if !(time >= 0.0 && time <= horizon) {
            return;
        }
        if earliest.as_ref().is_none_or(|e| time < e.time) {
            earliest = Some(CollisionEvent { time, body, target });
        }
    };

    for (i, body) in state.bodies.iter().enumerate() {
        for (j, wall) in state.boundaries.iter().enumerate() {
            // A body that drifted a hair past contact has its crossing
            // behind it; catch it here so it cannot slip through
            let t = wall
                .collide_time(body)
                .or_else(|| wall.penetrating(body).then_some(0.0));
            if let Some(t) = t {
                consider(t, i, CollisionTarget::Boundary(j));
            }
        }
    }

    for (i, a) in state.bodies.iter().enumerate() {
        for (j, b) in state.bodies.iter().enumerate().skip(i + 1) {
            match a.collide_time(b) {
                // Overlapping pairs only count while still closing in;
                // otherwise they would bounce back together every step
                Some(t) if t == 0.0 && !a.approaching(b) => {}
                Some(t) => consider(t, i, CollisionTarget::Body(j)),
                None => {}
            }
        }
    }

    earliest
}

/// Apply the collision response for an impact found by [`next_impact`]
pub fn resolve(state: &mut SimulationState, event: &CollisionEvent) {
    match event.target {
        CollisionTarget::Boundary(j) => {
            let wall = &state.boundaries[j];
            wall.collide_event(&mut state.bodies[event.body]);
        }
        CollisionTarget::Body(j) => {
            let i = event.body;
            debug_assert!(i < j, "body pairs are ordered by index");
            let (head, tail) = state.bodies.split_at_mut(j);
            head[i].collide_event(&mut tail[0]);
        }
    }
}

/// Advance the simulation by `dt` seconds, resolving every impact inside the
/// step in time order. Returns the resolved events with absolute times.
pub fn step(state: &mut SimulationState, dt: f64) -> Vec<CollisionEvent> {
    let mut events = Vec::new();
    if !(dt.is_finite() && dt > 0.0) {
        return events;
    }

    let start = state.elapsed;
    let mut remaining = dt;

    while let Some(impact) = next_impact(state, remaining) {
        if events.len() >= MAX_EVENTS_PER_STEP {
            log::warn!(
                "Hit {} collision events in one step at t={:.4}; advancing the rest without response",
                MAX_EVENTS_PER_STEP,
                start + (dt - remaining)
            );
            break;
        }

        state.advance_all(impact.time);
        remaining -= impact.time;
        resolve(state, &impact);

        let event = CollisionEvent {
            time: start + (dt - remaining),
            ..impact
        };
        log::debug!(
            "Collision at t={:.4}: body {} with {:?}",
            event.time,
            event.body,
            event.target
        );
        events.push(event);
    }

    state.advance_all(remaining.max(0.0));
    state.elapsed = start + dt;
    state.time_ticks += 1;
    events
}
