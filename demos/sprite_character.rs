//! Platformer Character Animation
//!
//! This example drives a small character through idle, run, jump and
//! attack animations using gameplay flags as transition guards.
//!
//! Key concepts:
//! - Guards are closures over shared game state
//! - Transition order is the priority (attack beats run beats idle)
//! - Looping vs. one-shot states (one-shots hold their last frame)
//! - Cycles in the animation graph
//!
//! Run with: cargo run --example sprite_character

use sprite_animator::builder::StateNodeBuilder;
use sprite_animator::core::{Predicate, StateGraph};
use sprite_animator::{AnimatorBuilder, Frame, TickResult};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Default)]
struct Input {
    moving: Cell<bool>,
    jumping: Cell<bool>,
    attacking: Cell<bool>,
}

fn main() {
    println!("=== Platformer Character Animation ===\n");

    let ms = Duration::from_millis;
    let input = Rc::new(Input::default());
    let guard = |read: fn(&Input) -> bool| {
        let input = Rc::clone(&input);
        Predicate::new(move || read(&input))
    };

    let mut graph = StateGraph::new();
    let idle = graph.add_state(
        StateNodeBuilder::new()
            .name("idle")
            .frame("idle_0", ms(250))
            .frame("idle_1", ms(250))
            .looping(true)
            .build(),
    );
    let run = graph.add_state(
        StateNodeBuilder::new()
            .name("run")
            .frames(["run_0", "run_1", "run_2", "run_3"].map(|region| Frame::new(region, ms(80))))
            .looping(true)
            .build(),
    );
    let jump = graph.add_state(
        StateNodeBuilder::new()
            .name("jump")
            .frame("jump_rise", ms(150))
            .frame("jump_fall", ms(150))
            .build(),
    );
    let attack = graph.add_state(
        StateNodeBuilder::new()
            .name("attack")
            .frame("slash_0", ms(60))
            .frame("slash_1", ms(60))
            .frame("slash_2", ms(60))
            .build(),
    );

    // Earlier transitions win, so attack is listed before movement.
    for from in [idle, run] {
        graph
            .insert_transition(from, attack, vec![guard(|i| i.attacking.get())])
            .expect("states belong to this graph");
        graph
            .insert_transition(from, jump, vec![guard(|i| i.jumping.get())])
            .expect("states belong to this graph");
    }
    graph
        .insert_transition(idle, run, vec![guard(|i| i.moving.get())])
        .expect("states belong to this graph");
    graph
        .insert_transition(run, idle, vec![guard(|i| !i.moving.get())])
        .expect("states belong to this graph");
    graph
        .insert_transition(jump, idle, vec![guard(|i| !i.jumping.get())])
        .expect("states belong to this graph");
    graph
        .insert_transition(attack, idle, vec![guard(|i| !i.attacking.get())])
        .expect("states belong to this graph");

    let mut animator = AnimatorBuilder::new()
        .graph(graph)
        .initial(idle)
        .build()
        .expect("initial state exists");

    let script: [(&str, fn(&Input)); 6] = [
        ("standing still", |_| {}),
        ("start running", |i| i.moving.set(true)),
        ("press attack", |i| i.attacking.set(true)),
        ("release attack", |i| i.attacking.set(false)),
        ("jump", |i| i.jumping.set(true)),
        ("land and stop", |i| {
            i.jumping.set(false);
            i.moving.set(false);
        }),
    ];

    for (label, apply) in script {
        apply(&input);
        println!("-- {label}");
        for _ in 0..3 {
            let result = animator.tick(ms(100));
            let name = animator.current_node().name().unwrap_or("?");
            let frame = animator.current_frame().map(|f| *f.region()).unwrap_or("-");
            match result {
                TickResult::Transitioned { .. } => println!("   -> {name:<7} {frame}"),
                _ => println!("      {name:<7} {frame}"),
            }
        }
    }

    println!("\nVisited: {:?}", animator.history().get_path());
    println!("\n=== Example Complete ===");
}
