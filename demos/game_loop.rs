use std::{cell::RefCell, rc::Rc};

use framebus::{Dispatcher, Event, Handler, Tag};

// Define your events
#[derive(Debug, Clone)]
enum GameEvent {
    Damage(u32),
    Heal(u32),
    Footstep,
}

impl Event for GameEvent {
    fn name(&self) -> std::borrow::Cow<'static, str> {
        std::borrow::Cow::Borrowed(match self {
            GameEvent::Damage(_) => "Damage",
            GameEvent::Heal(_) => "Heal",
            GameEvent::Footstep => "Footstep",
        })
    }
}

// Classify events into routing tags
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum GameTag {
    Combat,
    Audio,
}

impl Tag<GameEvent> for GameTag {
    fn from_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::Damage(_) | GameEvent::Heal(_) => GameTag::Combat,
            GameEvent::Footstep => GameTag::Audio,
        }
    }
}

fn main() {
    tracing_subscriber::fmt().init();

    let bus = Dispatcher::<GameEvent, GameTag>::new();

    let health = Rc::new(RefCell::new(100i32));
    bus.register(GameTag::Combat, {
        let health = health.clone();
        Handler::new("health-system", move |e: &GameEvent| {
            let mut hp = health.borrow_mut();
            match e {
                GameEvent::Damage(n) => *hp -= *n as i32,
                GameEvent::Heal(n) => *hp += *n as i32,
                _ => {}
            }
            println!("[health] hp = {hp}");
        })
    });
    bus.register(
        GameTag::Audio,
        Handler::new("audio", |_: &GameEvent| println!("[audio] *tap*")),
    );

    // Gameplay code queues events as things happen; the loop delivers them
    // at the start of each frame.
    bus.queue(GameEvent::Damage(30));
    bus.queue(GameEvent::Footstep);

    for frame in 0..3 {
        println!("--- frame {frame} ({} pending)", bus.pending());
        bus.process_events();

        if frame == 0 {
            // Urgent events can skip the queue entirely
            bus.fire(GameEvent::Heal(10));
            bus.queue(GameEvent::Damage(5));
        }
    }

    println!("final hp: {}", health.borrow());
}
