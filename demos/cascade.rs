//! Shows the anti-starvation guarantee: a chain of events that each queue a
//! follow-up resolves one link per cycle instead of monopolising a single
//! `process_events` call.

use std::rc::Rc;

use framebus::{DefaultTag, Dispatcher, Event, Handler};

#[derive(Debug, Clone)]
struct Chain(u32);

impl Event for Chain {}

fn main() {
    tracing_subscriber::fmt().init();

    let bus = Rc::new(Dispatcher::<Chain>::new());
    bus.register(DefaultTag, {
        let bus = bus.clone();
        Handler::new("reactor", move |e: &Chain| {
            println!("  handling Chain({})", e.0);
            if e.0 > 0 {
                bus.queue(Chain(e.0 - 1));
            }
        })
    });

    bus.queue(Chain(4));

    let mut cycle = 0;
    while bus.pending() > 0 {
        println!("cycle {cycle}: {} pending", bus.pending());
        bus.process_events();
        cycle += 1;
    }
    println!("resolved after {cycle} cycles");
}
