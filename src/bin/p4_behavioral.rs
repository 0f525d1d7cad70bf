// Demo 4: Behavioral Patterns - Observer and Strategy
//
// Run with: cargo run --bin p4_behavioral
// Set RUST_LOG=warn (the default here) to see the containment warning when
// the faulty subscriber panics.

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use clean_code_patterns::observer::{EventBus, PrintSubscriber, Subscriber};
use clean_code_patterns::strategy::{CreditCard, FnStrategy, PayPal, PaymentContext};

/// A subscriber that always fails, to show containment.
struct Faulty;

impl Subscriber for Faulty {
    fn name(&self) -> &str {
        "faulty"
    }

    fn notify(&self, _payload: &str) {
        panic!("simulated subscriber failure");
    }
}

fn main() {
    // RUST_LOG wins; otherwise default to warn so containment is visible.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("{}", "Demo 4: Behavioral Patterns".green().bold());
    println!("{}", "============================".green());

    println!("\n{}", "=== Observer: Notification List ===".cyan().bold());
    let mut bus = EventBus::new();
    bus.subscribe(Box::new(PrintSubscriber::new("Observer 1")));
    bus.subscribe(Box::new(PrintSubscriber::new("Observer 2")));
    let delivered = bus.notify("Evento 1");
    println!("delivered to {} of {} subscribers", delivered, bus.subscriber_count());

    println!("\nwith a failing subscriber in the middle:");
    let mut bus = EventBus::new();
    bus.subscribe(Box::new(PrintSubscriber::new("Observer 1")));
    bus.subscribe(Box::new(Faulty));
    bus.subscribe(Box::new(PrintSubscriber::new("Observer 2")));
    let delivered = bus.notify("Evento 2");
    println!("delivered to {} of {} subscribers", delivered, bus.subscriber_count());

    println!("\n{}", "=== Strategy: Behavior Slot ===".cyan().bold());
    let mut context = PaymentContext::new();
    match context.execute(100) {
        Ok(receipt) => println!("{}", receipt),
        Err(err) => println!("execute(100) -> {} {}", "error:".red(), err),
    }

    context.set_strategy(Box::new(CreditCard));
    println!("{}", context.execute(100).expect("strategy just assigned"));

    context.set_strategy(Box::new(PayPal));
    println!("{}", context.execute(200).expect("strategy just assigned"));

    context.set_strategy(Box::new(FnStrategy(|amount: u32| {
        format!("Paid {} in cash", amount)
    })));
    println!("{}", context.execute(50).expect("strategy just assigned"));
}
