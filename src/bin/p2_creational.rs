// Demo 2: Creational Patterns - Singleton registry and Factory
//
// Run with: cargo run --bin p2_creational

use colored::Colorize;

use clean_code_patterns::factory::{create_from_tag, CarKind};
use clean_code_patterns::registry::Registry;

fn main() {
    println!("{}", "Demo 2: Creational Patterns".green().bold());
    println!("{}", "============================".green());

    println!("\n{}", "=== Singleton: Shared Registry ===".cyan().bold());
    let first_handle = Registry::shared();
    let second_handle = Registry::shared();
    first_handle.set("key", "value");
    println!("set through handle 1: key = \"value\"");
    println!("read through handle 2: key = {:?}", second_handle.get("key"));
    println!(
        "same instance: {}",
        std::ptr::eq(first_handle, second_handle)
    );

    // The same type works without the global, injected where it is needed.
    let local = Registry::new();
    local.set("scoped", 1);
    println!("injected registry holds {} entry", local.len());

    println!("\n{}", "=== Factory: Car Dispatcher ===".cyan().bold());
    for tag in ["sedan", "suv", "unknown"] {
        match create_from_tag(tag) {
            Ok(car) => println!("create({:?}) -> {}", tag, car),
            Err(err) => println!("create({:?}) -> {} {}", tag, "error:".red(), err),
        }
    }

    // Typed callers skip the string round-trip entirely.
    let car = clean_code_patterns::factory::create(CarKind::Sedan);
    println!("create(CarKind::Sedan) -> {}", car);
}
