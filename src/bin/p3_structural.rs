// Demo 3: Structural Patterns - Decorator chain
//
// Run with: cargo run --bin p3_structural

use colored::Colorize;

use clean_code_patterns::decorator::{Beverage, Coffee, Milk, Sugar};

fn main() {
    println!("{}", "Demo 3: Structural Patterns".green().bold());
    println!("{}", "============================".green());

    println!("\n{}", "=== Decorator: Wrapping Chain ===".cyan().bold());

    let base = Coffee;
    println!("{} costs {}", base.description(), base.cost());

    let with_milk = Milk::wrap(Box::new(Coffee));
    println!("{} costs {}", with_milk.description(), with_milk.cost());

    let drink = Sugar::wrap(Milk::wrap(Box::new(Coffee)));
    println!("{} costs {}", drink.description(), drink.cost());

    // Wrap order decides the suffix order.
    let reversed = Milk::wrap(Sugar::wrap(Box::new(Coffee)));
    println!("{} costs {}", reversed.description(), reversed.cost());
}
