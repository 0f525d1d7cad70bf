// Demo 1: Clean Code Rules
// Walks each rule with the before/after framing of the original material.
//
// Run with: cargo run --bin p1_clean_code

use colored::Colorize;
use serde_json::json;

use clean_code_patterns::clean_code::{
    divide, format_sum, greeting, is_senior, parse_car_listing, percentage_of,
    senior_age_threshold, sum, validate, User,
};

fn section(title: &str) {
    println!("\n{}", format!("=== {} ===", title).cyan().bold());
}

fn main() {
    println!("{}", "Demo 1: Clean Code Rules".green().bold());
    println!("{}", "=========================".green());

    section("Rule 1: Meaningful names");
    println!("calc(200, 15)            -> what does it do?");
    println!("percentage_of(200, 15)   -> {}", percentage_of(200.0, 15.0));

    section("Rule 2: Small, single-purpose functions");
    let data = vec![json!(1), json!(2), json!("tres"), json!(4)];
    println!("input: {:?}", data);
    match validate(&data) {
        Ok(numbers) => {
            let total = sum(&numbers);
            println!("{}", format_sum(total));
        }
        Err(err) => println!("{} {}", "error:".red(), err),
    }
    match validate(&[]) {
        Ok(_) => unreachable!("empty input must be rejected"),
        Err(err) => println!("validate([]) -> {} {}", "error:".red(), err),
    }

    section("Rule 3: No magic numbers");
    let age = 70;
    println!(
        "threshold = {} (override with SENIOR_AGE_THRESHOLD)",
        senior_age_threshold()
    );
    if is_senior(age) {
        println!("age {} -> senior", age);
    }

    section("Rule 4: Comments that add information");
    println!("see clean_code::ConnectionAttempts::record_retry");

    section("Rule 5: Avoid long parameter lists");
    let user = User::builder()
        .first_name("Juan")
        .last_name("Pérez")
        .age(30)
        .address("Calle Falsa 123")
        .phone("123456789")
        .build();
    println!("built {:?}", user);
    let listing = parse_car_listing(r#"{"make":"Toyota","model":"Corolla","year":2020}"#);
    println!("from JSON: {:?}", listing);

    section("Rule 6: Explicit error handling");
    match divide(10.0, 0.0) {
        Ok(result) => println!("10 / 0 = {}", result),
        Err(err) => println!("10 / 0 -> {} {}", "error:".red(), err),
    }
    match divide(10.0, 4.0) {
        Ok(result) => println!("10 / 4 = {}", result),
        Err(err) => println!("{} {}", "error:".red(), err),
    }

    section("Rule 7: Avoid deep nesting");
    println!(
        "guard clauses: greeting(true, false, true) -> {:?}",
        greeting(true, false, true)
    );
    println!(
        "guard clauses: greeting(true, true, true)  -> {:?}",
        greeting(true, true, true)
    );
}
