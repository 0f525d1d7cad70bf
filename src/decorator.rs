//! Wrapping chain: the Decorator pattern over a cost/description pair.

/// The computation being wrapped. Evaluation recurses innermost-first.
pub trait Beverage {
    fn cost(&self) -> u32;
    fn description(&self) -> String;
}

/// The base of every chain: cost 5, description "coffee".
pub struct Coffee;

impl Beverage for Coffee {
    fn cost(&self) -> u32 {
        5
    }

    fn description(&self) -> String {
        "coffee".to_string()
    }
}

/// Adds 2 to the cost and " with milk" to the description.
pub struct Milk {
    inner: Box<dyn Beverage>,
}

impl Milk {
    pub fn wrap(inner: Box<dyn Beverage>) -> Box<dyn Beverage> {
        Box::new(Self { inner })
    }
}

impl Beverage for Milk {
    fn cost(&self) -> u32 {
        self.inner.cost() + 2
    }

    fn description(&self) -> String {
        format!("{} with milk", self.inner.description())
    }
}

/// Adds 1 to the cost and " with sugar" to the description.
pub struct Sugar {
    inner: Box<dyn Beverage>,
}

impl Sugar {
    pub fn wrap(inner: Box<dyn Beverage>) -> Box<dyn Beverage> {
        Box::new(Self { inner })
    }
}

impl Beverage for Sugar {
    fn cost(&self) -> u32 {
        self.inner.cost() + 1
    }

    fn description(&self) -> String {
        format!("{} with sugar", self.inner.description())
    }
}
