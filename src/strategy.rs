//! Behavior slot: the Strategy pattern.
//!
//! There is no abstract base class to forget to override; anything
//! implementing [`PaymentStrategy`] (including a plain closure) can fill the
//! slot, and an empty slot is an explicit error rather than a crash.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    #[error("no behavior assigned")]
    NoStrategy,
}

/// A swappable "pay this amount" capability. Returns a receipt line.
pub trait PaymentStrategy {
    fn pay(&self, amount: u32) -> String;
}

pub struct CreditCard;

impl PaymentStrategy for CreditCard {
    fn pay(&self, amount: u32) -> String {
        format!("Paid {} with credit card", amount)
    }
}

pub struct PayPal;

impl PaymentStrategy for PayPal {
    fn pay(&self, amount: u32) -> String {
        format!("Paid {} with PayPal", amount)
    }
}

/// Adapter so a plain closure can fill the slot.
pub struct FnStrategy<F>(pub F);

impl<F> PaymentStrategy for FnStrategy<F>
where
    F: Fn(u32) -> String,
{
    fn pay(&self, amount: u32) -> String {
        (self.0)(amount)
    }
}

/// Holds the currently assigned behavior, if any.
#[derive(Default)]
pub struct PaymentContext {
    strategy: Option<Box<dyn PaymentStrategy>>,
}

impl PaymentContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current behavior.
    pub fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = Some(strategy);
    }

    /// Invoke the assigned behavior with `amount`.
    pub fn execute(&self, amount: u32) -> Result<String, StrategyError> {
        match &self.strategy {
            Some(strategy) => Ok(strategy.pay(amount)),
            None => Err(StrategyError::NoStrategy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_without_strategy_fails() {
        let context = PaymentContext::new();
        assert_eq!(context.execute(100), Err(StrategyError::NoStrategy));
    }

    #[test]
    fn credit_card_receipt() {
        let mut context = PaymentContext::new();
        context.set_strategy(Box::new(CreditCard));
        assert_eq!(
            context.execute(100).unwrap(),
            "Paid 100 with credit card"
        );
    }

    #[test]
    fn set_strategy_replaces_previous() {
        let mut context = PaymentContext::new();
        context.set_strategy(Box::new(CreditCard));
        context.set_strategy(Box::new(PayPal));
        assert_eq!(context.execute(200).unwrap(), "Paid 200 with PayPal");
    }

    #[test]
    fn closure_strategy() {
        let mut context = PaymentContext::new();
        context.set_strategy(Box::new(FnStrategy(|amount: u32| {
            format!("Paid {} in cash", amount)
        })));
        assert_eq!(context.execute(50).unwrap(), "Paid 50 in cash");
    }

    #[test]
    fn error_message_names_the_misuse() {
        assert_eq!(StrategyError::NoStrategy.to_string(), "no behavior assigned");
    }
}
