//! Notification list: the Observer pattern with synchronous, in-order
//! delivery.
//!
//! A panicking subscriber must not abort delivery to the rest of the list:
//! each call is wrapped in `catch_unwind` and failures are logged at `warn`.

use std::panic::{self, AssertUnwindSafe};

use tracing::warn;

/// A listener on the bus. `notify` receives the payload unchanged.
pub trait Subscriber {
    fn name(&self) -> &str;
    fn notify(&self, payload: &str);
}

/// An ordered list of subscribers with synchronous fan-out.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Box<dyn Subscriber>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener. Delivery order is subscription order.
    pub fn subscribe(&mut self, subscriber: Box<dyn Subscriber>) {
        self.subscribers.push(subscriber);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver `payload` to every subscriber, in subscription order, exactly
    /// once each. Returns how many deliveries completed without panicking.
    pub fn notify(&self, payload: &str) -> usize {
        let mut delivered = 0;
        for subscriber in &self.subscribers {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| subscriber.notify(payload)));
            match outcome {
                Ok(()) => delivered += 1,
                Err(_) => {
                    warn!(
                        subscriber = subscriber.name(),
                        payload, "subscriber panicked during notification"
                    );
                }
            }
        }
        delivered
    }
}

/// Console subscriber used by the demos.
pub struct PrintSubscriber {
    name: String,
}

impl PrintSubscriber {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Subscriber for PrintSubscriber {
    fn name(&self) -> &str {
        &self.name
    }

    fn notify(&self, payload: &str) {
        println!("{} received: {}", self.name, payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every delivery into a shared log so tests can assert order.
    struct Recorder {
        name: String,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Subscriber for Recorder {
        fn name(&self) -> &str {
            &self.name
        }

        fn notify(&self, payload: &str) {
            self.log
                .borrow_mut()
                .push(format!("{}:{}", self.name, payload));
        }
    }

    struct Panicker;

    impl Subscriber for Panicker {
        fn name(&self) -> &str {
            "panicker"
        }

        fn notify(&self, _payload: &str) {
            panic!("listener failure");
        }
    }

    fn recorder(name: &str, log: &Rc<RefCell<Vec<String>>>) -> Box<Recorder> {
        Box::new(Recorder {
            name: name.to_string(),
            log: Rc::clone(log),
        })
    }

    #[test]
    fn delivers_in_subscription_order_exactly_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.subscribe(recorder("first", &log));
        bus.subscribe(recorder("second", &log));

        let delivered = bus.notify("Evento 1");

        assert_eq!(delivered, 2);
        assert_eq!(
            *log.borrow(),
            vec!["first:Evento 1".to_string(), "second:Evento 1".to_string()]
        );
    }

    #[test]
    fn payload_passed_unchanged() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.subscribe(recorder("only", &log));

        bus.notify("payload with spaces and ünïcode");
        assert_eq!(log.borrow()[0], "only:payload with spaces and ünïcode");
    }

    #[test]
    fn notify_with_no_subscribers_is_a_no_op() {
        let bus = EventBus::new();
        assert_eq!(bus.notify("anything"), 0);
    }

    #[test]
    fn panicking_subscriber_does_not_abort_the_rest() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.subscribe(recorder("before", &log));
        bus.subscribe(Box::new(Panicker));
        bus.subscribe(recorder("after", &log));

        let delivered = bus.notify("event");

        assert_eq!(delivered, 2);
        assert_eq!(
            *log.borrow(),
            vec!["before:event".to_string(), "after:event".to_string()]
        );
    }

    #[test]
    fn repeated_notify_delivers_each_time() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.subscribe(recorder("r", &log));

        bus.notify("a");
        bus.notify("b");
        assert_eq!(*log.borrow(), vec!["r:a".to_string(), "r:b".to_string()]);
    }
}
