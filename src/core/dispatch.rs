use crate::core::{ActionEvent, ActionHandler};
use crate::utils::error::{Result, StoreError};
use std::collections::HashMap;

/// Adapts a plain closure to the handler contract so one-off bindings do
/// not need a named type.
struct FnHandler<F>(F);

impl<F> ActionHandler for FnHandler<F>
where
    F: Fn(&ActionEvent) -> Result<()>,
{
    fn handle(&self, event: &ActionEvent) -> Result<()> {
        (self.0)(event)
    }
}

/// Binds control ids to action handlers, standing in for the host toolkit's
/// callback registration. Dispatch routes on the event's source control and
/// returns the handler's result unchanged.
#[derive(Default)]
pub struct ActionDispatcher {
    handlers: HashMap<String, Box<dyn ActionHandler>>,
}

impl ActionDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Bind `handler` to `control`. Re-binding a control replaces the
    /// previous handler.
    pub fn register<H>(&mut self, control: String, handler: H)
    where
        H: ActionHandler + 'static,
    {
        if self
            .handlers
            .insert(control.clone(), Box::new(handler))
            .is_some()
        {
            tracing::debug!("Replaced handler bound to control '{}'", control);
        } else {
            tracing::debug!("Bound handler to control '{}'", control);
        }
    }

    /// Bind a plain closure to `control`.
    pub fn register_fn<F>(&mut self, control: String, handler: F)
    where
        F: Fn(&ActionEvent) -> Result<()> + 'static,
    {
        self.register(control, FnHandler(handler));
    }

    pub fn dispatch(&self, event: &ActionEvent) -> Result<()> {
        tracing::debug!(
            "Dispatching '{}' from control '{}'",
            event.command,
            event.source
        );

        match self.handlers.get(&event.source) {
            Some(handler) => handler.handle(event),
            None => Err(StoreError::DispatchError {
                control: event.source.clone(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn click(control: &str) -> ActionEvent {
        ActionEvent::new(control.to_string(), "click".to_string())
    }

    #[test]
    fn test_dispatch_routes_by_control_id() {
        let hits: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = ActionDispatcher::new();

        let log_a = Rc::clone(&hits);
        dispatcher.register_fn("a".to_string(), move |_: &ActionEvent| -> Result<()> {
            log_a.borrow_mut().push("a");
            Ok(())
        });

        let log_b = Rc::clone(&hits);
        dispatcher.register_fn("b".to_string(), move |_: &ActionEvent| -> Result<()> {
            log_b.borrow_mut().push("b");
            Ok(())
        });

        assert_eq!(dispatcher.len(), 2);

        dispatcher.dispatch(&click("b")).unwrap();
        dispatcher.dispatch(&click("a")).unwrap();
        dispatcher.dispatch(&click("a")).unwrap();

        assert_eq!(*hits.borrow(), vec!["b", "a", "a"]);
    }

    #[test]
    fn test_dispatch_unknown_control_errors() {
        let dispatcher = ActionDispatcher::new();

        match dispatcher.dispatch(&click("missing")) {
            Err(StoreError::DispatchError { control }) => assert_eq!(control, "missing"),
            other => panic!("expected DispatchError, got {:?}", other),
        }
    }

    #[test]
    fn test_register_replaces_existing_binding() {
        let hits: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = ActionDispatcher::new();

        let log_old = Rc::clone(&hits);
        dispatcher.register_fn("a".to_string(), move |_: &ActionEvent| -> Result<()> {
            log_old.borrow_mut().push("old");
            Ok(())
        });

        let log_new = Rc::clone(&hits);
        dispatcher.register_fn("a".to_string(), move |_: &ActionEvent| -> Result<()> {
            log_new.borrow_mut().push("new");
            Ok(())
        });

        assert_eq!(dispatcher.len(), 1);

        dispatcher.dispatch(&click("a")).unwrap();

        assert_eq!(*hits.borrow(), vec!["new"]);
    }

    #[test]
    fn test_handler_error_returned_unchanged() {
        let mut dispatcher = ActionDispatcher::new();
        dispatcher.register_fn("a".to_string(), |_: &ActionEvent| -> Result<()> {
            Err(StoreError::PaymentError {
                message: "card declined".to_string(),
            })
        });

        match dispatcher.dispatch(&click("a")) {
            Err(StoreError::PaymentError { message }) => assert_eq!(message, "card declined"),
            other => panic!("expected PaymentError, got {:?}", other),
        }
    }
}
