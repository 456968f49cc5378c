use crate::core::{ActionEvent, ActionHandler, Customer, Item};
use crate::utils::error::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// Payment method every purchase action charges against.
pub const PAYMENT_METHOD: &str = "Credit Card";

/// Buy-button binding: forwards one payment call to the captured customer.
///
/// Immutable capture of its construction arguments; holds the customer and
/// item without owning their lifecycle. Failures from the customer pass
/// through untouched.
pub struct PurchaseAction<C: Customer> {
    customer: Rc<RefCell<C>>,
    item: Rc<Item>,
}

impl<C: Customer> PurchaseAction<C> {
    pub fn new(customer: Rc<RefCell<C>>, item: Rc<Item>) -> Self {
        Self { customer, item }
    }
}

impl<C: Customer> ActionHandler for PurchaseAction<C> {
    fn handle(&self, _event: &ActionEvent) -> Result<()> {
        tracing::debug!(
            "Purchase action: '{}' via {}",
            self.item.name,
            PAYMENT_METHOD
        );
        self.customer
            .borrow_mut()
            .make_payment(&self.item, PAYMENT_METHOD)
    }
}

/// Feedback-form binding: forwards the captured comment and liked flag.
pub struct FeedbackAction<C: Customer> {
    customer: Rc<RefCell<C>>,
    item: Rc<Item>,
    comment: String,
    liked: bool,
}

impl<C: Customer> FeedbackAction<C> {
    pub fn new(customer: Rc<RefCell<C>>, item: Rc<Item>, comment: String, liked: bool) -> Self {
        Self {
            customer,
            item,
            comment,
            liked,
        }
    }
}

impl<C: Customer> ActionHandler for FeedbackAction<C> {
    fn handle(&self, _event: &ActionEvent) -> Result<()> {
        tracing::debug!(
            "Feedback action: '{}' (liked: {})",
            self.item.name,
            self.liked
        );
        self.customer
            .borrow_mut()
            .provide_feedback(&self.item, &self.comment, self.liked)
    }
}
