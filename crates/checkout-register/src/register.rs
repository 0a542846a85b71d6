//! Per-register queue and service state.

use std::collections::VecDeque;

use checkout_core::{Customer, CustomerStatus, RegisterId, ServiceRate, Work};
use checkout_policy::LineSnapshot;

/// One checkout register: a cashier working at `rate` and a FIFO line.
///
/// A register is **idle** when its queue is empty.  A head customer with
/// zero remaining work is still in the queue (it leaves at the next
/// [`advance`][Self::advance]) but is no longer counted as in line by
/// [`snapshot`][Self::snapshot].
#[derive(Debug, Clone)]
pub struct Register {
    pub id:   RegisterId,
    pub rate: ServiceRate,
    queue:    VecDeque<Customer>,
}

impl Register {
    /// An idle register.
    pub fn new(id: RegisterId, rate: ServiceRate) -> Self {
        Self { id, rate, queue: VecDeque::new() }
    }

    /// Append `customer` to the back of the line.
    pub fn enqueue(&mut self, mut customer: Customer) {
        customer.status = CustomerStatus::Queued;
        self.queue.push_back(customer);
    }

    /// Advance one tick.  Returns the customer that left this tick, if any.
    pub fn advance(&mut self) -> Option<Customer> {
        let departed = if self.queue.front().is_some_and(Customer::is_finishing) {
            self.queue.pop_front().map(|mut c| {
                c.status = CustomerStatus::Done;
                c
            })
        } else {
            None
        };

        if let Some(head) = self.queue.front_mut() {
            head.status    = CustomerStatus::Servicing;
            head.remaining = head.remaining.saturating_sub(self.rate.work_per_tick());
        }

        departed
    }

    /// What an arriving customer sees of this line.
    pub fn snapshot(&self) -> LineSnapshot {
        let finishing = self.queue.front().is_some_and(Customer::is_finishing);
        let in_line   = self.queue.len() - finishing as usize;
        let last_remaining = if in_line == 0 {
            None
        } else {
            self.queue.back().map(|c| c.remaining)
        };
        LineSnapshot::new(self.id, in_line, last_remaining)
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Customers in the queue, including one that is just finishing.
    #[inline]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// The customer being served, if any.
    #[inline]
    pub fn head(&self) -> Option<&Customer> {
        self.queue.front()
    }

    /// Customers in line order, head first.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.queue.iter()
    }

    /// Total remaining work of everyone in the queue.
    pub fn remaining_work(&self) -> Work {
        self.queue.iter().map(|c| c.remaining).sum()
    }
}
