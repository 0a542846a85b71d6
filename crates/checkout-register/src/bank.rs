//! The `RegisterBank` — every register of one run.

use checkout_core::{CheckoutError, CheckoutResult, Customer, RegisterId, ServiceRate, Work};
use checkout_policy::{AssignmentPolicy, LineSnapshot};

use crate::Register;

/// Registers `1..=n` for one simulation run.
///
/// Register `n` is always staffed by the cashier in training
/// ([`ServiceRate::Training`]); registers `1..n` are standard.  With `n = 1`
/// the only register is the training register.  The set is fixed at
/// construction.
///
/// `registers` is indexed by [`RegisterId::slot`].
#[derive(Debug, Clone)]
pub struct RegisterBank {
    registers: Vec<Register>,
}

impl RegisterBank {
    /// Build `count` idle registers.
    ///
    /// # Errors
    ///
    /// `InvalidRegisterCount` if `count` is 0.
    pub fn new(count: u32) -> CheckoutResult<Self> {
        if count == 0 {
            return Err(CheckoutError::InvalidRegisterCount(count.to_string()));
        }
        let registers = (1..=count)
            .map(|n| {
                let rate = if n == count { ServiceRate::Training } else { ServiceRate::Standard };
                Register::new(RegisterId(n), rate)
            })
            .collect();
        Ok(Self { registers })
    }

    /// Number of registers `n`.
    #[inline]
    pub fn register_count(&self) -> usize {
        self.registers.len()
    }

    /// The highest-numbered register, run by the cashier in training.
    #[inline]
    pub fn training_register(&self) -> RegisterId {
        RegisterId(self.registers.len() as u32)
    }

    pub fn get(&self, id: RegisterId) -> Option<&Register> {
        self.registers.get(id.slot())
    }

    /// Registers in ascending number order.
    pub fn iter(&self) -> impl Iterator<Item = &Register> {
        self.registers.iter()
    }

    /// One [`LineSnapshot`] per register, ascending.
    pub fn snapshots(&self) -> Vec<LineSnapshot> {
        self.registers.iter().map(Register::snapshot).collect()
    }

    /// Pick a register for `customer` with its type's policy and enqueue it.
    ///
    /// Must be called once per released customer, in release order, so that
    /// each selection sees the customers assigned before it.
    pub fn assign(&mut self, customer: Customer) -> RegisterId {
        let policy = AssignmentPolicy::from(customer.kind);
        let chosen = policy
            .select(&self.snapshots())
            .unwrap_or(RegisterId::FIRST);
        self.registers[chosen.slot()].enqueue(customer);
        chosen
    }

    /// Advance every register one tick, in register order.
    ///
    /// Returns the customers that left this tick with the register they
    /// left from.
    pub fn advance(&mut self) -> Vec<(RegisterId, Customer)> {
        self.registers
            .iter_mut()
            .filter_map(|r| r.advance().map(|c| (r.id, c)))
            .collect()
    }

    /// `true` when every queue is empty.
    pub fn is_idle(&self) -> bool {
        self.registers.iter().all(Register::is_idle)
    }

    /// Registers with at least one customer.
    pub fn busy_count(&self) -> usize {
        self.registers.iter().filter(|r| !r.is_idle()).count()
    }

    /// Customers currently queued across all registers.
    pub fn queued(&self) -> usize {
        self.registers.iter().map(Register::queue_len).sum()
    }

    /// Total remaining work across all registers.
    pub fn remaining_work(&self) -> Work {
        self.registers.iter().map(Register::remaining_work).sum()
    }
}
