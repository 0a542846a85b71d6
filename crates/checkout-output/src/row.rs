//! Plain data row types written by output backends.

/// Counts for one processed tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub released:       u64,
    pub departed:       u64,
    pub queued:         u64,
    pub busy_registers: u64,
    /// Total remaining items across all registers, e.g. `"3.5"`.
    pub remaining:      String,
}

/// One register's queue at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterSnapshotRow {
    pub tick:        u64,
    pub register_id: u32,
    pub training:    bool,
    /// Customers in the queue, including one that is just finishing.
    pub queue_len:   u64,
    /// Customer at the head, `0` if the queue is empty.
    pub head_id:     u32,
}

/// One customer's completed checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartureRow {
    pub customer_id:   u32,
    pub kind:          char,
    pub register_id:   u32,
    pub arrival:       u64,
    pub items:         u32,
    pub finished:      u64,
    pub time_in_store: u64,
}
